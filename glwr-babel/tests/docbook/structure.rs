use crate::common::{kinds, parse, parse_with, refentry, synopsis};
use glwr_babel::{DiagnosticKind, Includes, Refpage, RefpageError};
use std::path::Path;

#[test]
fn test_refentry_header_blocks() {
    let page = parse(
        r#"<info>
    <copyright>
        <year>2014</year>
        <holder>Khronos Group</holder>
    </copyright>
</info>
<refmeta>
    <refentrytitle>glBindBuffer</refentrytitle>
    <manvolnum>3G</manvolnum>
</refmeta>
<refnamediv>
    <refname>glBindBuffer</refname>
    <refpurpose>bind a named buffer
        object</refpurpose>
</refnamediv>"#,
    );

    assert_eq!(page.name, "glTest");
    assert_eq!(page.copyrights.len(), 1);
    assert_eq!(page.copyrights[0].year, "2014");
    assert_eq!(page.copyrights[0].holder, "Khronos Group");
    assert_eq!(page.refmeta.title, "glBindBuffer");
    assert_eq!(page.refmeta.manvolnum, "3G");
    assert_eq!(page.refnamediv.names, vec!["glBindBuffer"]);
    assert_eq!(page.refnamediv.purpose, "bind a named buffer object");
    assert!(page.refnamediv.descriptor.is_none());
    assert!(page.diagnostics().is_empty());
}

#[test]
fn test_duplicate_values_keep_the_first() {
    let page = parse(
        r#"<refmeta>
    <refentrytitle>first</refentrytitle>
    <refentrytitle>second</refentrytitle>
</refmeta>"#,
    );

    assert_eq!(page.refmeta.title, "first");
    assert_eq!(kinds(&page), vec![DiagnosticKind::DuplicateValue]);
    assert!(page.diagnostics()[0]
        .message
        .contains("refmeta.refentrytitle"));
}

#[test]
fn test_repeated_blocks_keep_the_first() {
    let page = parse(&format!(
        r#"<refmeta><refentrytitle>first</refentrytitle></refmeta>
<refmeta><refentrytitle>second</refentrytitle></refmeta>
<refnamediv><refname>glTest</refname><refpurpose>first purpose</refpurpose></refnamediv>
<refnamediv><refname>glOther</refname><refpurpose>second purpose</refpurpose></refnamediv>
{}
{}"#,
        synopsis("glTest", &[("GLint", "a")]),
        synopsis("glOther", &[])
    ));

    assert_eq!(page.refmeta.title, "first");
    assert_eq!(page.refnamediv.names, vec!["glTest".to_string()]);
    assert_eq!(page.refnamediv.purpose, "first purpose");
    assert_eq!(page.prototypes().len(), 1);
    assert_eq!(page.prototypes()[0].name(), "glTest");

    assert_eq!(kinds(&page), vec![DiagnosticKind::DuplicateValue; 3]);
    let messages: Vec<&str> = page
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Duplicate value: refmeta",
            "Duplicate value: refnamediv",
            "Duplicate value: refsynopsisdiv",
        ]
    );
}

#[test]
fn test_unknown_nodes_are_reported_and_skipped() {
    let page = parse(
        r#"<bogus/>
<refmeta><refentrytitle>kept</refentrytitle><volume>1</volume></refmeta>"#,
    );

    assert_eq!(page.refmeta.title, "kept");
    assert_eq!(
        kinds(&page),
        vec![
            DiagnosticKind::UnknownConstruct,
            DiagnosticKind::UnknownConstruct
        ]
    );
    assert_eq!(page.diagnostics()[0].message, "Unknown node: bogus");
    assert_eq!(page.diagnostics()[1].message, "Unknown node: refmeta.volume");
}

#[test]
fn test_prototypes() {
    let page = parse(
        r#"<refsynopsisdiv>
    <title>C Specification</title>
    <funcsynopsis>
        <funcprototype>
            <funcdef>void <function>glBufferData</function></funcdef>
            <paramdef>GLenum <parameter>target</parameter></paramdef>
            <paramdef>GLsizeiptr <parameter>size</parameter></paramdef>
            <paramdef>const void * <parameter>data</parameter></paramdef>
        </funcprototype>
        <funcprototype>
            <funcdef>GLenum <function>glGetError</function></funcdef>
            <paramdef><parameter>void</parameter></paramdef>
        </funcprototype>
        <funcprototype>
            <funcdef>void <function>glFinish</function></funcdef>
            <paramdef>void</paramdef>
        </funcprototype>
    </funcsynopsis>
</refsynopsisdiv>"#,
    );

    let prototypes = page.prototypes();
    assert_eq!(prototypes.len(), 3);

    assert_eq!(prototypes[0].funcdef.ty, "void");
    assert_eq!(prototypes[0].name(), "glBufferData");
    let params: Vec<(&str, &str)> = prototypes[0]
        .paramdefs
        .iter()
        .map(|p| (p.ty.as_str(), p.parameter.as_str()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("GLenum", "target"),
            ("GLsizeiptr", "size"),
            ("const void *", "data")
        ]
    );

    assert_eq!(prototypes[1].funcdef.ty, "GLenum");
    assert!(prototypes[1].paramdefs.is_empty());
    assert!(prototypes[2].paramdefs.is_empty());
    assert!(page.diagnostics().is_empty());
}

#[test]
fn test_refsect1_identification() {
    let page = parse(
        r#"<refsect1><title>No id</title></refsect1>
<refsect1 xml:id="history"><title>History</title></refsect1>"#,
    );

    assert_eq!(
        kinds(&page),
        vec![
            DiagnosticKind::MissingAttribute,
            DiagnosticKind::UnknownConstruct
        ]
    );
    assert_eq!(
        page.diagnostics()[1].message,
        "Unknown refsect1 xml:id: history"
    );
}

const ALL_SECTIONS: &str = r#"<refsect1 xml:id="parameters"><title>Parameters</title>
    <variablelist>
        <varlistentry>
            <term><parameter>target</parameter></term>
            <listitem><para>Specifies the target.</para></listitem>
        </varlistentry>
    </variablelist>
</refsect1>
<refsect1 xml:id="description"><title>Description</title><para>Describes.</para></refsect1>
<refsect1 xml:id="examples"><title>Examples</title><para>Example.</para></refsect1>
<refsect1 xml:id="notes"><title>Notes</title><para>Note.</para></refsect1>
<refsect1 xml:id="errors"><title>Errors</title><para>Error.</para></refsect1>
<refsect1 xml:id="associatedgets"><title>Associated Gets</title><para>Get.</para></refsect1>
<refsect1 xml:id="versions"><title>Version Support</title>
    <informaltable>
        <tgroup cols="2">
            <tbody>
                <row>
                    <entry><function>glTest</function></entry>
                    <xi:include href="apiversion.xml" xpointer="xpointer(/*/*[@role='20']/*)"/>
                </row>
            </tbody>
        </tgroup>
    </informaltable>
</refsect1>
<refsect1 xml:id="seealso"><title>See Also</title><para>Other.</para></refsect1>
<refsect1 xml:id="Copyright"><title>Copyright</title><para>Copyright.</para></refsect1>"#;

#[test]
fn test_every_section_is_parsed() {
    let page = parse(ALL_SECTIONS);
    let sections = &page.sections;

    assert!(sections.parameters.base.is_some());
    assert_eq!(
        sections.description.base.as_ref().map(|t| t.elements.clone()),
        Some(vec!["<p>Describes.</p>".to_string()])
    );
    assert!(sections.examples.is_some());
    assert!(sections.notes.is_some());
    assert!(sections.errors.is_some());
    assert!(sections.associated_gets.is_some());
    assert_eq!(
        sections.versions.as_ref().and_then(|v| v.get("glTest")),
        Some("2.0")
    );
    assert!(sections.see_also.is_some());
    assert_eq!(
        sections.copyright.as_ref().map(|t| t.elements.clone()),
        Some(vec!["<p>Copyright.</p>".to_string()])
    );
    assert!(page.diagnostics().is_empty());
}

#[test]
fn test_disabled_sections_are_absent() {
    let page = parse_with(ALL_SECTIONS, &Includes::none());
    let sections = &page.sections;

    assert!(!sections.parameters.is_present());
    assert!(!sections.description.is_present());
    assert!(sections.examples.is_none());
    assert!(sections.notes.is_none());
    assert!(sections.errors.is_none());
    assert!(sections.associated_gets.is_none());
    assert!(sections.versions.is_none());
    assert!(sections.see_also.is_none());
    assert!(sections.copyright.is_none());
    assert!(page.diagnostics().is_empty());
}

#[test]
fn test_toggles_are_independent() {
    let includes = Includes {
        notes: true,
        version: true,
        ..Includes::none()
    };
    let page = parse_with(ALL_SECTIONS, &includes);

    assert!(page.sections.notes.is_some());
    assert!(page.sections.versions.is_some());
    assert!(page.sections.examples.is_none());
    assert!(!page.sections.description.is_present());
}

#[test]
fn test_scoped_sections() {
    let page = parse(
        r#"<refsect1 xml:id="parameters"><title>Parameters</title>
    <variablelist>
        <varlistentry>
            <term><parameter>target</parameter>, <parameter>buffer</parameter></term>
            <listitem><para>Shared.</para></listitem>
        </varlistentry>
    </variablelist>
</refsect1>
<refsect1 xml:id="parameters2"><title>Parameters for <function>glTestNamed</function></title>
    <variablelist>
        <varlistentry>
            <term><parameter>object</parameter></term>
            <listitem><para>Named.</para></listitem>
        </varlistentry>
    </variablelist>
</refsect1>
<refsect1 xml:id="description2"><title>Description for <function>glTestNamed</function></title>
    <para>Named description.</para>
</refsect1>"#,
    );

    let parameters = &page.sections.parameters;
    let base = parameters.base.as_ref().expect("base parameters");
    assert_eq!(base.entries[0].terms, vec!["target", "buffer"]);
    assert_eq!(base.entries[0].listitem.elements, vec!["<p>Shared.</p>"]);

    let scoped = parameters.scoped.as_ref().expect("scoped parameters");
    assert_eq!(scoped.function, "glTestNamed");
    assert_eq!(scoped.content.entries[0].terms, vec!["object"]);

    let description = page.sections.description.scoped.as_ref().expect("scoped");
    assert_eq!(description.function, "glTestNamed");
    assert_eq!(description.content.elements, vec!["<p>Named description.</p>"]);
    assert!(page.sections.description.base.is_none());
}

#[test]
fn test_scoped_section_without_function_is_dropped() {
    let page = parse(
        r#"<refsect1 xml:id="description2"><title>Description</title><para>Orphan.</para></refsect1>"#,
    );

    assert!(!page.sections.description.is_present());
    assert_eq!(kinds(&page), vec![DiagnosticKind::StructuralViolation]);
}

#[test]
fn test_duplicate_section_keeps_the_first() {
    let page = parse(
        r#"<refsect1 xml:id="notes"><title>Notes</title><para>First.</para></refsect1>
<refsect1 xml:id="notes"><title>Notes</title><para>Second.</para></refsect1>"#,
    );

    assert_eq!(
        page.sections.notes.as_ref().map(|t| t.elements.clone()),
        Some(vec!["<p>First.</p>".to_string()])
    );
    assert_eq!(kinds(&page), vec![DiagnosticKind::DuplicateValue]);
}

#[test]
fn test_versions_table() {
    let page = parse(
        r#"<refsect1 xml:id="versions"><title>Version Support</title>
    <informaltable>
        <tgroup cols="3" align="left">
            <xi:include href="apifunchead.xml" xpointer="xpointer(/*/*)"/>
            <tbody>
                <row>
                    <entry><function>glTestB</function></entry>
                    <xi:include href="apiversion.xml" xpointer="xpointer(/*/*[@role='45']/*)"/>
                </row>
                <row>
                    <entry><function>glTestA</function></entry>
                    <xi:include href="apiversion.xml" xpointer="xpointer(/*/*[@role='15']/*)"/>
                </row>
                <row>
                    <entry>No function here</entry>
                    <xi:include href="apiversion.xml" xpointer="xpointer(/*/*[@role='15']/*)"/>
                </row>
                <row>
                    <entry><function>glTestC</function></entry>
                    <xi:include href="apiversion.xml" xpointer="xpointer(/*/*[@role='es2']/*)"/>
                </row>
            </tbody>
        </tgroup>
    </informaltable>
</refsect1>"#,
    );

    let versions = page.sections.versions.as_ref().expect("versions");
    let entries: Vec<(&str, &str)> = versions
        .versions
        .iter()
        .map(|(function, version)| (function.as_str(), version.as_str()))
        .collect();
    assert_eq!(entries, vec![("glTestA", "1.5"), ("glTestB", "4.5")]);
    assert_eq!(kinds(&page), vec![DiagnosticKind::UnknownConstruct]);
}

#[test]
fn test_versions_without_table() {
    let page = parse(r#"<refsect1 xml:id="versions"><title>Version Support</title></refsect1>"#);

    assert!(page.sections.versions.as_ref().is_some_and(|v| v.versions.is_empty()));
    assert_eq!(kinds(&page), vec![DiagnosticKind::StructuralViolation]);
}

#[test]
fn test_root_must_be_refentry() {
    let source = r#"<article xmlns="http://docbook.org/ns/docbook"><para>x</para></article>"#;
    let err = Refpage::parse(source, "glTest", Path::new("."), &Includes::all()).unwrap_err();

    assert!(matches!(
        err,
        RefpageError::MissingRoot { ref found, .. } if found == "article"
    ));
}

#[test]
fn test_malformed_xml_is_an_error() {
    let err = Refpage::parse("<refentry><para>", "glTest", Path::new("."), &Includes::all())
        .unwrap_err();
    assert!(matches!(err, RefpageError::Xml { .. }));
}

#[test]
fn test_doctype_is_accepted() {
    let source = format!(
        "<!DOCTYPE refentry [ <!ENTITY ogl \"OpenGL\"> ]>\n{}",
        refentry(&synopsis("glTest", &[]))
            .trim_start_matches("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")
    );
    let page = Refpage::parse(&source, "glTest", Path::new("."), &Includes::all()).unwrap();

    assert_eq!(page.prototypes().len(), 1);
}
