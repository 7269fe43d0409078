use crate::common::{parse, parse_with, synopsis};
use glwr_babel::formats::header::generate_comment;
use glwr_babel::{HeaderOptions, Includes, Refpage};
use insta::assert_snapshot;

const SHARED_PAGE: &str = r#"<refnamediv>
    <refname>glFoo</refname>
    <refname>glBar</refname>
    <refpurpose>do foo things</refpurpose>
</refnamediv>
<refsynopsisdiv><title>C Specification</title>
    <funcsynopsis>
        <funcprototype>
            <funcdef>void <function>glFoo</function></funcdef>
            <paramdef>GLint <parameter>a</parameter></paramdef>
            <paramdef>GLint <parameter>b</parameter></paramdef>
            <paramdef>GLint <parameter>c</parameter></paramdef>
        </funcprototype>
        <funcprototype>
            <funcdef>void <function>glBar</function></funcdef>
            <paramdef>GLint <parameter>a</parameter></paramdef>
            <paramdef>GLint <parameter>c</parameter></paramdef>
        </funcprototype>
    </funcsynopsis>
</refsynopsisdiv>
<refsect1 xml:id="parameters"><title>Parameters</title>
    <variablelist>
        <varlistentry>
            <term><parameter>a</parameter>, <parameter>b</parameter></term>
            <listitem><para>First two.</para></listitem>
        </varlistentry>
        <varlistentry>
            <term><parameter>c</parameter></term>
            <listitem><para>Third.</para></listitem>
        </varlistentry>
    </variablelist>
</refsect1>
<refsect1 xml:id="description"><title>Description</title>
    <para>Base description.</para>
</refsect1>
<refsect1 xml:id="description2"><title>Description for <function>glBar</function></title>
    <para>Bar description.</para>
</refsect1>"#;

fn without_link() -> HeaderOptions {
    HeaderOptions::new(Includes {
        link: false,
        ..Includes::all()
    })
}

fn comment_for(page: &Refpage, function: &str, options: &HeaderOptions) -> String {
    let prototype = page
        .prototypes()
        .iter()
        .find(|prototype| prototype.name() == function)
        .expect("prototype should exist");
    generate_comment(page, prototype, options)
}

#[test]
fn test_scoped_description_overrides_base() {
    let page = parse(SHARED_PAGE);
    let comment = comment_for(&page, "glBar", &without_link());

    assert_snapshot!(comment, @r#"
    ///
    /// \brief
    /// do foo things
    ///
    /// \description
    /// <p>Bar description.</p>
    ///
    /// \param a
    /// <p>First two.</p>
    ///
    /// \param c
    /// <p>Third.</p>
    ///
    "#);
}

#[test]
fn test_base_description_for_other_prototypes() {
    let page = parse(SHARED_PAGE);
    let comment = comment_for(&page, "glFoo", &without_link());

    assert!(comment.contains("/// \\description\n/// <p>Base description.</p>\n"));
    assert!(!comment.contains("Bar description"));
    assert!(comment.contains("/// \\param a, b\n/// <p>First two.</p>\n"));
    assert!(comment.contains("/// \\param c\n/// <p>Third.</p>\n"));
}

#[test]
fn test_entries_without_matching_parameters_are_skipped() {
    let page = parse(&format!(
        "{}<refsect1 xml:id=\"parameters\"><title>Parameters</title><variablelist>\
         <varlistentry><term><parameter>other</parameter></term><listitem><para>Unused.</para></listitem></varlistentry>\
         <varlistentry><term><parameter>n</parameter></term><listitem><para>Count.</para></listitem></varlistentry>\
         </variablelist></refsect1>",
        synopsis("glTest", &[("GLsizei", "n")])
    ));
    let comment = comment_for(&page, "glTest", &without_link());

    assert!(!comment.contains("Unused"));
    assert!(comment.contains("/// \\param n\n/// <p>Count.</p>\n"));
}

#[test]
fn test_link_and_brief() {
    let page = parse(&format!(
        "<refnamediv><refname>glTest</refname><refpurpose>test things</refpurpose></refnamediv>{}",
        synopsis("glTest", &[])
    ));
    let options = HeaderOptions {
        link_base: "https://example.com/gl4/".to_string(),
        ..HeaderOptions::default()
    };

    let comment = comment_for(&page, "glTest", &options);
    assert!(comment.starts_with(
        "///\n/// \\brief\n/// <a href=\"https://example.com/gl4/glTest.xhtml\">glTest</a> \n/// &ndash; test things\n"
    ));

    let link_only = HeaderOptions {
        includes: Includes {
            brief: false,
            ..Includes::all()
        },
        ..options.clone()
    };
    let comment = comment_for(&page, "glTest", &link_only);
    assert!(comment.starts_with(
        "///\n/// \\brief\n/// <a href=\"https://example.com/gl4/glTest.xhtml\">glTest</a> \n///\n"
    ));

    let brief_only = without_link();
    let comment = comment_for(&page, "glTest", &brief_only);
    assert!(comment.starts_with("///\n/// \\brief\n/// test things\n"));
}

#[test]
fn test_everything_disabled() {
    let page = parse_with(SHARED_PAGE, &Includes::none());
    let comment = comment_for(&page, "glFoo", &HeaderOptions::new(Includes::none()));

    assert_eq!(comment, "///\n");
}

/// Page `glTest` holding every section kind, listed in reverse emission order.
fn every_section_page() -> Refpage {
    parse(&format!(
        "<refnamediv><refname>glTest</refname><refpurpose>purpose</refpurpose></refnamediv>\
         {}\
         <refsect1 xml:id=\"Copyright\"><title>Copyright</title><para>C.</para></refsect1>\
         <refsect1 xml:id=\"seealso\"><title>See Also</title><para>S.</para></refsect1>\
         <refsect1 xml:id=\"associatedgets\"><title>Gets</title><para>G.</para></refsect1>\
         <refsect1 xml:id=\"errors\"><title>Errors</title><para>E.</para></refsect1>\
         <refsect1 xml:id=\"parameters\"><title>Parameters</title><variablelist><varlistentry>\
         <term><parameter>n</parameter></term><listitem><para>P.</para></listitem>\
         </varlistentry></variablelist></refsect1>\
         <refsect1 xml:id=\"notes\"><title>Notes</title><para>N.</para></refsect1>\
         <refsect1 xml:id=\"examples\"><title>Examples</title><para>X.</para></refsect1>\
         <refsect1 xml:id=\"description\"><title>Description</title><para>D.</para></refsect1>\
         <refsect1 xml:id=\"versions\"><title>Version Support</title><informaltable><tgroup cols=\"2\"><tbody>\
         <row><entry><function>glTest</function></entry>\
         <xi:include href=\"apiversion.xml\" xpointer=\"xpointer(/*/*[@role='43']/*)\"/></row>\
         </tbody></tgroup></informaltable></refsect1>",
        synopsis("glTest", &[("GLsizei", "n")])
    ))
}

#[test]
fn test_section_order() {
    let page = every_section_page();
    let comment = comment_for(&page, "glTest", &without_link());

    let tags = [
        "\\brief",
        "\\since OpenGL 4.3",
        "\\description",
        "\\examples",
        "\\notes",
        "\\param n",
        "\\errors",
        "\\associated_gets",
        "\\see_also",
        "\\copyright",
    ];
    let positions: Vec<usize> = tags
        .iter()
        .map(|tag| {
            comment
                .find(tag)
                .unwrap_or_else(|| panic!("{tag} missing from:\n{comment}"))
        })
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(comment.ends_with("/// \\copyright\n/// <p>C.</p>\n///\n"));
}

#[test]
fn test_since_only_for_listed_functions() {
    let page = parse(&format!(
        "{}<refsect1 xml:id=\"versions\"><title>Version Support</title><informaltable><tgroup cols=\"2\"><tbody>\
         <row><entry><function>glOther</function></entry>\
         <xi:include href=\"apiversion.xml\" xpointer=\"xpointer(/*/*[@role='30']/*)\"/></row>\
         </tbody></tgroup></informaltable></refsect1>",
        synopsis("glTest", &[])
    ));
    let comment = comment_for(&page, "glTest", &without_link());

    assert!(!comment.contains("\\since"));
}

#[test]
fn test_long_purpose_wraps() {
    let page = parse(&format!(
        "<refnamediv><refname>glTest</refname>\
         <refpurpose>specify the clear value for the depth buffer</refpurpose></refnamediv>{}",
        synopsis("glTest", &[])
    ));
    let options = without_link().with_width(20);
    let comment = comment_for(&page, "glTest", &options);

    assert!(comment.starts_with(
        "///\n/// \\brief\n/// specify the clear\n/// value for the depth\n/// buffer\n"
    ));
}

#[test]
fn test_disabled_sections_are_not_emitted() {
    let page = every_section_page();

    let comment = comment_for(&page, "glTest", &HeaderOptions::new(Includes::none()));
    assert_eq!(comment, "///\n");

    let options = HeaderOptions::new(Includes {
        link: false,
        version: false,
        notes: false,
        parameters: false,
        copyright: false,
        ..Includes::all()
    });
    let comment = comment_for(&page, "glTest", &options);
    for tag in ["\\since", "\\notes", "\\param", "\\copyright"] {
        assert!(!comment.contains(tag), "{tag} emitted in:\n{comment}");
    }
    for tag in ["\\brief", "\\description", "\\examples", "\\errors", "\\see_also"] {
        assert!(comment.contains(tag), "{tag} missing from:\n{comment}");
    }
}

#[test]
fn test_angle_brackets_in_list_items_keep_the_prefix() {
    let page = parse(&format!(
        "{}<refsect1 xml:id=\"description\"><title>Description</title>\
         <variablelist><varlistentry><term>x</term>\
         <listitem>requires x &lt; y</listitem></varlistentry></variablelist>\
         <para>Values a &lt; b and c &gt; d.</para></refsect1>",
        synopsis("glTest", &[])
    ));
    let comment = comment_for(&page, "glTest", &without_link());

    assert!(comment.contains("/// requires x < y\n"));
    assert!(comment.contains("/// </td>\n"));
    let bare: Vec<&str> = comment
        .lines()
        .filter(|line| !line.starts_with("///"))
        .collect();
    assert!(bare.is_empty(), "lines without prefix: {bare:?}");
}
