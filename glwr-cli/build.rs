use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the inspect views from src/inspect.rs
// We need to duplicate this here since build scripts can't access src/ modules
const INSPECT_FORMATS: &[&str] = &["diagnostics", "header", "json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("glwr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate documented OpenGL wrapper headers from DocBook refpages")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("include")
                .long("include")
                .value_name("MASK")
                .global(true),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("COLUMNS")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .required(true)
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("as")
                        .long("as")
                        .value_parser(clap::builder::PossibleValuesParser::new(INSPECT_FORMATS)),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "glwr", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "glwr", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "glwr", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
