// Command-line interface for glwr
//
// This binary turns a directory of OpenGL DocBook refpages into documented C headers.
//
// The main role for the glwr program is generating: every gl*.xml refpage of the input directory
// becomes func/<page>.h in the output directory, and glwr.h includes them all. The inspect
// command parses a single refpage and prints what the generator sees, which helps when a page
// produces diagnostics.
//
// Usage:
//  glwr <refpages> -o <output> [--include <mask>]   - Generate headers (default)
//  glwr generate <refpages> -o <output>             - Same as above (explicit)
//  glwr inspect <file> [--as json|diagnostics|header]
//
// Configuration:
//
// Built-in defaults are layered with ./glwr.toml (when present) and --config <path>. The
// --include, --width and --verbose flags override the configuration.

mod discover;
mod inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use glwr_babel::{write_umbrella_header, FormatRegistry, HeaderOptions, Includes, Refpage};
use glwr_config::{GlwrConfig, Loader};
use std::fs;
use std::path::Path;

const SUBCOMMANDS: &[&str] = &["generate", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("glwr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate documented OpenGL wrapper headers from DocBook refpages")
        .long_about(
            "glwr reads the OpenGL reference pages (DocBook XML) and writes C headers whose\n\
            declarations carry the refpage documentation as /// comment blocks.\n\n\
            Commands:\n  \
            - generate: Write func/<page>.h for every refpage, plus glwr.h (default)\n  \
            - inspect:  Show the parsed model or the diagnostics of one refpage\n\n\
            Examples:\n  \
            glwr gl4 -o include/GL                      # Generate headers\n  \
            glwr gl4 -o include/GL --include 01111111110 # Skip permalinks and copyright\n  \
            glwr inspect gl4/glBindBuffer.xml --as diagnostics",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a glwr.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("include")
                .long("include")
                .value_name("MASK")
                .help("Eleven-bit mask of the sections to include")
                .long_help(
                    "Binary mask selecting the documentation sections, most significant bit\n\
                    first: link, brief, version, description, examples, notes, parameters,\n\
                    errors, associated_gets, see_also, copyright.\n\n\
                    Overrides the [include] table of the configuration.",
                )
                .global(true),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("COLUMNS")
                .help("Maximum comment text width after the /// prefix")
                .value_parser(clap::value_parser!(u32))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every generated page")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate headers for a refpage directory (default command)")
                .arg(
                    Arg::new("input")
                        .help("Directory holding the gl*.xml refpages")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Directory receiving glwr.h and func/")
                        .required(true)
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the parsed form of one refpage")
                .arg(
                    Arg::new("path")
                        .help("Path to the refpage")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("as")
                        .long("as")
                        .help("View to print. Defaults to 'json'")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::INSPECT_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // If no subcommand is provided, inject "generate"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "generate".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(&matches);
    init_logging(config.output.verbose);
    let options = HeaderOptions::from(&config);

    match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches
                .get_one::<String>("output")
                .expect("output is required");
            handle_generate_command(Path::new(input), Path::new(output), &options);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let format = sub_matches
                .get_one::<String>("as")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_INSPECT_FORMAT);
            handle_inspect_command(Path::new(path), format, &options);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the generate command
fn handle_generate_command(input: &Path, output: &Path, options: &HeaderOptions) {
    let pages = discover::refpages(input).unwrap_or_else(|e| {
        eprintln!("Error reading directory '{}': {e}", input.display());
        std::process::exit(1);
    });
    if pages.is_empty() {
        log::warn!("No refpages found in {}", input.display());
    }

    let func_dir = output.join("func");
    fs::create_dir_all(&func_dir).unwrap_or_else(|e| {
        eprintln!("Error creating directory '{}': {e}", func_dir.display());
        std::process::exit(1);
    });

    let registry = FormatRegistry::default();
    let mut generated = Vec::new();
    let mut failed = Vec::new();

    for path in &pages {
        let page = match Refpage::from_path(path, &options.includes) {
            Ok(page) => page,
            Err(err) => {
                log::error!("Skipping {}: {err}", path.display());
                failed.push(path.clone());
                continue;
            }
        };

        log::info!("Generating {}.h", page.name);
        let header = registry
            .serialize(&page, "header", options)
            .unwrap_or_else(|e| {
                eprintln!("Error generating '{}': {e}", page.name);
                std::process::exit(1);
            });
        write_output(&func_dir.join(format!("{}.h", page.name)), &header);
        generated.push(page.name);
    }

    generated.sort();
    write_output(&output.join("glwr.h"), &write_umbrella_header(&generated));

    if !failed.is_empty() {
        eprintln!("{} of {} refpages failed", failed.len(), pages.len());
        std::process::exit(1);
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &Path, format: &str, options: &HeaderOptions) {
    match inspect::inspect(path, format, options) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn write_output(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Error writing '{}': {e}", path.display());
        std::process::exit(1);
    });
}

fn load_cli_config(matches: &clap::ArgMatches) -> GlwrConfig {
    let loader = Loader::new().with_optional_file("glwr.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    let loader = match matches.get_one::<String>("include") {
        Some(mask) => {
            let includes: Includes = mask.parse().unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            loader.with_includes(&includes)
        }
        None => Ok(loader),
    };
    let loader = loader.and_then(|loader| match matches.get_one::<u32>("width") {
        Some(width) => loader.set_override("output.width", i64::from(*width)),
        None => Ok(loader),
    });
    let loader = loader.and_then(|loader| {
        if matches.get_flag("verbose") {
            loader.set_override("output.verbose", true)
        } else {
            Ok(loader)
        }
    });

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
