//! Command-line interface for bibleutils
//! Parses reference strings and prints them in the requested form.
//!
//! Usage:
//!   bibleutils parse `<refs>` [--to `<form>`] [--expand] [--format `<format>`] [--config `<file>`]
//!   bibleutils books [--system `<system>`]                   - List canonical or external book names
//!   bibleutils forms                                          - List reference forms and systems

use bibleutils::bibleutils::config::{BibleutilsConfig, Loader, OutputFormat};
use bibleutils::{
    convert_refs, expand_refs, parse_refs, Catalogs, Reference, VersificationId,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("bibleutils")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, convert and expand biblical text references")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a reference string")
                .arg(
                    Arg::new("refs")
                        .help("Reference string, e.g. 'Gen 1:1-2,6, Ex 17:3'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Reference form to convert to (BIBLEUTILS, ETCBCG, ETCBCH)"),
                )
                .arg(
                    Arg::new("expand")
                        .long("expand")
                        .short('e')
                        .help("Expand verse ranges into single verses")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json"]),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("books")
                .about("List book names")
                .arg(
                    Arg::new("system")
                        .long("system")
                        .short('s')
                        .help("Versification system whose names to list (ETCBCH, ETCBCG)"),
                ),
        )
        .subcommand(Command::new("forms").about("List reference forms and versification systems"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("books", books_matches)) => handle_books_command(books_matches),
        Some(("forms", _)) => {
            handle_forms_command();
            Ok(())
        }
        _ => unreachable!("subcommand is required"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut loader = Loader::with_defaults();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.user_file(path);
    }
    if let Some(form) = matches.get_one::<String>("to") {
        loader = loader.target_form(form)?;
    }
    if matches.get_flag("expand") {
        loader = loader.expand(true)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.output_format(format)?;
    }
    let config = loader.build()?;

    let refs = matches
        .get_one::<String>("refs")
        .expect("refs is a required argument");
    let references = process(refs, &config)?;

    match config.output.format {
        OutputFormat::Text => {
            for reference in &references {
                println!("{}", reference);
            }
        }
        OutputFormat::Json => {
            let json = if config.output.pretty {
                serde_json::to_string_pretty(&references)?
            } else {
                serde_json::to_string(&references)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}

/// Parse, expand while still in the internal form, then convert.
fn process(refs: &str, config: &BibleutilsConfig) -> Result<Vec<Reference>, bibleutils::Error> {
    let form = config.parse.target_form;
    let parsed = parse_refs(refs, form)?;
    let parsed = if config.parse.expand {
        expand_refs(&parsed)?
    } else {
        parsed
    };
    Ok(convert_refs(&parsed, form)?)
}

/// Handle the books command
fn handle_books_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let catalogs = Catalogs::standard();

    match matches.get_one::<String>("system") {
        None => {
            for book in catalogs.books().books() {
                println!("{:>2}  {:<20} {:?}", book.value(), book.symbol(), book.section());
            }
        }
        Some(system) => {
            let vid: VersificationId = system.parse()?;
            let table = catalogs
                .versification(vid)
                .ok_or_else(|| format!("no book table for versification system {}", vid))?;
            for (name, book) in table.books() {
                println!("{:<20} {}", name, book);
            }
        }
    }
    Ok(())
}

/// Handle the forms command
fn handle_forms_command() {
    let catalogs = Catalogs::standard();

    println!("Reference forms:");
    for (name, value) in catalogs.reference_forms().iter() {
        println!("  {:>2}  {}", value, name);
    }
    println!();
    println!("Versification systems:");
    for (name, value) in catalogs.versification_ids().iter() {
        let table = VersificationId::from_value(value)
            .and_then(|vid| catalogs.versification(vid))
            .map(|table| format!("{} books", table.len()))
            .unwrap_or_else(|| "no book table".to_string());
        println!("  {:>2}  {:<16} {}", value, name, table);
    }
}
