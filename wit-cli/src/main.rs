// Command-line interface for wittgenstein
//
// Converts lucky-star outline documents into nested HTML lists or indented plain text.
//
// Usage:
//  wittgenstein <input> [output] [--mode structured|plain] [--collapsed]   - Convert (default)
//  wittgenstein convert <input> [output] ...                                - Same as above (explicit)
//  wittgenstein inspect <input>                                             - Per-line classification as JSON
//  wittgenstein generate-css                                                - Print the structured-mode stylesheet
//
// Configuration is layered: built-in defaults, then ./wit.toml if present, then --config PATH,
// then the flags above. Conversion runs fully in memory; on any error nothing is written and
// the process exits with status 1.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wit_babel::formats::html::assets::STYLESHEET;
use wit_babel::{convert, ConvertError, ConvertOptions};
use wit_cli::{inspect, paths};
use wit_config::{ConfigError, Loader, WitConfig, PROJECT_FILE};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "generate-css", "help"];

fn build_cli() -> Command {
    Command::new("wittgenstein")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lucky-star outlines to nested HTML lists or plain text")
        .long_about(
            "wittgenstein reads outlines written with star bullets and writes them out as\n\
            collapsible, hierarchically numbered HTML lists or as indented plain text.\n\n\
            Notation:\n  \
            * item            a bullet (depth 1)\n      \
            * child       one indent unit (4 columns or a tab) deeper\n  \
            ** child          extra stars add depth too\n  \
            1* item           starts a numbered branch\n  \
            *{name} item      names the item; @{name} elsewhere links to it\n\n\
            Examples:\n  \
            wittgenstein notes.wit                     # writes notes.html\n  \
            wittgenstein notes.wit --mode plain        # writes notes.txt\n  \
            wittgenstein notes.wit out.html --collapsed",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wit.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an outline document (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input outline file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .help("Output file (defaults to the input path with the mode's extension)")
                        .required(false)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .help("Output mode")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "structured",
                            "plain",
                        ]))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("collapsed")
                        .long("collapsed")
                        .help("Start structured documents with every item collapsed")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print how every line is classified, as JSON")
                .arg(
                    Arg::new("input")
                        .help("Input outline file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the stylesheet injected into numbered structured documents"),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // a bare input path means "convert"
            if args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut injected = vec![args[0].clone(), "convert".to_string()];
                injected.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&injected) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(&matches).unwrap_or_else(|err| {
        eprintln!("Error: failed to load configuration: {err}");
        std::process::exit(1);
    });
    init_logging(&config, matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("inspect", sub_matches)) => handle_inspect_command(sub_matches),
        Some(("generate-css", _)) => {
            println!("{STYLESHEET}");
            Ok(())
        }
        _ => Err(ConvertError::Argument(
            "unknown subcommand, use --help for usage information".to_string(),
        )),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Defaults, then ./wit.toml, then --config, then convert flags.
fn load_cli_config(matches: &ArgMatches) -> Result<WitConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(("convert", sub_matches)) = matches.subcommand() {
        if let Some(mode) = sub_matches.get_one::<String>("mode") {
            loader = loader.set_override("convert.mode", mode.as_str())?;
        }
        if sub_matches.get_flag("collapsed") {
            loader = loader.set_override("convert.collapsed", true)?;
        }
    }

    loader.build()
}

fn init_logging(config: &WitConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|e| {
        ConvertError::Argument(format!("cannot read '{}': {e}", path.display()))
    })
}

fn handle_convert_command(matches: &ArgMatches, config: &WitConfig) -> Result<(), ConvertError> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or_else(|| ConvertError::Argument("missing input path".to_string()))?;
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    let options = ConvertOptions::from(&config.convert);
    paths::validate_input(&input, &config.input)?;
    let output = paths::resolve_output(
        &input,
        output.as_deref(),
        config.convert.extension_for(options.mode),
    )?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        mode = options.mode.name(),
        collapsed = options.collapsed,
        "converting"
    );

    let source = read_source(&input)?;
    let converted = convert(&source, &options)?;
    fs::write(&output, converted).map_err(|e| ConvertError::Unexpected {
        message: format!("cannot write '{}': {e}", output.display()),
        line: None,
    })?;

    info!(output = %output.display(), mode = options.mode.name(), "wrote document");
    Ok(())
}

fn handle_inspect_command(matches: &ArgMatches) -> Result<(), ConvertError> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or_else(|| ConvertError::Argument("missing input path".to_string()))?;

    let source = read_source(&input)?;
    let json = inspect::to_json(&source).map_err(|e| ConvertError::Unexpected {
        message: format!("cannot serialize classifications: {e}"),
        line: None,
    })?;
    println!("{json}");
    Ok(())
}
