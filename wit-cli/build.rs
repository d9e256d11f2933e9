use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs; build scripts can't reach src/ modules
fn build_cli() -> Command {
    let input = || {
        Arg::new("input")
            .help("Input outline file")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    Command::new("wittgenstein")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lucky-star outlines to nested HTML lists or plain text")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
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
            Command::new("convert")
                .arg(input())
                .arg(
                    Arg::new("output")
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "structured",
                            "plain",
                        ])),
                )
                .arg(
                    Arg::new("collapsed")
                        .long("collapsed")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("inspect").arg(input()))
        .subcommand(Command::new("generate-css"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    generate_to(Bash, &mut cmd, "wittgenstein", &outdir)?;
    generate_to(Zsh, &mut cmd, "wittgenstein", &outdir)?;
    generate_to(Fish, &mut cmd, "wittgenstein", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
