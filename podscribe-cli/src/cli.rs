// Command definition, shared with build.rs for shell completions. Only clap may be used here.

use clap::{Arg, ArgAction, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("podscribe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract Indie Hackers podcast transcripts as markdown or plain text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log extraction details to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract the transcript from a saved episode page")
                .arg(
                    Arg::new("path")
                        .help("Page to read (HTML or JSON node snapshot), '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("host")
                        .long("host")
                        .help("Host name as it appears in speaker labels"),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Address the page was saved from; rejected unless it is an episode page")
                        .value_hint(ValueHint::Url),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format")
                        .value_parser(["auto", "html", "json"])
                        .default_value("auto"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format (default: by output file extension, else from configuration)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout")
                        .value_hint(ValueHint::FilePath)
                        .conflicts_with("save"),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .help("Write to the configured filename in the current directory")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("episode")
                .about("Show episode number and guest from an episode URL")
                .arg(Arg::new("url").required(true).index(1).value_hint(ValueHint::Url)),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}
