//! Command-line interface for podscribe
//! This binary turns saved Indie Hackers episode pages into transcripts.
//!
//! Usage:
//!   podscribe extract `<path>` [--to `<format>`] [--output `<file>` | --save]  - Extract a transcript
//!   podscribe episode `<url>`                                              - Show episode info
//!   podscribe list-formats                                                 - List output formats

mod cli;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use podscribe::{extract_episode_info, load, DocumentNode};
use podscribe_babel::{import, FormatRegistry, InputFormat};
use podscribe_config::{Loader, PodscribeConfig};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

const USER_CONFIG_FILE: &str = "podscribe.toml";

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    let verbose = matches.get_flag("verbose")
        || matches
            .subcommand()
            .map(|(_, sub)| sub.get_flag("verbose"))
            .unwrap_or(false);
    init_tracing(verbose);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("extract", sub)) => {
            let config = load_config(sub)?;
            handle_extract_command(sub, &config)
        }
        Some(("episode", sub)) => handle_episode_command(sub),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => bail!("no command given, see --help"),
    }
}

/// Defaults, then the user config file, then --config, then --host
fn load_config(sub: &ArgMatches) -> Result<PodscribeConfig> {
    let mut loader = Loader::new();
    if let Some(dir) = dirs::config_dir() {
        let user_file = dir.join(USER_CONFIG_FILE);
        debug!(path = %user_file.display(), "user configuration");
        loader = loader.with_optional_file(user_file);
    }
    if let Some(path) = sub.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(host) = sub.get_one::<String>("host") {
        loader = loader
            .set_override("host.name", host.as_str())
            .context("invalid --host")?;
    }
    loader.build().context("failed to load configuration")
}

/// Handle the extract command
fn handle_extract_command(sub: &ArgMatches, config: &PodscribeConfig) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .context("path is required")?;
    let tree = read_page(path, sub.get_one::<String>("from").map(String::as_str))?;

    let options = config.load_options();
    let url = sub.get_one::<String>("url").map(String::as_str);
    let transcript = load(&tree, url, &options)?;

    let target = match (sub.get_one::<String>("output"), sub.get_flag("save")) {
        (Some(output), _) => Some(output.clone()),
        (None, true) => Some(transcript.filename.clone()),
        (None, false) => None,
    };

    let registry = FormatRegistry::with_defaults();
    let format = output_format(
        &registry,
        sub.get_one::<String>("to"),
        target.as_deref(),
        &config.output.format,
    );
    debug!(format = %format, "rendering transcript");
    let rendered = registry.serialize(&transcript, &format).with_context(|| {
        format!(
            "available formats: {}",
            registry.list_formats().join(", ")
        )
    })?;

    match target {
        Some(target) => {
            std::fs::write(&target, &rendered)
                .with_context(|| format!("failed to write {}", target))?;
            eprintln!("{}", transcript.status());
            eprintln!("Saved {}", target);
        }
        None => {
            eprintln!("{}", transcript.status());
            println!("{}", rendered);
        }
    }
    Ok(())
}

/// --to wins, then the target file's extension, then the configured format
fn output_format(
    registry: &FormatRegistry,
    requested: Option<&String>,
    target: Option<&str>,
    configured: &str,
) -> String {
    if let Some(requested) = requested {
        return requested.clone();
    }
    target
        .and_then(|target| Path::new(target).extension())
        .and_then(|ext| ext.to_str())
        .and_then(|ext| registry.for_extension(ext))
        .map(|format| format.name().to_string())
        .unwrap_or_else(|| configured.to_string())
}

fn read_page(path: &str, from: Option<&str>) -> Result<DocumentNode> {
    let source = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
    };

    let format = match from {
        None | Some("auto") => Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(InputFormat::from_extension)
            .unwrap_or(InputFormat::Html),
        Some(name) => name.parse()?,
    };
    debug!(%format, bytes = source.len(), "importing page");

    Ok(import(&source, format)?)
}

/// Handle the episode command
fn handle_episode_command(sub: &ArgMatches) -> Result<()> {
    let url = sub.get_one::<String>("url").context("url is required")?;
    let Some(info) = extract_episode_info(url) else {
        bail!("not an Indie Hackers podcast URL: {}", url);
    };
    println!("episode: {}", info.episode_number);
    println!("guest: {}", info.guest_name);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
