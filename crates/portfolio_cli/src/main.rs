//! Portfolio page CLI.
//!
//! # Responsibility
//! - Run the page controller once: load projects, render into a host page,
//!   write the result.
//! - Offer quick inspection of inferred tags.

use clap::{Parser, Subcommand};
use log::error;
use portfolio_core::{
    core_version, default_log_level, infer_tags, init_logging, source_for, HostDocument,
    LoadStatus, LogLevel, LogTarget, PageController, ProjectSource, RenderConfig,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "portfolio_cli", about = "Render a portfolio page from projects.json")]
struct Cli {
    /// Log level (trace|debug|info|warn|error|off).
    #[arg(long, global = true, value_parser = parse_level)]
    log_level: Option<LogLevel>,

    /// Absolute directory for rotating log files; stderr when omitted.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render project regions into a host HTML page.
    Render {
        /// Path or http(s) URL of projects.json.
        #[arg(long, default_value = "projects.json")]
        data: String,
        /// Host HTML page providing the mount points.
        #[arg(long)]
        page: PathBuf,
        /// Output file; the host page is rewritten in place when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Optional TOML render configuration.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print inferred tags for every project.
    Tags {
        #[arg(long, default_value = "projects.json")]
        data: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.unwrap_or_else(default_log_level);
    let logging =
        LogTarget::from_dir(cli.log_dir.as_deref()).and_then(|target| init_logging(level, target));
    if let Err(message) = logging {
        eprintln!("logging disabled: {message}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_failed module=cli status=error");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_level(value: &str) -> Result<LogLevel, String> {
    value.parse().map_err(|err: portfolio_core::LoggingError| err.to_string())
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Render {
            data,
            page,
            out,
            config,
        } => render(&data, &page, out.as_deref(), config.as_deref()),
        Command::Tags { data, config } => print_tags(&data, config.as_deref()),
        Command::Version => {
            println!("portfolio_core version={}", core_version());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig, String> {
    match path {
        Some(path) => RenderConfig::load(path).map_err(|err| err.to_string()),
        None => Ok(RenderConfig::default()),
    }
}

fn render(
    data: &str,
    page: &Path,
    out: Option<&Path>,
    config: Option<&Path>,
) -> Result<(), String> {
    let config = load_config(config)?;
    let mut doc = HostDocument::load(page).map_err(|err| err.to_string())?;

    let controller = PageController::new(source_for(data), config);
    let outcome = controller.run(&mut doc);

    let target = out.unwrap_or(page);
    doc.save(target).map_err(|err| err.to_string())?;

    match outcome.status {
        LoadStatus::Loaded { solo, team } => {
            println!(
                "rendered {} (solo={solo} team={team} regions={})",
                target.display(),
                outcome.rendered_regions.join(",")
            );
        }
        LoadStatus::Failed { reason } => {
            println!("rendered {} with load error: {reason}", target.display());
        }
    }
    if !outcome.missing_regions.is_empty() {
        println!("missing mount points: {}", outcome.missing_regions.join(","));
    }
    Ok(())
}

fn print_tags(data: &str, config: Option<&Path>) -> Result<(), String> {
    let config = load_config(config)?;
    let source = source_for(data);
    let mut projects = source.load().map_err(|err| err.to_string())?;
    projects.assign_ids();

    for project in projects
        .solo_projects
        .iter()
        .chain(projects.team_projects.iter())
    {
        let tags = infer_tags(project, config.tag_limit);
        println!("{}\t{}\t{}", project.id(), project.title, tags.join(", "));
    }
    Ok(())
}
