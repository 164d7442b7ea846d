// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dnsconfig::{
    constants::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV},
    loader::load_document,
    renderer::ConfigurationRenderer,
    template::TemplateSet,
};
use tracing::{debug, error, info};

/// Generate dnsmasq host and reverse-DNS records from a domain description.
///
/// The generated configuration is written to stdout unless --output is given.
/// Logs go to stderr and are controlled with RUST_LOG and RUST_LOG_FORMAT.
#[derive(Debug, Parser)]
#[command(name = "dnsconfig", version)]
struct Args {
    /// Domain description to read (YAML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory with head.tpl, tail.tpl, network.tpl and host.tpl.
    /// Missing files fall back to the built-in templates.
    #[arg(short, long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Write the configuration to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Validate and render, but discard the output
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Generation failed: {:#}", err);
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with custom format
///
/// Respects RUST_LOG environment variable if set, otherwise defaults to WARN level
/// Example: RUST_LOG=debug dnsconfig
///
/// Respects RUST_LOG_FORMAT environment variable for output format
/// Example: RUST_LOG_FORMAT=json dnsconfig
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());

    // stdout carries the generated configuration
    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(false)
                .compact()
                .init();
        }
    }

    debug!("Logging initialized with file and line number tracking");
}

fn run(args: &Args) -> Result<()> {
    let templates = match &args.templates {
        Some(dir) => TemplateSet::from_dir(dir),
        None => TemplateSet::builtin(),
    }
    .context("Unable to load the templates")?;

    let document = load_document(&args.config)
        .context("Unable to parse the configuration file")?;

    let rendered = ConfigurationRenderer::new(&templates)
        .render(&document)
        .context("Unable to parse the configuration file")?;

    if args.check {
        eprintln!(
            "{}: OK ({} domains, {} records)",
            args.config.display(),
            rendered.domain_count,
            rendered.record_count
        );
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered.text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote configuration to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write configuration to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;
