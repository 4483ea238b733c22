//! ATG Log Colorizer
//!
//! Colors application server output as it streams by, reading either a log
//! file or standard input:
//!
//! ```text
//! ./startJBoss.sh | atg-log-colorizer
//! atg-log-colorizer server.log
//! ```

use anyhow::{Context, Result};
use atg_log_colorizer::config::OutputSettings;
use atg_log_colorizer::pipeline::OutputGate;
use atg_log_colorizer::{
    pipeline, ColorMode, ColorWriter, ColorizerConfig, ColorizerError, LineClassifier, Palette,
};
use clap::Parser;
use crossterm::tty::IsTty;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Exit status after Ctrl+C, as a shell reports SIGINT.
const INTERRUPTED_STATUS: i32 = 130;

#[derive(Parser)]
#[command(name = "atg-log-colorizer")]
#[command(about = "Color-codes JBoss, WebLogic, WebSphere and DAS server output", long_about = None)]
#[command(version)]
struct Cli {
    /// Log file to colorize; reads standard input when omitted
    file: Option<PathBuf>,

    /// Configuration file (overrides ATG_COLORIZER_CONFIG and the default location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Show supported servers and the color of each category, then exit
    #[arg(long)]
    legend: bool,

    /// Print the effective configuration as TOML, then exit
    #[arg(long)]
    print_config: bool,

    /// Set log level (diagnostics go to stderr)
    #[arg(short, long, env = "ATG_COLORIZER_LOG", default_value = "warn")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::new(format!(
        "atg_log_colorizer={}",
        level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries the colorized log
        .init();
}

/// Run the whole stream on the current thread.
fn colorize(
    file: Option<PathBuf>,
    palette: Palette,
    colored: bool,
    output: &OutputSettings,
    gate: &OutputGate,
) -> Result<()> {
    let mut writer =
        ColorWriter::new(io::stdout(), palette, colored).reset_to_other(output.reset_to_other);
    if output.banner {
        writer.banner(VERSION)?;
    }

    let mut classifier = LineClassifier::new();
    let result = match file {
        Some(path) => {
            writer.opening(&path)?;
            let handle = match File::open(&path) {
                Ok(handle) => handle,
                Err(source) => {
                    writer.unreadable(&path)?;
                    return Err(ColorizerError::InputOpen { path, source }.into());
                }
            };
            info!("Opened input file {}", path.display());
            pipeline::run_gated(BufReader::new(handle), &mut writer, &mut classifier, gate)
        }
        None => {
            debug!("Reading standard input");
            pipeline::run_gated(io::stdin().lock(), &mut writer, &mut classifier, gate)
        }
    };

    match result {
        Ok(_) => Ok(()),
        Err(ColorizerError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed, stopping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    debug!("ATG Log Colorizer v{} starting...", VERSION);

    let mut config =
        ColorizerConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(color) = cli.color {
        config.output.color = color;
    }
    if cli.no_banner {
        config.output.banner = false;
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let palette = Palette::from_settings(&config.palette)?;
    let colored = config.output.color.enabled(io::stdout().is_tty());
    debug!("Color output: {}", colored);

    if cli.legend {
        let mut writer = ColorWriter::new(io::stdout(), palette, colored);
        writer.banner(VERSION)?;
        writer.legend(PROGRAM)?;
        return Ok(());
    }

    let output = config.output.clone();
    let gate = Arc::new(OutputGate::new());
    let worker_gate = Arc::clone(&gate);
    let worker = tokio::task::spawn_blocking(move || {
        colorize(cli.file, palette, colored, &output, &worker_gate)
    });

    tokio::select! {
        joined = worker => {
            joined.context("Colorizer task failed")?
        }
        _ = tokio::signal::ctrl_c() => {
            debug!("Received Ctrl+C");
            // waits out a line the worker is writing
            gate.close_with(|| ColorWriter::new(io::stdout(), palette, colored).interrupted())
                .await?;
            std::process::exit(INTERRUPTED_STATUS);
        }
    }
}
