use clap::Parser;
use halfshell::core::config::{self, CliOverrides};
use halfshell::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "halfshell", about = "Turtle-powered terminal portfolio")]
struct Args {
    /// Disable the periodic title glitch
    #[arg(long)]
    no_glitch: bool,

    /// Seconds between title glitches
    #[arg(long, value_name = "SECS")]
    glitch_interval: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let started = Instant::now();
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Loading happens before the logger exists; report the outcome below
    let (file_config, config_source, config_error) = match config::load_config() {
        Ok((c, source)) => (c, Some(source), None),
        Err(e) => (Default::default(), None, Some(e)),
    };
    let cli = CliOverrides {
        no_glitch: args.no_glitch,
        glitch_interval_secs: args.glitch_interval,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = config::parse_log_level(&resolved.log_level);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level.unwrap_or(LevelFilter::Debug), log_config, log_file);
    }

    if let Some(source) = &config_source {
        source.log();
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    if level.is_none() {
        log::warn!("Unknown log level {:?}, using debug", resolved.log_level);
    }
    log::debug!("Config: {:?}", file_config);
    log::info!("halfshell starting up. Cowabunga!");

    tui::run(resolved, started)
}
