//! Transname - Translated Copies of Directory Trees
//!
//! This is the main entry point: it validates the two directories, loads the
//! translation model for the language pair once, and runs the copy workflow.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use transname::cli::Args;
use transname::config::Config;
use transname::model::LanguagePair;
use transname::translate::TranslatorFactory;
use transname::workflow::{validate_directories, Workflow};

const BANNER: &str = r#"
    _____
   |_   _| __ __ _ _ __  ___ _ __   __ _ _ __ ___   ___
     | || '__/ _` | '_ \/ __| '_ \ / _` | '_ ` _ \ / _ \
     | || | | (_| | | | \__ \ | | | (_| | | | | | |  __/
     |_||_|  \__,_|_| |_|___/_| |_|\__,_|_| |_| |_|\___|
"#;

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", BANNER);

    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    let (_guard, log_dir) = setup_logging(args.verbose)?;

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if Path::new("transname.toml").exists() {
                info!("Found transname.toml in current directory, loading...");
                Config::from_file("transname.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Validate the directories
    if let Err(e) = validate_directories(&args.source_directory, &args.target_directory) {
        println!("{}", e);
        return Ok(());
    }

    let pair = LanguagePair::new(&args.src_lang, &args.trg_lang)?;
    info!(
        "Loading translation model '{}' for {}",
        pair.model_id_for(&config.translate),
        pair
    );
    let translator = TranslatorFactory::load(&config.translate, &pair).await?;

    // Running from inside the source tree must not copy our own log
    let workflow = Workflow::new(translator, config.output.clone()).skip_dir(&log_dir);
    workflow
        .translate_filenames(&args.source_directory, &args.target_directory)
        .await?;

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<(WorkerGuard, PathBuf)> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".transname").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "transname.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer()
        .with_target(false);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("transname.log").display());

    Ok((guard, log_dir))
}
