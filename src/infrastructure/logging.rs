use std::fs;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // One timestamped append-only log file per process start
    let file_layer = if config.file {
        let dir = Path::new(&config.dir);
        fs::create_dir_all(dir)?;
        let filename = format!("chatbot_logs_{}.log", Local::now().format("%Y%m%d_%H%M%S"));
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(filename))?;

        Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
    } else {
        None
    };

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
    Ok(())
}
