use std::io::IsTerminal;

use tracing::{info, Level};

use crate::error::{Error, Result};
use crate::models::LogLevel;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            // tracing has no level above ERROR
            LogLevel::Error | LogLevel::Critical => Level::ERROR,
        }
    }
}

/// Install the process-wide subscriber: timestamped lines on stderr
pub fn init_logging(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| Error::Config(format!("could not install logger: {}", err)))?;

    info!("Using logging level: {}; use --loglevel to change", level);
    Ok(())
}
