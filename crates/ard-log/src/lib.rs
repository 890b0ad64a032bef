use std::path::PathBuf;

use chrono::{Datelike, Timelike};
// Re-export logging functions for convenience.
pub use log::*;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use thiserror::Error;

/// How logging should be set up for a tool run.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Logs below this level are discarded.
    pub filter: LevelFilter,
    /// Folder to write a timestamped log file into. Console only when `None`.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("unable to open log file: {0}")]
    File(std::io::Error),
    #[error("invalid logging configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("logger already initialized")]
    AlreadyInitialized(#[from] SetLoggerError),
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: LevelFilter::Info,
            log_dir: None,
        }
    }
}

/// Initializes logging. Should be called before any other logging functions.
pub fn init(config: &LogConfig) -> Result<(), LogInitError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if let Some(dir) = &config.log_dir {
        // Name of the file is based on the current time.
        let now = chrono::Utc::now();
        let mut path = dir.clone();
        path.push(format!(
            "{} {} {} {} {} {}.txt",
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second()
        ));

        let log_file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} - {l} - {m}{n}")))
            .build(path)
            .map_err(LogInitError::File)?;

        builder = builder.appender(Appender::builder().build("log_file", Box::new(log_file)));
        root = root.appender("log_file");
    }

    let config = builder.build(root.build(config.filter))?;
    log4rs::init_config(config)?;

    log_panics::init();

    Ok(())
}
