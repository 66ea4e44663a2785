use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Append-only log file writer.
#[derive(Clone)]
pub struct Logger {
    log_file_path: PathBuf,
    file_handle: Arc<Mutex<Option<fs::File>>>,
}

impl Logger {
    /// Opens `.devshowcase/logs/latest.log` under the working directory.
    pub fn new() -> std::io::Result<Self> {
        Self::in_dir(Path::new(".devshowcase").join("logs"))
    }

    /// Opens `latest.log` inside `logs_dir`, creating the directory if needed.
    pub fn in_dir(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;
        let log_file_path = logs_dir.join("latest.log");

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)?;

        Ok(Self {
            log_file_path,
            file_handle: Arc::new(Mutex::new(Some(file))),
        })
    }

    pub fn path(&self) -> &Path {
        &self.log_file_path
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let timestamp: DateTime<Local> = Local::now();
        let log_line = format!(
            "[{}] [{}] {}\n",
            timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            level,
            message
        );

        if let Ok(mut guard) = self.file_handle.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(log_line.as_bytes());
                let _ = file.flush();
            }
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_global_logger() -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new()?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| "Logger already initialized")?;
    Ok(())
}

pub fn get_global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = get_global_logger() {
        logger.log(level, message);
    }
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
