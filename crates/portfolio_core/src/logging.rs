//! Logging bootstrap for render runs.
//!
//! # Responsibility
//! - Start one process-wide logger writing to stderr or to a rotating file
//!   set under a directory.
//! - Record panics as structured events before the default hook runs.
//!
//! # Invariants
//! - Repeating `init_logging` with the same level and target is a no-op.
//! - A second call with a different level or target fails and leaves the
//!   active logger untouched.
//! - Setup failures are returned, never panicked.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

const LOG_BASENAME: &str = "portfolio";
const ROTATE_AT_BYTES: u64 = 2 * 1024 * 1024;
const KEEP_ROTATED: usize = 4;
const PANIC_SUMMARY_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Verbosity accepted by [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(LoggingError::UnknownLevel(other.to_string())),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Rotating files under an absolute directory.
    Directory(PathBuf),
}

impl LogTarget {
    /// `None` selects stderr; a directory must be non-blank and absolute.
    pub fn from_dir(dir: Option<&str>) -> Result<Self, LoggingError> {
        let Some(raw) = dir else {
            return Ok(Self::Stderr);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoggingError::BadDirectory("log directory is blank".to_string()));
        }
        let path = PathBuf::from(trimmed);
        if path.is_relative() {
            return Err(LoggingError::BadDirectory(format!(
                "log directory must be absolute: {trimmed}"
            )));
        }
        Ok(Self::Directory(path))
    }
}

impl Display for LogTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => f.write_str("stderr"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Failure while configuring the logger.
#[derive(Debug)]
pub enum LoggingError {
    UnknownLevel(String),
    BadDirectory(String),
    Start(flexi_logger::FlexiLoggerError),
    CreateDirectory {
        path: PathBuf,
        error: std::io::Error,
    },
    /// Logger already running with a different setup.
    Conflict {
        active: String,
        requested: String,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(level) => write!(
                f,
                "unknown log level `{level}` (use off|error|warn|info|debug|trace)"
            ),
            Self::BadDirectory(message) => f.write_str(message),
            Self::Start(err) => write!(f, "logger failed to start: {err}"),
            Self::CreateDirectory { path, error } => {
                write!(f, "cannot create log directory {}: {error}", path.display())
            }
            Self::Conflict { active, requested } => write!(
                f,
                "logger already running as {active}; cannot switch to {requested}"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Start(err) => Some(err),
            Self::CreateDirectory { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for LoggingError {
    fn from(value: flexi_logger::FlexiLoggerError) -> Self {
        Self::Start(value)
    }
}

struct ActiveLogger {
    level: LogLevel,
    target: LogTarget,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn describe(level: LogLevel, target: &LogTarget) -> String {
        format!("level={level} target={target}")
    }
}

/// Starts the process logger, or confirms the running one matches.
pub fn init_logging(level: LogLevel, target: LogTarget) -> Result<(), LoggingError> {
    let active = ACTIVE.get_or_try_init(|| {
        let handle = start(level, &target)?;
        install_panic_hook();
        info!(
            "event=logging_init module=logging status=ok level={} target={} version={}",
            level,
            target,
            env!("CARGO_PKG_VERSION")
        );
        Ok::<_, LoggingError>(ActiveLogger {
            level,
            target: target.clone(),
            _handle: handle,
        })
    })?;

    if active.level != level || active.target != target {
        return Err(LoggingError::Conflict {
            active: ActiveLogger::describe(active.level, &active.target),
            requested: ActiveLogger::describe(level, &target),
        });
    }
    Ok(())
}

/// Level and target of the running logger, if any.
pub fn logging_status() -> Option<(LogLevel, LogTarget)> {
    ACTIVE.get().map(|active| (active.level, active.target.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

fn start(level: LogLevel, target: &LogTarget) -> Result<LoggerHandle, LoggingError> {
    let logger = Logger::try_with_str(level.as_str())?;
    let logger = match target {
        LogTarget::Stderr => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format),
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir).map_err(|error| LoggingError::CreateDirectory {
                path: dir.clone(),
                error,
            })?;
            let spec = FileSpec::default()
                .directory(dir.as_path())
                .basename(LOG_BASENAME);
            logger
                .log_to_file(spec)
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEEP_ROTATED),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
    };
    Ok(logger.start()?)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }
    let chained = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let at = panic
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        let payload = panic
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string payload".to_string());
        error!(
            "event=panic module=logging status=error at={} payload={}",
            at,
            sanitize_message(&payload, PANIC_SUMMARY_CHARS)
        );
        chained(panic);
    }));
}

/// Flattens line breaks and truncates so one value fits one log line.
pub fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\r', '\n'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut short: String = flat.chars().take(max_chars).collect();
    short.push_str("...");
    short
}
