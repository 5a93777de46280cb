//! Logging bootstrap for the `alumnos` service.
//!
//! Records always go to stderr. With a log directory they are also written to
//! `alumnos.log` there, rotated by size. The backend is started once per
//! process; asking again for the same settings is a no-op, asking for
//! different ones is an error.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, LogSpecification, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "alumnos";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    dir: Option<PathBuf>,
}

impl LogSettings {
    fn parse(level: &str, log_dir: Option<&str>) -> Result<Self, String> {
        let level = level.trim();
        let level = level.parse::<LevelFilter>().map_err(|_| {
            format!("unsupported log level `{level}`; expected off|error|warn|info|debug|trace")
        })?;

        let dir = match log_dir.map(str::trim) {
            None => None,
            Some("") => return Err("log directory cannot be empty".to_string()),
            Some(dir) if !Path::new(dir).is_absolute() => {
                return Err(format!("log directory must be absolute, got `{dir}`"));
            }
            Some(dir) => Some(PathBuf::from(dir)),
        };

        Ok(Self { level, dir })
    }

    fn start(&self) -> Result<LoggerHandle, String> {
        let logger = Logger::with(LogSpecification::builder().default(self.level).build());

        let logger = match &self.dir {
            None => logger.log_to_stderr(),
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|err| {
                    format!("failed to create log directory `{}`: {err}", dir.display())
                })?;
                logger
                    .log_to_file(
                        FileSpec::default()
                            .directory(dir.as_path())
                            .basename(LOG_FILE_BASENAME),
                    )
                    .rotate(
                        Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                        Naming::Numbers,
                        Cleanup::KeepLogFiles(MAX_LOG_FILES),
                    )
                    .append()
                    .duplicate_to_stderr(Duplicate::All)
                    .format_for_files(flexi_logger::detailed_format)
            }
        };

        logger
            .format_for_stderr(flexi_logger::default_format)
            .write_mode(WriteMode::BufferAndFlush)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))
    }
}

impl Display for LogSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.dir {
            Some(dir) => write!(f, "level={} log_dir={}", self.level, dir.display()),
            None => write!(f, "level={} log_dir=-", self.level),
        }
    }
}

/// Starts the process logger.
///
/// # Errors
/// - `level` is not one of `off|error|warn|info|debug|trace`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - A logger is already running with different settings.
pub fn init_logging(level: &str, log_dir: Option<&str>) -> Result<(), String> {
    let requested = LogSettings::parse(level, log_dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| -> Result<ActiveLogger, String> {
        let handle = requested.start()?;
        info!(
            "event=logging_init module=core status=ok {} version={}",
            requested,
            env!("CARGO_PKG_VERSION")
        );
        Ok(ActiveLogger {
            settings: requested.clone(),
            _handle: handle,
        })
    })?;

    if active.settings != requested {
        return Err(format!(
            "logging already running with {}; refusing to switch to {}",
            active.settings, requested
        ));
    }

    Ok(())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
