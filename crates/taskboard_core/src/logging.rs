//! Rolling file logs for the core, started at most once per process.
//!
//! # Invariants
//! - A second init with identical settings succeeds without effect; any
//!   other second init is rejected.
//! - Events carry metadata only; user-entered text is never logged.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::str::FromStr;

const LOG_BASENAME: &str = "taskboard";
const ROTATION: Criterion = Criterion::Size(8 * 1024 * 1024);
const RETAINED_FILES: usize = 3;
const PANIC_SUMMARY_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        let level = level.trim().to_ascii_lowercase();
        let name = if level == "warning" { "warn" } else { level.as_str() };
        let level = match LevelFilter::from_str(name) {
            Ok(LevelFilter::Off) | Err(_) => {
                return Err(format!(
                    "unsupported log level `{level}`; expected trace|debug|info|warn|error"
                ))
            }
            Ok(filter) => filter,
        };

        let dir = PathBuf::from(log_dir.trim());
        if dir.as_os_str().is_empty() {
            return Err("log_dir cannot be empty".to_string());
        }
        if !dir.is_absolute() {
            return Err(format!(
                "log_dir must be an absolute path, got `{}`",
                dir.display()
            ));
        }

        Ok(Self { level, dir })
    }

    fn level_name(&self) -> &'static str {
        match self.level {
            LevelFilter::Trace => "trace",
            LevelFilter::Debug => "debug",
            LevelFilter::Info => "info",
            LevelFilter::Warn => "warn",
            LevelFilter::Error | LevelFilter::Off => "error",
        }
    }

    fn conflict_with(&self, requested: &Self) -> Option<String> {
        if self.dir != requested.dir {
            Some(format!(
                "logging already active at `{}`; refusing to switch to `{}`",
                self.dir.display(),
                requested.dir.display()
            ))
        } else if self.level != requested.level {
            Some(format!(
                "logging already active at level `{}`; refusing to switch to `{}`",
                self.level_name(),
                requested.level_name()
            ))
        } else {
            None
        }
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` (`trace|debug|info|warn|error`) under the
/// absolute directory `log_dir`. Errors are human-readable.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogSettings::parse(level, log_dir)?;
    let active = match ACTIVE.get() {
        Some(active) => active,
        None => ACTIVE.get_or_try_init(|| start(requested.clone()))?,
    };
    // Also covers a concurrent first init that won with other settings.
    match active.settings.conflict_with(&requested) {
        Some(message) => Err(message),
        None => Ok(()),
    }
}

/// `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.settings.level_name(), active.settings.dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(settings: LogSettings) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&settings.dir)
        .map_err(|err| format!("cannot create `{}`: {err}", settings.dir.display()))?;

    let spec = LogSpecification::builder().default(settings.level).build();
    let handle = Logger::with(spec)
        .log_to_file(
            FileSpec::default()
                .directory(settings.dir.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(ROTATION, Naming::Numbers, Cleanup::KeepLogFiles(RETAINED_FILES))
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger backend failed to start: {err}"))?;

    if PANIC_HOOK.set(()).is_ok() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let location = panic_info.location().map_or_else(
                || "unknown".to_string(),
                |loc| format!("{}:{}", loc.file(), loc.line()),
            );
            let payload = panic_info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                .unwrap_or("non-string panic payload");
            error!(
                "event=panic_captured module=core status=error location={location} payload={}",
                single_line_summary(message, PANIC_SUMMARY_MAX_CHARS)
            );
            previous(panic_info);
        }));
    }

    info!(
        "event=core_init module=core status=ok platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        settings.level_name(),
        settings.dir.display()
    );

    Ok(ActiveLogger {
        settings,
        _handle: handle,
    })
}

/// Flattens newlines and caps length at `max_chars`, appending `...` when cut.
fn single_line_summary(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c });
    let mut summary: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        summary.push_str("...");
    }
    summary
}
