use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock};

#[cfg(not(target_arch = "wasm32"))]
use std::io::{Write, stdout};

use crate::DateTime;

// ---------------------------------------------------------- //
// ------------------ Global logging state ------------------ //
// ---------------------------------------------------------- //
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
static LOG_LEVEL_MODULES: OnceLock<RwLock<HashMap<String, LogLevel>>> = OnceLock::new();

// Kept apart from the instance so the hot check is a relaxed load
static LOGGER_IS_ON: AtomicBool = AtomicBool::new(false);
static LOGGER_INSTANCE: OnceLock<Logger> = OnceLock::new();

pub const LOG_DBG: bool = cfg!(feature = "log_dbg");
pub const LOG_TRC: bool = cfg!(feature = "log_trc");

// ---------------------------------------------------------- //
// ----------------- Log level definitions ------------------ //
// ---------------------------------------------------------- //

/// Describes possibles levels that can be logged.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub enum LogLevel {
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl From<u8> for LogLevel {
    fn from(value: u8) -> Self {
        match value {
            0..=1 => LogLevel::Error,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => f.write_str("ERROR"),
            LogLevel::Warning => f.write_str("WARNING"),
            LogLevel::Info => f.write_str("INFO"),
            LogLevel::Debug => f.write_str("DEBUG"),
            LogLevel::Trace => f.write_str("TRACE"),
        }
    }
}

// ---------------------------------------------------------- //
// ----------------------- Logging api ---------------------- //
// ---------------------------------------------------------- //

/// Enables logging at the given level. Output goes to stdout natively and to the
/// browser console on the web.
#[inline]
pub fn set_logger_on(log_level: LogLevel) {
    LOGGER_INSTANCE.get_or_init(Logger::new);
    LOGGER_IS_ON.store(true, Ordering::Relaxed);
    set_log_level(log_level, None);
}

/// Disables logging.
#[inline]
pub fn set_logger_off() {
    LOGGER_IS_ON.store(false, Ordering::Relaxed);
}

/// Checks if logging is enabled.
#[inline]
pub fn is_logger_on() -> bool {
    LOGGER_IS_ON.load(Ordering::Relaxed)
}

/// Returns the current log level for the module. If no module is specified, the global log level is returned.
/// A module-specific level applies to every module path containing the registered name.
#[inline]
pub fn log_level(module: Option<&str>) -> LogLevel {
    let default_level = LOG_LEVEL.load(Ordering::Relaxed).into();
    let module_levels = module_levels()
        .read()
        .unwrap_or_else(PoisonError::into_inner);

    match module {
        Some(module) if !module_levels.is_empty() => module_levels
            .iter()
            .find(|(key, _)| module.contains(key.as_str()))
            .map(|(_, v)| *v)
            .unwrap_or(default_level),
        _ => default_level,
    }
}

/// Sets log level to the specific target.
/// An optional module can be specified, in which case only that module's logging is changed.
/// Without a module, the global level is set and all module-specific levels are wiped.
#[inline]
pub fn set_log_level(log_level: LogLevel, module: Option<&str>) {
    let mut module_levels = module_levels()
        .write()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(module) = module {
        module_levels.insert(module.to_owned(), log_level);
    } else {
        LOG_LEVEL.store(log_level as u8, Ordering::Relaxed);
        module_levels.clear();
    }
}

/// Flushes buffered log output.
#[inline]
pub fn flush_logs() {
    if let Some(logger) = LOGGER_INSTANCE.get() {
        logger.flush_logs();
    }
}

fn module_levels() -> &'static RwLock<HashMap<String, LogLevel>> {
    LOG_LEVEL_MODULES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Builds a single log line. The trailing newline is included.
pub fn format_log_line(time: DateTime, level: LogLevel, module: &str, msg: &str) -> String {
    format!("{:?} | {} | {} | {}\n", time, level, module, msg)
}

// ---------------------------------------------------------- //
// --------------------- Logging macros --------------------- //
// ---------------------------------------------------------- //

/// The main logging function. Usually this should not be called directly, and logging macros should be used instead.
/// Does nothing if called before logger is initialized and turned on.
#[inline]
pub fn log(level: LogLevel, module: &str, msg: String) {
    if !LOGGER_IS_ON.load(Ordering::Relaxed) {
        return;
    }

    if let Some(logger) = LOGGER_INSTANCE.get() {
        logger.log(format_log_line(DateTime::now(), level, module, &msg));
    }
}

#[macro_export]
macro_rules! log_error {
    ($($items:expr_2021),+) => {
        let module = module_path!();
        if $crate::is_logger_on() && $crate::log_level(Some(module)) >= $crate::LogLevel::Error {
            $crate::log($crate::LogLevel::Error, module, format!($($items),+));
        }
    };
}
#[macro_export]
macro_rules! log_warn {
    ($($items:expr_2021),+) => {
        let module = module_path!();
        if $crate::is_logger_on() && $crate::log_level(Some(module)) >= $crate::LogLevel::Warning {
            $crate::log($crate::LogLevel::Warning, module, format!($($items),+));
        }
    };
}
#[macro_export]
macro_rules! log_info {
    ($($items:expr_2021),+) => {
        let module = module_path!();
        if $crate::is_logger_on() && $crate::log_level(Some(module)) >= $crate::LogLevel::Info {
            $crate::log($crate::LogLevel::Info, module, format!($($items),+));
        }
    };
}
#[macro_export]
macro_rules! log_dbg {
    ($($items:expr_2021),+) => {
        if $crate::LOG_DBG {
            let module = module_path!();
            if $crate::is_logger_on() && $crate::log_level(Some(module)) >= $crate::LogLevel::Debug {
                $crate::log($crate::LogLevel::Debug, module, format!($($items),+));
            }
        }
    };
}

#[macro_export]
macro_rules! log_trc {
    ($($items:expr_2021),+) => {
        if $crate::LOG_TRC {
            let module = module_path!();
            if $crate::is_logger_on() && $crate::log_level(Some(module)) >= $crate::LogLevel::Trace {
                $crate::log($crate::LogLevel::Trace, module, format!($($items),+));
            }
        }
    };
}

// ---------------------------------------------------------- //
// ----------------- Logger implementation ------------------ //
// ---------------------------------------------------------- //

pub struct Logger {}

#[cfg(not(target_arch = "wasm32"))]
impl Logger {
    pub fn new() -> Self {
        Self {}
    }

    pub fn log(&self, log_line: String) {
        let mut out = stdout().lock();
        // A closed stdout must not take the caller down with it
        let _ = out.write_all(log_line.as_bytes());
    }

    pub fn flush_logs(&self) {
        let _ = stdout().lock().flush();
    }
}

#[cfg(target_arch = "wasm32")]
impl Logger {
    pub fn new() -> Self {
        Self {}
    }

    pub fn log(&self, log_line: String) {
        web_sys::console::log_1(&log_line.trim_end().into());
    }

    pub fn flush_logs(&self) {}
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //
