//! Writes statistics as `{prefix} {name}={value}` lines, optionally followed by a closing line.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;

use convert_case::Case;
use convert_case::Casing;

struct StatisticOptions {
    prefix: &'static str,
    /// Printed once after a block of statistics
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .field("writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: Mutex<Option<StatisticOptions>> = Mutex::new(None);

/// Enables the logging of statistics.
///
/// Every statistic is written as `{prefix} {name}={value}` to `writer` (stdout if [`None`]), where
/// the name is converted to `casing` if one is given. Calling this again replaces the previous
/// configuration.
pub fn configure_statistic_logging(
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let options = StatisticOptions {
        prefix,
        postfix,
        casing,
        writer: writer.unwrap_or_else(|| Box::new(stdout())),
    };

    if let Ok(mut guard) = STATISTIC_OPTIONS.lock() {
        *guard = Some(options);
    }
}

/// Logs the statistic `name` with `value`; does nothing unless
/// [`configure_statistic_logging`] has been called.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Ok(mut guard) = STATISTIC_OPTIONS.lock() else {
        return;
    };
    let Some(options) = guard.as_mut() else {
        return;
    };

    let name = match options.casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    let prefix = options.prefix;
    let _ = writeln!(options.writer, "{prefix} {name}={value}");
}

/// Logs the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    let Ok(mut guard) = STATISTIC_OPTIONS.lock() else {
        return;
    };
    if let Some(options) = guard.as_mut() {
        if let Some(postfix) = options.postfix {
            let _ = writeln!(options.writer, "{postfix}");
        }
    }
}

/// Returns whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
