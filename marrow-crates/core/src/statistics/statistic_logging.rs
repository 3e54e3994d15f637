use std::fmt::Display;
use std::sync::OnceLock;

use log::debug;

/// Where statistics go once [`configure_statistic_logging`] has been called.
#[derive(Debug, Clone, Copy)]
struct StatisticOptions {
    /// Printed in front of every statistic: `{prefix} {name}={value}`
    statistic_prefix: &'static str,
    /// A closing line printed after a block of statistics
    after_statistics: Option<&'static str>,
}

static STATISTIC_OPTIONS: OnceLock<StatisticOptions> = OnceLock::new();

/// Enables printing of statistics to standard output with the given prefix and optional closing
/// line. Only the first call has an effect.
pub fn configure_statistic_logging(prefix: &'static str, after: Option<&'static str>) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| StatisticOptions {
        statistic_prefix: prefix,
        after_statistics: after,
    });
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

/// Logs the statistic `name` with value `value`. It always goes to the `debug` log; it is printed
/// as `PREFIX name=value` when statistic logging is configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    debug!("{name}={value}");
    if let Some(options) = STATISTIC_OPTIONS.get() {
        println!("{} {name}={value}", options.statistic_prefix);
    }
}

/// Prints the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    if let Some(after) = STATISTIC_OPTIONS
        .get()
        .and_then(|options| options.after_statistics)
    {
        println!("{after}");
    }
}
