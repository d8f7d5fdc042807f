//! Logger setup for the simulation harness.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `verbose` enables debug output, which includes every waypoint choice.
/// `RUST_LOG` still overrides the default filter.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // A logger may already be installed by an earlier test.
    let _ = builder.try_init();
}
