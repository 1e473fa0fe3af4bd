//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ADPATH_LOG";

/// Installs a stderr subscriber. `ADPATH_LOG` wins over the `-v` count.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}
