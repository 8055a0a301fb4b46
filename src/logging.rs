use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "KIRA_FLEISS_LOG";

static INIT: Once = Once::new();

/// Installs the stderr subscriber. `KIRA_FLEISS_LOG` overrides the default
/// filter (`kira_fleisskappa=info`, or `warn` when `quiet`). Safe to call twice.
pub fn init_tracing(quiet: bool) {
    INIT.call_once(|| {
        let default = if quiet {
            "kira_fleisskappa=warn"
        } else {
            "kira_fleisskappa=info"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .try_init();
    });
}
