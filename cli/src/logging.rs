//! Tracing / logging initialisation.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose output `--verbose` raises to debug.
const VERBOSE_TARGETS: [&str; 2] = ["chainsig", "chainsig_core"];

/// Logging settings gathered from the global CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `--log-level` / `CHAINSIG_LOG`; `None` means warn
    pub level: Option<String>,
    /// `--verbose`
    pub verbose: bool,
    /// `--log-json` / `CHAINSIG_LOG_JSON`
    pub json: bool,
}

impl LogConfig {
    pub fn from_cli(level: &str, json: bool, verbose: bool) -> Self {
        Self {
            level: Some(level.to_string()),
            verbose,
            json,
        }
    }

    /// `EnvFilter` directives, e.g. `warn,chainsig=debug,chainsig_core=debug`.
    pub fn directives(&self) -> String {
        let mut directives = self.level.clone().unwrap_or_else(|| "warn".to_string());
        if self.verbose {
            for target in VERBOSE_TARGETS {
                directives.push_str(&format!(",{target}=debug"));
            }
        }
        directives
    }
}

/// Initialise tracing with the given log config.
/// Should be called once at startup. Logs go to stderr.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_new(config.directives()).unwrap_or_else(|_| EnvFilter::new("warn"));

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
