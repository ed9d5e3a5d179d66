//! Logger setup for binaries and demos
//!
//! The library itself only emits records through the `log` facade; nothing is
//! printed until an application installs a logger, typically with
//! [`init_logging`] at the top of `main`.

use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one: this crate
/// at `info`, dependencies such as the image decoders at `warn`
pub const DEFAULT_FILTER: &str = "warn,swatchbook=info";

/// Filter for `--verbose` style output from this crate only
pub const VERBOSE_FILTER: &str = "warn,swatchbook=debug";

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. `"debug"` or
/// `"swatchbook=debug,image=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Configuration with an explicit filter, overriding `RUST_LOG`
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Debug output from this crate, extraction statistics included
    pub fn verbose() -> Self {
        Self::with_filter(VERBOSE_FILTER)
    }

    /// Effective filter: the explicit one, then `env_value` (normally
    /// `RUST_LOG`), then [`DEFAULT_FILTER`]. Blank values are skipped.
    pub fn resolve_filter(&self, env_value: Option<&str>) -> String {
        [self.env_filter.as_deref(), env_value]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|filter| !filter.is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string()
    }
}

static INIT: Once = Once::new();

/// Install the global logger once. Later calls are ignored, as is the case
/// where another logger was installed first.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init();

        if installed.is_ok() {
            log::debug!("logging initialized with filter '{filter}'");
        }
    });
}
