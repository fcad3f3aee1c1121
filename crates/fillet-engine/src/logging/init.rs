use std::sync::atomic::{AtomicBool, Ordering};

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "warn",
/// "fillet_engine=debug"). When unset, `RUST_LOG` is consulted, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with their module path.
    pub module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            module_path: false,
        }
    }
}

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Installs the global `env_logger` backend.
///
/// Safe to call repeatedly; returns `true` only for the call that installed
/// the logger. Returns `false` as well when another logger was installed by
/// someone else first.
pub fn init_logging(config: LoggingConfig) -> bool {
    if INSTALLED.swap(true, Ordering::AcqRel) {
        return false;
    }

    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(filter) = config.env_filter.as_deref() {
        builder.parse_filters(filter);
    }
    builder
        .write_style(config.write_style)
        .format_module_path(config.module_path)
        .format_target(false);

    match builder.try_init() {
        Ok(()) => {
            log::debug!("logging initialized");
            true
        }
        Err(_) => false,
    }
}
