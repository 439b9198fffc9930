//! Build-time configuration of the console
//!
//! `ADMIN_CONSOLE_CONFIG` may hold a full TOML document and `ADMIN_API_BASE`
//! a backend origin; both are read when the bundle is compiled.

use contracts::shared::config::{load_config, ConsoleConfig};

pub fn console_config() -> ConsoleConfig {
    let config = match load_config(option_env!("ADMIN_CONSOLE_CONFIG")) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid ADMIN_CONSOLE_CONFIG, using defaults: {:#}", e);
            ConsoleConfig::default()
        }
    };

    match option_env!("ADMIN_API_BASE") {
        Some(base_url) => config.with_base_url(base_url),
        None => config,
    }
}
