//! Command handler modules for busticket.
//!
//! Shared utilities used by multiple command paths live here.
//! The interactive console lives in [`console`].

pub mod console;

use anyhow::{Context, Result};
use bt_config::{LoadedConfig, TicketingConfig, UnusedKeyPolicy};
use tracing::warn;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// `--config` values win; otherwise `$BUSTICKET_CONFIG` (comma-separated);
/// otherwise no layers, which means built-in defaults.
pub fn resolve_config_paths(cli_paths: Vec<String>) -> Vec<String> {
    if !cli_paths.is_empty() {
        return cli_paths;
    }
    std::env::var(bt_config::ENV_CONFIG_PATHS)
        .map(|raw| bt_config::split_path_list(&raw))
        .unwrap_or_default()
}

/// Load, check for unused keys, and build the typed ticketing view.
pub fn load_config(paths: &[String], strict: bool) -> Result<(LoadedConfig, TicketingConfig)> {
    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    let loaded = bt_config::load_layered_yaml(&path_refs)?;

    let policy = if strict {
        UnusedKeyPolicy::Fail
    } else {
        UnusedKeyPolicy::Warn
    };
    let report = bt_config::report_unused_keys(&loaded.config_json, policy)?;
    if !report.is_clean() {
        warn!(
            unused_leaf_keys = report.unused_leaf_pointers.len(),
            "CONFIG_UNUSED_KEYS"
        );
        for p in report.unused_leaf_pointers.iter().take(50) {
            warn!(unused = %p, "unused config key");
        }
    }

    let ticketing = loaded
        .ticketing()
        .context("config does not describe a usable ticket counter")?;
    Ok((loaded, ticketing))
}

// ---------------------------------------------------------------------------
// One-shot commands
// ---------------------------------------------------------------------------

pub fn print_fares(cfg: &TicketingConfig) -> Result<()> {
    for label in cfg.fares.menu_labels(&cfg.receipt.currency_symbol) {
        println!("{label}");
    }
    Ok(())
}

pub fn print_config_hash(loaded: &LoadedConfig) -> Result<()> {
    println!("config_hash={}", loaded.config_hash);
    println!("{}", loaded.canonical_json);
    Ok(())
}
