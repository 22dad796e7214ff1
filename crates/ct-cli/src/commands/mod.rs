pub mod alerts;
pub mod coin;
pub mod dashboard;
pub mod markets;
pub mod news;
pub mod portfolio;
pub mod serve;
pub mod settings;
pub mod watchlist;

use anyhow::{Context, Result};
use ct_client::ProxyClient;
use ct_core::Config;
use ct_dashboard::LocalStore;

/// Client for the proxy at `CT_API_URL`
pub(crate) fn proxy(config: &Config) -> Result<ProxyClient> {
  ProxyClient::new(config).context("Failed to create proxy client")
}

/// Local store at `CT_STORE_PATH`
pub(crate) fn open_store(config: &Config) -> Result<LocalStore> {
  LocalStore::open(&config.store_path)
    .with_context(|| format!("Failed to open local store at {}", config.store_path.display()))
}

/// `Bitcoin (BTC)`
pub(crate) fn coin_label(name: &str, symbol: &str) -> String {
  format!("{} ({})", name, symbol.to_uppercase())
}
