//! # ct-models
//!
//! Response and request models shared by the coin-tracker proxy, its HTTP
//! client and the dashboard.
//!
//! Upstream records keep every field they do not model in an `extra` map so
//! the proxy can hand CoinGecko and CryptoCompare payloads back unchanged.

#![warn(clippy::all)]

pub mod chart;
pub mod coin;
pub mod common;
pub mod news;
pub mod portfolio;

pub use chart::*;
pub use coin::*;
pub use common::*;
pub use news::*;
pub use portfolio::*;

/// Quote currency key used by CoinGecko maps
pub const USD: &str = "usd";
