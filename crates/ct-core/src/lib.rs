/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # ct-core
//!
//! Shared configuration, error types and constants for the coin-tracker crates.

pub mod config;
pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};

/// The upstream HTTP services the tracker talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
  /// CoinGecko market data API
  CoinGecko,
  /// CryptoCompare news API
  CryptoCompare,
  /// The coin-tracker proxy itself, as seen by dashboard clients
  Proxy,
}

impl std::fmt::Display for Upstream {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Upstream::CoinGecko => write!(f, "coingecko"),
      Upstream::CryptoCompare => write!(f, "cryptocompare"),
      Upstream::Proxy => write!(f, "proxy"),
    }
  }
}

/// Base URL for the public CoinGecko API
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Base URL for the CoinGecko pro API, used when the key carries the `CG-` prefix
pub const COINGECKO_PRO_BASE_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Base URL for the CryptoCompare min-api
pub const CRYPTOCOMPARE_BASE_URL: &str = "https://min-api.cryptocompare.com";

/// Where dashboard clients find the proxy by default
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default listen address for the proxy server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Portfolio entries are keyed by this user; there is no authentication.
pub const DEFAULT_USER_ID: &str = "user1";

/// Quote currency for every market request
pub const VS_CURRENCY: &str = "usd";

/// Coins per page of the market listing
pub const COINS_PER_PAGE: u32 = 50;

/// Days of history when the caller does not ask for a range
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// News category used for the generic feed and for the coin-news fallback
pub const DEFAULT_NEWS_CATEGORY: &str = "Crypto";

/// News category that is always excluded
pub const EXCLUDED_NEWS_CATEGORY: &str = "Sponsored";

/// Refresh interval for market, coin, portfolio and watchlist pages
pub const REFRESH_INTERVAL_SECS: u64 = 30;

/// Refresh interval for the news page
pub const NEWS_REFRESH_INTERVAL_SECS: u64 = 60;

/// API rate limits
pub const DEFAULT_RATE_LIMIT: u32 = 30; // requests per minute, CoinGecko free tier
