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

//! Configuration management for the coin-tracker services

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration struct shared by the proxy server, the API client and the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// CoinGecko API base URL
  pub coingecko_base_url: String,

  /// Optional CoinGecko demo or pro key
  pub coingecko_api_key: Option<String>,

  /// CryptoCompare API base URL
  pub cryptocompare_base_url: String,

  /// Optional CryptoCompare key
  pub cryptocompare_api_key: Option<String>,

  /// Upstream rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed requests
  pub max_retries: u32,

  /// Address the proxy server binds to
  pub bind_addr: String,

  /// PostgreSQL connection string; the portfolio lives in memory without one
  pub database_url: Option<String>,

  /// Proxy base URL used by dashboard clients
  pub api_url: String,

  /// JSON file standing in for browser local storage
  pub store_path: PathBuf,
}

impl Config {
  /// Load configuration from environment variables (and `.env`, if present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build configuration from an arbitrary key lookup
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let rate_limit = parse_or(&lookup, "CT_RATE_LIMIT", crate::DEFAULT_RATE_LIMIT)?;
    let timeout_secs = parse_or(&lookup, "CT_TIMEOUT_SECS", 30)?;
    let max_retries = parse_or(&lookup, "CT_MAX_RETRIES", 2)?;

    if rate_limit == 0 {
      return Err(Error::Config("CT_RATE_LIMIT must be positive".to_string()));
    }

    let coingecko_api_key = non_empty("COINGECKO_API_KEY");
    let coingecko_base_url = non_empty("COINGECKO_BASE_URL").unwrap_or_else(|| {
      match &coingecko_api_key {
        Some(key) if key.starts_with("CG-") => crate::COINGECKO_PRO_BASE_URL.to_string(),
        _ => crate::COINGECKO_BASE_URL.to_string(),
      }
    });

    let store_path = match non_empty("CT_STORE_PATH") {
      Some(path) => PathBuf::from(path),
      None => default_store_path(non_empty("HOME")),
    };

    Ok(Config {
      coingecko_base_url,
      coingecko_api_key,
      cryptocompare_base_url: non_empty("CRYPTOCOMPARE_BASE_URL")
        .unwrap_or_else(|| crate::CRYPTOCOMPARE_BASE_URL.to_string()),
      cryptocompare_api_key: non_empty("CRYPTOCOMPARE_API_KEY"),
      rate_limit,
      timeout_secs,
      max_retries,
      bind_addr: non_empty("CT_BIND_ADDR").unwrap_or_else(|| crate::DEFAULT_BIND_ADDR.to_string()),
      database_url: non_empty("DATABASE_URL"),
      api_url: non_empty("CT_API_URL").unwrap_or_else(|| crate::DEFAULT_API_URL.to_string()),
      store_path,
    })
  }

  /// Configuration pointing every upstream at `base_url` (for testing)
  pub fn with_base_url(base_url: &str) -> Self {
    Config {
      coingecko_base_url: base_url.to_string(),
      coingecko_api_key: None,
      cryptocompare_base_url: base_url.to_string(),
      cryptocompare_api_key: None,
      rate_limit: 600,
      timeout_secs: 5,
      max_retries: 0,
      bind_addr: crate::DEFAULT_BIND_ADDR.to_string(),
      database_url: None,
      api_url: base_url.to_string(),
      store_path: default_store_path(None),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      coingecko_base_url: crate::COINGECKO_BASE_URL.to_string(),
      cryptocompare_base_url: crate::CRYPTOCOMPARE_BASE_URL.to_string(),
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      max_retries: 2,
      api_url: crate::DEFAULT_API_URL.to_string(),
      ..Config::with_base_url(crate::COINGECKO_BASE_URL)
    }
  }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  match lookup(key) {
    Some(raw) => raw.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", key))),
    None => Ok(default),
  }
}

fn default_store_path(home: Option<String>) -> PathBuf {
  let base = home.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
  base.join(".coin-tracker").join("storage.json")
}
