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

use crate::endpoints::{coins::CoinEndpoints, news::NewsEndpoints, UpstreamRateLimiter};
use crate::transport::Transport;
use ct_core::{Config, Result};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Upstream market data client
///
/// Gives access to the CoinGecko and CryptoCompare endpoints through endpoint
/// groups that share one transport and one rate limiter.
///
/// # Examples
///
/// ```rust,no_run
/// use ct_client::CoinTrackerClient;
/// use ct_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinTrackerClient::new(Config::from_env()?)?;
///
///     let bitcoin = client.coins().detail("bitcoin").await?;
///     println!("Bitcoin: {:?}", bitcoin.current_price_usd());
///
///     let news = client.news().for_coin("bitcoin").await?;
///     println!("{} articles", news.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinTrackerClient {
  rate_limiter: Arc<UpstreamRateLimiter>,
  transport: Arc<Transport>,
}

impl CoinTrackerClient {
  /// Create a new client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(config.rate_limit)
      .or_else(|| NonZeroU32::new(ct_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    let quota = Quota::per_minute(rate_limit_value);
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter })
  }

  /// Coin listing, detail and price history
  pub fn coins(&self) -> CoinEndpoints {
    CoinEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Category and coin news
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }
}

impl std::fmt::Debug for CoinTrackerClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinTrackerClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
