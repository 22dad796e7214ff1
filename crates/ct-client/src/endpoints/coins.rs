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

//! CoinGecko market data endpoints: listings, coin detail and price history

use super::{impl_endpoint_base, EndpointBase, UpstreamRateLimiter};
use crate::transport::{Params, Transport};
use ct_core::{Result, Upstream};
use ct_models::{CoinDetail, CoinMarket, MarketChart};
use std::sync::Arc;
use tracing::instrument;

/// Options for one page of `/coins/markets`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketsQuery {
  /// 1-based page number
  pub page: u32,
  /// Coins per page
  pub per_page: u32,
  /// Include `sparkline_in_7d`
  pub sparkline: bool,
}

impl Default for MarketsQuery {
  fn default() -> Self {
    Self { page: 1, per_page: ct_core::COINS_PER_PAGE, sparkline: true }
  }
}

impl MarketsQuery {
  /// Default options for one page; page 0 is treated as page 1
  pub fn page(page: u32) -> Self {
    Self { page: page.max(1), ..Self::default() }
  }

  fn params(&self) -> Params {
    vec![
      ("vs_currency", ct_core::VS_CURRENCY.to_string()),
      ("order", "market_cap_desc".to_string()),
      ("per_page", self.per_page.to_string()),
      ("page", self.page.to_string()),
      ("sparkline", self.sparkline.to_string()),
    ]
  }
}

/// Coin listing, detail and history endpoints
pub struct CoinEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<UpstreamRateLimiter>,
}

impl CoinEndpoints {
  /// Create a new coin endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<UpstreamRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Top coins by market cap, 50 per page, with 7 day sparklines
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use ct_client::CoinTrackerClient;
  /// # async fn run(client: CoinTrackerClient) -> ct_core::Result<()> {
  /// let coins = client.coins().markets(1).await?;
  /// for coin in &coins {
  ///     println!("{}: {:?}", coin.name, coin.current_price);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn markets(&self, page: u32) -> Result<Vec<CoinMarket>> {
    self.markets_with(&MarketsQuery::page(page)).await
  }

  /// Listing page with explicit options
  #[instrument(skip(self))]
  pub async fn markets_with(&self, query: &MarketsQuery) -> Result<Vec<CoinMarket>> {
    self.wait_for_rate_limit().await?;
    self.transport.get(Upstream::CoinGecko, &["coins", "markets"], query.params()).await
  }

  /// Extended metadata and market statistics for one coin
  #[instrument(skip(self))]
  pub async fn detail(&self, id: &str) -> Result<CoinDetail> {
    self.wait_for_rate_limit().await?;
    self.transport.get(Upstream::CoinGecko, &["coins", id], Vec::new()).await
  }

  /// Historical prices, market caps and volumes over the last `days` days
  #[instrument(skip(self))]
  pub async fn market_chart(&self, id: &str, days: u32) -> Result<MarketChart> {
    self.wait_for_rate_limit().await?;

    let params = vec![
      ("vs_currency", ct_core::VS_CURRENCY.to_string()),
      ("days", days.max(1).to_string()),
    ];

    self.transport.get(Upstream::CoinGecko, &["coins", id, "market_chart"], params).await
  }
}

impl_endpoint_base!(CoinEndpoints);
