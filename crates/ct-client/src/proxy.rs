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

//! Client for the coin-tracker proxy API, used by dashboard front ends

use crate::transport::Transport;
use ct_core::{Config, Result, Upstream};
use ct_models::{CoinDetail, CoinMarket, MarketChart, NewPortfolioEntry, NewsArticle, PortfolioEntry};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Talks to the `/api` routes of a running proxy
#[derive(Debug, Clone)]
pub struct ProxyClient {
  transport: Arc<Transport>,
}

impl ProxyClient {
  /// Client for the proxy at `config.api_url`
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(config)?) })
  }

  /// `GET /coins?page=N`
  #[instrument(skip(self))]
  pub async fn coins(&self, page: u32) -> Result<Vec<CoinMarket>> {
    self.transport.get(Upstream::Proxy, &["coins"], vec![("page", page.max(1).to_string())]).await
  }

  /// `GET /coin/{id}`
  #[instrument(skip(self))]
  pub async fn coin(&self, id: &str) -> Result<CoinDetail> {
    self.transport.get(Upstream::Proxy, &["coin", id], Vec::new()).await
  }

  /// `GET /coin/{id}/history?days=D`
  #[instrument(skip(self))]
  pub async fn history(&self, id: &str, days: u32) -> Result<MarketChart> {
    self.transport.get(Upstream::Proxy, &["coin", id, "history"], vec![("days", days.to_string())]).await
  }

  /// `GET /coin/{id}/news`
  #[instrument(skip(self))]
  pub async fn coin_news(&self, id: &str) -> Result<Vec<NewsArticle>> {
    self.transport.get(Upstream::Proxy, &["coin", id, "news"], Vec::new()).await
  }

  /// `GET /news?category=C`
  #[instrument(skip(self))]
  pub async fn news(&self, category: &str) -> Result<Vec<NewsArticle>> {
    self.transport.get(Upstream::Proxy, &["news"], vec![("category", category.to_string())]).await
  }

  /// `GET /portfolio`
  #[instrument(skip(self))]
  pub async fn portfolio(&self) -> Result<Vec<PortfolioEntry>> {
    self.transport.get(Upstream::Proxy, &["portfolio"], Vec::new()).await
  }

  /// `POST /portfolio`
  #[instrument(skip(self))]
  pub async fn add_to_portfolio(&self, entry: &NewPortfolioEntry) -> Result<PortfolioEntry> {
    self.transport.post(Upstream::Proxy, &["portfolio"], entry).await
  }

  /// Fetch details for several coins concurrently
  ///
  /// Each slot is `None` when that coin could not be fetched; one failure does
  /// not fail the batch.
  pub async fn coins_by_id(&self, ids: &[String]) -> Vec<Option<CoinDetail>> {
    let requests = ids.iter().map(|id| async move {
      match self.coin(id).await {
        Ok(detail) => Some(detail),
        Err(e) => {
          warn!("Error fetching coin {}: {}", id, e);
          None
        }
      }
    });
    join_all(requests).await
  }
}
