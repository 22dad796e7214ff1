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

use ct_client::CoinTrackerClient;
use ct_core::Config;
use ct_database_postgres::{DatabaseContext, InMemoryPortfolioRepository, PortfolioRepository};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ServerError;

/// Shared by every worker
#[derive(Clone)]
pub struct AppState {
  pub client: CoinTrackerClient,
  pub portfolio: Arc<dyn PortfolioRepository>,
  /// Owner of every portfolio entry; there is no authentication
  pub user_id: String,
}

impl AppState {
  pub fn new(client: CoinTrackerClient, portfolio: Arc<dyn PortfolioRepository>) -> Self {
    Self { client, portfolio, user_id: ct_core::DEFAULT_USER_ID.to_string() }
  }

  /// Build the upstream client and pick the portfolio store.
  ///
  /// PostgreSQL is used when `DATABASE_URL` is set and `in_memory` is false;
  /// its migrations run before the server starts.
  pub async fn from_config(config: &Config, in_memory: bool) -> Result<Self, ServerError> {
    let client = CoinTrackerClient::new(config.clone())?;

    let portfolio: Arc<dyn PortfolioRepository> = match (&config.database_url, in_memory) {
      (Some(url), false) => {
        let context = DatabaseContext::new(url)?;
        context.migrate().await?;
        Arc::new(context.portfolio_repository())
      }
      (None, false) => {
        warn!("DATABASE_URL not set, portfolio entries will be kept in memory");
        Arc::new(InMemoryPortfolioRepository::new())
      }
      (_, true) => Arc::new(InMemoryPortfolioRepository::new()),
    };
    info!("Portfolio store: {}", portfolio.backend());

    Ok(Self::new(client, portfolio))
  }
}

impl std::fmt::Debug for AppState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppState")
      .field("client", &self.client)
      .field("portfolio", &self.portfolio.backend())
      .field("user_id", &self.user_id)
      .finish()
  }
}
