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

//! # ct-dashboard
//!
//! Client-side logic of the coin-tracker dashboard, independent of how it is
//! rendered: number formatting, pagination, sparklines, market search and
//! sort, portfolio valuation, and the locally stored watchlist, price alerts
//! and settings.

pub mod alerts;
pub mod coin;
pub mod error;
pub mod format;
pub mod history;
pub mod markets;
pub mod news;
pub mod pagination;
pub mod portfolio;
pub mod settings;
pub mod sparkline;
pub mod store;
pub mod watchlist;

pub use alerts::{AlertBook, AlertKind, AlertStats, NewAlert, PriceAlert, TriggeredAlert};
pub use error::{DashboardError, Result};
pub use format::{format_compact_currency, format_percentage, format_price, format_signed_percentage, format_time_ago};
pub use history::{ChartSummary, TimePeriod};
pub use markets::{MarketStats, SortKey};
pub use news::NewsLayout;
pub use pagination::{PageItem, Pagination};
pub use portfolio::{BestPerformer, Holding, PortfolioSummary, Valuation};
pub use settings::Settings;
pub use sparkline::{SparklineBars, Trend};
pub use store::LocalStore;
pub use watchlist::{Watchlist, WatchlistStats};
