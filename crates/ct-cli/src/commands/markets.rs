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

use anyhow::Result;
use clap::Args;
use ct_client::ProxyClient;
use ct_core::Config;
use ct_dashboard::format::{format_compact_currency, format_price};
use ct_dashboard::markets::{search_and_sort, MarketStats, SortKey};
use ct_dashboard::pagination::{Pagination, DEFAULT_ITEMS_PER_PAGE, ITEMS_PER_PAGE_OPTIONS};
use ct_dashboard::{LocalStore, SparklineBars, Watchlist};
use prettytable::Row;
use std::path::Path;
use std::time::Duration;

use super::{coin_label, proxy};
use crate::{render, watch};

#[derive(Args, Debug)]
pub struct MarketsArgs {
  /// Filter by name or symbol
  #[arg(short, long)]
  pub search: Option<String>,

  /// Sort column: market_cap, price, volume or change
  #[arg(long, default_value = "market_cap")]
  pub sort: SortKey,

  /// Table page to show
  #[arg(short, long, default_value_t = 1)]
  pub page: usize,

  /// Rows per page: 10, 25, 50 or 100
  #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE, value_parser = parse_per_page)]
  pub per_page: usize,

  /// Listing page to request from the proxy (50 coins each)
  #[arg(long, default_value_t = 1)]
  pub market_page: u32,

  /// Refresh every 30 seconds until Ctrl-C
  #[arg(short, long)]
  pub watch: bool,
}

fn parse_per_page(value: &str) -> Result<usize, String> {
  let n: usize = value.parse().map_err(|_| format!("'{}' is not a number", value))?;
  if ITEMS_PER_PAGE_OPTIONS.contains(&n) {
    Ok(n)
  } else {
    Err(format!("rows per page must be one of {:?}", ITEMS_PER_PAGE_OPTIONS))
  }
}

pub async fn execute(args: MarketsArgs, config: Config) -> Result<()> {
  let proxy = proxy(&config)?;
  let (proxy, args, store_path) = (&proxy, &args, config.store_path.as_path());
  watch::run(Duration::from_secs(ct_core::REFRESH_INTERVAL_SECS), args.watch, move || async move {
    show(proxy, args, store_path).await
  })
  .await
}

async fn show(proxy: &ProxyClient, args: &MarketsArgs, store_path: &Path) -> Result<()> {
  let coins = proxy.coins(args.market_page).await?;
  let watchlist = Watchlist::load(&LocalStore::open(store_path)?)?;

  let stats = MarketStats::from_coins(&coins);
  render::heading("Markets");
  render::stat("Coins", stats.total);
  render::stat("Gainers (24h)", stats.gainers);
  render::stat("Losers (24h)", stats.losers);

  let matched = search_and_sort(&coins, args.search.as_deref().unwrap_or(""), args.sort);
  let mut pagination = Pagination::new(matched.len());
  pagination.set_items_per_page(args.per_page);
  pagination.set_page(args.page);

  if matched.is_empty() {
    render::empty("No coins match your search.");
    return Ok(());
  }

  let mut table = render::table(&["#", "", "Coin", "Price", "24h", "Market Cap", "Volume", "7d"]);
  for coin in pagination.slice(&matched) {
    let rank = coin.market_cap_rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
    let star = if watchlist.contains(&coin.id) { "★" } else { "" };
    table.add_row(Row::new(vec![
      render::number(&rank),
      render::text(star),
      render::text(&coin_label(&coin.name, &coin.symbol)),
      render::number(&format_price(coin.current_price.unwrap_or(0.0))),
      render::change(coin.change_24h()),
      render::number(&format_compact_currency(coin.market_cap.unwrap_or(0.0))),
      render::number(&format_compact_currency(coin.total_volume.unwrap_or(0.0))),
      render::text(&SparklineBars::from_prices(coin.sparkline_prices()).render()),
    ]));
  }
  println!();
  table.printstd();
  println!("\n{}", render::pagination_footer(&pagination));
  Ok(())
}
