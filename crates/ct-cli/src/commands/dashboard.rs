use anyhow::Result;
use clap::Args;
use ct_client::ProxyClient;
use ct_core::Config;
use ct_dashboard::format::{format_compact_currency, format_price};
use ct_dashboard::markets::{sort_coins, MarketStats, SortKey};
use ct_dashboard::portfolio::summarize;
use ct_dashboard::SparklineBars;
use prettytable::Row;
use std::time::Duration;
use tracing::warn;

use super::{coin_label, portfolio, proxy};
use crate::{render, watch};

/// Coins shown in the overview table
const TOP_COINS: usize = 10;

#[derive(Args, Debug)]
pub struct DashboardArgs {
  /// Refresh every 30 seconds until Ctrl-C
  #[arg(short, long)]
  pub watch: bool,
}

pub async fn execute(args: DashboardArgs, config: Config) -> Result<()> {
  let proxy = proxy(&config)?;
  let proxy = &proxy;
  watch::run(Duration::from_secs(ct_core::REFRESH_INTERVAL_SECS), args.watch, move || async move {
    show(proxy).await
  })
  .await
}

async fn show(proxy: &ProxyClient) -> Result<()> {
  let (coins, holdings) = tokio::join!(proxy.coins(1), portfolio::fetch_holdings(proxy));
  let coins = coins?;

  let stats = MarketStats::from_coins(&coins);
  render::heading("Market Overview");
  render::stat("Coins", stats.total);
  render::stat("Gainers (24h)", stats.gainers);
  render::stat("Losers (24h)", stats.losers);

  let mut top: Vec<_> = coins.iter().collect();
  sort_coins(&mut top, SortKey::MarketCap);
  let mut table = render::table(&["#", "Coin", "Price", "24h", "Market Cap", "7d"]);
  for coin in top.into_iter().take(TOP_COINS) {
    let rank = coin.market_cap_rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
    table.add_row(Row::new(vec![
      render::number(&rank),
      render::text(&coin_label(&coin.name, &coin.symbol)),
      render::number(&format_price(coin.current_price.unwrap_or(0.0))),
      render::change(coin.change_24h()),
      render::number(&format_compact_currency(coin.market_cap.unwrap_or(0.0))),
      render::text(&SparklineBars::from_prices(coin.sparkline_prices()).render()),
    ]));
  }
  println!();
  table.printstd();

  render::heading("Portfolio");
  match holdings {
    Ok(holdings) => portfolio::print_summary(&summarize(&holdings)),
    Err(e) => {
      warn!("Portfolio unavailable: {:#}", e);
      render::empty("Portfolio unavailable.");
    }
  }
  Ok(())
}
