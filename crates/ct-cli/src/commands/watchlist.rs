use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use ct_client::ProxyClient;
use ct_core::Config;
use ct_dashboard::format::{format_compact_currency, format_price};
use ct_dashboard::{LocalStore, Watchlist, WatchlistStats};
use ct_models::CoinDetail;
use prettytable::Row;
use std::path::Path;
use std::time::Duration;

use super::{coin_label, open_store, proxy};
use crate::{render, watch};

#[derive(Args, Debug)]
pub struct WatchlistCommand {
  #[command(subcommand)]
  command: Option<WatchlistSubcommands>,

  /// Refresh every 30 seconds until Ctrl-C
  #[arg(short, long)]
  watch: bool,
}

#[derive(Subcommand, Debug)]
enum WatchlistSubcommands {
  /// Show watched coins with live prices (default)
  List,
  /// Start watching a coin
  Add { coin_id: String },
  /// Stop watching a coin
  Remove { coin_id: String },
  /// Watch a coin if it is not watched, unwatch it otherwise
  Toggle { coin_id: String },
}

pub async fn execute(cmd: WatchlistCommand, config: Config) -> Result<()> {
  match cmd.command.unwrap_or(WatchlistSubcommands::List) {
    WatchlistSubcommands::List => {
      let proxy = proxy(&config)?;
      let (proxy, store_path) = (&proxy, config.store_path.as_path());
      watch::run(Duration::from_secs(ct_core::REFRESH_INTERVAL_SECS), cmd.watch, move || async move {
        show(proxy, store_path).await
      })
      .await
    }
    WatchlistSubcommands::Add { coin_id } => update(&config, &coin_id, |list| {
      list.add(&coin_id);
    }),
    WatchlistSubcommands::Remove { coin_id } => update(&config, &coin_id, |list| {
      list.remove(&coin_id);
    }),
    WatchlistSubcommands::Toggle { coin_id } => update(&config, &coin_id, |list| {
      list.toggle(&coin_id);
    }),
  }
}

/// Apply a change, persist it and report where the coin ended up
fn update(config: &Config, coin_id: &str, change: impl FnOnce(&mut Watchlist)) -> Result<()> {
  let mut store = open_store(config)?;
  let mut list = Watchlist::load(&store)?;
  change(&mut list);
  list.save(&mut store)?;

  if list.contains(coin_id) {
    println!("{} {} is on the watchlist", "Watching".green().bold(), coin_id);
  } else {
    println!("{} {} is not on the watchlist", "Not watching".yellow().bold(), coin_id);
  }
  Ok(())
}

async fn show(proxy: &ProxyClient, store_path: &Path) -> Result<()> {
  let list = Watchlist::load(&LocalStore::open(store_path)?)?;
  render::heading("Watchlist");

  if list.is_empty() {
    render::stat("Watching", 0);
    render::empty("Your watchlist is empty. Add coins with `ct watchlist add <coin>`.");
    return Ok(());
  }

  let coins: Vec<CoinDetail> = proxy.coins_by_id(list.ids()).await.into_iter().flatten().collect();
  let stats = WatchlistStats::from_coins(&coins);
  render::stat("Watching", list.len());
  render::stat("Gainers (24h)", stats.gainers);
  render::stat("Losers (24h)", stats.losers);

  let mut table = render::table(&["Coin", "Price", "24h", "Market Cap", "Volume"]);
  for coin in &coins {
    let market = coin.market_data.clone().unwrap_or_default();
    table.add_row(Row::new(vec![
      render::text(&coin_label(&coin.name, &coin.symbol)),
      render::number(&format_price(coin.current_price_usd().unwrap_or(0.0))),
      render::change(coin.change_24h().unwrap_or(0.0)),
      render::number(&format_compact_currency(market.market_cap.usd().unwrap_or(0.0))),
      render::number(&format_compact_currency(market.total_volume.usd().unwrap_or(0.0))),
    ]));
  }
  println!();
  table.printstd();
  Ok(())
}
