use anyhow::Result;
use chrono::Utc;
use clap::{Args, Subcommand};
use colored::Colorize;
use ct_core::Config;
use ct_dashboard::format::format_price;
use ct_dashboard::{AlertBook, AlertKind, NewAlert};
use prettytable::Row;
use std::collections::HashMap;

use super::{coin_label, open_store, proxy};
use crate::render;

#[derive(Args, Debug)]
pub struct AlertsCommand {
  #[command(subcommand)]
  command: Option<AlertsSubcommands>,
}

#[derive(Subcommand, Debug)]
enum AlertsSubcommands {
  /// Show all alerts (default)
  List,

  /// Create an alert
  Add {
    /// Coin name, e.g. Bitcoin
    #[arg(long)]
    name: String,

    /// Ticker symbol, e.g. BTC
    #[arg(long)]
    symbol: String,

    /// Target price in USD
    #[arg(long)]
    price: f64,

    /// above or below
    #[arg(short = 't', long = "type", default_value = "above")]
    kind: AlertKind,

    /// CoinGecko id; defaults to the lowercased symbol
    #[arg(long)]
    coin_id: Option<String>,

    /// Image URL
    #[arg(long)]
    image: Option<String>,
  },

  /// Switch an alert on or off
  Toggle { id: String },

  /// Remove an alert
  Delete { id: String },

  /// Compare active alerts with current prices
  Check,
}

pub async fn execute(cmd: AlertsCommand, config: Config) -> Result<()> {
  let mut store = open_store(&config)?;
  let mut book = AlertBook::load(&store)?;

  match cmd.command.unwrap_or(AlertsSubcommands::List) {
    AlertsSubcommands::List => list(&book),
    AlertsSubcommands::Add { name, symbol, price, kind, coin_id, image } => {
      let new = NewAlert { coin_id, coin_name: name, coin_symbol: symbol, coin_image: image, kind, price: Some(price) };
      let alert = book.add(new, Utc::now())?.clone();
      book.save(&mut store)?;
      println!(
        "{} alert {} for {} {} {}",
        "Created".green().bold(),
        alert.id,
        alert.coin_name,
        alert.kind,
        format_price(alert.price)
      );
    }
    AlertsSubcommands::Toggle { id } => {
      let active = book.toggle(&id)?;
      book.save(&mut store)?;
      println!("Alert {} {}", id, if active { "activated".green() } else { "deactivated".yellow() });
    }
    AlertsSubcommands::Delete { id } => {
      let removed = book.delete(&id)?;
      book.save(&mut store)?;
      println!("Alert for {} deleted", removed.coin_name);
    }
    AlertsSubcommands::Check => check(&book, &config).await?,
  }
  Ok(())
}

fn list(book: &AlertBook) {
  let stats = book.stats();
  render::heading("Price Alerts");
  render::stat("Active", stats.active);
  render::stat("Above", stats.above);
  render::stat("Below", stats.below);

  if book.is_empty() {
    render::empty("No alerts yet. Create one with `ct alerts add`.");
    return;
  }

  let mut table = render::table(&["ID", "Coin", "Condition", "Target", "Status", "Created"]);
  for alert in book.alerts() {
    table.add_row(Row::new(vec![
      render::text(&alert.id),
      render::text(&coin_label(&alert.coin_name, &alert.coin_symbol)),
      render::text(&alert.kind.to_string()),
      render::number(&format_price(alert.price)),
      render::text(if alert.is_active { "active" } else { "paused" }),
      render::text(&alert.created_at.format("%Y-%m-%d %H:%M").to_string()),
    ]));
  }
  println!();
  table.printstd();
}

async fn check(book: &AlertBook, config: &Config) -> Result<()> {
  let ids = book.active_coin_ids();
  if ids.is_empty() {
    render::empty("No active alerts.");
    return Ok(());
  }

  let proxy = proxy(config)?;
  let prices: HashMap<String, f64> = proxy
    .coins_by_id(&ids)
    .await
    .into_iter()
    .flatten()
    .filter_map(|coin| coin.current_price_usd().map(|price| (coin.id, price)))
    .collect();

  for id in ids.iter().filter(|id| !prices.contains_key(*id)) {
    println!("  {} no price for {}", "?".yellow(), id);
  }

  let triggered = book.check(&prices);
  if triggered.is_empty() {
    println!("{}", "No alerts triggered.".dimmed());
    return Ok(());
  }
  for hit in triggered {
    println!(
      "  {} {} is {} ({} target {})",
      "TRIGGERED".red().bold(),
      coin_label(&hit.alert.coin_name, &hit.alert.coin_symbol),
      format_price(hit.current_price),
      hit.alert.kind,
      format_price(hit.alert.price)
    );
  }
  Ok(())
}
