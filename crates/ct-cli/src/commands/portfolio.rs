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

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use ct_client::ProxyClient;
use ct_core::Config;
use ct_dashboard::format::{format_compact_currency, format_price};
use ct_dashboard::portfolio::{allocation, summarize, value_holdings, BestPerformer, Holding, PortfolioSummary};
use ct_models::{CoinDetail, NewPortfolioEntry};
use prettytable::Row;
use std::collections::HashMap;
use std::time::Duration;

use super::{coin_label, proxy};
use crate::{render, watch};

#[derive(Args, Debug)]
pub struct PortfolioCommand {
  #[command(subcommand)]
  command: Option<PortfolioSubcommands>,

  /// Refresh every 30 seconds until Ctrl-C
  #[arg(short, long)]
  watch: bool,
}

#[derive(Subcommand, Debug)]
enum PortfolioSubcommands {
  /// Show holdings with live valuation (default)
  List,

  /// Record a purchase
  Add {
    /// CoinGecko coin id
    coin_id: String,

    /// Units bought
    #[arg(short, long, default_value_t = 1.0)]
    quantity: f64,

    /// Price paid per unit in USD; defaults to the current price
    #[arg(short, long)]
    buy_price: Option<f64>,
  },
}

pub async fn execute(cmd: PortfolioCommand, config: Config) -> Result<()> {
  let proxy = proxy(&config)?;
  match cmd.command.unwrap_or(PortfolioSubcommands::List) {
    PortfolioSubcommands::List => {
      let proxy = &proxy;
      watch::run(Duration::from_secs(ct_core::REFRESH_INTERVAL_SECS), cmd.watch, move || async move {
        show(proxy).await
      })
      .await
    }
    PortfolioSubcommands::Add { coin_id, quantity, buy_price } => add(&proxy, coin_id, quantity, buy_price).await,
  }
}

async fn add(proxy: &ProxyClient, coin_id: String, quantity: f64, buy_price: Option<f64>) -> Result<()> {
  let buy_price = match buy_price {
    Some(price) => price,
    None => {
      let coin = proxy.coin(&coin_id).await.with_context(|| format!("Could not look up {}", coin_id))?;
      match coin.current_price_usd() {
        Some(price) => price,
        None => bail!("{} has no current price; pass --buy-price", coin_id),
      }
    }
  };

  let entry = NewPortfolioEntry::new(coin_id, quantity, buy_price);
  if let Err(message) = entry.validate() {
    bail!(message);
  }

  let stored = proxy.add_to_portfolio(&entry).await.context("Error adding to portfolio")?;
  println!(
    "{} {} {} at {}",
    "Added".green().bold(),
    stored.quantity,
    stored.coin_id,
    format_price(stored.buy_price)
  );
  Ok(())
}

/// Portfolio entries valued at current prices
pub(crate) async fn fetch_holdings(proxy: &ProxyClient) -> Result<Vec<Holding>> {
  let entries = proxy.portfolio().await.context("Error fetching portfolio")?;

  let mut ids: Vec<String> = entries.iter().map(|e| e.coin_id.clone()).collect();
  ids.sort();
  ids.dedup();
  let coins: HashMap<String, CoinDetail> =
    proxy.coins_by_id(&ids).await.into_iter().flatten().map(|c| (c.id.clone(), c)).collect();

  Ok(value_holdings(&entries, &coins))
}

async fn show(proxy: &ProxyClient) -> Result<()> {
  let holdings = fetch_holdings(proxy).await?;
  let summary = summarize(&holdings);

  render::heading("Portfolio");
  print_summary(&summary);

  if holdings.is_empty() {
    render::empty("No holdings yet. Add your first trade to get started!");
    return Ok(());
  }

  let weights: HashMap<String, f64> = allocation(&holdings).into_iter().collect();
  let mut table =
    render::table(&["Coin", "Quantity", "Buy Price", "Current Price", "Value", "P&L", "P&L %", "Weight"]);
  for holding in &holdings {
    let entry = &holding.entry;
    let row = match &holding.valuation {
      Some(v) => Row::new(vec![
        render::text(&coin_label(&v.name, &v.symbol)),
        render::number(&entry.quantity.to_string()),
        render::number(&format_price(entry.buy_price)),
        render::number(&format_price(v.current_price)),
        render::number(&format_compact_currency(v.current_value)),
        render::pnl(v.pnl, &format_compact_currency(v.pnl)),
        render::signed_change(v.pnl_percentage.unwrap_or(0.0)),
        render::number(&format!("{:.1}%", weights.get(&entry.coin_id).copied().unwrap_or(0.0))),
      ]),
      None => Row::new(vec![
        render::text(&entry.coin_id),
        render::number(&entry.quantity.to_string()),
        render::number(&format_price(entry.buy_price)),
        render::text("unavailable"),
        render::text("-"),
        render::text("-"),
        render::text("-"),
        render::text("-"),
      ]),
    };
    table.add_row(row);
  }
  println!();
  table.printstd();
  Ok(())
}

pub(crate) fn print_summary(summary: &PortfolioSummary) {
  render::stat("Total value", format_compact_currency(summary.total_value));
  render::stat(
    "Total P&L",
    format!("{} ({})", format_compact_currency(summary.total_pnl), render::change_text(summary.total_pnl_percentage)),
  );
  render::stat("Assets", summary.asset_count);
  let best = match &summary.best_performer {
    Some(b) => format!("{} {}", b.symbol, render::change_text(b.percentage)),
    None => BestPerformer::label(None).to_string(),
  };
  render::stat("Best performer", best);
}
