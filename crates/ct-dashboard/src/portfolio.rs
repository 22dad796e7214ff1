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

//! Portfolio valuation against live coin prices

use ct_models::{CoinDetail, PortfolioEntry};
use std::collections::HashMap;

/// One stored entry joined with its coin's current market data
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
  pub entry: PortfolioEntry,
  /// `None` when the coin detail could not be fetched
  pub valuation: Option<Valuation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
  pub name: String,
  pub symbol: String,
  pub current_price: f64,
  pub current_value: f64,
  pub cost_basis: f64,
  pub pnl: f64,
  /// `None` for a zero cost basis
  pub pnl_percentage: Option<f64>,
}

impl Valuation {
  fn new(entry: &PortfolioEntry, coin: &CoinDetail) -> Self {
    let current_price = coin.current_price_usd().unwrap_or(0.0);
    let current_value = entry.quantity * current_price;
    let cost_basis = entry.cost_basis();
    let pnl = current_value - cost_basis;
    let pnl_percentage = (cost_basis > 0.0).then(|| pnl / cost_basis * 100.0);
    Self {
      name: coin.name.clone(),
      symbol: coin.symbol.to_uppercase(),
      current_price,
      current_value,
      cost_basis,
      pnl,
      pnl_percentage,
    }
  }
}

/// Best performing holding by P&L percentage
#[derive(Debug, Clone, PartialEq)]
pub struct BestPerformer {
  pub symbol: String,
  pub percentage: f64,
}

impl BestPerformer {
  pub const NONE: &'static str = "N/A";

  pub fn label(best: Option<&BestPerformer>) -> &str {
    best.map(|b| b.symbol.as_str()).unwrap_or(Self::NONE)
  }
}

/// Totals for the portfolio page header
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
  pub total_value: f64,
  pub total_cost: f64,
  pub total_pnl: f64,
  pub total_pnl_percentage: f64,
  pub asset_count: usize,
  /// Only set when some holding is in profit
  pub best_performer: Option<BestPerformer>,
}

/// Join entries with coin details keyed by coin id
pub fn value_holdings(entries: &[PortfolioEntry], coins: &HashMap<String, CoinDetail>) -> Vec<Holding> {
  entries
    .iter()
    .map(|entry| Holding {
      entry: entry.clone(),
      valuation: coins.get(&entry.coin_id).map(|coin| Valuation::new(entry, coin)),
    })
    .collect()
}

/// Totals over valued holdings. Holdings without market data count as assets but not value.
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
  let mut total_value = 0.0;
  let mut total_cost = 0.0;
  let mut best_performer: Option<BestPerformer> = None;

  for valuation in holdings.iter().filter_map(|h| h.valuation.as_ref()) {
    total_value += valuation.current_value;
    total_cost += valuation.cost_basis;

    if let Some(pct) = valuation.pnl_percentage {
      let beats = best_performer.as_ref().map(|b| pct > b.percentage).unwrap_or(pct > 0.0);
      if beats {
        best_performer = Some(BestPerformer { symbol: valuation.symbol.clone(), percentage: pct });
      }
    }
  }

  let total_pnl = total_value - total_cost;
  let total_pnl_percentage = if total_cost > 0.0 { total_pnl / total_cost * 100.0 } else { 0.0 };

  PortfolioSummary {
    total_value,
    total_cost,
    total_pnl,
    total_pnl_percentage,
    asset_count: holdings.len(),
    best_performer,
  }
}

/// Share of total value per valued holding, in percent, keyed by coin id
pub fn allocation(holdings: &[Holding]) -> Vec<(String, f64)> {
  let total: f64 = holdings.iter().filter_map(|h| h.valuation.as_ref()).map(|v| v.current_value).sum();
  holdings
    .iter()
    .filter_map(|h| h.valuation.as_ref().map(|v| (h.entry.coin_id.clone(), v)))
    .map(|(id, v)| (id, if total > 0.0 { v.current_value / total * 100.0 } else { 0.0 }))
    .collect()
}
