use anyhow::Result;
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use ct_client::ProxyClient;
use ct_core::Config;
use ct_dashboard::coin::{categories, resource_links, social_links};
use ct_dashboard::format::{format_compact_currency, format_price, format_time_ago};
use ct_dashboard::history::{downsample, is_positive, ChartSummary, TimePeriod};
use ct_dashboard::news::{truncate, COIN_NEWS_BODY_CHARS, COIN_NEWS_LIMIT};
use ct_dashboard::sparkline::render_series;
use ct_dashboard::{LocalStore, Watchlist};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use super::{coin_label, proxy};
use crate::{render, watch};

const CHART_WIDTH: usize = 60;
const DESCRIPTION_CHARS: usize = 400;

#[derive(Args, Debug)]
pub struct CoinArgs {
  /// CoinGecko coin id, e.g. `bitcoin`
  pub id: String,

  /// Price history range: 7d, 30d, 90d or 1y
  #[arg(short, long, default_value = "30d")]
  pub period: TimePeriod,

  /// Refresh every 30 seconds until Ctrl-C
  #[arg(short, long)]
  pub watch: bool,
}

pub async fn execute(args: CoinArgs, config: Config) -> Result<()> {
  let proxy = proxy(&config)?;
  let (proxy, args, store_path) = (&proxy, &args, config.store_path.as_path());
  watch::run(Duration::from_secs(ct_core::REFRESH_INTERVAL_SECS), args.watch, move || async move {
    show(proxy, args, store_path).await
  })
  .await
}

async fn show(proxy: &ProxyClient, args: &CoinArgs, store_path: &Path) -> Result<()> {
  let (detail, history, news) = tokio::join!(
    proxy.coin(&args.id),
    proxy.history(&args.id, args.period.days()),
    proxy.coin_news(&args.id),
  );
  let coin = detail?;
  let watched = Watchlist::load(&LocalStore::open(store_path)?)?.contains(&coin.id);

  let mut title = coin_label(&coin.name, &coin.symbol);
  if let Some(rank) = coin.market_cap_rank {
    title = format!("#{} {}", rank, title);
  }
  if watched {
    title.push_str(" ★");
  }
  render::heading(&title);

  let market = coin.market_data.clone().unwrap_or_default();
  let price = coin.current_price_usd().unwrap_or(0.0);
  let change = coin.change_24h().unwrap_or(0.0);
  println!("  {}  {}", format_price(price).bold(), render::change_text(change));
  render::stat("Market Cap", format_compact_currency(market.market_cap.usd().unwrap_or(0.0)));
  render::stat("Volume (24h)", format_compact_currency(market.total_volume.usd().unwrap_or(0.0)));
  render::stat("High (24h)", format_price(market.high_24h.usd().unwrap_or(0.0)));
  render::stat("Low (24h)", format_price(market.low_24h.usd().unwrap_or(0.0)));
  render::stat("All-time high", format_price(market.ath.usd().unwrap_or(0.0)));
  if let Some(supply) = market.circulating_supply {
    render::stat("Circulating", ct_dashboard::format::group_thousands(supply.round()));
  }
  if let Some(max) = market.max_supply {
    render::stat("Max supply", ct_dashboard::format::group_thousands(max.round()));
  }

  render::heading(&format!("Price ({})", args.period));
  match history {
    Ok(chart) => match ChartSummary::from_chart(&chart) {
      Some(summary) => {
        let line = render_series(&downsample(&chart.price_values(), CHART_WIDTH));
        println!("  {}", if is_positive(coin.change_24h()) { line.green() } else { line.red() });
        render::stat("Range", format!("{} - {}", format_price(summary.low), format_price(summary.high)));
        if let Some(pct) = summary.change_percentage() {
          render::stat("Period change", render::change_text(pct));
        }
      }
      None => render::empty("No price history available."),
    },
    Err(e) => {
      warn!("History for {} unavailable: {}", args.id, e);
      render::empty("Price history unavailable.");
    }
  }

  if let Some(description) = coin.description_en() {
    render::heading("About");
    println!("  {}", truncate(description, DESCRIPTION_CHARS));
  }

  let tags = categories(&coin);
  if !tags.is_empty() {
    render::stat("Categories", tags.join(", "));
  }

  let links: Vec<_> = resource_links(&coin).into_iter().chain(social_links(&coin)).collect();
  if !links.is_empty() {
    render::heading("Links");
    for link in links {
      render::stat(&link.label, link.url);
    }
  }

  render::heading("News");
  match news {
    Ok(articles) if !articles.is_empty() => {
      let now = Utc::now().timestamp();
      for article in articles.iter().take(COIN_NEWS_LIMIT) {
        println!("  {} {}", article.title.bold(), format_time_ago(article.published_on, now).dimmed());
        println!("    {}", truncate(&article.body, COIN_NEWS_BODY_CHARS));
        println!("    {} {}", article.source_name().dimmed(), article.url.dimmed());
      }
    }
    Ok(_) => render::empty("No news for this coin."),
    Err(e) => {
      warn!("News for {} unavailable: {}", args.id, e);
      render::empty("News unavailable.");
    }
  }
  Ok(())
}
