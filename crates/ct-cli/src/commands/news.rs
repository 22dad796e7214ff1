use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use ct_client::ProxyClient;
use ct_core::Config;
use ct_dashboard::format::format_time_ago;
use ct_dashboard::news::{
  article_image, resolve_category, truncate, NewsLayout, CARD_BODY_CHARS, CARD_TITLE_CHARS, FEATURED_BODY_CHARS,
  NEWS_CATEGORIES,
};
use ct_models::NewsArticle;
use std::time::Duration;

use super::proxy;
use crate::{render, watch};

#[derive(Args, Debug)]
pub struct NewsArgs {
  /// Category: all, bitcoin, ethereum, defi, regulation, or any CryptoCompare category
  #[arg(short, long, default_value = "all")]
  pub category: String,

  /// Refresh every 60 seconds until Ctrl-C
  #[arg(short, long)]
  pub watch: bool,
}

pub async fn execute(args: NewsArgs, config: Config) -> Result<()> {
  let proxy = proxy(&config)?;
  let (proxy, args) = (&proxy, &args);
  watch::run(Duration::from_secs(ct_core::NEWS_REFRESH_INTERVAL_SECS), args.watch, move || async move {
    show(proxy, args).await
  })
  .await
}

fn category_label(selection: &str) -> &str {
  NEWS_CATEGORIES
    .iter()
    .find(|(value, _)| value.eq_ignore_ascii_case(selection))
    .map(|(_, label)| *label)
    .unwrap_or(selection)
}

async fn show(proxy: &ProxyClient, args: &NewsArgs) -> Result<()> {
  let articles = proxy.news(resolve_category(&args.category)).await.context("Error fetching news")?;
  let now = Utc::now().timestamp();

  render::heading(&format!("Crypto News - {}", category_label(&args.category)));
  let layout = NewsLayout::new(&articles);

  let Some(featured) = layout.featured else {
    render::empty("No news available.");
    return Ok(());
  };

  println!("\n  {} {}", "FEATURED".on_blue().white().bold(), featured.title.bold());
  println!("  {}", truncate(&featured.body, FEATURED_BODY_CHARS));
  print_meta(featured, now);
  println!("    {}", article_image(featured).dimmed());

  if !layout.recent.is_empty() {
    render::heading("Recent");
    for article in layout.recent {
      println!("  {}", truncate(&article.title, CARD_TITLE_CHARS).bold());
      println!("    {}", truncate(&article.body, CARD_BODY_CHARS));
      print_meta(article, now);
    }
  }

  let more = articles.len().saturating_sub(1 + layout.recent.len());
  if more > 0 {
    render::heading("More");
    for article in articles.iter().skip(1 + layout.recent.len()) {
      println!("  {} {}", truncate(&article.title, CARD_TITLE_CHARS), format_time_ago(article.published_on, now).dimmed());
    }
  }
  Ok(())
}

fn print_meta(article: &NewsArticle, now: i64) {
  println!(
    "    {} {} {}",
    article.source_name().cyan(),
    format_time_ago(article.published_on, now).dimmed(),
    article.url.dimmed()
  );
  let categories = article.category_list();
  if !categories.is_empty() {
    println!("    {}", categories.join(" | ").dimmed());
  }
}
