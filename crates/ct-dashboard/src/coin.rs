//! Link lists for the coin detail page

use ct_models::CoinDetail;

/// Social platforms with a dedicated icon; anything else is a plain link
pub const SOCIAL_PLATFORMS: [&str; 7] = ["twitter", "reddit", "github", "telegram", "facebook", "linkedin", "youtube"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinLink {
  pub label: String,
  pub url: String,
}

impl CoinLink {
  fn new(label: &str, url: impl Into<String>) -> Self {
    Self { label: label.to_string(), url: url.into() }
  }
}

fn first_non_empty(urls: &[String]) -> Option<&str> {
  urls.iter().map(|u| u.trim()).find(|u| !u.is_empty())
}

/// Website, explorer and source repository, when present
pub fn resource_links(coin: &CoinDetail) -> Vec<CoinLink> {
  let Some(links) = coin.links.as_ref() else {
    return Vec::new();
  };
  let mut out = Vec::new();
  if let Some(url) = first_non_empty(&links.homepage) {
    out.push(CoinLink::new("Website", url));
  }
  if let Some(url) = first_non_empty(&links.blockchain_site) {
    out.push(CoinLink::new("Explorer", url));
  }
  if let Some(url) = links.repos_url.as_ref().and_then(|r| first_non_empty(&r.github)) {
    out.push(CoinLink::new("Source Code", url));
  }
  out
}

/// Social profiles built from the handles CoinGecko reports
pub fn social_links(coin: &CoinDetail) -> Vec<CoinLink> {
  let Some(links) = coin.links.as_ref() else {
    return Vec::new();
  };
  let present = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

  let mut out = Vec::new();
  if let Some(handle) = present(&links.twitter_screen_name) {
    out.push(CoinLink::new("Twitter", format!("https://twitter.com/{}", handle)));
  }
  if let Some(url) = present(&links.subreddit_url) {
    out.push(CoinLink::new("Reddit", url));
  }
  if let Some(url) = links.repos_url.as_ref().and_then(|r| first_non_empty(&r.github)) {
    out.push(CoinLink::new("Github", url));
  }
  if let Some(channel) = present(&links.telegram_channel_identifier) {
    out.push(CoinLink::new("Telegram", format!("https://t.me/{}", channel)));
  }
  if let Some(user) = present(&links.facebook_username) {
    out.push(CoinLink::new("Facebook", format!("https://www.facebook.com/{}", user)));
  }
  out
}

/// Whether a platform has its own icon
pub fn has_platform_icon(platform: &str) -> bool {
  SOCIAL_PLATFORMS.contains(&platform.to_lowercase().as_str())
}

/// Categories with nulls and blanks dropped
pub fn categories(coin: &CoinDetail) -> Vec<&str> {
  coin.categories.iter().flatten().map(|c| c.as_str()).filter(|c| !c.is_empty()).collect()
}
