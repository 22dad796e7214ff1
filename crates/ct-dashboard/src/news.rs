//! News page layout helpers

use ct_models::NewsArticle;
use std::borrow::Cow;

/// Articles shown under the featured one
pub const RECENT_ARTICLES: usize = 3;

/// Articles shown on a coin's detail page
pub const COIN_NEWS_LIMIT: usize = 5;

pub const FEATURED_BODY_CHARS: usize = 200;
pub const CARD_TITLE_CHARS: usize = 80;
pub const CARD_BODY_CHARS: usize = 120;
pub const COIN_NEWS_BODY_CHARS: usize = 100;

/// Selectable categories as `(value, label)`. `all` means the generic feed.
pub const NEWS_CATEGORIES: [(&str, &str); 5] = [
  ("all", "All Categories"),
  ("bitcoin", "Bitcoin"),
  ("ethereum", "Ethereum"),
  ("defi", "DeFi"),
  ("regulation", "Regulation"),
];

pub const DEFAULT_NEWS_IMAGE: &str =
  "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=400&h=200&fit=crop";

const SOURCE_IMAGES: [(&str, &str); 4] = [
  ("CryptoNews", DEFAULT_NEWS_IMAGE),
  ("BlockchainDaily", "https://images.unsplash.com/photo-1639762681057-408e52192e55?w=400&h=200&fit=crop"),
  ("DeFi Times", "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=200&fit=crop"),
  ("Financial Tribune", "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=400&h=200&fit=crop"),
];

/// Category to request from the proxy for a user selection
pub fn resolve_category(selection: &str) -> &str {
  let selection = selection.trim();
  if selection.is_empty() || selection.eq_ignore_ascii_case("all") {
    ct_core::DEFAULT_NEWS_CATEGORY
  } else {
    selection
  }
}

/// Placeholder image for articles without one
pub fn fallback_image(source: &str) -> &'static str {
  SOURCE_IMAGES.iter().find(|(name, _)| *name == source).map(|(_, url)| *url).unwrap_or(DEFAULT_NEWS_IMAGE)
}

pub fn article_image(article: &NewsArticle) -> &str {
  match article.imageurl.as_deref() {
    Some(url) if !url.is_empty() => url,
    _ => fallback_image(&article.source),
  }
}

/// Cut `text` to `max_chars` characters and mark the cut with `...`
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
  match text.char_indices().nth(max_chars) {
    Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
    None => Cow::Borrowed(text),
  }
}

/// First article featured, the next few listed as recent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewsLayout<'a> {
  pub featured: Option<&'a NewsArticle>,
  pub recent: &'a [NewsArticle],
}

impl<'a> NewsLayout<'a> {
  pub fn new(articles: &'a [NewsArticle]) -> Self {
    let recent_end = articles.len().min(1 + RECENT_ARTICLES);
    Self { featured: articles.first(), recent: articles.get(1..recent_end).unwrap_or(&[]) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn article(id: &str, source: &str, imageurl: &str) -> NewsArticle {
    serde_json::from_value(json!({
      "id": id,
      "title": format!("Article {}", id),
      "url": format!("https://example.com/{}", id),
      "body": "body",
      "source": source,
      "imageurl": imageurl,
      "published_on": 1_700_000_000,
    }))
    .unwrap()
  }

  #[test]
  fn test_layout_splits_featured_and_recent() {
    let articles: Vec<NewsArticle> = (0..6).map(|i| article(&i.to_string(), "CryptoNews", "")).collect();
    let layout = NewsLayout::new(&articles);
    assert_eq!(layout.featured.map(|a| a.id.as_deref()), Some(Some("0")));
    let recent: Vec<_> = layout.recent.iter().filter_map(|a| a.id.as_deref()).collect();
    assert_eq!(recent, vec!["1", "2", "3"]);
  }

  #[test]
  fn test_layout_short_lists() {
    assert_eq!(NewsLayout::new(&[]), NewsLayout { featured: None, recent: &[] });
    let two = vec![article("a", "x", ""), article("b", "x", "")];
    assert_eq!(NewsLayout::new(&two).recent.len(), 1);
  }

  #[test]
  fn test_images_fall_back_by_source() {
    assert_eq!(article_image(&article("1", "DeFi Times", "")), SOURCE_IMAGES[2].1);
    assert_eq!(article_image(&article("1", "coindesk", "")), DEFAULT_NEWS_IMAGE);
    assert_eq!(article_image(&article("1", "coindesk", "https://img/x.png")), "https://img/x.png");
  }

  #[test]
  fn test_category_selection() {
    assert_eq!(resolve_category("all"), "Crypto");
    assert_eq!(resolve_category(""), "Crypto");
    assert_eq!(resolve_category("defi"), "defi");
  }

  #[test]
  fn test_truncate_counts_chars() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdef", 3), "abc...");
    assert_eq!(truncate("ééééé", 2), "éé...");
  }
}
