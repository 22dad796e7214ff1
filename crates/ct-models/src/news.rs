//! CryptoCompare news models

use crate::common::Extra;
use serde::{Deserialize, Serialize};

/// Envelope returned by `/data/v2/news/`
///
/// `Data` is an array of articles on success. CryptoCompare reports failures in
/// the body with `"Response": "Error"` and may leave `Data` empty, `{}` or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
  #[serde(rename = "Type", default)]
  pub kind: Option<i64>,

  #[serde(rename = "Message", default)]
  pub message: Option<String>,

  #[serde(rename = "Response", default)]
  pub response: Option<String>,

  #[serde(rename = "Data", default)]
  pub data: serde_json::Value,
}

impl NewsFeed {
  /// Whether CryptoCompare flagged the request as failed
  pub fn is_error(&self) -> bool {
    self.response.as_deref().map(|r| r.eq_ignore_ascii_case("error")).unwrap_or(false)
  }

  /// The articles, or an empty list when `Data` is not an array
  pub fn into_articles(self) -> Result<Vec<NewsArticle>, serde_json::Error> {
    match self.data {
      serde_json::Value::Array(items) => {
        items.into_iter().map(serde_json::from_value).collect()
      }
      _ => Ok(Vec::new()),
    }
  }
}

/// One news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
  #[serde(default)]
  pub id: Option<String>,

  #[serde(default)]
  pub guid: Option<String>,

  /// Unix timestamp, seconds
  #[serde(default)]
  pub published_on: i64,

  #[serde(default)]
  pub imageurl: Option<String>,

  pub title: String,

  pub url: String,

  #[serde(default)]
  pub body: String,

  /// Pipe separated tags
  #[serde(default)]
  pub tags: Option<String>,

  /// Pipe separated categories, e.g. `BTC|Trading`
  #[serde(default)]
  pub categories: Option<String>,

  /// Short source key
  #[serde(default)]
  pub source: String,

  #[serde(default)]
  pub source_info: Option<SourceInfo>,

  #[serde(flatten)]
  pub extra: Extra,
}

impl NewsArticle {
  /// Category names split on `|`
  pub fn category_list(&self) -> Vec<&str> {
    self
      .categories
      .as_deref()
      .map(|c| c.split('|').map(str::trim).filter(|c| !c.is_empty()).collect())
      .unwrap_or_default()
  }

  /// Publisher name, preferring the long form
  pub fn source_name(&self) -> &str {
    self
      .source_info
      .as_ref()
      .and_then(|s| s.name.as_deref())
      .filter(|n| !n.is_empty())
      .unwrap_or(self.source.as_str())
  }
}

/// Publisher details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub img: Option<String>,
  #[serde(default)]
  pub lang: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn article_json() -> serde_json::Value {
    json!({
      "id": "39123456",
      "guid": "https://example.com/?p=1",
      "published_on": 1717000000,
      "imageurl": "https://images.cryptocompare.com/news/default/example.png",
      "title": "Bitcoin climbs",
      "url": "https://example.com/bitcoin-climbs",
      "body": "Bitcoin rose today.",
      "tags": "BTC|Markets",
      "lang": "EN",
      "upvotes": "0",
      "categories": "BTC|Trading|",
      "source": "coindesk",
      "source_info": { "name": "CoinDesk", "lang": "EN", "img": "cd.png" }
    })
  }

  #[test]
  fn test_feed_articles() {
    let feed: NewsFeed =
      serde_json::from_value(json!({"Type": 100, "Message": "News list successfully returned", "Data": [article_json()]}))
        .unwrap();
    assert!(!feed.is_error());
    let articles = feed.into_articles().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].category_list(), vec!["BTC", "Trading"]);
    assert_eq!(articles[0].source_name(), "CoinDesk");
    assert_eq!(articles[0].extra.get("lang"), Some(&json!("EN")));
  }

  #[test]
  fn test_feed_without_array_data_is_empty() {
    let feed: NewsFeed = serde_json::from_value(json!({"Type": 100, "Data": {}})).unwrap();
    assert!(feed.into_articles().unwrap().is_empty());

    let feed: NewsFeed = serde_json::from_value(json!({"Message": "ok"})).unwrap();
    assert!(feed.into_articles().unwrap().is_empty());
  }

  #[test]
  fn test_feed_error_flag() {
    let feed: NewsFeed = serde_json::from_value(
      json!({"Response": "Error", "Message": "Unknown category", "Type": 1, "Data": []}),
    )
    .unwrap();
    assert!(feed.is_error());
  }

  #[test]
  fn test_source_name_falls_back_to_key() {
    let mut raw = article_json();
    raw["source_info"] = json!(null);
    let article: NewsArticle = serde_json::from_value(raw).unwrap();
    assert_eq!(article.source_name(), "coindesk");
  }
}
