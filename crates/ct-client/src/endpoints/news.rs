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

//! CryptoCompare news endpoints
//!
//! Coin-specific news is requested with the coin id as the category. When that
//! request fails for any reason the generic `Crypto` feed is served instead.

use super::{impl_endpoint_base, EndpointBase, UpstreamRateLimiter};
use crate::transport::Transport;
use ct_core::{Result, Upstream};
use ct_models::{NewsArticle, NewsFeed};
use std::sync::Arc;
use tracing::{instrument, warn};

/// News endpoints
pub struct NewsEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<UpstreamRateLimiter>,
}

impl NewsEndpoints {
  /// Create a new news endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<UpstreamRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Latest articles in a category, sponsored content excluded
  ///
  /// An empty or blank category means the generic `Crypto` feed.
  #[instrument(skip(self))]
  pub async fn by_category(&self, category: &str) -> Result<Vec<NewsArticle>> {
    self.wait_for_rate_limit().await?;

    let category = match category.trim() {
      "" => ct_core::DEFAULT_NEWS_CATEGORY,
      other => other,
    };

    let params = vec![
      ("categories", category.to_string()),
      ("excludeCategories", ct_core::EXCLUDED_NEWS_CATEGORY.to_string()),
    ];

    let feed: NewsFeed =
      self.transport.get(Upstream::CryptoCompare, &["data", "v2", "news", ""], params).await?;
    Ok(feed.into_articles()?)
  }

  /// News for one coin, falling back to the generic feed
  #[instrument(skip(self))]
  pub async fn for_coin(&self, coin_id: &str) -> Result<Vec<NewsArticle>> {
    match self.by_category(coin_id).await {
      Ok(articles) => Ok(articles),
      Err(e) => {
        warn!("News for {} unavailable ({}), falling back to general news", coin_id, e);
        self.by_category(ct_core::DEFAULT_NEWS_CATEGORY).await
      }
    }
  }
}

impl_endpoint_base!(NewsEndpoints);

#[cfg(test)]
mod tests {
  use crate::CoinTrackerClient;
  use ct_core::Config;
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn article(title: &str) -> serde_json::Value {
    json!({
      "id": "1",
      "published_on": 1717000000,
      "title": title,
      "url": format!("https://news.test/{}", title.replace(' ', "-")),
      "body": "...",
      "source": "cointelegraph",
      "categories": "BTC"
    })
  }

  fn client_for(server: &MockServer) -> CoinTrackerClient {
    CoinTrackerClient::new(Config::with_base_url(&server.uri())).unwrap()
  }

  #[tokio::test]
  async fn test_by_category_excludes_sponsored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "ETH"))
      .and(query_param("excludeCategories", "Sponsored"))
      .respond_with(
        ResponseTemplate::new(200).set_body_json(json!({"Type": 100, "Data": [article("eth up")]})),
      )
      .expect(1)
      .mount(&server)
      .await;

    let news = client_for(&server).news().by_category("ETH").await.unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "eth up");
  }

  #[tokio::test]
  async fn test_blank_category_means_crypto() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "Crypto"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": {}})))
      .expect(1)
      .mount(&server)
      .await;

    let news = client_for(&server).news().by_category("  ").await.unwrap();
    assert!(news.is_empty());
  }

  #[tokio::test]
  async fn test_coin_news_falls_back_to_general_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "bitcoin"))
      .respond_with(ResponseTemplate::new(500))
      .expect(1)
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "Crypto"))
      .respond_with(
        ResponseTemplate::new(200).set_body_json(json!({"Data": [article("market wrap")]})),
      )
      .expect(1)
      .mount(&server)
      .await;

    let news = client_for(&server).news().for_coin("bitcoin").await.unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "market wrap");
  }

  #[tokio::test]
  async fn test_coin_news_falls_back_on_body_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "dogecoin"))
      .respond_with(ResponseTemplate::new(200).set_body_json(
        json!({"Response": "Error", "Message": "Unknown category", "Data": {}}),
      ))
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "Crypto"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": [article("a"), article("b")]})))
      .mount(&server)
      .await;

    let news = client_for(&server).news().for_coin("dogecoin").await.unwrap();
    assert_eq!(news.len(), 2);
  }

  #[tokio::test]
  async fn test_coin_news_fails_when_fallback_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .respond_with(ResponseTemplate::new(502))
      .expect(2)
      .mount(&server)
      .await;

    assert!(client_for(&server).news().for_coin("bitcoin").await.is_err());
  }
}
