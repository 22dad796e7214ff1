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

//! HTTP transport layer for upstream and proxy requests

use ct_core::{Config, Error, Result, Upstream};
use ct_models::ErrorBody;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Query parameters as `(name, value)` pairs, kept in insertion order
pub type Params = Vec<(&'static str, String)>;

/// HTTP transport layer shared by every endpoint group
pub struct Transport {
  client: Client,
  coingecko_base_url: String,
  coingecko_api_key: Option<String>,
  cryptocompare_base_url: String,
  cryptocompare_api_key: Option<String>,
  proxy_base_url: String,
  max_retries: u32,
  retry_base_delay: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("coin-tracker/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      coingecko_base_url: config.coingecko_base_url.clone(),
      coingecko_api_key: config.coingecko_api_key.clone(),
      cryptocompare_base_url: config.cryptocompare_base_url.clone(),
      cryptocompare_api_key: config.cryptocompare_api_key.clone(),
      proxy_base_url: config.api_url.clone(),
      max_retries: config.max_retries,
      retry_base_delay: Duration::from_millis(500),
    })
  }

  /// Override the first backoff delay; later retries double it
  pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
    self.retry_base_delay = delay;
    self
  }

  /// Make a GET request and deserialize the JSON body
  ///
  /// # Arguments
  ///
  /// * `upstream` - Which service to call
  /// * `segments` - Path segments appended to the service base URL; each is percent-encoded
  /// * `params` - Query parameters
  #[instrument(skip_all, fields(upstream = %upstream, path = %segments.join("/")))]
  pub async fn get<T>(&self, upstream: Upstream, segments: &[&str], params: Params) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(upstream, segments, &params)?;
    let text =
      self.send_with_retries(upstream, &url, self.max_retries, || self.client.get(url.clone())).await?;
    self.parse_body(upstream, &text)
  }

  /// Make a POST request with a JSON body
  ///
  /// Sent exactly once: a timed-out POST may already have been applied.
  #[instrument(skip_all, fields(upstream = %upstream, path = %segments.join("/")))]
  pub async fn post<B, T>(&self, upstream: Upstream, segments: &[&str], body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let url = self.build_url(upstream, segments, &[])?;
    let payload = serde_json::to_vec(body)?;
    let text = self
      .send_with_retries(upstream, &url, 0, || {
        self
          .client
          .post(url.clone())
          .header(reqwest::header::CONTENT_TYPE, "application/json")
          .body(payload.clone())
      })
      .await?;
    self.parse_body(upstream, &text)
  }

  async fn send_with_retries<F>(
    &self,
    upstream: Upstream,
    url: &Url,
    max_retries: u32,
    request: F,
  ) -> Result<String>
  where
    F: Fn() -> RequestBuilder,
  {
    debug!("Making request to: {}", redact(url));

    let mut attempt = 0;
    loop {
      if attempt > 0 {
        // Exponential backoff
        let delay = self.retry_base_delay * 2_u32.pow(attempt - 1);
        warn!("Retrying request in {}ms (attempt {})", delay.as_millis(), attempt + 1);
        tokio::time::sleep(delay).await;
      }

      let result = match self.make_request(upstream, url, self.authorize(upstream, request())).await
      {
        Ok(response) => response
          .text()
          .await
          .map_err(|e| Error::Http(format!("Failed to read response body: {}", e))),
        Err(e) => Err(e),
      };

      match result {
        Ok(text) => {
          debug!("Response body length: {} bytes", text.len());
          return Ok(text);
        }
        Err(e) if e.is_retryable() && attempt < max_retries => {
          warn!("Request failed (attempt {}): {}", attempt + 1, e);
          attempt += 1;
        }
        Err(e) => return Err(e),
      }
    }
  }

  /// Build the full URL for a request
  fn build_url(&self, upstream: Upstream, segments: &[&str], params: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(self.base_url(upstream))?;

    url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("{} base URL cannot carry a path", upstream)))?
      .pop_if_empty()
      .extend(segments);

    if !params.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  fn authorize(&self, upstream: Upstream, request: RequestBuilder) -> RequestBuilder {
    let request = match upstream {
      Upstream::CoinGecko => match &self.coingecko_api_key {
        Some(key) if key.starts_with("CG-") => request.header("x-cg-pro-api-key", key),
        Some(key) => request.header("x-cg-demo-api-key", key),
        None => request,
      },
      Upstream::CryptoCompare => match &self.cryptocompare_api_key {
        Some(key) => request.header(reqwest::header::AUTHORIZATION, format!("Apikey {}", key)),
        None => request,
      },
      Upstream::Proxy => request,
    };
    request.header(reqwest::header::ACCEPT, "application/json")
  }

  /// Make the actual HTTP request
  async fn make_request(
    &self,
    upstream: Upstream,
    url: &Url,
    request: RequestBuilder,
  ) -> Result<Response> {
    let response = request.send().await.map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();

    if status.is_success() {
      debug!("Request successful with status: {}", status);
      return Ok(response);
    }

    error!("Request to {} failed with status: {}", upstream, status);

    if status.as_u16() == 429 {
      return Err(Error::RateLimit(format!("{} answered 429", upstream)));
    }

    if upstream == Upstream::Proxy {
      if let Ok(body) = response.json::<ErrorBody>().await {
        return Err(Error::Api(body.message));
      }
    }

    Err(Error::Status { status: status.as_u16(), url: redact(url) })
  }

  fn parse_body<T: DeserializeOwned>(&self, upstream: Upstream, text: &str) -> Result<T> {
    self.check_api_error(upstream, text)?;

    match serde_json::from_str::<T>(text) {
      Ok(data) => {
        debug!("Successfully parsed {} response", upstream);
        Ok(data)
      }
      Err(e) => {
        error!("Failed to parse JSON response: {}", e);
        Err(Error::Parse(format!(
          "Failed to parse response: {}. Response: {}",
          e,
          preview(text, 200)
        )))
      }
    }
  }

  /// Check for errors reported inside a 2xx body
  fn check_api_error(&self, upstream: Upstream, response_text: &str) -> Result<()> {
    let value = match serde_json::from_str::<serde_json::Value>(response_text) {
      Ok(serde_json::Value::Object(map)) => map,
      _ => return Ok(()),
    };

    match upstream {
      Upstream::CoinGecko => {
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
          return Err(Error::Api(message.to_string()));
        }
        if let Some(status) = value.get("status").and_then(|s| s.as_object()) {
          let code = status.get("error_code").and_then(|c| c.as_u64());
          let message = status
            .get("error_message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown CoinGecko error")
            .to_string();
          return match code {
            Some(429) => Err(Error::RateLimit(message)),
            Some(_) => Err(Error::Api(message)),
            None => Ok(()),
          };
        }
      }
      Upstream::CryptoCompare => {
        let failed = value
          .get("Response")
          .and_then(|r| r.as_str())
          .map(|r| r.eq_ignore_ascii_case("error"))
          .unwrap_or(false);
        if failed {
          let message =
            value.get("Message").and_then(|m| m.as_str()).unwrap_or("CryptoCompare error");
          if message.to_lowercase().contains("rate limit") {
            return Err(Error::RateLimit(message.to_string()));
          }
          return Err(Error::Api(message.to_string()));
        }
      }
      Upstream::Proxy => {}
    }

    Ok(())
  }

  fn base_url(&self, upstream: Upstream) -> &str {
    match upstream {
      Upstream::CoinGecko => &self.coingecko_base_url,
      Upstream::CryptoCompare => &self.cryptocompare_base_url,
      Upstream::Proxy => &self.proxy_base_url,
    }
  }

}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("coingecko_base_url", &self.coingecko_base_url)
      .field("cryptocompare_base_url", &self.cryptocompare_base_url)
      .field("proxy_base_url", &self.proxy_base_url)
      .field("max_retries", &self.max_retries)
      .finish()
  }
}

/// URL without its query string, which may carry keys
fn redact(url: &Url) -> String {
  let mut clean = url.clone();
  clean.set_query(None);
  clean.to_string()
}

fn preview(text: &str, max: usize) -> &str {
  match text.char_indices().nth(max) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn mock_transport(base: &str) -> Transport {
    Transport::new(&Config::with_base_url(base)).unwrap()
  }

  #[test]
  fn test_build_url() {
    let transport = mock_transport("https://mock.coingecko.test/api/v3");
    let url = transport
      .build_url(
        Upstream::CoinGecko,
        &["coins", "markets"],
        &[("vs_currency", "usd".to_string()), ("page", "2".to_string())],
      )
      .unwrap();

    assert_eq!(url.as_str(), "https://mock.coingecko.test/api/v3/coins/markets?vs_currency=usd&page=2");
  }

  #[test]
  fn test_build_url_encodes_segments() {
    let transport = mock_transport("https://mock.coingecko.test/api/v3/");
    let url = transport.build_url(Upstream::CoinGecko, &["coins", "wrapped bitcoin"], &[]).unwrap();
    assert_eq!(url.path(), "/api/v3/coins/wrapped%20bitcoin");
  }

  #[test]
  fn test_build_url_keeps_trailing_slash() {
    let transport = mock_transport("https://min-api.cryptocompare.test");
    let url = transport
      .build_url(Upstream::CryptoCompare, &["data", "v2", "news", ""], &[("categories", "BTC".to_string())])
      .unwrap();
    assert_eq!(url.as_str(), "https://min-api.cryptocompare.test/data/v2/news/?categories=BTC");
  }

  #[test]
  fn test_check_api_error_coingecko() {
    let transport = mock_transport("https://mock.test");
    let result = transport.check_api_error(Upstream::CoinGecko, r#"{"error":"coin not found"}"#);
    assert!(matches!(result, Err(Error::Api(msg)) if msg == "coin not found"));

    let result = transport.check_api_error(
      Upstream::CoinGecko,
      r#"{"status":{"error_code":429,"error_message":"You've exceeded the Rate Limit"}}"#,
    );
    assert!(matches!(result, Err(Error::RateLimit(_))));

    assert!(transport.check_api_error(Upstream::CoinGecko, r#"[{"id":"bitcoin"}]"#).is_ok());
  }

  #[test]
  fn test_check_api_error_cryptocompare() {
    let transport = mock_transport("https://mock.test");
    let result = transport.check_api_error(
      Upstream::CryptoCompare,
      r#"{"Response":"Error","Message":"Unknown category","Data":{}}"#,
    );
    assert!(matches!(result, Err(Error::Api(msg)) if msg == "Unknown category"));

    assert!(transport
      .check_api_error(Upstream::CryptoCompare, r#"{"Type":100,"Message":"ok","Data":[]}"#)
      .is_ok());
  }

  #[test]
  fn test_redact_drops_query() {
    let url = Url::parse("https://x.test/coins?x_cg_pro_api_key=secret").unwrap();
    assert_eq!(redact(&url), "https://x.test/coins");
  }

  #[tokio::test]
  async fn test_get_sends_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/ping"))
      .and(header("x-cg-demo-api-key", "demo-123"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gecko_says": "(V3) To the Moon!"})))
      .expect(1)
      .mount(&server)
      .await;

    let mut config = Config::with_base_url(&server.uri());
    config.coingecko_api_key = Some("demo-123".to_string());
    let transport = Transport::new(&config).unwrap();

    let body: serde_json::Value = transport.get(Upstream::CoinGecko, &["ping"], Vec::new()).await.unwrap();
    assert_eq!(body["gecko_says"], "(V3) To the Moon!");
  }

  #[tokio::test]
  async fn test_get_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/flaky"))
      .respond_with(ResponseTemplate::new(503))
      .up_to_n_times(1)
      .expect(1)
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/flaky"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
      .expect(1)
      .mount(&server)
      .await;

    let mut config = Config::with_base_url(&server.uri());
    config.max_retries = 1;
    let transport = Transport::new(&config).unwrap().with_retry_base_delay(Duration::from_millis(1));

    let body: serde_json::Value = transport.get(Upstream::CoinGecko, &["flaky"], Vec::new()).await.unwrap();
    assert_eq!(body["ok"], true);
  }

  #[tokio::test]
  async fn test_get_does_not_retry_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/nope"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "coin not found"})))
      .expect(1)
      .mount(&server)
      .await;

    let mut config = Config::with_base_url(&server.uri());
    config.max_retries = 3;
    let transport = Transport::new(&config).unwrap();

    let err = transport
      .get::<serde_json::Value>(Upstream::CoinGecko, &["coins", "nope"], Vec::new())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }));
  }

  #[tokio::test]
  async fn test_proxy_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/portfolio"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "coinId is required"})))
      .mount(&server)
      .await;

    let transport = mock_transport(&server.uri());
    let err = transport
      .post::<_, serde_json::Value>(Upstream::Proxy, &["portfolio"], &json!({"quantity": 1}))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Api(msg) if msg == "coinId is required"));
  }

  #[tokio::test]
  async fn test_post_is_not_retried_after_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/portfolio"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(json!({"id": 1}))
          .set_delay(Duration::from_millis(1500)),
      )
      .mount(&server)
      .await;

    let mut config = Config::with_base_url(&server.uri());
    config.timeout_secs = 1;
    config.max_retries = 2;
    let transport = Transport::new(&config).unwrap().with_retry_base_delay(Duration::from_millis(1));

    let err = transport
      .post::<_, serde_json::Value>(Upstream::Proxy, &["portfolio"], &json!({"coinId": "bitcoin"}))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Http(_)));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
  }
}
