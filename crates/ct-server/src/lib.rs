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

//! # ct-server
//!
//! HTTP proxy in front of CoinGecko and CryptoCompare, plus the portfolio
//! store. Routes live under `/api`; failures answer with `{"message": ...}`.

pub mod error;
pub mod routes;
pub mod state;

use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use ct_core::Config;
use tracing::info;

pub use error::{ApiError, ServerError};
pub use state::AppState;

/// Request bodies that fail to parse get the same JSON error shape as handler errors
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| ApiError::BadRequest(format!("Invalid request body: {}", err)).into())
}

fn cors_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add(("Access-Control-Allow-Origin", "*"))
    .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
    .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Register `/health` and the `/api` scope
pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config()).service(routes::health).service(
    web::scope("/api")
      .service(routes::coins)
      .service(routes::coin_history)
      .service(routes::coin_news)
      .service(routes::coin_detail)
      .service(routes::news)
      .service(routes::portfolio)
      .service(routes::add_to_portfolio)
      .default_service(web::to(routes::fallback)),
  );
}

/// Serve until the process is stopped
pub async fn run(config: &Config, state: AppState) -> Result<(), ServerError> {
  let data = web::Data::new(state);
  info!("coin-tracker proxy listening on http://{}", config.bind_addr);

  HttpServer::new(move || {
    App::new()
      .app_data(data.clone())
      .wrap(cors_headers())
      .wrap(Logger::default())
      .configure(configure)
      .default_service(web::to(routes::fallback))
  })
  .bind(config.bind_addr.as_str())?
  .run()
  .await?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;
  use actix_web::test;
  use ct_client::CoinTrackerClient;
  use ct_database_postgres::InMemoryPortfolioRepository;
  use pretty_assertions::assert_eq;
  use serde_json::{json, Value};
  use std::sync::Arc;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn state(upstream: &MockServer) -> web::Data<AppState> {
    let client = CoinTrackerClient::new(Config::with_base_url(&upstream.uri())).unwrap();
    web::Data::new(AppState::new(client, Arc::new(InMemoryPortfolioRepository::new())))
  }

  fn article(title: &str) -> Value {
    json!({
      "id": "100",
      "published_on": 1_717_000_000,
      "title": title,
      "url": "https://news.test/a",
      "body": "text",
      "source": "coindesk"
    })
  }

  #[actix_web::test]
  async fn test_coins_forwards_page_and_defaults() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/markets"))
      .and(query_param("vs_currency", "usd"))
      .and(query_param("order", "market_cap_desc"))
      .and(query_param("per_page", "50"))
      .and(query_param("page", "2"))
      .and(query_param("sparkline", "true"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
        { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin", "current_price": 64000.0, "ath": 73000.0 }
      ])))
      .expect(1)
      .mount(&upstream)
      .await;

    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/coins?page=2").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["id"], "bitcoin");
    assert_eq!(body[0]["ath"], 73000.0);
  }

  #[actix_web::test]
  async fn test_upstream_failure_is_500_with_message() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/markets"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&upstream)
      .await;
    Mock::given(method("GET"))
      .and(path("/coins/nope"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "coin not found"})))
      .mount(&upstream)
      .await;

    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/coins").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Error fetching coins"}));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/coin/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Error fetching coin details"}));
  }

  #[actix_web::test]
  async fn test_history_defaults_to_seven_days() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/coins/ethereum/market_chart"))
      .and(query_param("vs_currency", "usd"))
      .and(query_param("days", "7"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "prices": [[1.0, 3000.0], [2.0, 3100.0]], "market_caps": [], "total_volumes": []
      })))
      .expect(1)
      .mount(&upstream)
      .await;

    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;
    let resp =
      test::call_service(&app, test::TestRequest::get().uri("/api/coin/ethereum/history").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["prices"][1][1], 3100.0);
  }

  #[actix_web::test]
  async fn test_coin_news_falls_back_to_crypto() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "obscurecoin"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "Response": "Error", "Message": "No news for category", "Data": {}
      })))
      .expect(1)
      .mount(&upstream)
      .await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "Crypto"))
      .and(query_param("excludeCategories", "Sponsored"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": [article("Markets rally")]})))
      .expect(1)
      .mount(&upstream)
      .await;

    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;
    let resp =
      test::call_service(&app, test::TestRequest::get().uri("/api/coin/obscurecoin/news").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["title"], "Markets rally");
  }

  #[actix_web::test]
  async fn test_news_without_data_is_empty_list() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "Crypto"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Type": 100, "Message": "News list successfully returned"})))
      .mount(&upstream)
      .await;

    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/news").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
  }

  #[actix_web::test]
  async fn test_coin_news_500_when_fallback_fails_too() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .respond_with(ResponseTemplate::new(502))
      .expect(2)
      .mount(&upstream)
      .await;

    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;
    let resp =
      test::call_service(&app, test::TestRequest::get().uri("/api/coin/bitcoin/news").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Error fetching news"}));

    let categories: Vec<String> = upstream
      .received_requests()
      .await
      .unwrap()
      .iter()
      .filter_map(|r| r.url.query_pairs().find(|(k, _)| k == "categories").map(|(_, v)| v.into_owned()))
      .collect();
    assert_eq!(categories, vec!["bitcoin".to_string(), "Crypto".to_string()]);
  }

  #[actix_web::test]
  async fn test_news_forwards_category() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/data/v2/news/"))
      .and(query_param("categories", "ETH"))
      .and(query_param("excludeCategories", "Sponsored"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": [article("Ether upgrade")]})))
      .expect(1)
      .mount(&upstream)
      .await;

    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/news?category=ETH").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["title"], "Ether upgrade");
  }

  #[actix_web::test]
  async fn test_portfolio_add_then_list() {
    let upstream = MockServer::start().await;
    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;

    let resp = test::call_service(
      &app,
      test::TestRequest::post()
        .uri("/api/portfolio")
        .set_json(json!({"coinId": "bitcoin", "quantity": 0.5, "buyPrice": 60000}))
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["userId"], "user1");
    assert_eq!(created["coinId"], "bitcoin");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/portfolio").to_request()).await;
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().map(|a| a.len()), Some(1));
    assert_eq!(listed[0]["buyPrice"], 60000.0);
  }

  #[actix_web::test]
  async fn test_portfolio_rejects_bad_bodies() {
    let upstream = MockServer::start().await;
    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;

    let resp = test::call_service(
      &app,
      test::TestRequest::post()
        .uri("/api/portfolio")
        .set_json(json!({"coinId": "bitcoin", "quantity": -1, "buyPrice": 1}))
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "quantity must be a positive number");

    let resp = test::call_service(
      &app,
      test::TestRequest::post().uri("/api/portfolio").set_json(json!({"coinId": "bitcoin"})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap_or_default().starts_with("Invalid request body"));
  }

  #[actix_web::test]
  async fn test_health_and_unknown_routes() {
    let upstream = MockServer::start().await;
    let app = test::init_service(App::new().app_data(state(&upstream)).configure(configure)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "ok"}));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/unknown").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
      &app,
      test::TestRequest::default().method(actix_web::http::Method::OPTIONS).uri("/api/portfolio").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  }
}
