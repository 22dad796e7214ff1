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

//! Route handlers of the `/api` scope

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use ct_models::{ErrorBody, NewPortfolioEntry};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult = Result<HttpResponse, ApiError>;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
  page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
  days: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
  category: Option<String>,
}

/// Lenient numeric query value; anything unparsable or zero means the default
fn number_or(raw: Option<&str>, default: u32) -> u32 {
  raw.and_then(|v| v.trim().parse::<u32>().ok()).filter(|v| *v > 0).unwrap_or(default)
}

#[get("/coins")]
pub async fn coins(state: web::Data<AppState>, query: web::Query<PageQuery>) -> ApiResult {
  let page = number_or(query.page.as_deref(), 1);
  let coins = state
    .client
    .coins()
    .markets(page)
    .await
    .map_err(|e| ApiError::upstream("Error fetching coins", e))?;
  Ok(HttpResponse::Ok().json(coins))
}

#[get("/coin/{id}")]
pub async fn coin_detail(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult {
  let detail = state
    .client
    .coins()
    .detail(&id)
    .await
    .map_err(|e| ApiError::upstream("Error fetching coin details", e))?;
  Ok(HttpResponse::Ok().json(detail))
}

#[get("/coin/{id}/history")]
pub async fn coin_history(
  state: web::Data<AppState>,
  id: web::Path<String>,
  query: web::Query<HistoryQuery>,
) -> ApiResult {
  let days = number_or(query.days.as_deref(), ct_core::DEFAULT_HISTORY_DAYS);
  let chart = state
    .client
    .coins()
    .market_chart(&id, days)
    .await
    .map_err(|e| ApiError::upstream("Error fetching coin history", e))?;
  Ok(HttpResponse::Ok().json(chart))
}

#[get("/coin/{id}/news")]
pub async fn coin_news(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult {
  let articles =
    state.client.news().for_coin(&id).await.map_err(|e| ApiError::upstream("Error fetching news", e))?;
  Ok(HttpResponse::Ok().json(articles))
}

#[get("/news")]
pub async fn news(state: web::Data<AppState>, query: web::Query<NewsQuery>) -> ApiResult {
  let category = query.category.as_deref().unwrap_or(ct_core::DEFAULT_NEWS_CATEGORY);
  let articles = state
    .client
    .news()
    .by_category(category)
    .await
    .map_err(|e| ApiError::upstream("Error fetching news", e))?;
  Ok(HttpResponse::Ok().json(articles))
}

#[get("/portfolio")]
pub async fn portfolio(state: web::Data<AppState>) -> ApiResult {
  let entries = state
    .portfolio
    .list_for_user(&state.user_id)
    .await
    .map_err(|e| ApiError::storage("Error fetching portfolio", e))?;
  Ok(HttpResponse::Ok().json(entries))
}

#[post("/portfolio")]
pub async fn add_to_portfolio(state: web::Data<AppState>, body: web::Json<NewPortfolioEntry>) -> ApiResult {
  let entry = body.into_inner();
  entry.validate().map_err(ApiError::BadRequest)?;

  let stored = state
    .portfolio
    .insert(&state.user_id, &entry)
    .await
    .map_err(|e| ApiError::storage("Error adding to portfolio", e))?;
  Ok(HttpResponse::Ok().json(stored))
}

#[get("/health")]
pub async fn health() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Answers CORS preflight requests; anything else unmatched is a JSON 404
pub async fn fallback(req: HttpRequest) -> HttpResponse {
  if req.method() == actix_web::http::Method::OPTIONS {
    HttpResponse::NoContent().finish()
  } else {
    HttpResponse::NotFound().json(ErrorBody::new(format!("No route for {} {}", req.method(), req.path())))
  }
}
