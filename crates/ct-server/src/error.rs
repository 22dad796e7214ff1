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

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use ct_database_postgres::RepositoryError;
use ct_models::ErrorBody;
use thiserror::Error;
use tracing::error;

/// Failure of a proxy route. The display text is what the caller sees.
#[derive(Error, Debug)]
pub enum ApiError {
  #[error("{message}")]
  Upstream {
    message: &'static str,
    #[source]
    source: ct_core::Error,
  },

  #[error("{message}")]
  Storage {
    message: &'static str,
    #[source]
    source: RepositoryError,
  },

  #[error("{0}")]
  BadRequest(String),
}

impl ApiError {
  pub fn upstream(message: &'static str, source: ct_core::Error) -> Self {
    error!("{}: {}", message, source);
    ApiError::Upstream { message, source }
  }

  pub fn storage(message: &'static str, source: RepositoryError) -> Self {
    error!("{}: {}", message, source);
    ApiError::Storage { message, source }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Upstream { .. } | ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
  }
}

/// Errors raised while starting the server
#[derive(Error, Debug)]
pub enum ServerError {
  #[error("Client error: {0}")]
  Client(#[from] ct_core::Error),

  #[error("Database error: {0}")]
  Database(#[from] RepositoryError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  #[actix_web::test]
  async fn test_upstream_error_hides_cause() {
    let err = ApiError::upstream("Error fetching coins", ct_core::Error::RateLimit("slow down".to_string()));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(err.error_response().into_body()).await.unwrap();
    assert_eq!(body, r#"{"message":"Error fetching coins"}"#);
  }

  #[test]
  fn test_bad_request_status() {
    let err = ApiError::BadRequest("coinId is required".to_string());
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "coinId is required");
  }
}
