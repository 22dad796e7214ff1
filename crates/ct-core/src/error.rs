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

use thiserror::Error;

/// The main error type for ct-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// URL could not be built
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),

  /// Upstream rate limit exceeded
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Upstream answered with a non-success status
  #[error("HTTP status {status} from {url}")]
  Status {
    /// Status code returned upstream
    status: u16,
    /// Request URL, without credentials
    url: String,
  },

  /// Invalid response from an upstream API
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Error reported in the body of an upstream response
  #[error("API error: {0}")]
  Api(String),

  /// Parse error for data processing
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// Whether retrying the same request may succeed
  pub fn is_retryable(&self) -> bool {
    match self {
      Error::Http(_) | Error::RateLimit(_) => true,
      Error::Status { status, .. } => *status >= 500,
      _ => false,
    }
  }
}

/// Result type alias for ct-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_retryable_errors() {
    assert!(Error::Http("connection reset".to_string()).is_retryable());
    assert!(Error::RateLimit("coingecko".to_string()).is_retryable());
    assert!(Error::Status { status: 502, url: "x".to_string() }.is_retryable());
    assert!(!Error::Status { status: 404, url: "x".to_string() }.is_retryable());
    assert!(!Error::Api("bad category".to_string()).is_retryable());
  }

  #[test]
  fn test_status_display() {
    let err = Error::Status { status: 404, url: "https://api.coingecko.com/api/v3/coins/nope".to_string() };
    assert!(err.to_string().contains("404"));
    assert!(err.to_string().contains("coins/nope"));
  }
}
