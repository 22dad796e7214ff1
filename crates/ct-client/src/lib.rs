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

//! # ct-client
//!
//! HTTP clients for the coin-tracker workspace.
//!
//! - [`CoinTrackerClient`] calls CoinGecko (listings, coin detail, price
//!   history) and CryptoCompare (news) with rate limiting and retries. The
//!   proxy server is built on it.
//! - [`ProxyClient`] calls the proxy's `/api` routes and is what dashboard
//!   front ends use.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, ct_core::Error>`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod proxy;
pub mod transport;

pub use client::CoinTrackerClient;
pub use ct_core::{Config, Error, Result};
pub use proxy::ProxyClient;

pub use endpoints::{
  coins::{CoinEndpoints, MarketsQuery},
  news::NewsEndpoints,
};
