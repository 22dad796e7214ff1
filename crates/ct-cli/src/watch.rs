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

//! Re-render a page on a fixed interval until Ctrl-C

use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::warn;

use crate::render::clear_screen;

/// Run `render` once, and keep refreshing every `every` when `watch` is set.
///
/// A failed refresh is logged and retried on the next tick; only the first
/// render's error is returned.
pub async fn run<F, Fut>(every: Duration, watch: bool, mut render: F) -> Result<()>
where
  F: FnMut() -> Fut,
  Fut: Future<Output = Result<()>>,
{
  if watch {
    clear_screen();
  }
  render().await?;
  if !watch {
    return Ok(());
  }

  let mut ticker = interval(every);
  ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
  ticker.tick().await;

  loop {
    tokio::select! {
      _ = ticker.tick() => {
        clear_screen();
        if let Err(e) = render().await {
          warn!("Refresh failed: {:#}", e);
        }
      }
      _ = tokio::signal::ctrl_c() => {
        println!();
        return Ok(());
      }
    }
  }
}
