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

//! File-backed key/value store for dashboard state
//!
//! Keeps the same keys the web dashboard used in browser storage, so a
//! storage file can be inspected or seeded by hand:
//!
//! ```json
//! { "watchlist": ["bitcoin"], "priceAlerts": [] }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

pub const WATCHLIST_KEY: &str = "watchlist";
pub const ALERTS_KEY: &str = "priceAlerts";
pub const SETTINGS_KEY: &str = "dashboardSettings";

/// JSON object on disk, rewritten in full on every mutation
#[derive(Debug)]
pub struct LocalStore {
  path: PathBuf,
  entries: Map<String, Value>,
}

impl LocalStore {
  /// Open the store at `path`; a missing file is an empty store
  pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    let entries = match fs::read_to_string(&path) {
      Ok(text) if text.trim().is_empty() => Map::new(),
      Ok(text) => serde_json::from_str(&text)?,
      Err(e) if e.kind() == ErrorKind::NotFound => Map::new(),
      Err(e) => return Err(e.into()),
    };
    debug!(path = %path.display(), keys = entries.len(), "opened local store");
    Ok(Self { path, entries })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Read and decode a key, `None` when it was never written
  pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
    match self.entries.get(key) {
      Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
      None => Ok(None),
    }
  }

  pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
    self.entries.insert(key.to_string(), serde_json::to_value(value)?);
    self.flush()
  }

  pub fn remove(&mut self, key: &str) -> Result<bool> {
    let removed = self.entries.remove(key).is_some();
    if removed {
      self.flush()?;
    }
    Ok(removed)
  }

  fn flush(&self) -> Result<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }
    let tmp = self.path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(&self.entries)?)?;
    fs::rename(&tmp, &self.path)?;
    debug!(path = %self.path.display(), "wrote local store");
    Ok(())
  }
}
