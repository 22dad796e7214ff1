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

//! In-process portfolio store for tests and database-less runs

use async_trait::async_trait;
use chrono::Utc;
use ct_models::{NewPortfolioEntry, PortfolioEntry};
use std::sync::Mutex;

use crate::repository::{PortfolioRepository, RepositoryError, RepositoryResult};

/// Keeps entries in a vector; ids count up from 1
#[derive(Debug, Default)]
pub struct InMemoryPortfolioRepository {
  entries: Mutex<Vec<PortfolioEntry>>,
}

impl InMemoryPortfolioRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

fn poisoned<T>(_: T) -> RepositoryError {
  RepositoryError::PoolError("portfolio store lock poisoned".to_string())
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
  async fn list_for_user(&self, user_id: &str) -> RepositoryResult<Vec<PortfolioEntry>> {
    let entries = self.entries.lock().map_err(poisoned)?;
    Ok(entries.iter().filter(|e| e.user_id == user_id).cloned().collect())
  }

  async fn insert(&self, user_id: &str, entry: &NewPortfolioEntry) -> RepositoryResult<PortfolioEntry> {
    let mut entries = self.entries.lock().map_err(poisoned)?;
    let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
    let stored = PortfolioEntry {
      id,
      user_id: user_id.to_string(),
      coin_id: entry.coin_id.clone(),
      quantity: entry.quantity,
      buy_price: entry.buy_price,
      created_at: Utc::now(),
    };
    entries.push(stored.clone());
    Ok(stored)
  }

  fn backend(&self) -> &'static str {
    "memory"
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_insert_assigns_increasing_ids() {
    let repo = InMemoryPortfolioRepository::new();
    let first = repo.insert("user1", &NewPortfolioEntry::new("bitcoin", 1.0, 50000.0)).await.unwrap();
    let second = repo.insert("user1", &NewPortfolioEntry::new("ethereum", 2.0, 3000.0)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.user_id, "user1");
    assert_eq!(second.buy_price, 3000.0);
  }

  #[tokio::test]
  async fn test_list_is_scoped_to_user_and_ordered() {
    let repo = InMemoryPortfolioRepository::new();
    repo.insert("user1", &NewPortfolioEntry::new("bitcoin", 1.0, 1.0)).await.unwrap();
    repo.insert("someone-else", &NewPortfolioEntry::new("solana", 1.0, 1.0)).await.unwrap();
    repo.insert("user1", &NewPortfolioEntry::new("ethereum", 1.0, 1.0)).await.unwrap();

    let coins: Vec<String> =
      repo.list_for_user("user1").await.unwrap().into_iter().map(|e| e.coin_id).collect();
    assert_eq!(coins, vec!["bitcoin".to_string(), "ethereum".to_string()]);
    assert!(repo.list_for_user("nobody").await.unwrap().is_empty());
  }
}
