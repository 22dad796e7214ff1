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

use chrono::{DateTime, Utc};
use ct_models::PortfolioEntry;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

use crate::schema::portfolio_entries;

/// Stored portfolio entry
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = portfolio_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PortfolioRow {
  pub id: i64,
  pub user_id: String,
  pub coin_id: String,
  pub quantity: f64,
  pub buy_price: f64,
  pub created_at: DateTime<Utc>,
}

/// New portfolio entry for database insertion
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = portfolio_entries)]
pub struct NewPortfolioRow<'a> {
  pub user_id: &'a str,
  pub coin_id: &'a str,
  pub quantity: f64,
  pub buy_price: f64,
}

impl PortfolioRow {
  /// Insert one entry and return it with its id and timestamp
  pub fn insert(conn: &mut PgConnection, new_row: &NewPortfolioRow<'_>) -> Result<Self, DieselError> {
    diesel::insert_into(portfolio_entries::table)
      .values(new_row)
      .returning(PortfolioRow::as_returning())
      .get_result(conn)
  }

  /// All entries for a user, oldest first
  pub fn find_by_user(conn: &mut PgConnection, user: &str) -> Result<Vec<Self>, DieselError> {
    portfolio_entries::table
      .filter(portfolio_entries::user_id.eq(user))
      .order(portfolio_entries::id.asc())
      .select(PortfolioRow::as_select())
      .load(conn)
  }
}

impl From<PortfolioRow> for PortfolioEntry {
  fn from(row: PortfolioRow) -> Self {
    PortfolioEntry {
      id: row.id,
      user_id: row.user_id,
      coin_id: row.coin_id,
      quantity: row.quantity,
      buy_price: row.buy_price,
      created_at: row.created_at,
    }
  }
}
