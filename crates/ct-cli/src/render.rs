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

//! Terminal tables and colouring shared by the dashboard pages

use colored::{ColoredString, Colorize};
use ct_dashboard::format::{format_percentage, format_signed_percentage};
use ct_dashboard::pagination::{PageItem, Pagination};
use prettytable::{format, Cell, Row, Table};

/// Borderless table with a bold title row
pub fn table(titles: &[&str]) -> Table {
  let mut table = Table::new();
  table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
  table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t).style_spec("b")).collect()));
  table
}

pub fn text(value: &str) -> Cell {
  Cell::new(value)
}

/// Right aligned, for numbers
pub fn number(value: &str) -> Cell {
  Cell::new(value).style_spec("r")
}

/// Percentage in green for gains and red for losses
pub fn change(value: f64) -> Cell {
  Cell::new(&format_percentage(value)).style_spec(if value >= 0.0 { "Fgr" } else { "Frr" })
}

/// Like [`change`] with an explicit `+` on gains
pub fn signed_change(value: f64) -> Cell {
  Cell::new(&format_signed_percentage(value)).style_spec(if value >= 0.0 { "Fgr" } else { "Frr" })
}

/// Money amount coloured by sign
pub fn pnl(value: f64, formatted: &str) -> Cell {
  Cell::new(formatted).style_spec(if value >= 0.0 { "Fgr" } else { "Frr" })
}

pub fn change_text(value: f64) -> ColoredString {
  let text = format_signed_percentage(value);
  if value >= 0.0 {
    text.green()
  } else {
    text.red()
  }
}

pub fn heading(title: &str) {
  println!("\n{}", title.bold().cyan());
}

pub fn stat(label: &str, value: impl std::fmt::Display) {
  println!("  {:<18} {}", label.dimmed(), value);
}

pub fn empty(message: &str) {
  println!("  {}", message.dimmed());
}

/// `Showing 1-25 of 50   [1] 2` style footer
pub fn pagination_footer(pagination: &Pagination) -> String {
  let pages: Vec<String> = pagination
    .visible_pages(false)
    .into_iter()
    .map(|item| match item {
      PageItem::Page(n) if n == pagination.current_page() => format!("[{}]", n),
      other => other.to_string(),
    })
    .collect();
  format!("{}   {}", pagination.summary(), pages.join(" "))
}

pub fn clear_screen() {
  print!("\x1B[2J\x1B[H");
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pagination_footer_marks_current_page() {
    let mut pagination = Pagination::new(120);
    pagination.set_items_per_page(10);
    pagination.set_page(6);
    assert_eq!(pagination_footer(&pagination), "Showing 51-60 of 120   1 ... 4 5 [6] 7 8 ... 12");
  }

  #[test]
  fn test_table_has_titles() {
    let mut t = table(&["Coin", "Price"]);
    t.add_row(Row::new(vec![text("Bitcoin"), number("$64,000")]));
    let rendered = t.to_string();
    assert!(rendered.contains("Coin"));
    assert!(rendered.contains("$64,000"));
  }
}
