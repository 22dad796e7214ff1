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

//! Client-side pagination of loaded lists

use std::fmt;

/// Page sizes offered to the user
pub const ITEMS_PER_PAGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Pages shown either side of the current one
const WIDE_DELTA: usize = 2;
const COMPACT_DELTA: usize = 1;

/// One slot in the page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
  Page(usize),
  Ellipsis,
}

impl fmt::Display for PageItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PageItem::Page(n) => write!(f, "{}", n),
      PageItem::Ellipsis => write!(f, "..."),
    }
  }
}

/// Pagination state over `total_items` entries. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  current_page: usize,
  items_per_page: usize,
  total_items: usize,
}

impl Pagination {
  pub fn new(total_items: usize) -> Self {
    Self { current_page: 1, items_per_page: DEFAULT_ITEMS_PER_PAGE, total_items }
  }

  pub fn current_page(&self) -> usize {
    self.current_page
  }

  pub fn items_per_page(&self) -> usize {
    self.items_per_page
  }

  pub fn total_items(&self) -> usize {
    self.total_items
  }

  pub fn total_pages(&self) -> usize {
    self.total_items.div_ceil(self.items_per_page)
  }

  /// Jump to a page, clamped into `1..=total_pages`
  pub fn set_page(&mut self, page: usize) {
    self.current_page = page.clamp(1, self.total_pages().max(1));
  }

  /// Change the page size and go back to the first page
  pub fn set_items_per_page(&mut self, items_per_page: usize) {
    self.items_per_page = items_per_page.max(1);
    self.current_page = 1;
  }

  /// Update the item count after a reload, keeping the page when it still exists
  pub fn set_total_items(&mut self, total_items: usize) {
    self.total_items = total_items;
    self.set_page(self.current_page);
  }

  /// Index range of the current page
  pub fn range(&self) -> std::ops::Range<usize> {
    let start = (self.current_page - 1) * self.items_per_page;
    let end = (start + self.items_per_page).min(self.total_items);
    start.min(end)..end
  }

  /// The items of the current page
  pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
    let range = self.range();
    let end = range.end.min(items.len());
    &items[range.start.min(end)..end]
  }

  /// `Showing 26-50 of 120`
  pub fn summary(&self) -> String {
    let start = (self.current_page - 1) * self.items_per_page + 1;
    let end = (self.current_page * self.items_per_page).min(self.total_items);
    format!("Showing {}-{} of {}", start, end, self.total_items)
  }

  /// Page selector with ellipses. `compact` narrows the window for small screens.
  pub fn visible_pages(&self, compact: bool) -> Vec<PageItem> {
    let total = self.total_pages();
    if total <= 1 {
      return vec![PageItem::Page(1)];
    }

    let delta = if compact { COMPACT_DELTA } else { WIDE_DELTA };
    let current = self.current_page;
    let mut items = vec![PageItem::Page(1)];

    if current > delta + 2 {
      items.push(PageItem::Ellipsis);
    }

    let first = current.saturating_sub(delta).max(2);
    let last = (current + delta).min(total - 1);
    items.extend((first..=last).map(PageItem::Page));

    if current + delta < total - 1 {
      items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
  }
}

impl Default for Pagination {
  fn default() -> Self {
    Self::new(0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use PageItem::{Ellipsis, Page};

  fn at(total_items: usize, per_page: usize, page: usize) -> Pagination {
    let mut p = Pagination::new(total_items);
    p.set_items_per_page(per_page);
    p.set_page(page);
    p
  }

  #[test]
  fn test_total_pages_rounds_up() {
    assert_eq!(at(100, 25, 1).total_pages(), 4);
    assert_eq!(at(101, 25, 1).total_pages(), 5);
    assert_eq!(at(0, 25, 1).total_pages(), 0);
  }

  #[test]
  fn test_window_in_the_middle() {
    assert_eq!(
      at(200, 10, 10).visible_pages(false),
      vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
    );
    assert_eq!(
      at(200, 10, 10).visible_pages(true),
      vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
    );
  }

  #[test]
  fn test_window_at_the_edges() {
    assert_eq!(
      at(200, 10, 1).visible_pages(false),
      vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
    );
    assert_eq!(
      at(200, 10, 20).visible_pages(false),
      vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
    );
    assert_eq!(at(50, 10, 3).visible_pages(false), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
  }

  #[test]
  fn test_single_page_shows_once() {
    assert_eq!(at(7, 25, 1).visible_pages(false), vec![Page(1)]);
    assert_eq!(at(30, 25, 2).visible_pages(false), vec![Page(1), Page(2)]);
  }

  #[test]
  fn test_slice_and_summary() {
    let items: Vec<u32> = (1..=60).collect();
    let p = at(items.len(), 25, 3);
    assert_eq!(p.slice(&items), &[51, 52, 53, 54, 55, 56, 57, 58, 59, 60]);
    assert_eq!(p.summary(), "Showing 51-60 of 60");
    assert_eq!(at(60, 25, 1).summary(), "Showing 1-25 of 60");
  }

  #[test]
  fn test_page_size_change_resets_page() {
    let mut p = at(300, 10, 7);
    p.set_items_per_page(ITEMS_PER_PAGE_OPTIONS[3]);
    assert_eq!(p.current_page(), 1);
    assert_eq!(p.total_pages(), 3);
  }

  #[test]
  fn test_shrinking_list_clamps_page() {
    let mut p = at(100, 10, 9);
    p.set_total_items(35);
    assert_eq!(p.current_page(), 4);
  }
}
