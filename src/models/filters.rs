//! Feed filter selection and pagination cursor.

use std::str::FromStr;

use crate::config::PAGE_SIZE;
use crate::models::{Category, PostType};

/// Current values of the four feed filters.
///
/// Present fields are AND-combined. A product filter takes precedence over
/// a company filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub company_id: Option<i64>,
    pub product_id: Option<i64>,
    pub category: Option<Category>,
    pub post_type: Option<PostType>,
    /// A control holds a value no record can carry, so nothing matches.
    pub unmatchable: bool,
}

impl FilterSelection {
    /// Build a selection from raw control values.
    ///
    /// An empty value means "no filter" for that field, the same as the
    /// "All ..." option of the dropdowns. A non-empty value that is not a
    /// valid id or label still filters, and matches no post.
    pub fn from_controls(company: &str, product: &str, category: &str, post_type: &str) -> Self {
        let mut unmatchable = false;
        let company_id = parse_control(company, &mut unmatchable);
        let product_id = parse_control(product, &mut unmatchable);
        let category = parse_control(category, &mut unmatchable);
        let post_type = parse_control(post_type, &mut unmatchable);
        Self {
            company_id,
            product_id,
            category,
            post_type,
            unmatchable,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse one control value. Empty means unset; garbage flags `unmatchable`.
fn parse_control<T: FromStr>(raw: &str, unmatchable: &mut bool) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = raw.parse().ok();
    *unmatchable |= parsed.is_none();
    parsed
}

/// Offset-based pagination cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    /// Whether another page may exist. Inferred from the last page being full.
    pub has_more: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(limit: usize) -> Self {
        Self {
            offset: 0,
            limit,
            has_more: true,
        }
    }

    /// Rewind to the first page.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.has_more = true;
    }

    /// Record a fetched page of `len` records.
    ///
    /// The offset advances by what was actually returned, so a short final
    /// page stops further loading.
    pub fn record_page(&mut self, len: usize) {
        self.has_more = len == self.limit;
        self.offset += len;
    }
}
