//! HTML parsers for goku.sx pages
//!
//! This module contains parsers for extracting data from goku.sx HTML:
//! - `listing`: Parse a paginated listing page into title cards
//! - `detail`: Parse a single title's detail page

pub mod detail;
pub mod listing;

// Re-export main parsing functions
pub use detail::parse_detail;
pub use listing::parse_listing;

use scraper::Selector;

use crate::error::{GokuError, Result};

/// Compile a CSS selector, mapping the (static) parse error into ours.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| GokuError::ElementNotFound(format!("invalid selector {css}: {e:?}")))
}
