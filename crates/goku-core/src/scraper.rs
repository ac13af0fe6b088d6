//! Main goku.sx scraper API
//!
//! Combines the HTTP client with the parsers: builds listing-page URLs,
//! fetches pages and turns them into records. Everything here is strictly
//! sequential; each request is awaited before the next one starts.

use crate::client::GokuClient;
use crate::error::Result;
use crate::parser::{parse_detail, parse_listing};
use crate::types::{DetailRecord, ListingItem};

/// Production site origin
pub const DEFAULT_BASE_URL: &str = "https://goku.sx";

/// Listing section of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `/movies` listing
    Movies,
    /// `/tv-series` listing
    TvSeries,
}

impl Section {
    /// Path of the section's listing endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Section::Movies => "/movies",
            Section::TvSeries => "/tv-series",
        }
    }
}

/// High-level scraper over one site origin.
///
/// The origin is configurable so tests can point the scraper at a local
/// mock server; detail links extracted from listings are prefixed with the
/// same origin and resolve there too.
///
/// # Example
/// ```no_run
/// use goku_core::{GokuScraper, Section};
///
/// #[tokio::main]
/// async fn main() -> Result<(), goku_core::GokuError> {
///     let scraper = GokuScraper::new()?;
///     let items = scraper.fetch_listing_page(Section::Movies, 0).await?;
///     println!("{} titles on page 0", items.len());
///     Ok(())
/// }
/// ```
pub struct GokuScraper {
    client: GokuClient,
    base_url: String,
}

impl GokuScraper {
    /// Create a scraper against the production site with a default client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(GokuClient::new()?, DEFAULT_BASE_URL))
    }

    /// Create a scraper with a pre-configured client and site origin.
    ///
    /// # Arguments
    /// * `client` - Pre-configured [`GokuClient`]
    /// * `base_url` - Site origin without a trailing slash
    pub fn with_client(client: GokuClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Site origin this scraper targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and parse one listing page of a section.
    ///
    /// # Arguments
    /// * `section` - Movies or TV series listing
    /// * `page` - Zero-based page number, appended as `?page=N`
    ///
    /// # Errors
    /// * `GokuError::HttpError` on transport failure or non-success status
    /// * `GokuError::ElementNotFound` if a card on the page is incomplete
    pub async fn fetch_listing_page(&self, section: Section, page: u32) -> Result<Vec<ListingItem>> {
        let url = format!("{}{}?page={}", self.base_url, section.path(), page);
        let html = self.client.fetch(&url).await?;
        parse_listing(&html, &self.base_url)
    }

    /// Fetch and parse one detail page.
    pub async fn fetch_detail(&self, link: &str) -> Result<DetailRecord> {
        let html = self.client.fetch(link).await?;
        parse_detail(&html)
    }

    /// Fetch detail records for every link, one request at a time, in the
    /// order given. The first failure aborts the whole batch.
    pub async fn fetch_details(&self, links: &[String]) -> Result<Vec<DetailRecord>> {
        let mut records = Vec::with_capacity(links.len());
        for link in links {
            records.push(self.fetch_detail(link).await?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_paths() {
        assert_eq!(Section::Movies.path(), "/movies");
        assert_eq!(Section::TvSeries.path(), "/tv-series");
    }

    #[test]
    fn test_scraper_with_custom_origin() {
        let client = GokuClient::new().unwrap();
        let scraper = GokuScraper::with_client(client, "http://127.0.0.1:9999");
        assert_eq!(scraper.base_url(), "http://127.0.0.1:9999");
    }
}
