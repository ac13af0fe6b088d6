//! Data types for the goku.sx scraper
//!
//! This module contains the records moved between the fetchers and the
//! pipelines. All types implement Serialize and Deserialize for JSON
//! compatibility.

use serde::{Deserialize, Serialize};

/// Placeholder written whenever a field cannot be located on a page
pub const N_A: &str = "N/A";

/// One title card extracted from a listing page.
///
/// All four fields come from the same `div.item` container, so a page with
/// N cards always yields N complete items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Display name of the title
    pub name: String,
    /// Rating text as shown on the card (e.g., "7.5")
    pub rating: String,
    /// Raw info block; date/duration for movies, season/episode for series.
    /// Interior newlines are preserved for later splitting.
    pub info: String,
    /// Absolute URL of the title's detail page
    pub link: String,
}

/// Fields extracted from a single detail page.
///
/// Any field that cannot be located is the `N_A` sentinel rather than an
/// Option, matching what ends up in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Synopsis text, whitespace-normalized
    pub description: String,
    /// First value element on the page
    pub genre: String,
    /// Fourth value element on the page
    pub country: String,
    /// Fifth value element: runtime for movies, episode runtime for series
    pub duration: String,
}

impl DetailRecord {
    /// Record with every field set to the `N_A` sentinel.
    pub fn not_available() -> Self {
        Self {
            description: N_A.to_string(),
            genre: N_A.to_string(),
            country: N_A.to_string(),
            duration: N_A.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_item_serialization() {
        let item = ListingItem {
            name: "Inception".to_string(),
            rating: "8.8".to_string(),
            info: "2010\n\n148 min".to_string(),
            link: "https://goku.sx/movie/watch-inception".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: ListingItem = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, item);
    }

    #[test]
    fn test_detail_record_not_available() {
        let record = DetailRecord::not_available();
        assert_eq!(record.description, "N/A");
        assert_eq!(record.genre, "N/A");
        assert_eq!(record.country, "N/A");
        assert_eq!(record.duration, "N/A");
    }
}
