//! Detail page parser for goku.sx
//!
//! Extracts description, genre, country and duration from a single title's
//! page. Genre, country and duration come from the page's ordered `div.value`
//! elements at fixed positions; the site renders the same label/value grid on
//! every detail page.

use scraper::Html;

use crate::error::{GokuError, Result};
use crate::text::normalize;
use crate::types::{DetailRecord, N_A};

use super::selector;

/// Synopsis element
const SYNOPSIS_SELECTOR: &str = "div.text-cut";
/// Ordered value elements of the info grid
const VALUE_SELECTOR: &str = "div.value";

/// Position of the genre value in the grid
const GENRE_INDEX: usize = 0;
/// Position of the country value in the grid
const COUNTRY_INDEX: usize = 3;
/// Position of the duration value in the grid (absent on some pages)
const DURATION_INDEX: usize = 4;

/// Parse a detail page.
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page
///
/// # Returns
/// * `Ok(DetailRecord)` with located fields, `"N/A"` for anything absent
/// * `Err(GokuError::MalformedPage)` if the page has some value elements but
///   fewer than the four the grid layout guarantees
pub fn parse_detail(html: &str) -> Result<DetailRecord> {
    let document = Html::parse_document(html);

    let synopsis = selector(SYNOPSIS_SELECTOR)?;
    let description = document
        .select(&synopsis)
        .next()
        .map(|el| normalize(&el.text().collect::<String>()))
        .unwrap_or_else(|| N_A.to_string());

    let value_sel = selector(VALUE_SELECTOR)?;
    let values: Vec<String> = document
        .select(&value_sel)
        .map(|el| normalize(&el.text().collect::<String>()))
        .collect();

    // No grid at all: every positional field degrades to the sentinel.
    if values.is_empty() {
        return Ok(DetailRecord {
            description,
            genre: N_A.to_string(),
            country: N_A.to_string(),
            duration: N_A.to_string(),
        });
    }

    // A partial grid would make the positional reads lie; refuse it.
    if values.len() <= COUNTRY_INDEX {
        return Err(GokuError::MalformedPage(format!(
            "expected at least {} value elements, found {}",
            COUNTRY_INDEX + 1,
            values.len()
        )));
    }

    Ok(DetailRecord {
        description,
        genre: values[GENRE_INDEX].clone(),
        country: values[COUNTRY_INDEX].clone(),
        duration: values
            .get(DURATION_INDEX)
            .cloned()
            .unwrap_or_else(|| N_A.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <html><body>
            <div class="text-cut">
                A thief who steals corporate secrets
                through dream-sharing technology.
            </div>
            <div class="value">Sci-Fi, Action</div>
            <div class="value">2010-07-16</div>
            <div class="value">Christopher Nolan</div>
            <div class="value">United States</div>
            <div class="value">148 min</div>
        </body></html>
    "#;

    #[test]
    fn test_parse_detail_full_page() {
        let record = parse_detail(FULL_PAGE).unwrap();
        assert_eq!(
            record.description,
            "A thief who steals corporate secrets through dream-sharing technology."
        );
        assert_eq!(record.genre, "Sci-Fi, Action");
        assert_eq!(record.country, "United States");
        assert_eq!(record.duration, "148 min");
    }

    #[test]
    fn test_parse_detail_four_values_no_duration() {
        let html = r#"
            <div class="text-cut">Synopsis.</div>
            <div class="value">Drama</div>
            <div class="value">1995</div>
            <div class="value">Michael Mann</div>
            <div class="value">United States</div>
        "#;
        let record = parse_detail(html).unwrap();
        assert_eq!(record.genre, "Drama");
        assert_eq!(record.country, "United States");
        assert_eq!(record.duration, "N/A");
    }

    #[test]
    fn test_parse_detail_no_values_all_sentinels() {
        let html = r#"<div class="text-cut">Only a synopsis.</div>"#;
        let record = parse_detail(html).unwrap();
        assert_eq!(record.description, "Only a synopsis.");
        assert_eq!(record.genre, "N/A");
        assert_eq!(record.country, "N/A");
        assert_eq!(record.duration, "N/A");
    }

    #[test]
    fn test_parse_detail_missing_synopsis() {
        let html = r#"
            <div class="value">Drama</div>
            <div class="value">1995</div>
            <div class="value">Someone</div>
            <div class="value">France</div>
            <div class="value">90 min</div>
        "#;
        let record = parse_detail(html).unwrap();
        assert_eq!(record.description, "N/A");
        assert_eq!(record.country, "France");
    }

    #[test]
    fn test_parse_detail_partial_grid_is_malformed() {
        let html = r#"
            <div class="value">Drama</div>
            <div class="value">1995</div>
        "#;
        let err = parse_detail(html).unwrap_err();
        assert!(matches!(err, GokuError::MalformedPage(_)));
        assert!(err.to_string().contains("found 2"));
    }
}
