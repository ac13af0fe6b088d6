//! Listing page parser for goku.sx
//!
//! Parses a paginated listing page into one [`ListingItem`] per title card.
//!
//! The extraction is deliberately per-card: we iterate `div.item` containers
//! and query name, rating, info block and link inside each one, so the four
//! field sequences stay aligned even if a card is incomplete (that raises an
//! error instead of silently shifting later columns).

use scraper::{ElementRef, Html};

use crate::error::{GokuError, Result};
use crate::types::ListingItem;

use super::selector;

/// Container element for one title card
const ITEM_SELECTOR: &str = "div.item";
/// Title name inside a card
const NAME_SELECTOR: &str = "h3.movie-name";
/// Rating text inside a card
const RATING_SELECTOR: &str = "div.is-rated";
/// Info block inside a card (date/duration or season/episode)
const INFO_SELECTOR: &str = "div.info-split";
/// Link to the detail page inside a card
const LINK_SELECTOR: &str = "a.movie-link";

/// Parse a listing page into its title cards.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
/// * `origin` - Site origin prefixed to each card's relative href
///   (e.g., `https://goku.sx`)
///
/// # Returns
/// * `Ok(Vec<ListingItem>)` — one item per card, document order; empty if
///   the page has no cards
/// * `Err(GokuError::ElementNotFound)` — a card is missing one of its four
///   required pieces
pub fn parse_listing(html: &str, origin: &str) -> Result<Vec<ListingItem>> {
    let document = Html::parse_document(html);
    let cards = selector(ITEM_SELECTOR)?;

    let mut items = Vec::new();
    for card in document.select(&cards) {
        items.push(parse_card(&card, origin)?);
    }

    Ok(items)
}

/// Extract all four fields from a single card element.
fn parse_card(card: &ElementRef, origin: &str) -> Result<ListingItem> {
    let name = required_text(card, NAME_SELECTOR)?;
    let rating = required_text(card, RATING_SELECTOR)?;
    // Trimmed but NOT normalized: the pipelines split this on its newlines.
    let info = required_text(card, INFO_SELECTOR)?;

    let link_sel = selector(LINK_SELECTOR)?;
    let link_el = card
        .select(&link_sel)
        .next()
        .ok_or_else(|| GokuError::ElementNotFound(LINK_SELECTOR.to_string()))?;
    let href = link_el
        .value()
        .attr("href")
        .ok_or_else(|| GokuError::ElementNotFound(format!("{LINK_SELECTOR}[href]")))?;
    let link = format!("{}{}", origin, href.trim());

    Ok(ListingItem {
        name,
        rating,
        info,
        link,
    })
}

/// Trimmed text of the first element matching `css` inside the card.
fn required_text(card: &ElementRef, css: &str) -> Result<String> {
    let sel = selector(css)?;
    let element = card
        .select(&sel)
        .next()
        .ok_or_else(|| GokuError::ElementNotFound(css.to_string()))?;
    Ok(element.text().collect::<String>().trim().to_string())
}
