//! Text cleanup helpers.

/// Collapse every run of whitespace (spaces, newlines, tabs) into a single
/// space and trim the ends. Applied to free-text fields before they are
/// stored; the raw info block is the one field that skips this, since its
/// newlines carry meaning.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
