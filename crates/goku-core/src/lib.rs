//! goku.sx Scraper Core Library
//!
//! This crate scrapes the goku.sx movie and TV series listings into two
//! flat CSV tables.
//!
//! # Features
//! - Walk the paginated `/movies` and `/tv-series` listings
//! - Extract per-card name, rating, info block and detail link
//! - Enrich every title from its detail page (description, genre, country,
//!   duration)
//! - Write `last_movies.csv` / `last_series.csv` with fixed column orders
//!
//! All fetching is sequential and fail-fast; see [`pipeline::ScrapeConfig`]
//! for the tolerant opt-in.

pub mod client;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod scraper;
pub mod text;
pub mod types;
pub mod writer;

// Re-export main types for convenience
pub use client::{ClientConfig, GokuClient};
pub use error::{GokuError, Result};
pub use pipeline::{
    run_movie_pipeline, run_series_pipeline, ScrapeConfig, MOVIES_FILE, MOVIE_HEADERS,
    SERIES_FILE, SERIES_HEADERS,
};
pub use scraper::{GokuScraper, Section, DEFAULT_BASE_URL};
pub use text::normalize;
pub use types::{DetailRecord, ListingItem, N_A};
pub use writer::write_table;
