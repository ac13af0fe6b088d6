//! Movie and series scrape pipelines.
//!
//! Each pipeline walks the listing pages of its section, derives the
//! section-specific fields from every card's info block, enriches the
//! accumulated links with one sequential detail-fetch pass and writes the
//! final CSV table. Nothing runs at load time; all work happens inside the
//! `run_*_pipeline` functions.
//!
//! The default behavior is fail-fast: the first transport, parse or write
//! error aborts the pipeline with no partial output. With
//! [`ScrapeConfig::tolerant`] set, an unusable card is skipped and a failed
//! detail page degrades to `N/A` fields, each with a warning.

use std::path::{Path, PathBuf};

use crate::client::{ClientConfig, GokuClient};
use crate::error::{GokuError, Result};
use crate::scraper::{GokuScraper, Section, DEFAULT_BASE_URL};
use crate::types::DetailRecord;
use crate::writer::write_table;

/// Output file name for the movie pipeline
pub const MOVIES_FILE: &str = "last_movies.csv";
/// Output file name for the series pipeline
pub const SERIES_FILE: &str = "last_series.csv";

/// Column headers of the movie table, in output order
pub const MOVIE_HEADERS: [&str; 8] = [
    "movie_name",
    "category",
    "movie_rate",
    "description",
    "country",
    "date",
    "duration",
    "movie_link",
];

/// Column headers of the series table, in output order
pub const SERIES_HEADERS: [&str; 8] = [
    "serie_name",
    "season_episode",
    "category",
    "serie_rate",
    "description",
    "country",
    "duration",
    "movie_link",
];

/// Configuration for both pipelines.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site origin without a trailing slash
    pub base_url: String,
    /// Last movie listing page to fetch; pages 0..=movie_pages are walked
    pub movie_pages: u32,
    /// Last series listing page to fetch; pages 0..=series_pages are walked
    pub series_pages: u32,
    /// Directory the CSV files are written into
    pub out_dir: PathBuf,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Skip unusable cards and degrade failed detail pages to `N/A`
    /// instead of aborting
    pub tolerant: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            movie_pages: 6,
            series_pages: 2,
            out_dir: PathBuf::from("."),
            timeout_secs: 30,
            tolerant: false,
        }
    }
}

/// Scrape the movie listings and write `last_movies.csv`.
///
/// Walks pages `0..=movie_pages`, derives each card's date and duration
/// from the info block (split on a blank line), fetches every detail page
/// and writes the table. The detail pages' duration value is discarded;
/// the listing-derived one wins.
///
/// # Returns
/// Path of the written CSV file.
pub async fn run_movie_pipeline(config: &ScrapeConfig) -> Result<PathBuf> {
    let scraper = build_scraper(config)?;

    let mut names = Vec::new();
    let mut ratings = Vec::new();
    let mut dates = Vec::new();
    let mut durations = Vec::new();
    let mut links = Vec::new();

    for page in 0..=config.movie_pages {
        let items = scraper.fetch_listing_page(Section::Movies, page).await?;
        let count = items.len();

        for item in items {
            let (date, duration) = match split_movie_info(&item.info) {
                Ok(parts) => parts,
                Err(e) if config.tolerant => {
                    tracing::warn!(name = %item.name, error = %e, "skipping card with unusable info block");
                    continue;
                }
                Err(e) => return Err(e),
            };
            names.push(item.name);
            ratings.push(item.rating);
            dates.push(date);
            durations.push(duration);
            links.push(item.link);
        }

        tracing::info!(page, items = count, "movies page processed");
    }

    let details = collect_details(&scraper, &links, config.tolerant).await?;
    let (descriptions, genres, countries, _detail_durations) = split_details(details);

    let path = config.out_dir.join(MOVIES_FILE);
    write_table(
        &path,
        &MOVIE_HEADERS,
        &[
            names,
            genres,
            ratings,
            descriptions,
            countries,
            dates,
            durations,
            links,
        ],
    )?;
    log_written(&path);
    Ok(path)
}

/// Scrape the TV series listings and write `last_series.csv`.
///
/// Walks pages `0..=series_pages`, derives each card's season/episode
/// indicator from the second line of the info block, fetches every detail
/// page and writes the table. Unlike the movie pipeline the duration column
/// comes from the detail pages.
///
/// # Returns
/// Path of the written CSV file.
pub async fn run_series_pipeline(config: &ScrapeConfig) -> Result<PathBuf> {
    let scraper = build_scraper(config)?;

    let mut names = Vec::new();
    let mut ratings = Vec::new();
    let mut episodes = Vec::new();
    let mut links = Vec::new();

    for page in 0..=config.series_pages {
        let items = scraper.fetch_listing_page(Section::TvSeries, page).await?;
        let count = items.len();

        for item in items {
            let episode = match split_series_info(&item.info) {
                Ok(episode) => episode,
                Err(e) if config.tolerant => {
                    tracing::warn!(name = %item.name, error = %e, "skipping card with unusable info block");
                    continue;
                }
                Err(e) => return Err(e),
            };
            names.push(item.name);
            ratings.push(item.rating);
            episodes.push(episode);
            links.push(item.link);
        }

        tracing::info!(page, items = count, "series page processed");
    }

    let details = collect_details(&scraper, &links, config.tolerant).await?;
    let (descriptions, genres, countries, durations) = split_details(details);

    let path = config.out_dir.join(SERIES_FILE);
    write_table(
        &path,
        &SERIES_HEADERS,
        &[
            names,
            episodes,
            genres,
            ratings,
            descriptions,
            countries,
            durations,
            links,
        ],
    )?;
    log_written(&path);
    Ok(path)
}

fn build_scraper(config: &ScrapeConfig) -> Result<GokuScraper> {
    let client = GokuClient::with_config(ClientConfig {
        timeout_secs: config.timeout_secs,
    })?;
    Ok(GokuScraper::with_client(client, config.base_url.clone()))
}

/// Split a movie card's info block into (date, duration).
///
/// The block bundles both fields separated by a blank line, e.g.
/// `"2024-01-01\n\n120 min"`.
fn split_movie_info(info: &str) -> Result<(String, String)> {
    let mut segments = info.split("\n\n");
    let date = segments.next().unwrap_or_default().trim().to_string();
    let duration = segments
        .next()
        .ok_or_else(|| GokuError::ParseError(format!("no duration segment in {info:?}")))?
        .trim()
        .to_string();
    Ok((date, duration))
}

/// Extract the season/episode indicator, the second line of the info block,
/// e.g. `"Season 1\nEpisode 5"`.
fn split_series_info(info: &str) -> Result<String> {
    info.split('\n')
        .nth(1)
        .map(|line| line.trim().to_string())
        .ok_or_else(|| GokuError::ParseError(format!("no episode line in {info:?}")))
}

/// Fetch details for all links; in tolerant mode a failed page becomes an
/// all-`N/A` record instead of aborting the batch.
async fn collect_details(
    scraper: &GokuScraper,
    links: &[String],
    tolerant: bool,
) -> Result<Vec<DetailRecord>> {
    if !tolerant {
        return scraper.fetch_details(links).await;
    }

    let mut records = Vec::with_capacity(links.len());
    for link in links {
        match scraper.fetch_detail(link).await {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(link = %link, error = %e, "detail fetch failed, substituting N/A");
                records.push(DetailRecord::not_available());
            }
        }
    }
    Ok(records)
}

type DetailColumns = (Vec<String>, Vec<String>, Vec<String>, Vec<String>);

/// Turn detail records into (descriptions, genres, countries, durations)
/// column vectors.
fn split_details(details: Vec<DetailRecord>) -> DetailColumns {
    let mut descriptions = Vec::with_capacity(details.len());
    let mut genres = Vec::with_capacity(details.len());
    let mut countries = Vec::with_capacity(details.len());
    let mut durations = Vec::with_capacity(details.len());

    for detail in details {
        descriptions.push(detail.description);
        genres.push(detail.genre);
        countries.push(detail.country);
        durations.push(detail.duration);
    }

    (descriptions, genres, countries, durations)
}

fn log_written(path: &Path) {
    tracing::info!(path = %path.display(), "table written");
}
