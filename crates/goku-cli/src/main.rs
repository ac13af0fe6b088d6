//! Command line frontend: runs the movie and series pipelines.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use goku_core::{run_movie_pipeline, run_series_pipeline, ScrapeConfig, DEFAULT_BASE_URL};

/// Scrape the goku.sx listings into CSV tables
#[derive(Parser, Debug)]
#[command(name = "goku-scrape")]
#[command(about = "Scrapes the goku.sx movie and TV series listings into last_movies.csv and last_series.csv")]
struct Args {
    /// Last movie listing page to fetch (pages 0..=N are walked)
    #[arg(long, default_value_t = 6)]
    movie_pages: u32,

    /// Last series listing page to fetch (pages 0..=N are walked)
    #[arg(long, default_value_t = 2)]
    series_pages: u32,

    /// Directory the CSV files are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Site origin to scrape
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP request timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,

    /// Skip unusable listing cards and degrade failed detail pages to N/A
    /// instead of aborting
    #[arg(long)]
    tolerant: bool,

    /// Skip the movie pipeline
    #[arg(long)]
    skip_movies: bool,

    /// Skip the series pipeline
    #[arg(long)]
    skip_series: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = ScrapeConfig {
        base_url: args.base_url,
        movie_pages: args.movie_pages,
        series_pages: args.series_pages,
        out_dir: args.out_dir,
        timeout_secs: args.timeout,
        tolerant: args.tolerant,
    };

    if !args.skip_movies {
        let path = run_movie_pipeline(&config).await?;
        tracing::info!(path = %path.display(), "movie scrape complete");
    }

    if !args.skip_series {
        let path = run_series_pipeline(&config).await?;
        tracing::info!(path = %path.display(), "series scrape complete");
    }

    Ok(())
}
