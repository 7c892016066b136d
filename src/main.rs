// wkstats entry point.
// Loads level-progression data (from cache or the API), computes per-level
// durations, and runs the chart UI.

mod app;
mod cache;
mod error;
mod stats;
mod ui;
mod wanikani;

use std::process::ExitCode;

use chrono::Utc;

use crate::app::{App, DataSource};
use crate::error::{Result, WkError};
use crate::wanikani::WaniKaniClient;

const ENDPOINT: &str = "level_progressions";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wkstats: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let refresh = std::env::args().any(|arg| arg == "--refresh");

    let path = cache::paths::endpoint_path(ENDPOINT)
        .ok_or_else(|| WkError::Other("could not determine a cache directory".to_string()))?;

    let (pages, source) = if refresh || !cache::store::exists(&path) {
        let client = WaniKaniClient::from_env()?;
        let pages = client.fetch_collection(ENDPOINT).await?;
        cache::store::write_pages(&path, &pages)?;
        (pages, DataSource::Api)
    } else {
        let pages = cache::store::read_pages(&path, ENDPOINT)?;
        (pages, DataSource::Cache(path))
    };

    // Capture "now" once so every open-ended duration uses the same end bound.
    let chart = stats::level_durations(&pages, Utc::now());

    let mut terminal = ratatui::init();
    let result = App::new(chart, source).run(&mut terminal);
    ratatui::restore();

    result.map_err(WkError::Io)
}
