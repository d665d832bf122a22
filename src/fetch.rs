use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

pub const FILMS_URL: &str = "https://en.wikipedia.org/wiki/List_of_highest-grossing_films";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; boxoffice_scraper/0.1)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch the films page. Non-2xx responses and timeouts are fatal; no retry.
pub async fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    info!("Fetching page: {}", url);
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .context("Failed to fetch films page")?;

    Ok(body)
}
