// Fetches the source page. The parser is indifferent to where the
// document came from; this is the only network touchpoint.
use anyhow::{Context, Result};
use std::time::Duration;

const USER_AGENT: &str = concat!("lightcal/", env!("CARGO_PKG_VERSION"));

/// GET the page body as text. HTTP error statuses are errors: with no
/// document there is nothing to parse, unlike the parser's own
/// zero-record outcome.
pub async fn fetch_page(url: &str, timeout_secs: u64) -> Result<String> {
    log::info!("Fetching page from {}", url);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let body = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Request to {} returned an error status", url))?
        .text()
        .await
        .context("Failed to read response body")?;

    log::info!("Fetched {} characters", body.len());
    Ok(body)
}
