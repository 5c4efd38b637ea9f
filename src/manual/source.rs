// src/manual/source.rs
use std::time::Duration;

use reqwest::header;

use crate::utils::error::SourceError;

// Hosted manuals are small; a stalled fetch is a failure, not a wait.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Creates a reqwest client configured for fetching hosted manuals.
fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

/// Loads the manual text from `location`, which is either an `http(s)://`
/// URL or a local filesystem path.
pub async fn load_manual(location: &str) -> Result<String, SourceError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        fetch_manual(location).await
    } else {
        tracing::info!("Reading manual from file: {}", location);
        let text = tokio::fs::read_to_string(location).await?;
        tracing::debug!("Read {} bytes from {}", text.len(), location);
        Ok(text)
    }
}

/// Downloads a hosted manual document from its URL.
async fn fetch_manual(url: &str) -> Result<String, SourceError> {
    let client = build_http_client()?; // Propagate client build error if any

    tracing::info!("Downloading manual from: {}", url);

    let response = client
        .get(url)
        .header(header::ACCEPT, "text/markdown,text/plain,*/*")
        .send()
        .await?; // Propagates reqwest::Error as SourceError::Network

    // Check if the request was successful (status code 2xx)
    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!("Received 404 Not Found for URL: {}", url);
            return Err(SourceError::DocNotFound(url.to_string()));
        }
        return Err(SourceError::Http(status));
    }

    let body = response.text().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_manual_from_local_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "# UNIT 1.1: Greeting guests\nSmile first.\n").expect("write");

        let text = tokio_test::block_on(load_manual(
            file.path().to_str().expect("temp path is utf-8"),
        ))
        .expect("local file should load");
        assert!(text.starts_with("# UNIT 1.1:"));
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let result = tokio_test::block_on(load_manual("/nonexistent/manual.md"));
        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
