//! Shared HTTP response handling for store clients.

use crate::error::StoreError;

/// Reads a response body, turning non-success statuses into [`StoreError::Api`].
///
/// The body text is kept as the error message so the store's own explanation
/// reaches the logs.
pub async fn read_body(resp: reqwest::Response) -> Result<String, StoreError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(StoreError::api(status.as_u16(), summarize(&body)));
    }
    Ok(body)
}

/// Limits an error body to something that fits on one log line.
fn summarize(body: &str) -> String {
    const MAX_CHARS: usize = 300;

    let single_line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= MAX_CHARS {
        return single_line;
    }
    let truncated: String = single_line.chars().take(MAX_CHARS).collect();
    format!("{}…", truncated)
}
