use chrono::Utc;

use super::result::{ProbeResult, Status};

/// Issue one GET against the target and classify the outcome.
///
/// The timestamp is captured before the request goes out. The request is
/// bounded by the timeout configured on `client`; a probe that exceeds it
/// counts as DOWN like any other failure. Nothing escapes as an error —
/// timeout, refused connection and non-200 status all collapse into the
/// DOWN classification.
pub async fn probe_once(client: &reqwest::Client, url: &str) -> ProbeResult {
    let timestamp_ms = Utc::now().timestamp_millis();

    let status = match client.get(url).send().await {
        Ok(response) if response.status().as_u16() == 200 => Status::Up,
        Ok(_) => Status::Down,
        Err(_) => Status::Down,
    };

    ProbeResult {
        timestamp_ms,
        status,
    }
}
