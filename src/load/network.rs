//! Outbound network probe.

/// Result of one outbound probe. Network failure is an expected outcome
/// here, not an error: the caller reports it in a normal response.
#[derive(Debug)]
pub enum ProbeOutcome {
    Completed { status: u16 },
    Failed { reason: String },
}

/// Issue a single GET against `url` using `client`.
///
/// The client carries the hard timeout, so a hanging target resolves to
/// `Failed` within the configured bound rather than stalling the request.
pub async fn probe(client: &reqwest::Client, url: &str) -> ProbeOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            tracing::debug!(url, status, "Outbound probe completed");
            ProbeOutcome::Completed { status }
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "Outbound probe failed");
            ProbeOutcome::Failed { reason: e.to_string() }
        }
    }
}

/// Host label for the response message, falling back to the raw URL when it
/// does not parse.
pub fn target_label(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_string())
}
