/*---------- Imports ----------*/
use reqwest::header::InvalidHeaderValue;
use std::error::Error;

/// Everything that can go wrong while relaying a cadence import.
///
/// The relay collapses all of these into a single `500` response; the
/// `Display` output becomes the `error` field of that response.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Invalid authorization header: {0}")]
    InvalidAuthorization(#[from] InvalidHeaderValue),

    #[error("{}", with_causes(.0))]
    Upstream(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Top-level message followed by each distinct cause, `": "`-separated.
/// reqwest's own message is the same for timeouts, refused connections and
/// DNS failures; the causes are what tell them apart.
fn with_causes(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();

        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }

        source = cause.source();
    }

    message
}
