use reqwest::StatusCode;

/// Why a forecast fetch failed. Every variant is recoverable: the dashboard
/// shows the message and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Could not reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather service answered with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Weather service returned an unexpected response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid forecast endpoint '{0}'")]
    InvalidEndpoint(String),
}

impl ForecastError {
    /// Build a status error, keeping only the start of the body.
    pub fn status(status: StatusCode, body: &str) -> Self {
        Self::Status {
            status,
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let err = ForecastError::status(StatusCode::BAD_REQUEST, &body);

        let ForecastError::Status { body, .. } = err else {
            panic!("expected status error");
        };
        assert_eq!(body.len(), 203);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "°".repeat(300);
        let err = ForecastError::status(StatusCode::BAD_REQUEST, &body);
        assert!(err.to_string().contains("°°°..."));
    }

    #[test]
    fn status_message_mentions_code() {
        let err = ForecastError::status(StatusCode::UNAUTHORIZED, "No API key or session found");
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("No API key"));
    }
}
