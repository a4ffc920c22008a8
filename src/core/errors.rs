use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single detail fetch. Every variant displays as a short,
/// non-empty message suitable for showing verbatim in the view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("Network response was not ok ({status})")]
    Status { status: StatusCode },

    #[error("Malformed Pokémon data: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => FetchError::Status { status },
            None if error.is_decode() => FetchError::Malformed(error.to_string()),
            None => FetchError::Transport(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Malformed(error.to_string())
    }
}

#[derive(Error, Debug)]
pub enum PokedetailError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<std::io::Error> for PokedetailError {
    fn from(error: std::io::Error) -> Self {
        PokedetailError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for PokedetailError {
    fn from(error: reqwest::Error) -> Self {
        PokedetailError::Reqwest(Box::new(error))
    }
}

impl From<eframe::Error> for PokedetailError {
    fn from(error: eframe::Error) -> Self {
        PokedetailError::Gui(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages_are_not_empty() {
        let errors = [
            FetchError::Transport("connection refused".to_string()),
            FetchError::Status { status: StatusCode::NOT_FOUND },
            FetchError::Malformed("missing field `stats`".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_reqwest_error_converts() {
        let error = reqwest::Client::new().get("not a url").build().unwrap_err();

        let converted: PokedetailError = error.into();

        assert!(matches!(converted, PokedetailError::Reqwest(_)));
        assert!(converted.to_string().starts_with("Reqwest error: "));
    }

    #[test]
    fn test_status_error_message() {
        let error = FetchError::Status { status: StatusCode::NOT_FOUND };
        assert_eq!(error.to_string(), "Network response was not ok (404 Not Found)");
    }
}
