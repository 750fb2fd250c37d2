// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Network failure, HTTP error status, or a reply body we could not use.
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChatError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            Self::RequestFailed(format!("HTTP {}: {}", status, e))
        } else if e.is_connect() {
            Self::RequestFailed(format!("could not connect: {}", e))
        } else if e.is_decode() {
            Self::RequestFailed(format!("malformed reply: {}", e))
        } else {
            Self::RequestFailed(e.to_string())
        }
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_build_matching_variants() {
        assert!(matches!(
            ChatError::request_failed("boom"),
            ChatError::RequestFailed(ref m) if m == "boom"
        ));
        assert_eq!(
            ChatError::config_error("bad url").to_string(),
            "configuration error: bad url"
        );
    }
}
