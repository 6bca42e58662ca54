// src/service/error.rs
// =============================================================================
// Everything that can go wrong while answering one request.
//
// There are only three failure kinds:
// - InvalidPath: the inbound URL path is not /projectinfo/v1/github.com/<owner>/<name>
// - UpstreamUnavailable: one of the three fetches never produced a body
// - MalformedUpstreamResponse: a body arrived but we could not use it
//
// Every error is terminal for its request. Nothing here is retried.
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error from the attributes
// - Enums with named fields: each variant carries its own context
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The inbound path failed the segment-count / non-empty-name check
    #[error("Invalid URL PATH: {0}")]
    InvalidPath(String),

    /// A fetch could not reach the upstream, got a non-success status,
    /// timed out, or could not be read to completion
    #[error("upstream unavailable ({source_name}): {reason}")]
    UpstreamUnavailable { source_name: String, reason: String },

    /// A fetched payload could not be decoded, or had nothing in it to use
    #[error("malformed {payload} response: {reason}")]
    MalformedUpstreamResponse { payload: &'static str, reason: String },
}

impl ServiceError {
    pub fn unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        ServiceError::UpstreamUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(payload: &'static str, reason: impl ToString) -> Self {
        ServiceError::MalformedUpstreamResponse {
            payload,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_message_names_the_path() {
        let err = ServiceError::InvalidPath("cov/fe/fe".to_string());
        assert_eq!(err.to_string(), "Invalid URL PATH: cov/fe/fe");
    }

    #[test]
    fn test_malformed_message_names_the_payload() {
        let err = ServiceError::malformed("contributors", "empty list");
        assert_eq!(err.to_string(), "malformed contributors response: empty list");
    }
}
