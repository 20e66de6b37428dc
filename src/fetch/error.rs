//! Transport-level error classification.
//!
//! Transport failures never cross the public API boundary as `Err`: the
//! executor folds them into [`RawTransaction`](super::executor::RawTransaction)
//! fields so every fetch returns a `FetchResult` the caller can inspect.

use thiserror::Error;

use super::constants::{
    ERR_COULDNT_CONNECT, ERR_OPERATION_TIMEDOUT, ERR_RECV_ERROR, ERR_TOO_MANY_REDIRECTS,
    ERR_URL_MALFORMAT,
};

/// A transport-layer failure: DNS, connect, TLS, timeout, or a broken read.
#[derive(Debug, Error)]
#[error("transport error {code} fetching {url}: {message}")]
pub(crate) struct TransportError {
    /// The URL whose transaction failed.
    pub url: String,
    /// curl-style numeric code, never 0.
    pub code: i32,
    /// Human-readable error text from the transport.
    pub message: String,
}

impl TransportError {
    /// Maps a reqwest error onto a curl-style code.
    ///
    /// Order matters: timeout errors also report as request errors, so the
    /// more specific checks run first.
    pub(crate) fn classify(url: &str, source: &reqwest::Error) -> Self {
        let code = if source.is_timeout() {
            ERR_OPERATION_TIMEDOUT
        } else if source.is_connect() {
            ERR_COULDNT_CONNECT
        } else if source.is_builder() {
            ERR_URL_MALFORMAT
        } else if source.is_redirect() {
            ERR_TOO_MANY_REDIRECTS
        } else {
            ERR_RECV_ERROR
        };
        Self {
            url: url.to_string(),
            code,
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display_contains_url_and_code() {
        let error = TransportError {
            url: "http://example.com/page".to_string(),
            code: ERR_COULDNT_CONNECT,
            message: "connection refused".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("http://example.com/page"), "Expected URL in: {msg}");
        assert!(msg.contains('7'), "Expected code 7 in: {msg}");
        assert!(msg.contains("connection refused"), "Expected message in: {msg}");
    }

    #[test]
    fn test_classify_builder_error_as_malformed_url() {
        // A scheme-less URL fails in the request builder before any I/O.
        let source = reqwest::blocking::Client::new()
            .get("not-a-valid-url")
            .send()
            .unwrap_err();
        let error = TransportError::classify("not-a-valid-url", &source);
        assert_eq!(error.code, ERR_URL_MALFORMAT);
        assert!(!error.message.is_empty());
    }
}
