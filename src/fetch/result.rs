//! Uniform fetch result assembly.

use super::executor::TransferInfo;

/// Final outcome of a fetch.
///
/// Always returned by value; failures travel in `error_code` and
/// `error_message`, never as an `Err`, so the client can sit in call chains
/// that inspect results before deciding to retry or propagate.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    /// Body of the last response received. After a redirect-ceiling abort
    /// this is the last hop's body, not an empty string.
    pub body: String,
    /// 0 on success, otherwise a curl-style transport error code.
    pub error_code: i32,
    /// Empty on success; transport error text, or `"Max Redirects Reached"`.
    pub error_message: String,
    /// Metadata for the last transfer (status, effective URL, content type).
    pub header_info: TransferInfo,
}

impl FetchResult {
    /// True when the fetch finished without a transport or redirect-limit
    /// error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_code == 0 && self.error_message.is_empty()
    }
}

/// Normalizes either execution mode's outcome into one [`FetchResult`].
///
/// An orchestrator-level message (the redirect ceiling) takes precedence over
/// the transport message: it describes the terminal condition more
/// specifically. The transport error code is kept either way.
#[must_use]
pub(crate) fn assemble(
    body: String,
    transport_error_code: i32,
    transport_error_message: String,
    info: TransferInfo,
    orchestrator_message: Option<&str>,
) -> FetchResult {
    let error_message = match orchestrator_message {
        Some(message) => message.to_string(),
        None => transport_error_message,
    };
    FetchResult {
        body,
        error_code: transport_error_code,
        error_message,
        header_info: info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_success_shape() {
        let result = assemble(
            "page".to_string(),
            0,
            String::new(),
            TransferInfo {
                http_status: 200,
                effective_url: "http://example.com/".to_string(),
                content_type: "text/html".to_string(),
            },
            None,
        );
        assert!(result.is_success());
        assert_eq!(result.body, "page");
        assert_eq!(result.header_info.http_status, 200);
    }

    #[test]
    fn test_assemble_orchestrator_message_takes_precedence() {
        let result = assemble(
            "last body".to_string(),
            56,
            "recv error".to_string(),
            TransferInfo::default(),
            Some("Max Redirects Reached"),
        );
        assert_eq!(result.error_message, "Max Redirects Reached");
        // The transport code survives alongside the orchestrator message.
        assert_eq!(result.error_code, 56);
        assert!(!result.is_success());
    }

    #[test]
    fn test_assemble_transport_error_without_orchestrator_message() {
        let result = assemble(String::new(), 7, "connection refused".to_string(), TransferInfo::default(), None);
        assert_eq!(result.error_code, 7);
        assert_eq!(result.error_message, "connection refused");
        assert!(!result.is_success());
    }
}
