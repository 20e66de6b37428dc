//! Single-transaction HTTP execution over reqwest's blocking client.
//!
//! The executor performs exactly one HTTP transaction per call and never
//! returns `Err` for transport failure: failed transactions come back as a
//! [`RawTransaction`] carrying a nonzero error code, so the redirect loop and
//! the caller see one uniform shape.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use tracing::{debug, warn};

use super::config::FetchConfig;
use super::error::TransportError;
use super::request::{FetchRequest, Method};

/// Whether a transaction returns the body alone or the raw header block
/// alongside it (needed for manual redirect walking).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Body only; headers are not captured.
    BodyOnly,
    /// Capture the status line and header block for response parsing.
    HeaderAndBody,
}

/// Transfer metadata for the last transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferInfo {
    /// HTTP status of the last response (0 when the transport failed).
    pub http_status: u16,
    /// URL the transaction actually hit, after any transport-level redirects.
    pub effective_url: String,
    /// Content-Type header of the last response, empty when absent.
    pub content_type: String,
}

/// Raw outcome of one HTTP transaction.
///
/// Produced once per hop and consumed immediately by the redirect resolver;
/// only the final hop's transaction outlives the loop.
#[derive(Debug, Clone)]
pub struct RawTransaction {
    /// HTTP status code (0 when the transport failed).
    pub status: u16,
    /// Status line plus headers, CRLF-delimited. Empty in [`HeaderMode::BodyOnly`].
    pub raw_header_block: String,
    /// Response body text.
    pub raw_body: String,
    /// 0 on success, otherwise a curl-style transport error code.
    pub transport_error_code: i32,
    /// Empty on success, otherwise the transport's error text.
    pub transport_error_message: String,
    /// Transfer metadata.
    pub info: TransferInfo,
}

impl RawTransaction {
    /// True when the transaction failed below the HTTP layer.
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        self.transport_error_code != 0
    }

    fn from_error(error: TransportError) -> Self {
        Self {
            status: 0,
            raw_header_block: String::new(),
            raw_body: String::new(),
            transport_error_code: error.code,
            transport_error_message: error.message,
            info: TransferInfo {
                http_status: 0,
                effective_url: error.url,
                content_type: String::new(),
            },
        }
    }
}

/// Performs one HTTP transaction per [`execute`](Self::execute) call.
///
/// The underlying client is built once per fetch invocation: hops within one
/// invocation may reuse the connection, independent invocations never do.
#[derive(Debug)]
pub(crate) struct RequestExecutor {
    client: Client,
}

impl RequestExecutor {
    /// Builds the per-invocation client.
    ///
    /// `native_redirects` selects the transport redirect policy once, before
    /// the hop loop: native mode auto-follows up to the configured ceiling
    /// and sets a referer on each hop; manual mode disables auto-follow so
    /// every 30x surfaces to the resolver.
    pub(crate) fn new(config: &FetchConfig, native_redirects: bool) -> Result<Self, TransportError> {
        let policy = if native_redirects {
            Policy::limited(config.max_redirects as usize)
        } else {
            Policy::none()
        };
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .gzip(true)
            .referer(native_redirects)
            .redirect(policy)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|error| TransportError::classify("", &error))?;
        Ok(Self { client })
    }

    /// Performs exactly one HTTP transaction.
    ///
    /// POST parameters are sent as a form body; GET parameters are expected
    /// to already be encoded into the URL by the orchestrator.
    pub(crate) fn execute(&self, request: &FetchRequest, header_mode: HeaderMode) -> RawTransaction {
        debug!(url = %request.url(), method = ?request.method, "executing transaction");

        let mut builder = match request.method {
            Method::Get => self.client.get(request.url()),
            Method::Post => self.client.post(request.url()).form(&request.params),
        };
        if let Some(credentials) = &request.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }

        match builder.send() {
            Ok(response) => transaction_from_response(response, header_mode),
            Err(error) => {
                let transport = TransportError::classify(request.url(), &error);
                warn!(url = %request.url(), code = transport.code, message = %transport.message, "transport failure");
                RawTransaction::from_error(transport)
            }
        }
    }
}

fn transaction_from_response(response: Response, header_mode: HeaderMode) -> RawTransaction {
    let status = response.status().as_u16();
    let effective_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let raw_header_block = match header_mode {
        HeaderMode::HeaderAndBody => render_header_block(&response),
        HeaderMode::BodyOnly => String::new(),
    };
    let info = TransferInfo {
        http_status: status,
        effective_url: effective_url.clone(),
        content_type,
    };

    // Reading the body can still fail (timeout mid-transfer, broken pipe).
    match response.text() {
        Ok(raw_body) => RawTransaction {
            status,
            raw_header_block,
            raw_body,
            transport_error_code: 0,
            transport_error_message: String::new(),
            info,
        },
        Err(error) => {
            let transport = TransportError::classify(&effective_url, &error);
            warn!(url = %effective_url, code = transport.code, "body read failure");
            RawTransaction::from_error(transport)
        }
    }
}

/// Reconstructs the status line and header block from a structured response.
///
/// reqwest lowercases header names during parsing; canonical capitalization
/// is restored so the block matches what the server put on the wire and the
/// case-sensitive `Location:`/`URI:` extraction keeps working.
fn render_header_block(response: &Response) -> String {
    let status = response.status();
    let mut lines = Vec::with_capacity(response.headers().len() + 1);
    lines.push(
        format!(
            "{} {} {}",
            version_token(response.version()),
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )
        .trim_end()
        .to_string(),
    );
    for (name, value) in response.headers() {
        lines.push(format!(
            "{}: {}",
            canonical_header_name(name.as_str()),
            value.to_str().unwrap_or_default()
        ));
    }
    lines.join("\r\n")
}

fn version_token(version: reqwest::Version) -> &'static str {
    if version == reqwest::Version::HTTP_09 {
        "HTTP/0.9"
    } else if version == reqwest::Version::HTTP_10 {
        "HTTP/1.0"
    } else if version == reqwest::Version::HTTP_2 {
        "HTTP/2"
    } else if version == reqwest::Version::HTTP_3 {
        "HTTP/3"
    } else {
        "HTTP/1.1"
    }
}

/// Title-cases a lowercased header name (`location` -> `Location`,
/// `content-type` -> `Content-Type`).
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_header_name_title_cases_segments() {
        assert_eq!(canonical_header_name("location"), "Location");
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(canonical_header_name("x-request-id"), "X-Request-Id");
    }

    #[test]
    fn test_version_token_known_versions() {
        assert_eq!(version_token(reqwest::Version::HTTP_11), "HTTP/1.1");
        assert_eq!(version_token(reqwest::Version::HTTP_2), "HTTP/2");
        assert_eq!(version_token(reqwest::Version::HTTP_10), "HTTP/1.0");
    }

    #[test]
    fn test_transaction_from_error_has_empty_body_and_nonzero_code() {
        let tx = RawTransaction::from_error(TransportError {
            url: "http://example.com/page".to_string(),
            code: 7,
            message: "connection refused".to_string(),
        });
        assert!(tx.is_transport_error());
        assert_eq!(tx.status, 0);
        assert_eq!(tx.raw_body, "");
        assert_eq!(tx.info.http_status, 0);
        assert_eq!(tx.info.effective_url, "http://example.com/page");
    }
}
