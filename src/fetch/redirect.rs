//! Redirect resolution over raw HTTP responses.
//!
//! Pure string parsing, deliberately separated from the transport so it can
//! be exercised against synthetic raw responses without a network in sight.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use super::constants::REDIRECT_STATUSES;
use super::executor::{RawTransaction, TransferInfo};

/// Blank line separating the header block from the body (and body blocks
/// from each other, when the body itself contains one).
const BLOCK_DELIMITER: &str = "\r\n\r\n";

/// Matches a `Location:` or `URI:` header line up to end of line.
///
/// The key match is case-sensitive: servers send the canonical
/// capitalization, and the executor restores it when reconstructing blocks.
#[allow(clippy::expect_used)]
static REDIRECT_TARGET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Location:|URI:)([^\r\n]*)").expect("redirect target regex is valid") // Static pattern, safe to panic
});

/// Outcome of inspecting one transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectDecision {
    /// The chain ends here.
    Terminal {
        /// Body of the terminal response (empty after a transport failure).
        body: String,
        /// Transfer metadata for the terminal transaction.
        info: TransferInfo,
    },
    /// Follow `target` on the next hop.
    Redirect {
        /// Validated absolute redirect target.
        target: Url,
        /// This hop's body; returned to the caller when the hop ceiling is
        /// already reached instead of an empty string.
        body: String,
    },
}

/// Splits a raw response into `(header_block, body)`.
///
/// Blocks are delimited by CRLFCRLF. A leading `HTTP/1.1 100 Continue`
/// informational block (sent by some servers ahead of the real response to a
/// POST) is discarded — it is not the real response. Blank-line-delimited
/// blocks beyond the first all belong to the body and are rejoined unchanged.
#[must_use]
pub fn split_raw_response(raw: &str) -> (String, String) {
    let mut blocks: Vec<&str> = raw.split(BLOCK_DELIMITER).collect();
    if blocks
        .first()
        .is_some_and(|first| first.trim().eq_ignore_ascii_case("HTTP/1.1 100 Continue"))
    {
        blocks.remove(0);
    }
    if blocks.is_empty() {
        return (String::new(), String::new());
    }
    let header_block = blocks.remove(0).to_string();
    (header_block, blocks.join(BLOCK_DELIMITER))
}

/// Extracts and validates the redirect target from a header block.
///
/// Returns `None` when no `Location:`/`URI:` line is present, or when the
/// extracted value does not parse as an absolute URL (relative targets
/// included). Callers treat `None` as terminal rather than an error.
#[must_use]
pub fn extract_redirect_target(header_block: &str) -> Option<Url> {
    let captures = REDIRECT_TARGET_PATTERN.captures(header_block)?;
    let raw_target = captures.get(1)?.as_str().trim();
    match Url::parse(raw_target) {
        Ok(target) => Some(target),
        Err(error) => {
            debug!(location = raw_target, %error, "redirect target did not parse; treating as terminal");
            None
        }
    }
}

/// Decides whether `tx` ends the chain or names the next hop.
///
/// Only 301, 302, and 303 trigger a hop. A redirect status whose target is
/// missing or unparsable falls through to terminal: the redirect response and
/// its body are returned as-is.
#[must_use]
pub fn resolve(tx: &RawTransaction) -> RedirectDecision {
    // A failed transaction carries no parseable response.
    if tx.is_transport_error() {
        return RedirectDecision::Terminal {
            body: String::new(),
            info: tx.info.clone(),
        };
    }

    let raw = format!("{}{BLOCK_DELIMITER}{}", tx.raw_header_block, tx.raw_body);
    let (header_block, body) = split_raw_response(&raw);

    if REDIRECT_STATUSES.contains(&tx.status) {
        if let Some(target) = extract_redirect_target(&header_block) {
            debug!(status = tx.status, location = %target, "redirect detected");
            return RedirectDecision::Redirect { target, body };
        }
    }

    RedirectDecision::Terminal {
        body,
        info: tx.info.clone(),
    }
}
