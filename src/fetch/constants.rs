//! Constants for the fetch module (defaults, redirect statuses, error codes).

/// Default HTTP connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default whole-transfer timeout per hop (30 seconds).
///
/// Timeouts apply per hop, not cumulatively: a chain of redirects can take
/// up to `max_redirects * fetch_timeout` wall clock.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default redirect ceiling.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Status codes followed as redirects.
///
/// 307/308 are deliberately excluded: they mandate method preservation that
/// this client has never honored for the 30x family it does follow.
pub const REDIRECT_STATUSES: [u16; 3] = [301, 302, 303];

/// Error message reported when the hop loop hits the redirect ceiling.
pub const MAX_REDIRECTS_MESSAGE: &str = "Max Redirects Reached";

// Transport error numbering follows curl so callers that already switch on
// curl codes keep working.

/// The request or URL was malformed before any bytes hit the wire.
pub const ERR_URL_MALFORMAT: i32 = 3;

/// TCP/TLS connection could not be established.
pub const ERR_COULDNT_CONNECT: i32 = 7;

/// Connect or transfer timeout expired.
pub const ERR_OPERATION_TIMEDOUT: i32 = 28;

/// The transport's native redirect following hit its ceiling.
pub const ERR_TOO_MANY_REDIRECTS: i32 = 47;

/// Transfer started but failed partway through.
pub const ERR_RECV_ERROR: i32 = 56;
