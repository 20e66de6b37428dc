//! Shared User-Agent string for fetch clients.
//!
//! Single source for project URL and UA format so all fetch traffic stays
//! consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/pagefetch/pagefetch";

/// Default User-Agent for fetch requests (identifies the library).
#[must_use]
pub(crate) fn default_fetch_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("pagefetch/{version} (+{PROJECT_UA_URL})")
}
