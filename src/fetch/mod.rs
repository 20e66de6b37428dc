//! HTTP fetch engine with transparent redirect following.
//!
//! The module is organized around four collaborators:
//!
//! - the request executor performs exactly one HTTP transaction
//!   (reqwest's blocking client, per-hop timeouts, Basic auth).
//! - [`redirect`] inspects a raw transaction and decides terminal vs.
//!   follow — pure string parsing, testable without a network.
//! - [`FetchClient`] picks native or manual mode, drives the bounded hop
//!   loop, and carries configuration across hops.
//! - [`result`](FetchResult) normalizes either mode into one result shape.
//!
//! # Example
//!
//! ```no_run
//! use pagefetch::{FetchClient, FetchConfig, FetchRequest, RedirectMode};
//!
//! let config = FetchConfig::default().with_redirect_mode(RedirectMode::Manual);
//! let client = FetchClient::new(config);
//! let result = client.fetch(
//!     FetchRequest::get("https://example.com/search").param("q", "fetch"),
//! );
//! println!("HTTP {}: {}", result.header_info.http_status, result.body);
//! ```

mod client;
mod config;
mod constants;
mod error;
mod executor;
pub mod redirect;
mod request;
mod result;

pub use client::FetchClient;
pub use config::{FetchConfig, RedirectMode};
pub use constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS,
    ERR_COULDNT_CONNECT, ERR_OPERATION_TIMEDOUT, ERR_RECV_ERROR, ERR_TOO_MANY_REDIRECTS,
    ERR_URL_MALFORMAT, MAX_REDIRECTS_MESSAGE, REDIRECT_STATUSES,
};
pub use executor::{HeaderMode, RawTransaction, TransferInfo};
pub use redirect::RedirectDecision;
pub use request::{Credentials, FetchRequest, Method, encode_query};
pub use result::FetchResult;
