//! Pagefetch Core Library
//!
//! An HTTP fetch client that retrieves remote resources via GET or POST and
//! transparently follows redirects — including in environments where the
//! transport's automatic redirect following is disabled by policy, in which
//! case the chain is walked manually, one bounded hop at a time.
//!
//! # Architecture
//!
//! Everything lives in the [`fetch`] module:
//! - request execution (one HTTP transaction per hop over reqwest)
//! - redirect resolution (raw-response parsing, `Location:`/`URI:` targets)
//! - orchestration (mode selection, the iterative hop loop, the redirect
//!   ceiling)
//! - result assembly (one uniform [`FetchResult`] for both modes)
//!
//! Failures are data: every fetch returns a [`FetchResult`] whose
//! `error_code`/`error_message` carry transport failures and the
//! redirect-limit condition. No fetch call panics or returns `Err`.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
mod user_agent;

// Re-export the public surface at the crate root.
pub use fetch::{
    Credentials, FetchClient, FetchConfig, FetchRequest, FetchResult, HeaderMode, Method,
    RawTransaction, RedirectDecision, RedirectMode, TransferInfo, encode_query,
};
