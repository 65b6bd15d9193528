//! # Remote Access
//!
//! One authenticated GET against the Deck app of a Nextcloud server:
//!
//! ```text
//! GET {base}/index.php/apps/deck/api/v1.1/boards/{board_id}/stacks
//! OCS-APIRequest: true
//! Accept: application/json
//! ```
//!
//! The response is a JSON array of stacks, each optionally carrying its
//! `cards`. Deployments that wrap responses in an OCS envelope
//! (`{"ocs": {"data": [...]}}`) are unwrapped transparently.
//!
//! There is no retry, pagination or caching: a failed request fails the run.

mod client;

pub use client::{
    api_base, stacks_url, unwrap_envelope, DeckClient, RequestError, API_BASE_SUFFIX,
    DEFAULT_TIMEOUT_SECS,
};
