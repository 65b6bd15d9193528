//! Blocking client for the Deck REST API

use std::error::Error as _;
use std::io;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use thiserror::Error;

use crate::domain::RawStack;

/// Path of the Deck API below the server's base URL
pub const API_BASE_SUFFIX: &str = "/index.php/apps/deck/api/v1.1";

/// Upper bound on the single stacks request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("request failed: {0}")]
    Transport(#[source] Box<ureq::Transport>),

    #[error("failed to read response body: {0}")]
    Body(#[from] io::Error),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `{base}/index.php/apps/deck/api/v1.1`, ignoring trailing slashes on `base`
pub fn api_base(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), API_BASE_SUFFIX)
}

/// URL of the stacks listing for a board
pub fn stacks_url(base_url: &str, board_id: u64) -> String {
    format!("{}/boards/{}/stacks", api_base(base_url), board_id)
}

/// Unwraps an OCS envelope (`{"ocs": {"data": ...}}`) if the server sent one
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            let has_data = map
                .get("ocs")
                .and_then(Value::as_object)
                .is_some_and(|ocs| ocs.contains_key("data"));

            if has_data {
                map.remove("ocs")
                    .and_then(|mut ocs| ocs.get_mut("data").map(Value::take))
                    .unwrap_or(Value::Null)
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

/// Authenticated access to one Nextcloud server's Deck app
pub struct DeckClient {
    base_url: String,
    authorization: String,
    timeout: Duration,
}

impl DeckClient {
    /// Creates a client using HTTP basic auth with an app password
    pub fn new(base_url: impl Into<String>, username: &str, password: &str) -> Self {
        let credentials = STANDARD.encode(format!("{}:{}", username, password));

        Self {
            base_url: base_url.into(),
            authorization: format!("Basic {}", credentials),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_base(&self) -> String {
        api_base(&self.base_url)
    }

    pub fn stacks_url(&self, board_id: u64) -> String {
        stacks_url(&self.base_url, board_id)
    }

    /// Fetches all stacks (with their cards) of a board
    pub fn fetch_stacks(&self, board_id: u64) -> Result<Vec<RawStack>, RequestError> {
        let body = self.get_json(&self.stacks_url(board_id))?;
        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }

    fn get_json(&self, url: &str) -> Result<Value, RequestError> {
        let response = ureq::get(url)
            .set("OCS-APIRequest", "true")
            .set("Accept", "application/json")
            .set("Authorization", &self.authorization)
            .timeout(self.timeout)
            .call();

        match response {
            Ok(response) => Ok(response.into_json()?),
            Err(ureq::Error::Status(status, response)) => Err(RequestError::Status {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => {
                if is_timeout(&transport) {
                    Err(RequestError::Timeout(self.timeout.as_secs()))
                } else {
                    Err(RequestError::Transport(Box::new(transport)))
                }
            }
        }
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    transport
        .source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|err| {
            matches!(err.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
        })
}
