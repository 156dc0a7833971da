//! Request failure envelope.
//!
//! Every failing request surfaces as exactly one of these variants. The
//! underlying `reqwest` error is always preserved as the source; a failure
//! that carries an HTTP response with a non-empty body additionally carries
//! that body, decoded, under `pretty`.

use reqwest::StatusCode;
use serde_json::Value;

/// The rejected result of an API request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// No response was received (connection failure, timeout).
    #[error("request failed before a response was received: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status. `pretty` holds the
    /// response body verbatim when one was present: parsed JSON when the
    /// body parses, the raw string otherwise.
    #[error("server responded with {status}")]
    Server {
        status: StatusCode,
        pretty: Option<Value>,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered 2xx but the body did not decode as the
    /// requested type.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl RequestError {
    /// The structured error payload the server sent, if any.
    pub fn pretty(&self) -> Option<&Value> {
        match self {
            RequestError::Server { pretty, .. } => pretty.as_ref(),
            _ => None,
        }
    }

    /// The HTTP status, when a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
