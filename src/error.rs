//! Fetch Errors
//!
//! Every way a single poll tick can fail. The feed swallows these at the
//! tick boundary; they only reach the developer console.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// DNS, connection or CORS failure before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the request deadline; the request was aborted
    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// Response arrived with a non-2xx status
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Body was not a JSON array of items
    #[error("Parse error: {0}")]
    Decode(String),
}
