//! HTTP API Client
//!
//! The one read call the page makes.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

use crate::error::FetchError;
use crate::models::Item;

/// GET the endpoint and decode the item list.
/// The request is aborted if it has not finished within `timeout_ms`.
pub async fn fetch_items(endpoint: &str, timeout_ms: u32) -> Result<Vec<Item>, FetchError> {
    let controller = AbortController::new()
        .map_err(|_| FetchError::Network("AbortController unavailable".to_string()))?;
    let signal = controller.signal();

    // Cleared when dropped at the end of this call
    let _deadline = Timeout::new(timeout_ms, move || controller.abort());

    let response = Request::get(endpoint)
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|e| transport_error(&signal, timeout_ms, e))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| transport_error(&signal, timeout_ms, e))?;

    parse_items(&body)
}

fn transport_error(signal: &AbortSignal, timeout_ms: u32, err: gloo_net::Error) -> FetchError {
    classify_transport(signal.aborted(), timeout_ms, err.to_string())
}

/// An aborted request only ever comes from the deadline
pub fn classify_transport(aborted: bool, timeout_ms: u32, message: String) -> FetchError {
    if aborted {
        FetchError::Timeout(timeout_ms)
    } else {
        FetchError::Network(message)
    }
}

/// Decode a response body; anything but an array of `{name, img}` is rejected whole
pub fn parse_items(body: &str) -> Result<Vec<Item>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_in_order() {
        let body = r#"[{"name":"cpu","img":"/cpu.png"},{"name":"mem","img":"/mem.png"}]"#;
        let items = parse_items(body).unwrap();
        assert_eq!(items, vec![Item::new("cpu", "/cpu.png"), Item::new("mem", "/mem.png")]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_items("[]").unwrap(), Vec::<Item>::new());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"[{"name":"disk","img":"/disk.png","usage":0.42}]"#;
        assert_eq!(parse_items(body).unwrap(), vec![Item::new("disk", "/disk.png")]);
    }

    #[test]
    fn test_aborted_request_is_timeout() {
        assert_eq!(
            classify_transport(true, 10_000, "AbortError: The user aborted a request.".to_string()),
            FetchError::Timeout(10_000)
        );
        assert_eq!(
            classify_transport(false, 10_000, "TypeError: Failed to fetch".to_string()),
            FetchError::Network("TypeError: Failed to fetch".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for body in ["", "not json", r#"{"name":"cpu","img":"/cpu.png"}"#, r#"[{"name":"cpu"}]"#] {
            assert!(matches!(parse_items(body), Err(FetchError::Decode(_))), "accepted {body:?}");
        }
    }
}
