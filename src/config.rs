//! Feed Configuration
//!
//! Endpoint, poll interval, request timeout and overlap policy. The defaults
//! are what ships; a developer can point a running page elsewhere through
//! localStorage.

use crate::poller::OverlapPolicy;

/// Items endpoint polled by default
pub const DEFAULT_ENDPOINT: &str = "https://api.site-test-deploy1.ru/items";

/// Poll interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u32 = 2000;

/// A request still pending after this long is aborted and counts as a failed tick
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// localStorage key overriding the endpoint
pub const ENDPOINT_KEY: &str = "item_feed_endpoint";

/// localStorage key overriding the interval
pub const INTERVAL_KEY: &str = "item_feed_interval_ms";

/// localStorage key overriding the request timeout
pub const TIMEOUT_KEY: &str = "item_feed_timeout_ms";

/// localStorage key selecting the overlap policy
/// (`unordered`, `latest-issued`, `skip-while-in-flight`)
pub const OVERLAP_KEY: &str = "item_feed_overlap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub endpoint: String,
    pub interval_ms: u32,
    pub timeout_ms: u32,
    pub overlap: OverlapPolicy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            overlap: OverlapPolicy::default(),
        }
    }
}

/// Raw override values, as read from storage
#[derive(Debug, Clone, Default)]
pub struct FeedOverrides {
    pub endpoint: Option<String>,
    pub interval_ms: Option<String>,
    pub timeout_ms: Option<String>,
    pub overlap: Option<String>,
}

impl FeedOverrides {
    fn from_storage() -> Self {
        Self {
            endpoint: read_storage(ENDPOINT_KEY),
            interval_ms: read_storage(INTERVAL_KEY),
            timeout_ms: read_storage(TIMEOUT_KEY),
            overlap: read_storage(OVERLAP_KEY),
        }
    }
}

impl FeedConfig {
    /// Defaults merged with any overrides found in localStorage
    pub fn load() -> Self {
        Self::default().with_overrides(FeedOverrides::from_storage())
    }

    /// Apply raw override values; blank or invalid values keep the current setting
    pub fn with_overrides(mut self, overrides: FeedOverrides) -> Self {
        if let Some(url) = overrides.endpoint {
            // Normalize: remove trailing slash
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.endpoint = url.to_string();
            }
        }

        if let Some(ms) = parse_millis(overrides.interval_ms) {
            self.interval_ms = ms;
        }

        if let Some(ms) = parse_millis(overrides.timeout_ms) {
            self.timeout_ms = ms;
        }

        if let Some(policy) = overrides.overlap.and_then(|raw| raw.parse::<OverlapPolicy>().ok()) {
            self.overlap = policy;
        }

        self
    }
}

fn parse_millis(raw: Option<String>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

fn read_storage(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}
