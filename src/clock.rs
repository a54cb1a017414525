//! Injected clock abstraction and test-mode request time resolution.

use chrono::{DateTime, Utc};
use hyper::HeaderMap;
use std::sync::Arc;

/// Header consulted for the test-mode time override (epoch milliseconds).
pub const TEST_NOW_HEADER: &str = "x-test-now-ms";

/// Source of "now" for expiry decisions. Production state carries the
/// system clock; tests swap in a fixed instant.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>);

impl Clock {
    pub fn system() -> Self {
        Self(Arc::new(Utc::now))
    }

    /// A clock frozen at `at`.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self(Arc::new(move || at))
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.0)()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Clock")
    }
}

/// Resolve the effective request time.
///
/// The `x-test-now-ms` header is honored only when `test_mode` is set;
/// outside test mode it is ignored and the injected clock wins.
pub fn request_time(clock: &Clock, test_mode: bool, headers: &HeaderMap) -> DateTime<Utc> {
    if test_mode {
        if let Some(raw) = headers.get(TEST_NOW_HEADER).and_then(|v| v.to_str().ok()) {
            if let Ok(ms) = raw.trim().parse::<i64>() {
                if let Some(at) = DateTime::from_timestamp_millis(ms) {
                    return at;
                }
            }
        }
    }
    clock.now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_override(ms: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(TEST_NOW_HEADER, HeaderValue::from_str(ms).unwrap());
        headers
    }

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let clock = Clock::fixed(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn header_override_applies_only_in_test_mode() {
        let pinned = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let clock = Clock::fixed(pinned);
        let headers = headers_with_override("1800000000000");

        let overridden = request_time(&clock, true, &headers);
        assert_eq!(overridden.timestamp_millis(), 1_800_000_000_000);

        let ignored = request_time(&clock, false, &headers);
        assert_eq!(ignored, pinned);
    }

    #[test]
    fn malformed_override_falls_back_to_clock() {
        let pinned = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let clock = Clock::fixed(pinned);
        let headers = headers_with_override("not-a-number");
        assert_eq!(request_time(&clock, true, &headers), pinned);
    }
}
