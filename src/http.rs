//! Shared plumbing for outbound HTTP calls.

use log::debug;
use std::time::Duration;

/// Default network timeout for outbound requests, in seconds.
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Build a blocking HTTP client with a bounded timeout.
pub(crate) fn client(timeout: u64) -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
}

/// Collapse a timed-out or otherwise failed outbound call into an empty result.
///
/// Every network call in this crate runs under a bounded timeout and recovers
/// locally: the caller sees `None` instead of an error, and the failure is only
/// logged. Auth failures are handled separately and are never swallowed here.
pub(crate) fn recover_timeout<T>(result: reqwest::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            if err.is_timeout() {
                debug!("request timed out: {}", err);
            } else {
                debug!("request failed: {}", err);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recover_timeout;

    #[test]
    fn passes_successful_results_through() {
        let result: reqwest::Result<u32> = Ok(7);

        assert_eq!(recover_timeout(result), Some(7));
    }

    #[test]
    fn recovers_connection_failures_as_empty() {
        // Nothing listens on this port; the blocking client fails immediately.
        let client = super::client(1).unwrap();
        let result = client.get("http://127.0.0.1:9/unreachable").send();

        assert!(recover_timeout(result).is_none());
    }
}
