use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// The single cached OAuth token, as persisted to disk between invocations.
///
/// A default (empty) record is never valid, so a missing or corrupt cache file
/// simply forces the next run through a token refresh.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenRecord {
    pub access_token: String,

    /// Unix timestamp (seconds) after which the token is no longer usable.
    pub expiration: u64,
}

impl TokenRecord {
    /// Whether the cached token can still be presented as a bearer credential.
    pub fn is_valid(&self, now: u64) -> bool {
        !self.access_token.is_empty() && self.expiration > now
    }
}

/// Wrapper around a token sent back from the Ecobee service.
///
/// Both fields are optional because the endpoint replies with an error object
/// (no token at all) when the refresh token or client id is rejected.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
}

impl TokenResponse {
    /// Convert the vendor reply into a persistable record, stamped relative to `now`.
    ///
    /// Returns `None` unless the reply carried both a token and a lifetime.
    pub fn into_record(self, now: u64) -> Option<TokenRecord> {
        match (self.access_token, self.expires_in) {
            (Some(access_token), Some(expires_in)) if !access_token.is_empty() => {
                Some(TokenRecord {
                    access_token,
                    expiration: now + expires_in,
                })
            }
            _ => None,
        }
    }
}

/// Current unix time in seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
