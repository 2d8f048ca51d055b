//! File-backed cache for the OAuth token.

use crate::token_record::TokenRecord;
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Durable single-record cache, persisted as JSON at a configured path.
///
/// The file is the sole persistence medium; it is overwritten entirely on each
/// save. Usage is single-process and sequential, so there is no locking and a
/// concurrent writer simply wins last.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> TokenStore {
        TokenStore { path: path.into() }
    }

    /// Read the cached record. A missing, unreadable, or unparsable file yields
    /// an empty record rather than an error; the empty record is never valid,
    /// which forces a token refresh.
    pub fn load(&self) -> TokenRecord {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!("no readable token cache at {}: {}", self.path.display(), err);
                return TokenRecord::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|err| {
            debug!("unparsable token cache at {}: {}", self.path.display(), err);
            TokenRecord::default()
        })
    }

    /// Overwrite the cache file with `record`.
    pub fn save(&self, record: &TokenRecord) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(record)?;

        fs::write(&self.path, contents)
    }
}
