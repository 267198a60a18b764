use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

/// Token file name in the storage directory
const TOKEN_FILE: &str = "token";

/// Durable storage for the single bearer token.
///
/// The token is an opaque string kept in one file so it survives process
/// restarts; no validation of its contents happens here. `get` never fails:
/// read errors are logged and reported as absence.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            path: dir.join(TOKEN_FILE),
        }
    }

    /// Read the persisted token, if any.
    pub fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => None,
            Err(error) => {
                debug!(%error, path = %self.path.display(), "failed to read token file");
                None
            }
        }
    }

    /// Overwrite the persisted token. `set(None)` is equivalent to `clear`.
    pub fn set(&self, token: Option<&str>) -> Result<()> {
        match token {
            Some(token) => {
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create token storage directory")?;
                }
                std::fs::write(&self.path, token).context("Failed to write token file")
            }
            None => self.clear(),
        }
    }

    /// Remove the persisted token. Clearing an empty store is a no-op.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error).context("Failed to remove token file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static STORE_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn temp_store() -> TokenStore {
        let dir = std::env::temp_dir().join(format!(
            "meritboard-token-test-{}-{}",
            std::process::id(),
            STORE_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        TokenStore::new(dir)
    }

    #[test]
    fn test_get_without_token_is_none() {
        let store = temp_store();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let store = temp_store();
        store.set(Some("T")).expect("Failed to store token");
        assert_eq!(store.get().as_deref(), Some("T"));
    }

    #[test]
    fn test_set_overwrites_previous_token() {
        let store = temp_store();
        store.set(Some("T")).expect("Failed to store token");
        store.set(Some("T2")).expect("Failed to overwrite token");
        assert_eq!(store.get().as_deref(), Some("T2"));
    }

    #[test]
    fn test_set_none_is_clear() {
        let store = temp_store();
        store.set(Some("T")).expect("Failed to store token");
        store.set(None).expect("Failed to clear via set");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clear_removes_token_and_is_idempotent() {
        let store = temp_store();
        store.set(Some("T")).expect("Failed to store token");
        store.clear().expect("Failed to clear token");
        assert_eq!(store.get(), None);
        // Clearing again must not fail
        store.clear().expect("Clearing an empty store failed");
    }
}
