/// Local session and cart persistence
use crate::error::Result;
use learn2code_cart::CartState;
use learn2code_core::AuthIdentity;
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

const SESSION_FILE: &str = "session.json";
const CART_FILE: &str = "cart.json";

/// JSON files under the configured data directory.
///
/// A missing file reads as "no session" or "empty cart". Unreadable JSON is
/// logged and treated the same way so one bad write never locks the user out.
#[derive(Debug, Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub async fn load_session(&self) -> Result<Option<AuthIdentity>> {
        self.read_json(SESSION_FILE).await
    }

    pub async fn save_session(&self, identity: &AuthIdentity) -> Result<()> {
        self.write_json(SESSION_FILE, identity).await
    }

    /// Remove the stored session. Returns whether one existed.
    pub async fn clear_session(&self) -> Result<bool> {
        match fs::remove_file(self.data_dir.join(SESSION_FILE)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn load_cart(&self) -> Result<CartState> {
        Ok(self.read_json(CART_FILE).await?.unwrap_or_default())
    }

    pub async fn save_cart(&self, cart: &CartState) -> Result<()> {
        self.write_json(CART_FILE, cart).await
    }

    async fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.data_dir.join(name);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable state file");
                Ok(None)
            }
        }
    }

    async fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.data_dir).await?;

        let path = self.data_dir.join(name);
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(&path, json).await?;

        debug!(path = %path.display(), "Saved state file");
        Ok(())
    }
}
