//! Browser local storage as a [`SessionStore`]

use shared::error::{AppError, Result};
use shared::session::SessionStore;
use web_sys::Storage;

/// `window.localStorage`, looked up on each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Result<Storage> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Storage("no window available".to_string()))?;
        window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("local storage is disabled".to_string()))
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("write {}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("remove {}: {:?}", key, e)))
    }
}
