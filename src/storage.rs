//! `window.localStorage` backed preference store.

use board_core::{PreferenceStore, StoreError};
use web_sys::Storage;

use crate::error::js_error_message;

/// Handle to the page's local storage, looked up on each access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no browser window".into()))?;
        window
            .local_storage()
            .map_err(|err| StoreError::Unavailable(js_error_message(&err)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_string(),
            reason: js_error_message(&err),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: js_error_message(&err),
        })
    }
}
