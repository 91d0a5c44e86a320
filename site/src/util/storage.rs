//! `localStorage` implementation of the widgets preference store.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A missing `window` or a browser that blocks
//! storage reads as "no preference", which lands on the light theme.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use widgets::WidgetError;
use widgets::store::PreferenceStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WidgetError> {
        #[cfg(feature = "csr")]
        {
            let storage = storage().ok_or_else(|| WidgetError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| WidgetError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}
