//! Site configuration from an inline JSON block.
//!
//! The page may carry `<script id="site-config" type="application/json">`.
//! A missing or invalid block falls back to defaults.

#[cfg(test)]
#[path = "config_block_test.rs"]
mod config_block_test;

use widgets::config::SiteConfig;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Parse the raw block contents, if any.
#[must_use]
pub fn config_from_block(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            SiteConfig::default()
        }
    }
}

/// Read the configuration block from the current document.
pub fn load_site_config() -> SiteConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        config_from_block(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        config_from_block(None)
    }
}
