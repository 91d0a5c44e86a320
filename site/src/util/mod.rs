//! Browser glue shared by the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components stay declarative; everything that touches `window`,
//! `localStorage`, timers, or observers lives here behind the `csr` feature.

pub mod classes;
pub mod config_block;
#[cfg(feature = "csr")]
pub mod frame;
pub mod page_load;
pub mod storage;
pub mod theme_dom;
#[cfg(feature = "csr")]
pub mod visibility;
