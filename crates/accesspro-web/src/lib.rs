#![forbid(unsafe_code)]

//! WASM shell for the AccessPro accessibility toolbar.
//!
//! This crate binds [`accesspro_core::AccessibilityToolbar`] to the browser
//! DOM through `web-sys` and exports `install` / `installWithConfig` via
//! `wasm-bindgen`. The binding code is only compiled on `wasm32`; the
//! [`snippet`] module that renders the custom-code tag is platform
//! independent.

pub mod snippet;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{ToolbarHandle, install, install_with_config};

pub use snippet::custom_code_snippet;
