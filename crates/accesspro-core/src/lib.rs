#![forbid(unsafe_code)]

//! `accesspro-core` is the host-agnostic heart of the AccessPro toolbar.
//!
//! Design goals:
//! - **Host-driven side effects**: every DOM mutation, listener change and
//!   speech request goes through the [`page::Page`] trait, so the same
//!   controller runs against a browser (`accesspro-web`) or the
//!   deterministic [`headless::HeadlessPage`].
//! - **One controller per page**: [`controller::AccessibilityToolbar`] owns
//!   the five feature states and is passed explicitly to whatever needs it.
//! - **No blocking / no threads**: every operation is a synchronous response
//!   to one click or keydown.

pub mod config;
pub mod contrast;
pub mod controller;
pub mod error;
pub mod focus;
pub mod font;
pub mod headless;
pub mod keyboard;
pub mod page;
pub mod speech;
pub mod toolbar;

pub use config::ToolbarConfig;
pub use controller::{AccessibilityToolbar, ClickEffect, FeatureStatus, MountOutcome};
pub use error::{ConfigError, PageError, ToolbarError};
pub use keyboard::{FocusTarget, KeyOutcome, KeyPress, Modifiers};
pub use page::{BodyStyle, FocusNavigator, Page};
pub use speech::{SpeechSynth, Utterance};
pub use toolbar::{ToolbarButton, ToolbarMarkup};

/// DOM id of the toolbar panel. Its presence is the singleton guard.
pub const TOOLBAR_ID: &str = "accessibility-toolbar";

/// DOM id reserved for the focus-highlight stylesheet.
pub const FOCUS_STYLE_ID: &str = "focus-highlight-style";
