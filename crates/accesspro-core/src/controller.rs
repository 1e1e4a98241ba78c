#![forbid(unsafe_code)]

//! The toolbar controller: lifecycle plus the five feature states.
//!
//! One controller is built per page context and handed explicitly to every
//! handler that needs it. Closing the toolbar removes the panel only; the
//! font size, contrast overrides, focus stylesheet, keydown handler and any
//! utterance in flight stay exactly as last set.

use serde::Serialize;
use tracing::debug;

use crate::TOOLBAR_ID;
use crate::config::ToolbarConfig;
use crate::contrast::HighContrast;
use crate::error::ToolbarError;
use crate::focus::FocusHighlight;
use crate::font::FontScale;
use crate::page::Page;
use crate::speech::{self, ReadOutcome};
use crate::toolbar::{ToolbarButton, ToolbarMarkup};

/// Result of [`AccessibilityToolbar::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// The panel was built and appended; the host must wire its controls.
    Mounted,
    /// A toolbar was already on the page. Nothing changed.
    AlreadyPresent,
}

/// What one control click did, for hosts that log or mirror state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEffect {
    FontScale(u32),
    HighContrast(bool),
    FocusHighlight(bool),
    KeyboardNav(bool),
    Read(ReadOutcome),
    Closed,
}

/// Serializable view of the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureStatus {
    pub mounted: bool,
    pub font_scale_percent: u32,
    pub high_contrast: bool,
    pub focus_highlight: bool,
    pub keyboard_nav: bool,
}

#[derive(Debug, Clone)]
pub struct AccessibilityToolbar {
    config: ToolbarConfig,
    mounted: bool,
    font: FontScale,
    contrast: HighContrast,
    focus: FocusHighlight,
    keyboard_nav: bool,
}

impl Default for AccessibilityToolbar {
    fn default() -> Self {
        Self::new(ToolbarConfig::default())
    }
}

impl AccessibilityToolbar {
    #[must_use]
    pub fn new(config: ToolbarConfig) -> Self {
        let font = FontScale::new(config.font);
        Self {
            config,
            mounted: false,
            font,
            contrast: HighContrast::default(),
            focus: FocusHighlight::default(),
            keyboard_nav: false,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn status(&self) -> FeatureStatus {
        FeatureStatus {
            mounted: self.mounted,
            font_scale_percent: self.font.percent(),
            high_contrast: self.contrast.is_enabled(),
            focus_highlight: self.focus.is_enabled(),
            keyboard_nav: self.keyboard_nav,
        }
    }

    /// Mount the panel unless one is already on the page.
    pub fn create<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<MountOutcome, ToolbarError> {
        if page.has_element(TOOLBAR_ID) {
            debug!("toolbar already present; create is a no-op");
            return Ok(MountOutcome::AlreadyPresent);
        }
        page.mount_toolbar(&ToolbarMarkup::new(&self.config.panel))?;
        self.mounted = true;
        debug!("toolbar mounted");
        Ok(MountOutcome::Mounted)
    }

    /// Remove the panel. Applied effects are left in place.
    ///
    /// The feature states go back to their initial values: a toolbar mounted
    /// later starts fresh, as a newly injected one would.
    pub fn close<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<bool, ToolbarError> {
        let removed = page.remove_element(TOOLBAR_ID)?;
        *self = Self::new(self.config.clone());
        debug!(removed, "toolbar closed");
        Ok(removed)
    }

    /// Dispatch one control click.
    pub fn click<P: Page + ?Sized>(
        &mut self,
        button: ToolbarButton,
        page: &mut P,
    ) -> Result<ClickEffect, ToolbarError> {
        if !self.mounted {
            return Err(ToolbarError::NotMounted);
        }
        let effect = match button {
            ToolbarButton::IncreaseFont => ClickEffect::FontScale(self.font.increase(page)?),
            ToolbarButton::DecreaseFont => ClickEffect::FontScale(self.font.decrease(page)?),
            ToolbarButton::ToggleContrast => ClickEffect::HighContrast(self.contrast.toggle(page)?),
            ToolbarButton::ToggleFocus => ClickEffect::FocusHighlight(self.focus.toggle(page)?),
            ToolbarButton::ToggleKeyboardNav => {
                ClickEffect::KeyboardNav(self.toggle_keyboard_nav(page)?)
            }
            ToolbarButton::ReadPage => {
                ClickEffect::Read(speech::read_page(page, self.config.speech.rate)?)
            }
            ToolbarButton::Close => {
                self.close(page)?;
                ClickEffect::Closed
            }
        };
        Ok(effect)
    }

    fn toggle_keyboard_nav<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<bool, ToolbarError> {
        self.keyboard_nav = !self.keyboard_nav;
        if self.keyboard_nav {
            page.attach_keydown()?;
        } else {
            page.detach_keydown()?;
        }
        debug!(enabled = self.keyboard_nav, "keyboard navigation toggled");
        Ok(self.keyboard_nav)
    }
}
