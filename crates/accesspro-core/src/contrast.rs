#![forbid(unsafe_code)]

//! High-contrast mode.
//!
//! Turning the mode off clears the inline overrides rather than restoring
//! whatever the page had before; a page's own inline `background`/`color`
//! is lost after one on/off cycle.

use tracing::debug;

use crate::error::PageError;
use crate::page::{BodyStyle, Page};

pub const CONTRAST_FILTER: &str = "contrast(200%) brightness(150%)";
pub const CONTRAST_BACKGROUND: &str = "#000";
pub const CONTRAST_COLOR: &str = "#fff";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighContrast {
    enabled: bool,
}

impl HighContrast {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the mode and apply the new state. Returns the new state.
    pub fn toggle<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<bool, PageError> {
        self.enabled = !self.enabled;
        let (filter, background, color) = if self.enabled {
            (CONTRAST_FILTER, CONTRAST_BACKGROUND, CONTRAST_COLOR)
        } else {
            ("", "", "")
        };
        page.set_body_style(BodyStyle::Filter, filter)?;
        page.set_body_style(BodyStyle::Background, background)?;
        page.set_body_style(BodyStyle::Color, color)?;
        debug!(enabled = self.enabled, "high contrast toggled");
        Ok(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessPage;

    #[test]
    fn on_applies_all_three_overrides() {
        let mut page = HeadlessPage::new();
        let mut contrast = HighContrast::default();
        assert_eq!(contrast.toggle(&mut page), Ok(true));
        assert_eq!(page.body_style(BodyStyle::Filter), CONTRAST_FILTER);
        assert_eq!(page.body_style(BodyStyle::Background), "#000");
        assert_eq!(page.body_style(BodyStyle::Color), "#fff");
    }

    #[test]
    fn off_discards_prior_inline_values() {
        let mut page = HeadlessPage::new();
        page.set_body_style(BodyStyle::Background, "ivory").unwrap();
        page.set_body_style(BodyStyle::Color, "navy").unwrap();

        let mut contrast = HighContrast::default();
        contrast.toggle(&mut page).unwrap();
        assert_eq!(contrast.toggle(&mut page), Ok(false));

        for property in [BodyStyle::Filter, BodyStyle::Background, BodyStyle::Color] {
            assert_eq!(page.body_style(property), "", "{property:?}");
        }
    }
}
