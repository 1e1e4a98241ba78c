#![forbid(unsafe_code)]

//! Focus highlight: one reserved stylesheet forcing a visible outline.

use tracing::debug;

use crate::FOCUS_STYLE_ID;
use crate::error::PageError;
use crate::page::Page;

/// Rule inserted while the highlight is on.
pub const FOCUS_HIGHLIGHT_CSS: &str =
    "*:focus { outline: 3px solid #ff6b35 !important; outline-offset: 2px !important; }";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusHighlight {
    enabled: bool,
}

impl FocusHighlight {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the highlight. Returns the new state.
    pub fn toggle<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<bool, PageError> {
        self.enabled = !self.enabled;
        if self.enabled {
            // A previous toolbar on this page may have left the sheet behind.
            if !page.has_element(FOCUS_STYLE_ID) {
                page.insert_head_style(FOCUS_STYLE_ID, FOCUS_HIGHLIGHT_CSS)?;
            }
        } else {
            page.remove_element(FOCUS_STYLE_ID)?;
        }
        debug!(enabled = self.enabled, "focus highlight toggled");
        Ok(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessPage;

    #[test]
    fn toggle_inserts_then_removes_sheet() {
        let mut page = HeadlessPage::new();
        let mut focus = FocusHighlight::default();
        focus.toggle(&mut page).unwrap();
        assert_eq!(page.head_style_count(FOCUS_STYLE_ID), 1);
        assert_eq!(page.head_style(FOCUS_STYLE_ID), Some(FOCUS_HIGHLIGHT_CSS));
        focus.toggle(&mut page).unwrap();
        assert_eq!(page.head_style_count(FOCUS_STYLE_ID), 0);
    }

    #[test]
    fn sheet_removed_externally_is_tolerated() {
        let mut page = HeadlessPage::new();
        let mut focus = FocusHighlight::default();
        focus.toggle(&mut page).unwrap();
        page.remove_element(FOCUS_STYLE_ID).unwrap();
        assert_eq!(focus.toggle(&mut page), Ok(false));
    }

    #[test]
    fn leftover_sheet_is_not_duplicated() {
        let mut page = HeadlessPage::new();
        page.insert_head_style(FOCUS_STYLE_ID, FOCUS_HIGHLIGHT_CSS)
            .unwrap();
        let mut focus = FocusHighlight::default();
        focus.toggle(&mut page).unwrap();
        assert_eq!(page.head_style_count(FOCUS_STYLE_ID), 1);
    }
}
