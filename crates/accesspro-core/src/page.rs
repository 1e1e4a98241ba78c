#![forbid(unsafe_code)]

//! Host seam between the controller and a document.
//!
//! The controller only ever mutates a page through these traits. Hosts
//! implement them over the browser DOM (`accesspro-web`) or the in-memory
//! [`crate::headless::HeadlessPage`].

use crate::error::PageError;
use crate::keyboard::FocusTarget;
use crate::speech::SpeechSynth;
use crate::toolbar::ToolbarMarkup;

/// Inline body style properties the toolbar writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyStyle {
    FontSize,
    Filter,
    Background,
    Color,
}

impl BodyStyle {
    /// CSS property name, as passed to `style.setProperty`.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::FontSize => "font-size",
            Self::Filter => "filter",
            Self::Background => "background",
            Self::Color => "color",
        }
    }
}

/// Moves focus to the first element of a shortcut target.
///
/// Split from [`Page`] because the keydown handler only needs this much and
/// outlives the toolbar.
pub trait FocusNavigator {
    /// Focus the first element matching `target` in document order.
    ///
    /// Returns `Ok(false)` when nothing matches.
    fn focus_first(&mut self, target: FocusTarget) -> Result<bool, PageError>;
}

/// Document operations the toolbar relies on.
pub trait Page: FocusNavigator {
    /// Whether an element with `id` exists anywhere in the document.
    fn has_element(&self, id: &str) -> bool;

    /// Append the toolbar panel to the body.
    fn mount_toolbar(&mut self, markup: &ToolbarMarkup) -> Result<(), PageError>;

    /// Remove the element with `id`. `Ok(false)` when it was already gone.
    fn remove_element(&mut self, id: &str) -> Result<bool, PageError>;

    /// Set an inline body style. An empty `value` clears the property.
    fn set_body_style(&mut self, property: BodyStyle, value: &str) -> Result<(), PageError>;

    /// Current inline value, empty when unset.
    fn body_style(&self, property: BodyStyle) -> String;

    /// Append a `<style>` node with `id` to the document head.
    fn insert_head_style(&mut self, id: &str, css: &str) -> Result<(), PageError>;

    /// Rendered, whitespace-collapsed text of the body.
    fn body_text(&self) -> String;

    /// Probe the speech capability. Evaluated per call, never cached.
    fn speech(&mut self) -> Option<&mut dyn SpeechSynth>;

    /// Show a blocking notice to the user.
    fn alert(&mut self, message: &str);

    /// Attach the host's single keydown handler. Attaching twice is a no-op.
    fn attach_keydown(&mut self) -> Result<(), PageError>;

    /// Detach the handler attached by [`Page::attach_keydown`], if any.
    fn detach_keydown(&mut self) -> Result<(), PageError>;
}

#[cfg(test)]
mod tests {
    use super::BodyStyle;

    #[test]
    fn css_names_match_dom_properties() {
        assert_eq!(BodyStyle::FontSize.css_name(), "font-size");
        assert_eq!(BodyStyle::Filter.css_name(), "filter");
        assert_eq!(BodyStyle::Background.css_name(), "background");
        assert_eq!(BodyStyle::Color.css_name(), "color");
    }
}
