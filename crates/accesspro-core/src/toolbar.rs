#![forbid(unsafe_code)]

//! Toolbar panel markup and its controls.

use crate::TOOLBAR_ID;
use crate::config::PanelConfig;

/// Panel heading.
pub const TOOLBAR_TITLE: &str = "Accessibility Tools";

/// One control on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarButton {
    IncreaseFont,
    DecreaseFont,
    ToggleContrast,
    ToggleFocus,
    ToggleKeyboardNav,
    ReadPage,
    Close,
}

impl ToolbarButton {
    /// Every control, in panel order.
    pub const ALL: [Self; 7] = [
        Self::IncreaseFont,
        Self::DecreaseFont,
        Self::ToggleContrast,
        Self::ToggleFocus,
        Self::ToggleKeyboardNav,
        Self::ReadPage,
        Self::Close,
    ];

    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::IncreaseFont => "font-size-increase",
            Self::DecreaseFont => "font-size-decrease",
            Self::ToggleContrast => "toggle-contrast",
            Self::ToggleFocus => "toggle-focus",
            Self::ToggleKeyboardNav => "toggle-keyboard-nav",
            Self::ReadPage => "read-page",
            Self::Close => "close-toolbar",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IncreaseFont => "Increase Font Size",
            Self::DecreaseFont => "Decrease Font Size",
            Self::ToggleContrast => "High Contrast",
            Self::ToggleFocus => "Focus Highlight",
            Self::ToggleKeyboardNav => "Keyboard Navigation",
            Self::ReadPage => "Read Page",
            Self::Close => "Close",
        }
    }

    /// Button background color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::IncreaseFont | Self::DecreaseFont => "#3498db",
            Self::ToggleContrast => "#e74c3c",
            Self::ToggleFocus => "#f39c12",
            Self::ToggleKeyboardNav => "#9b59b6",
            Self::ReadPage => "#27ae60",
            Self::Close => "#95a5a6",
        }
    }

    /// Reverse lookup from a DOM id.
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.dom_id() == id)
    }
}

/// Everything a host needs to build the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarMarkup {
    pub id: &'static str,
    /// Inline `style` of the fixed-position container.
    pub container_css: String,
    /// Heading plus the control column.
    pub inner_html: String,
    pub buttons: [ToolbarButton; 7],
}

impl ToolbarMarkup {
    #[must_use]
    pub fn new(panel: &PanelConfig) -> Self {
        let container_css = format!(
            "position: fixed; top: {}px; right: {}px; background: #2c3e50; color: white; \
             padding: 15px; border-radius: 8px; z-index: {}; font-family: Arial, sans-serif; \
             font-size: 14px; box-shadow: 0 4px 12px rgba(0,0,0,0.3); max-width: 250px;",
            panel.top_px, panel.right_px, panel.z_index
        );

        let mut inner_html = format!(
            r#"<h3 style="margin: 0 0 10px 0; color: #ecf0f1;">{TOOLBAR_TITLE}</h3><div style="display: flex; flex-direction: column; gap: 8px;">"#
        );
        for button in ToolbarButton::ALL {
            inner_html.push_str(&format!(
                r#"<button id="{}" type="button" style="padding: 8px; border: none; border-radius: 4px; background: {}; color: white; cursor: pointer;">{}</button>"#,
                button.dom_id(),
                button.color(),
                button.label()
            ));
        }
        inner_html.push_str("</div>");

        Self {
            id: TOOLBAR_ID,
            container_css,
            inner_html,
            buttons: ToolbarButton::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique_and_reversible() {
        for button in ToolbarButton::ALL {
            assert_eq!(ToolbarButton::from_dom_id(button.dom_id()), Some(button));
        }
        assert_eq!(ToolbarButton::from_dom_id("nope"), None);
    }

    #[test]
    fn markup_carries_every_control_in_order() {
        let markup = ToolbarMarkup::new(&PanelConfig::default());
        let mut cursor = 0;
        for button in ToolbarButton::ALL {
            let at = markup.inner_html[cursor..]
                .find(button.dom_id())
                .unwrap_or_else(|| panic!("{button:?} missing or out of order"));
            cursor += at;
        }
        assert!(markup.inner_html.starts_with("<h3"));
    }

    #[test]
    fn panel_config_flows_into_container_css() {
        let markup = ToolbarMarkup::new(&PanelConfig {
            top_px: 40,
            right_px: 0,
            z_index: 7,
        });
        assert!(markup.container_css.contains("top: 40px;"));
        assert!(markup.container_css.contains("right: 0px;"));
        assert!(markup.container_css.contains("z-index: 7;"));
        assert_eq!(markup.id, TOOLBAR_ID);
    }
}
