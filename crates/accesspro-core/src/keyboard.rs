#![forbid(unsafe_code)]

//! Alt+letter shortcuts that jump focus to the first heading, link or button.
//!
//! The handler is stateless: whether it runs at all is decided by the host
//! attaching or detaching its single keydown listener. Only handled
//! combinations suppress the browser default; everything else passes
//! through untouched.

use bitflags::bitflags;
use tracing::trace;

use crate::error::PageError;
use crate::page::FocusNavigator;

bitflags! {
    /// Modifier keys held during a keydown.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

/// A keydown as seen by the page: the DOM `key` value plus modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub mods: Modifiers,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: impl Into<String>, mods: Modifiers) -> Self {
        Self {
            key: key.into(),
            mods,
        }
    }

    /// Alt held with `key`.
    #[must_use]
    pub fn alt(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::ALT)
    }
}

/// Element class a shortcut focuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// `h1` through `h6`.
    Heading,
    /// Anchors carrying an `href`.
    Link,
    /// `button`, `input[type=button]` and `input[type=submit]`.
    Button,
}

impl FocusTarget {
    /// CSS selector list for `querySelector`; the first match in document
    /// order is the element to focus.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Heading => "h1, h2, h3, h4, h5, h6",
            Self::Link => "a[href]",
            Self::Button => r#"button, input[type="button"], input[type="submit"]"#,
        }
    }

    /// Selector semantics evaluated against one element, for hosts without
    /// a selector engine.
    #[must_use]
    pub fn matches(self, tag: &str, attr: impl Fn(&str) -> Option<String>) -> bool {
        let tag = tag.to_ascii_lowercase();
        match self {
            Self::Heading => matches!(tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6"),
            Self::Link => tag == "a" && attr("href").is_some(),
            Self::Button => {
                tag == "button"
                    || (tag == "input"
                        && attr("type").is_some_and(|ty| {
                            ty.eq_ignore_ascii_case("button") || ty.eq_ignore_ascii_case("submit")
                        }))
            }
        }
    }
}

/// Fixed shortcut table, all under Alt.
pub const SHORTCUTS: [(&str, FocusTarget); 3] = [
    ("h", FocusTarget::Heading),
    ("l", FocusTarget::Link),
    ("b", FocusTarget::Button),
];

/// Resolve a keydown to its shortcut target, if any.
#[must_use]
pub fn shortcut_for(press: &KeyPress) -> Option<FocusTarget> {
    if !press.mods.contains(Modifiers::ALT) {
        return None;
    }
    SHORTCUTS
        .iter()
        .find(|(key, _)| *key == press.key)
        .map(|&(_, target)| target)
}

/// Result of running a keydown through the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a shortcut; the event must be left alone.
    Ignored,
    /// A shortcut; `focused` is false when the document had no match.
    Handled { target: FocusTarget, focused: bool },
}

impl KeyOutcome {
    /// Whether the host must call `preventDefault` on the event.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Handled { .. })
    }
}

/// The keydown handler body.
pub fn navigate<N: FocusNavigator + ?Sized>(
    nav: &mut N,
    press: &KeyPress,
) -> Result<KeyOutcome, PageError> {
    let Some(target) = shortcut_for(press) else {
        return Ok(KeyOutcome::Ignored);
    };
    let focused = nav.focus_first(target)?;
    trace!(?target, focused, "shortcut handled");
    Ok(KeyOutcome::Handled { target, focused })
}
