#![forbid(unsafe_code)]

//! Deterministic in-memory [`Page`] for tests and non-browser embedders.
//!
//! Models just enough of a document for the toolbar: body elements in
//! document order, `<style>` nodes in head, inline body styles, the focused
//! element, a speech engine queue and whether the keydown handler is
//! attached. Mounting the toolbar appends its panel and buttons to the end
//! of body, so shortcut queries see them exactly as a browser would.

use std::collections::BTreeMap;

use crate::error::PageError;
use crate::keyboard::{self, FocusTarget, KeyOutcome, KeyPress};
use crate::page::{BodyStyle, FocusNavigator, Page};
use crate::speech::{SpeechSynth, Utterance};
use crate::toolbar::{TOOLBAR_TITLE, ToolbarMarkup};

/// Stable handle to a body element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessNode {
    pub key: NodeKey,
    pub tag: String,
    pub id: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub parent: Option<NodeKey>,
}

impl HeadlessNode {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Speech engine model: `queue[0]` is what is audible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessSpeech {
    queue: Vec<Utterance>,
    history: Vec<Utterance>,
    cancels: usize,
}

impl HeadlessSpeech {
    #[must_use]
    pub fn queue(&self) -> &[Utterance] {
        &self.queue
    }

    /// Every utterance ever submitted, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Utterance] {
        &self.history
    }

    #[must_use]
    pub const fn cancel_count(&self) -> usize {
        self.cancels
    }

    /// The engine finished the current utterance.
    pub fn finish_current(&mut self) -> Option<Utterance> {
        if self.queue.is_empty() {
            None
        } else {
            Some(self.queue.remove(0))
        }
    }
}

impl SpeechSynth for HeadlessSpeech {
    fn cancel(&mut self) -> Result<(), PageError> {
        self.queue.clear();
        self.cancels += 1;
        Ok(())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), PageError> {
        self.queue.push(utterance.clone());
        self.history.push(utterance.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessPage {
    body: Vec<HeadlessNode>,
    head: Vec<(String, String)>,
    styles: BTreeMap<BodyStyle, String>,
    focused: Option<NodeKey>,
    alerts: Vec<String>,
    speech: Option<HeadlessSpeech>,
    keydown_attached: bool,
    next_key: u32,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPage {
    /// Empty document with a speech engine available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            head: Vec::new(),
            styles: BTreeMap::new(),
            focused: None,
            alerts: Vec::new(),
            speech: Some(HeadlessSpeech::default()),
            keydown_attached: false,
            next_key: 0,
        }
    }

    #[must_use]
    pub fn without_speech(mut self) -> Self {
        self.speech = None;
        self
    }

    /// Add or remove the speech engine, as a browser extension might.
    pub fn set_speech_available(&mut self, available: bool) {
        match (available, self.speech.is_some()) {
            (true, false) => self.speech = Some(HeadlessSpeech::default()),
            (false, true) => self.speech = None,
            _ => {}
        }
    }

    #[must_use]
    pub fn with_element(mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> Self {
        self.push_element(tag, attrs, text);
        self
    }

    #[must_use]
    pub fn with_paragraph(self, text: &str) -> Self {
        self.with_element("p", &[], text)
    }

    pub fn push_paragraph(&mut self, text: &str) -> NodeKey {
        self.push_element("p", &[], text)
    }

    /// Append an element to the end of body.
    pub fn push_element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> NodeKey {
        let id = attrs
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("id"))
            .map(|(_, value)| (*value).to_owned());
        let attrs = attrs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        self.push_node(tag, id, attrs, text, None)
    }

    fn push_node(
        &mut self,
        tag: &str,
        id: Option<String>,
        attrs: Vec<(String, String)>,
        text: &str,
        parent: Option<NodeKey>,
    ) -> NodeKey {
        let key = NodeKey(self.next_key);
        self.next_key += 1;
        self.body.push(HeadlessNode {
            key,
            tag: tag.to_ascii_lowercase(),
            id,
            attrs,
            text: text.to_owned(),
            parent,
        });
        key
    }

    #[must_use]
    pub fn node(&self, key: NodeKey) -> Option<&HeadlessNode> {
        self.body.iter().find(|node| node.key == key)
    }

    /// Body element with `id`, first in document order.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&HeadlessNode> {
        self.body.iter().find(|node| node.id.as_deref() == Some(id))
    }

    /// Number of elements, body and head, carrying `id`.
    #[must_use]
    pub fn count_with_id(&self, id: &str) -> usize {
        self.body
            .iter()
            .filter(|node| node.id.as_deref() == Some(id))
            .count()
            + self.head_style_count(id)
    }

    #[must_use]
    pub fn focused(&self) -> Option<&HeadlessNode> {
        self.focused.and_then(|key| self.node(key))
    }

    /// Move focus directly, as a click or Tab would.
    pub fn set_focus(&mut self, key: Option<NodeKey>) {
        self.focused = key.filter(|key| self.node(*key).is_some());
    }

    #[must_use]
    pub fn head_style(&self, id: &str) -> Option<&str> {
        self.head
            .iter()
            .find(|(style_id, _)| style_id == id)
            .map(|(_, css)| css.as_str())
    }

    #[must_use]
    pub fn head_style_count(&self, id: &str) -> usize {
        self.head.iter().filter(|(style_id, _)| style_id == id).count()
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    #[must_use]
    pub fn speech_engine(&self) -> Option<&HeadlessSpeech> {
        self.speech.as_ref()
    }

    pub fn speech_engine_mut(&mut self) -> Option<&mut HeadlessSpeech> {
        self.speech.as_mut()
    }

    #[must_use]
    pub const fn keydown_attached(&self) -> bool {
        self.keydown_attached
    }

    /// Dispatch a keydown. Only the attached handler can act on it; with no
    /// handler the event is left alone.
    pub fn press(&mut self, press: &KeyPress) -> Result<KeyOutcome, PageError> {
        if !self.keydown_attached {
            return Ok(KeyOutcome::Ignored);
        }
        keyboard::navigate(self, press)
    }

    fn is_within(&self, key: NodeKey, root: NodeKey) -> bool {
        let mut cursor = Some(key);
        while let Some(current) = cursor {
            if current == root {
                return true;
            }
            cursor = self.node(current).and_then(|node| node.parent);
        }
        false
    }
}

impl FocusNavigator for HeadlessPage {
    fn focus_first(&mut self, target: FocusTarget) -> Result<bool, PageError> {
        let hit = self.body.iter().find(|node| {
            target.matches(&node.tag, |name| node.attr(name).map(str::to_owned))
        });
        match hit {
            Some(node) => {
                self.focused = Some(node.key);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Page for HeadlessPage {
    fn has_element(&self, id: &str) -> bool {
        self.element_by_id(id).is_some() || self.head_style(id).is_some()
    }

    fn mount_toolbar(&mut self, markup: &ToolbarMarkup) -> Result<(), PageError> {
        let panel = self.push_node(
            "div",
            Some(markup.id.to_owned()),
            vec![("style".to_owned(), markup.container_css.clone())],
            TOOLBAR_TITLE,
            None,
        );
        for button in markup.buttons {
            self.push_node(
                "button",
                Some(button.dom_id().to_owned()),
                vec![("type".to_owned(), "button".to_owned())],
                button.label(),
                Some(panel),
            );
        }
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> Result<bool, PageError> {
        if let Some(root) = self.element_by_id(id).map(|node| node.key) {
            let doomed: Vec<NodeKey> = self
                .body
                .iter()
                .filter(|node| self.is_within(node.key, root))
                .map(|node| node.key)
                .collect();
            self.body.retain(|node| !doomed.contains(&node.key));
            if self.focused.is_some_and(|key| doomed.contains(&key)) {
                self.focused = None;
            }
            return Ok(true);
        }
        if let Some(index) = self.head.iter().position(|(style_id, _)| style_id == id) {
            self.head.remove(index);
            return Ok(true);
        }
        Ok(false)
    }

    fn set_body_style(&mut self, property: BodyStyle, value: &str) -> Result<(), PageError> {
        if value.is_empty() {
            self.styles.remove(&property);
        } else {
            self.styles.insert(property, value.to_owned());
        }
        Ok(())
    }

    fn body_style(&self, property: BodyStyle) -> String {
        self.styles.get(&property).cloned().unwrap_or_default()
    }

    fn insert_head_style(&mut self, id: &str, css: &str) -> Result<(), PageError> {
        self.head.push((id.to_owned(), css.to_owned()));
        Ok(())
    }

    fn body_text(&self) -> String {
        self.body
            .iter()
            .flat_map(|node| node.text.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn speech(&mut self) -> Option<&mut dyn SpeechSynth> {
        self.speech
            .as_mut()
            .map(|engine| engine as &mut dyn SpeechSynth)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn attach_keydown(&mut self) -> Result<(), PageError> {
        self.keydown_attached = true;
        Ok(())
    }

    fn detach_keydown(&mut self) -> Result<(), PageError> {
        self.keydown_attached = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOOLBAR_ID;
    use crate::config::PanelConfig;

    #[test]
    fn mount_and_remove_toolbar_subtree() {
        let mut page = HeadlessPage::new().with_paragraph("content");
        page.mount_toolbar(&ToolbarMarkup::new(&PanelConfig::default()))
            .unwrap();
        assert!(page.has_element(TOOLBAR_ID));
        assert!(page.has_element("read-page"));

        assert_eq!(page.remove_element(TOOLBAR_ID), Ok(true));
        assert!(!page.has_element(TOOLBAR_ID));
        assert!(!page.has_element("read-page"));
        assert_eq!(page.body_text(), "content");
        assert_eq!(page.remove_element(TOOLBAR_ID), Ok(false));
    }

    #[test]
    fn removing_focused_element_drops_focus() {
        let mut page = HeadlessPage::new();
        page.mount_toolbar(&ToolbarMarkup::new(&PanelConfig::default()))
            .unwrap();
        assert_eq!(page.focus_first(FocusTarget::Button), Ok(true));
        assert_eq!(
            page.focused().and_then(|node| node.id.as_deref()),
            Some("font-size-increase")
        );
        page.remove_element(TOOLBAR_ID).unwrap();
        assert!(page.focused().is_none());
    }

    #[test]
    fn body_text_collapses_whitespace() {
        let page = HeadlessPage::new()
            .with_element("h1", &[], "  Title\n")
            .with_paragraph("one\t two");
        assert_eq!(page.body_text(), "Title one two");
    }

    #[test]
    fn focus_first_respects_document_order() {
        let mut page = HeadlessPage::new()
            .with_element("a", &[], "anchor without href")
            .with_element("a", &[("href", "/second")], "second")
            .with_element("a", &[("href", "/third")], "third");
        assert_eq!(page.focus_first(FocusTarget::Link), Ok(true));
        assert_eq!(page.focused().map(|node| node.text.as_str()), Some("second"));
    }

    #[test]
    fn detached_handler_leaves_keys_alone() {
        let mut page = HeadlessPage::new().with_element("h2", &[], "heading");
        assert_eq!(page.press(&KeyPress::alt("h")), Ok(KeyOutcome::Ignored));
        assert!(page.focused().is_none());
    }

    #[test]
    fn speech_engine_can_come_and_go() {
        let mut page = HeadlessPage::new().without_speech();
        assert!(page.speech().is_none());
        page.set_speech_available(true);
        assert!(page.speech().is_some());
    }
}
