#![forbid(unsafe_code)]

//! [`Page`] over the live browser DOM.

use accesspro_core::keyboard::{self, KeyPress, Modifiers};
use accesspro_core::{
    BodyStyle, FocusNavigator, FocusTarget, Page, PageError, SpeechSynth, ToolbarMarkup, Utterance,
};
use js_sys::{Function, Reflect};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, SpeechSynthesis, SpeechSynthesisUtterance,
    Window,
};

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

fn host_err(op: &'static str) -> impl Fn(JsValue) -> PageError {
    move |value| PageError::host(op, js_message(&value))
}

/// Normalize a DOM keydown into the core's key model.
pub(crate) fn key_press(event: &KeyboardEvent) -> KeyPress {
    let mut mods = Modifiers::empty();
    if event.shift_key() {
        mods |= Modifiers::SHIFT;
    }
    if event.alt_key() {
        mods |= Modifiers::ALT;
    }
    if event.ctrl_key() {
        mods |= Modifiers::CTRL;
    }
    if event.meta_key() {
        mods |= Modifiers::SUPER;
    }
    KeyPress::new(event.key(), mods)
}

fn focus_element(element: &Element) -> Result<(), PageError> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return html.focus().map_err(host_err("focus"));
    }
    // SVG anchors are not HtmlElements but still focusable.
    let focus = Reflect::get(element, &JsValue::from_str("focus")).map_err(host_err("focus"))?;
    match focus.dyn_ref::<Function>() {
        Some(focus) => focus.call0(element).map(drop).map_err(host_err("focus")),
        None => Ok(()),
    }
}

/// Query + focus half of the page, shared with the keydown handler.
#[derive(Clone)]
pub(crate) struct DomFocus {
    document: Document,
}

impl FocusNavigator for DomFocus {
    fn focus_first(&mut self, target: FocusTarget) -> Result<bool, PageError> {
        let hit = self
            .document
            .query_selector(target.selector())
            .map_err(host_err("querySelector"))?;
        match hit {
            Some(element) => {
                focus_element(&element)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

struct WebSpeech {
    synth: SpeechSynthesis,
}

impl SpeechSynth for WebSpeech {
    fn cancel(&mut self) -> Result<(), PageError> {
        self.synth.cancel();
        Ok(())
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), PageError> {
        let spoken = SpeechSynthesisUtterance::new_with_text(&utterance.text)
            .map_err(host_err("SpeechSynthesisUtterance"))?;
        spoken.set_rate(utterance.rate);
        self.synth.speak(&spoken);
        Ok(())
    }
}

/// The page the script was injected into.
pub(crate) struct WebPage {
    window: Window,
    document: Document,
    focus: DomFocus,
    /// The one keydown handler; added and removed by this same reference.
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    keydown_attached: bool,
    speech: Option<WebSpeech>,
}

impl WebPage {
    pub(crate) fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::MissingNode("window"))?;
        let document = window.document().ok_or(PageError::MissingNode("document"))?;
        let focus = DomFocus {
            document: document.clone(),
        };

        let mut handler_focus = focus.clone();
        let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            match keyboard::navigate(&mut handler_focus, &key_press(&event)) {
                Ok(outcome) if outcome.prevents_default() => event.prevent_default(),
                Ok(_) => {}
                Err(err) => warn!(%err, "keyboard shortcut failed"),
            }
        });

        Ok(Self {
            window,
            document,
            focus,
            keydown,
            keydown_attached: false,
            speech: None,
        })
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    fn body(&self) -> Result<HtmlElement, PageError> {
        self.document.body().ok_or(PageError::MissingNode("body"))
    }
}

impl FocusNavigator for WebPage {
    fn focus_first(&mut self, target: FocusTarget) -> Result<bool, PageError> {
        self.focus.focus_first(target)
    }
}

impl Page for WebPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn mount_toolbar(&mut self, markup: &ToolbarMarkup) -> Result<(), PageError> {
        let body = self.body()?;
        let panel = self
            .document
            .create_element("div")
            .map_err(host_err("createElement"))?;
        panel.set_id(markup.id);
        panel
            .set_attribute("style", &markup.container_css)
            .map_err(host_err("setAttribute"))?;
        panel.set_inner_html(&markup.inner_html);
        body.append_child(&panel).map_err(host_err("appendChild"))?;
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> Result<bool, PageError> {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn set_body_style(&mut self, property: BodyStyle, value: &str) -> Result<(), PageError> {
        let style = self.body()?.style();
        if value.is_empty() {
            style
                .remove_property(property.css_name())
                .map(drop)
                .map_err(host_err("removeProperty"))
        } else {
            style
                .set_property(property.css_name(), value)
                .map_err(host_err("setProperty"))
        }
    }

    fn body_style(&self, property: BodyStyle) -> String {
        self.body()
            .ok()
            .and_then(|body| body.style().get_property_value(property.css_name()).ok())
            .unwrap_or_default()
    }

    fn insert_head_style(&mut self, id: &str, css: &str) -> Result<(), PageError> {
        let head = self.document.head().ok_or(PageError::MissingNode("head"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(host_err("createElement"))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(host_err("appendChild"))?;
        Ok(())
    }

    fn body_text(&self) -> String {
        self.body().map(|body| body.inner_text()).unwrap_or_default()
    }

    fn speech(&mut self) -> Option<&mut dyn SpeechSynth> {
        let present =
            Reflect::has(&self.window, &JsValue::from_str("speechSynthesis")).unwrap_or(false);
        self.speech = if present {
            self.window
                .speech_synthesis()
                .ok()
                .map(|synth| WebSpeech { synth })
        } else {
            None
        };
        self.speech
            .as_mut()
            .map(|engine| engine as &mut dyn SpeechSynth)
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!(err = %js_message(&err), "alert failed");
        }
    }

    fn attach_keydown(&mut self) -> Result<(), PageError> {
        if self.keydown_attached {
            return Ok(());
        }
        self.document
            .add_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
            .map_err(host_err("addEventListener"))?;
        self.keydown_attached = true;
        Ok(())
    }

    fn detach_keydown(&mut self) -> Result<(), PageError> {
        if !self.keydown_attached {
            return Ok(());
        }
        self.document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
            .map_err(host_err("removeEventListener"))?;
        self.keydown_attached = false;
        Ok(())
    }
}
