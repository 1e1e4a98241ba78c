#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

//! Drives the real DOM adapter in a browser.
//!
//! One test function: the toolbar is a page singleton and its keydown
//! handler outlives the panel, so separate tests would observe each other.

use accesspro_web::install;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("test runs in a browser")
}

fn click(id: &str) {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
        .dyn_into::<HtmlElement>()
        .expect("control is an HtmlElement")
        .click();
}

fn body_style(property: &str) -> String {
    document()
        .body()
        .expect("body")
        .style()
        .get_property_value(property)
        .expect("readable style")
}

/// Dispatch Alt+`key`; returns true when the default was prevented.
fn alt_key(key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_alt_key(true);
    init.set_cancelable(true);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    let not_prevented = document().dispatch_event(&event).expect("dispatch");
    !not_prevented
}

fn active_id() -> Option<String> {
    document().active_element().map(|element| element.id())
}

#[wasm_bindgen_test]
fn toolbar_lifecycle_in_browser() {
    let doc = document();
    let body = doc.body().expect("body");
    let heading = doc.create_element("h2").expect("h2");
    heading.set_id("target-heading");
    heading.set_attribute("tabindex", "-1").expect("tabindex");
    heading.set_text_content(Some("Section"));
    body.prepend_with_node_1(&heading).expect("prepend");

    let first = install().expect("first install");
    let second = install().expect("second install");
    assert!(first.mounted());
    assert!(!second.mounted());
    assert_eq!(
        doc.query_selector_all("#accessibility-toolbar")
            .expect("query")
            .length(),
        1
    );

    click("font-size-increase");
    assert_eq!(body_style("font-size"), "1.1em");
    click("font-size-decrease");
    click("font-size-decrease");
    click("font-size-decrease");
    assert_eq!(body_style("font-size"), "0.8em");

    click("toggle-contrast");
    assert_eq!(body_style("filter"), "contrast(200%) brightness(150%)");
    click("toggle-contrast");
    assert_eq!(body_style("filter"), "");
    assert_eq!(body_style("background"), "");

    click("toggle-focus");
    assert!(doc.get_element_by_id("focus-highlight-style").is_some());
    click("toggle-focus");
    assert!(doc.get_element_by_id("focus-highlight-style").is_none());

    assert!(!alt_key("h"), "navigation is off");
    click("toggle-keyboard-nav");
    assert!(alt_key("h"));
    assert_eq!(active_id().as_deref(), Some("target-heading"));
    assert!(!alt_key("q"), "unmatched shortcut passes through");

    let status: serde_json::Value =
        serde_json::from_str(&first.status_json().expect("status")).expect("json");
    assert_eq!(status["keyboard_nav"], true);
    assert_eq!(status["font_scale_percent"], 80);

    click("close-toolbar");
    assert!(doc.get_element_by_id("accessibility-toolbar").is_none());
    assert!(!first.mounted());

    heading
        .dyn_ref::<HtmlElement>()
        .expect("h2 is an HtmlElement")
        .blur()
        .expect("blur");
    assert_ne!(active_id().as_deref(), Some("target-heading"));
    assert!(alt_key("h"), "handler outlives the toolbar");
    assert_eq!(active_id().as_deref(), Some("target-heading"));

    heading.remove();
}
