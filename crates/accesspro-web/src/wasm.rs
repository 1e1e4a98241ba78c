#![forbid(unsafe_code)]

//! `wasm-bindgen` exports: install entry points and the toolbar handle.
//!
//! Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::rc::Rc;

use accesspro_core::{AccessibilityToolbar, MountOutcome, ToolbarButton, ToolbarConfig};
use js_sys::Reflect;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::WebPage;
use crate::logging;

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = match info.location() {
                Some(loc) => format!(
                    "accesspro panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                ),
                None => format!("accesspro panic: {info}"),
            };
            console_error(&msg);
        }));
    });
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Controller plus the page it drives; shared by every control listener.
struct Session {
    toolbar: AccessibilityToolbar,
    page: WebPage,
}

type SharedSession = Rc<RefCell<Session>>;

/// Handle returned to the host page after `install`.
#[wasm_bindgen]
pub struct ToolbarHandle {
    session: SharedSession,
}

#[wasm_bindgen]
impl ToolbarHandle {
    /// Whether this install mounted the panel and it is still up.
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.session.borrow().toolbar.is_mounted()
    }

    /// Current feature states as JSON.
    #[wasm_bindgen(js_name = statusJson)]
    pub fn status_json(&self) -> Result<String, JsValue> {
        let status = self.session.borrow().toolbar.status();
        serde_json::to_string(&status).map_err(to_js)
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
}

/// Mount the toolbar with the stock configuration.
#[wasm_bindgen]
pub fn install() -> Result<ToolbarHandle, JsValue> {
    install_session(ToolbarConfig::default())
}

/// Mount the toolbar with a JSON configuration.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) -> Result<ToolbarHandle, JsValue> {
    let config = ToolbarConfig::from_json_str(json).map_err(to_js)?;
    install_session(config)
}

fn install_session(config: ToolbarConfig) -> Result<ToolbarHandle, JsValue> {
    logging::init(&config.log_level);
    let page = WebPage::new().map_err(to_js)?;
    let session = Rc::new(RefCell::new(Session {
        toolbar: AccessibilityToolbar::new(config),
        page,
    }));

    let outcome = {
        let mut guard = session.borrow_mut();
        let Session { toolbar, page } = &mut *guard;
        toolbar.create(page).map_err(to_js)?
    };
    if outcome == MountOutcome::Mounted {
        wire_controls(&session)?;
    }
    debug!(?outcome, "install finished");
    Ok(ToolbarHandle { session })
}

fn wire_controls(session: &SharedSession) -> Result<(), JsValue> {
    let document = session.borrow().page.document().clone();
    for button in ToolbarButton::ALL {
        let Some(element) = document.get_element_by_id(button.dom_id()) else {
            warn!(?button, "toolbar control missing after mount");
            continue;
        };
        let session = Rc::clone(session);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let Ok(mut guard) = session.try_borrow_mut() else {
                warn!(?button, "control clicked while another is running");
                return;
            };
            let Session { toolbar, page } = &mut *guard;
            match toolbar.click(button, page) {
                Ok(effect) => debug!(?button, ?effect, "control clicked"),
                Err(err) => warn!(%err, ?button, "control failed"),
            }
        });
        element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        // The control owns its listener for the rest of the page's life.
        callback.forget();
    }
    Ok(())
}
