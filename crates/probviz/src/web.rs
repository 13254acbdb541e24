//! Web entry point using ratzilla.
//!
//! Renders the same `Ui` into a DOM-backed terminal. Key events arrive through
//! ratzilla's callback and the frame is redrawn on every animation tick.

use std::cell::RefCell;
use std::rc::Rc;

use probviz_core::DistributionKind;
use ratatui::{Frame, Terminal};
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::components::EventResult;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::ui::Ui;

/// Web application state wrapped for callback access.
struct WebApp {
    state: AppState,
    ui: Ui,
}

impl WebApp {
    fn new() -> Self {
        Self {
            state: AppState::new(DistributionKind::Normal, KeybindingsConfig::default()),
            ui: Ui::new(),
        }
    }

    fn handle_key(&mut self, key: AppKeyEvent) {
        // There is no process to exit in the browser
        if self.ui.handle_key(key, &mut self.state) == EventResult::Exit {
            tracing::info!("Exit requested, ignored on web");
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.ui.draw(frame, &self.state);
    }
}

/// Keep Tab inside the app instead of moving browser focus.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        if event.key() == "Tab" {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    closure.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    crate::init_logging_web();

    tracing::info!("probviz web version starting");

    setup_prevent_default()?;

    let app = Rc::new(RefCell::new(WebApp::new()));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        app_clone.borrow_mut().handle_key(key);
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
