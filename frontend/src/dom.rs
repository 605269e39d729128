use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::ui_state::menu::ScrollLock;

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        if let Err(e) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("Failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Placeholder for flows that aren't wired up yet (payments, booking).
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Suspends page scrolling by setting `overflow: hidden` on `<body>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn body_style() -> Option<web_sys::CssStyleDeclaration> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.style())
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        if let Some(style) = Self::body_style() {
            let _ = style.set_property("overflow", "hidden");
        }
    }

    fn unlock(&self) {
        if let Some(style) = Self::body_style() {
            let _ = style.remove_property("overflow");
        }
    }
}
