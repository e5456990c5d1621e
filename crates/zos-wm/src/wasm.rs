//! WASM exports for the window manager
//!
//! This module provides wasm-bindgen exports for the WmEngine, allowing the
//! page to forward pointer events and read window geometry back.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::control::{ControlId, Parent, WindowConfig};
use crate::engine::WmEngine;
use crate::input::{Gesture, InputSurface};
use crate::math::{FrameStyle, Vec2Int, FRAME_STYLE};

/// Input surface backed by the page document
///
/// The host attaches its document-level pointer listeners while
/// [`WindowManagerController::is_capturing`] is true.
#[derive(Default)]
struct DocumentSurface {
    captures: Cell<u32>,
}

impl InputSurface for DocumentSurface {
    fn subscribe(&self, _owner: ControlId) {
        self.captures.set(self.captures.get() + 1);
    }

    fn unsubscribe(&self, _owner: ControlId) {
        self.captures.set(self.captures.get().saturating_sub(1));
    }

    fn set_cursor(&self, cursor: &str) {
        let body = match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            Some(body) => body,
            None => return,
        };
        if let Err(err) = body.style().set_property("cursor", cursor) {
            console::warn_1(&err);
        }
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Window manager controller for WASM - wraps WmEngine with JS-friendly API
#[wasm_bindgen]
pub struct WindowManagerController {
    engine: WmEngine,
    surface: Rc<DocumentSurface>,
}

#[wasm_bindgen]
impl WindowManagerController {
    /// Create a controller, optionally with a JSON frame style
    #[wasm_bindgen(constructor)]
    pub fn new(style_json: Option<String>) -> Result<WindowManagerController, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let style = match style_json {
            Some(json) => FrameStyle::from_json(&json).map_err(to_js)?,
            None => FRAME_STYLE,
        };
        let surface = Rc::new(DocumentSurface::default());
        let engine = WmEngine::new(style, surface.clone()).map_err(to_js)?;

        Ok(Self { engine, surface })
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Bound the desktop so its far edges become snap targets
    #[wasm_bindgen]
    pub fn set_desktop_size(&mut self, width: i32, height: i32) {
        self.engine.tree.set_desktop_size(Vec2Int::new(width, height));
    }

    /// Create a window on the desktop
    #[wasm_bindgen]
    pub fn create_window(&mut self, title: &str, x: i32, y: i32, w: i32, h: i32) -> Result<u64, JsValue> {
        let config = WindowConfig::new(title, Vec2Int::new(x, y), Vec2Int::new(w, h));
        self.engine.create_window(config).map_err(to_js)
    }

    /// Create a window inside another window's body
    #[wasm_bindgen]
    pub fn create_child_window(
        &mut self,
        parent: u64,
        title: &str,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Result<u64, JsValue> {
        let config = WindowConfig::new(title, Vec2Int::new(x, y), Vec2Int::new(w, h))
            .with_parent(Parent::Window(parent));
        self.engine.create_window(config).map_err(to_js)
    }

    /// Remove a window and everything inside it
    #[wasm_bindgen]
    pub fn remove(&mut self, id: u64) -> Result<(), JsValue> {
        self.engine.remove(id).map(|_| ()).map_err(to_js)
    }

    /// Get all windows as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let tree = &self.engine.tree;
        let mut controls: Vec<_> = tree.all_controls().collect();
        controls.sort_by_key(|c| c.id);

        let windows: Vec<serde_json::Value> = controls
            .iter()
            .filter_map(|c| c.window().map(|w| (c, w)))
            .map(|(c, w)| {
                let screen = tree.absolute_origin(c.parent) + c.position();
                let state = match w.gesture() {
                    Gesture::Idle => "idle",
                    Gesture::Moving { .. } => "moving",
                    Gesture::Resizing { .. } => "resizing",
                };
                serde_json::json!({
                    "id": c.id,
                    "title": w.title,
                    "parent": c.parent,
                    "x": c.position().x,
                    "y": c.position().y,
                    "width": c.size().x,
                    "height": c.size().y,
                    "screenX": screen.x,
                    "screenY": screen.y,
                    "state": state,
                })
            })
            .collect();

        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    /// Drain containers whose layout changed, as JSON
    #[wasm_bindgen]
    pub fn take_dirty_layouts_json(&mut self) -> String {
        serde_json::to_string(&self.engine.tree.take_dirty_layouts()).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: i32, y: i32) -> String {
        let result = self.engine.pointer_down(Vec2Int::new(x, y));
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: i32, y: i32) -> String {
        let result = self.engine.pointer_move(Vec2Int::new(x, y));
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Check if document pointer listeners must stay attached
    #[wasm_bindgen]
    pub fn is_capturing(&self) -> bool {
        self.surface.captures.get() > 0
    }
}
