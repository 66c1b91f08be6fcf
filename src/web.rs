//! Browser glue: mounts particle layers onto the exported page's canvases and wires the
//! smooth-scroll button.
//!
//! JS usage (see the boot script in `page::html`):
//!
//! ```js
//! await init();
//! const app = PortfolioApp.mount();
//! // ...
//! app.free(); // cancels frame loops and removes listeners
//! ```

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, HtmlCanvasElement, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use crate::background::{ParticleBackground, Viewport};
use crate::canvas::{Canvas, Rgba};
use crate::error::{PortfolioError, Result};
use crate::page::html::{
    HERO_CONTENT_CLASS, LOADING_CLASS, MOUNTED_CLASS, PARTICLE_CANVAS_CLASS, SCROLL_TARGET_ATTR,
};

#[wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Warn).ok();
}

fn js_error(value: JsValue) -> PortfolioError {
    PortfolioError::Js(format!("{:?}", value))
}

/// `<canvas>` plus its 2D context
pub struct WebCanvas {
    element: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl WebCanvas {
    /// `None` when the browser cannot hand out a 2D context
    pub fn from_element(element: HtmlCanvasElement) -> Option<Self> {
        let context = element
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { element, context })
    }
}

impl Canvas for WebCanvas {
    fn size(&self) -> (u32, u32) {
        (self.element.width(), self.element.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.context.begin_path();
        if self
            .context
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.context.set_fill_style_str(&color.to_string());
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.context.begin_path();
        self.context.move_to(from.x as f64, from.y as f64);
        self.context.line_to(to.x as f64, to.y as f64);
        self.context.set_stroke_style_str(&color.to_string());
        self.context.set_line_width(width as f64);
        self.context.stroke();
    }
}

fn viewport(window: &Window) -> Viewport {
    let dimension = |value: std::result::Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0)
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

type FrameCallback = Closure<dyn FnMut()>;

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<i32> {
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("requestAnimationFrame failed: {:?}", err);
            None
        }
    }
}

/// One particle layer with its frame loop and resize listener.
///
/// Dropping it cancels the pending frame, removes the listener and frees the frame closure.
struct MountedBackground {
    window: Window,
    background: Rc<RefCell<ParticleBackground<WebCanvas>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    frame_callback: Rc<RefCell<Option<FrameCallback>>>,
    on_resize: Closure<dyn FnMut()>,
}

impl MountedBackground {
    fn mount(window: &Window, canvas: WebCanvas) -> Result<Self> {
        let background = Rc::new(RefCell::new(ParticleBackground::mount(
            canvas,
            viewport(window),
        )));

        let on_resize = {
            let background = background.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                background.borrow_mut().resize(viewport(&window));
            })
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(js_error)?;

        let frame_id = Rc::new(Cell::new(None));
        let frame_callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let tick = {
            let background = background.clone();
            let frame_id = frame_id.clone();
            let frame_callback = frame_callback.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                frame_id.set(None);
                {
                    let mut background = background.borrow_mut();
                    background.frame();
                    if !background.is_running() {
                        return;
                    }
                }
                if let Some(callback) = frame_callback.borrow().as_ref() {
                    frame_id.set(request_frame(&window, callback));
                }
            })
        };
        frame_id.set(request_frame(window, &tick));
        *frame_callback.borrow_mut() = Some(tick);

        Ok(Self {
            window: window.clone(),
            background,
            frame_id,
            frame_callback,
            on_resize,
        })
    }
}

impl Drop for MountedBackground {
    fn drop(&mut self) {
        self.background.borrow_mut().unmount();

        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove resize listener: {:?}", err);
        }

        // The frame closure holds an Rc to its own slot; emptying the slot breaks the cycle
        self.frame_callback.borrow_mut().take();
    }
}

/// Scroll `id` into view smoothly. Missing targets are ignored.
pub fn scroll_to_section(document: &Document, id: &str) {
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("Scroll target #{} not found", id),
    }
}

struct ScrollButton {
    element: Element,
    on_click: Closure<dyn FnMut(Event)>,
}

impl Drop for ScrollButton {
    fn drop(&mut self) {
        if let Err(err) = self
            .element
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove scroll button listener: {:?}", err);
        }
    }
}

/// Everything the page mounted. Free it from JS to tear the animation down.
#[wasm_bindgen]
pub struct PortfolioApp {
    backgrounds: Vec<MountedBackground>,
    // Held only so their listeners are removed on drop
    _scroll_buttons: Vec<ScrollButton>,
}

#[wasm_bindgen]
impl PortfolioApp {
    pub fn mount() -> std::result::Result<PortfolioApp, JsValue> {
        Self::try_mount().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = backgroundCount)]
    pub fn background_count(&self) -> usize {
        self.backgrounds.len()
    }
}

impl PortfolioApp {
    fn try_mount() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| PortfolioError::Js("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PortfolioError::Js("no document".into()))?;

        let mut backgrounds = Vec::new();
        let canvases = document
            .query_selector_all(&format!("canvas.{}", PARTICLE_CANVAS_CLASS))
            .map_err(js_error)?;
        for i in 0..canvases.length() {
            let Some(element) = canvases
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlCanvasElement>().ok())
            else {
                continue;
            };
            match WebCanvas::from_element(element) {
                Some(canvas) => backgrounds.push(MountedBackground::mount(&window, canvas)?),
                None => log::debug!("Canvas {} has no 2D context, leaving it blank", i),
            }
        }

        let mut scroll_buttons = Vec::new();
        let buttons = document
            .query_selector_all(&format!("[{}]", SCROLL_TARGET_ATTR))
            .map_err(js_error)?;
        for i in 0..buttons.length() {
            let Some(element) = buttons.item(i).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let on_click = {
                let document = document.clone();
                let element = element.clone();
                Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    if let Some(target) = element.get_attribute(SCROLL_TARGET_ATTR) {
                        scroll_to_section(&document, &target);
                    }
                })
            };
            element
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(js_error)?;
            scroll_buttons.push(ScrollButton { element, on_click });
        }

        if let Some(hero) = document
            .query_selector(&format!(".{}", HERO_CONTENT_CLASS))
            .map_err(js_error)?
        {
            hero.class_list().add_1(MOUNTED_CLASS).map_err(js_error)?;
        }
        if let Some(root) = document.document_element() {
            root.class_list().remove_1(LOADING_CLASS).map_err(js_error)?;
        }

        log::info!(
            "Portfolio mounted: {} particle layers, {} scroll buttons",
            backgrounds.len(),
            scroll_buttons.len()
        );

        Ok(Self {
            backgrounds,
            _scroll_buttons: scroll_buttons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("test runs in a browser")
    }

    fn add_element(tag: &str, class: &str, id: &str) -> Element {
        let document = document();
        let element = document.create_element(tag).unwrap();
        element.set_class_name(class);
        if !id.is_empty() {
            element.set_id(id);
        }
        document
            .document_element()
            .unwrap()
            .append_child(&element)
            .unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn test_drop_cancels_frame_loop() {
        let canvas = add_element("canvas", PARTICLE_CANVAS_CLASS, "");
        let button = add_element("button", "", "");
        button.set_attribute(SCROLL_TARGET_ATTR, "nowhere").unwrap();

        let app = PortfolioApp::try_mount().unwrap();
        assert_eq!(app.background_count(), 1);
        assert_eq!(app._scroll_buttons.len(), 1);

        let mounted = &app.backgrounds[0];
        let background = mounted.background.clone();
        let frame_id = mounted.frame_id.clone();
        let frame_callback = mounted.frame_callback.clone();
        assert!(frame_id.get().is_some());
        assert!(background.borrow().is_running());

        drop(app);

        assert_eq!(frame_id.get(), None);
        assert!(!background.borrow().is_running());
        assert!(frame_callback.borrow().is_none());

        canvas.remove();
        button.remove();
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_missing_section_is_noop() {
        scroll_to_section(&document(), "nowhere");
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_existing_section() {
        let section = add_element("section", "", "scroll-test-target");
        scroll_to_section(&document(), "scroll-test-target");
        section.remove();
    }
}
