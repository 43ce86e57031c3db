//! Browser implementation: `<canvas>` surface, DOM input, animation frames
//! and image loading.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent, MouseEvent};

use crate::error::{ClibError, Result};
use crate::images::ImageBatch;
use crate::options::{Direction, LineCap, LineJoin, Shadow, TextAlign, TextBaseline};
use crate::stage::{InputEvent, Stage};
use crate::surface::Surface;

fn platform_err(what: &str, err: JsValue) -> ClibError {
    ClibError::Platform(format!("{}: {:?}", what, err))
}

/// Log a failed canvas call; drawing never aborts a frame
fn check(what: &str, result: std::result::Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("canvas {} failed: {:?}", what, err);
    }
}

/// A `<canvas>` element and its 2D context
///
/// Coordinates are CSS pixels. The backing store is scaled by the device
/// pixel ratio so drawing stays sharp on high-density screens.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: f32,
    height: f32,
    pixel_ratio: f64,
}

impl CanvasSurface {
    /// Find the canvas with `id` and prepare it for drawing
    pub fn from_element_id(id: &str) -> Result<Self> {
        let not_found = || ClibError::SurfaceNotFound(id.to_string());

        let window = web_sys::window().ok_or_else(not_found)?;
        let document = window.document().ok_or_else(not_found)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(not_found)?
            .dyn_into()
            .map_err(|_| not_found())?;

        Self::from_canvas(canvas, window.device_pixel_ratio())
    }

    pub fn from_canvas(canvas: HtmlCanvasElement, pixel_ratio: f64) -> Result<Self> {
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| platform_err("getContext", e))?
            .ok_or_else(|| ClibError::Platform("2d context unavailable".into()))?
            .dyn_into()
            .map_err(|e| platform_err("2d context cast", e.into()))?;

        let width = canvas.width();
        let height = canvas.height();

        // Pin the CSS size before enlarging the backing store
        let style = canvas.style();
        if style.get_property_value("width").unwrap_or_default().is_empty() {
            check("style width", style.set_property("width", &format!("{}px", width)));
        }
        if style.get_property_value("height").unwrap_or_default().is_empty() {
            check("style height", style.set_property("height", &format!("{}px", height)));
        }

        canvas.set_width((width as f64 * pixel_ratio).ceil() as u32);
        canvas.set_height((height as f64 * pixel_ratio).ceil() as u32);
        check("scale", context.scale(pixel_ratio, pixel_ratio));

        log::info!(
            "Canvas {:?} acquired: {}x{} at {}x pixel ratio",
            canvas.id(),
            width,
            height,
            pixel_ratio
        );

        Ok(Self {
            canvas,
            context,
            width: width as f32,
            height: height as f32,
            pixel_ratio,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.context.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.context.line_to(x as f64, y as f64);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32, counterclockwise: bool) {
        check(
            "arc",
            self.context.arc_with_anticlockwise(
                x as f64,
                y as f64,
                radius as f64,
                start as f64,
                end as f64,
                counterclockwise,
            ),
        );
    }

    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) {
        check(
            "arcTo",
            self.context
                .arc_to(x1 as f64, y1 as f64, x2 as f64, y2 as f64, radius as f64),
        );
    }

    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.context.bezier_curve_to(
            c1x as f64, c1y as f64, c2x as f64, c2y as f64, x as f64, y as f64,
        );
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.context
            .quadratic_curve_to(cx as f64, cy as f64, x as f64, y as f64);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.context
            .rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn set_fill_style(&mut self, style: &str) {
        self.context.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.context.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f32) {
        self.context.set_line_width(width as f64);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.context.set_line_join(join.as_str());
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.context.set_line_cap(cap.as_str());
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.context.set_shadow_color(&shadow.colour);
        self.context.set_shadow_blur(shadow.blur as f64);
        self.context.set_shadow_offset_x(shadow.offset_x as f64);
        self.context.set_shadow_offset_y(shadow.offset_y as f64);
    }

    fn set_font(&mut self, font: &str) {
        self.context.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.context.set_text_align(align.as_str());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.context.set_text_baseline(baseline.as_str());
    }

    fn set_direction(&mut self, direction: Direction) {
        let set = js_sys::Reflect::set(
            &self.context,
            &JsValue::from_str("direction"),
            &JsValue::from_str(direction.as_str()),
        );
        check("direction", set.map(|_| ()));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        check("fillText", self.context.fill_text(text, x as f64, y as f64));
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        check("strokeText", self.context.stroke_text(text, x as f64, y as f64));
    }

    fn measure_text(&self, text: &str) -> f32 {
        match self.context.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(err) => {
                log::warn!("canvas measureText failed: {:?}", err);
                0.0
            }
        }
    }

    fn image_size(&self, image: &HtmlImageElement) -> (f32, f32) {
        (image.natural_width() as f32, image.natural_height() as f32)
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f32, y: f32, width: f32, height: f32) {
        check(
            "drawImage",
            self.context.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                x as f64,
                y as f64,
                width as f64,
                height as f64,
            ),
        );
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        check("translate", self.context.translate(x as f64, y as f64));
    }

    fn scale(&mut self, x: f32, y: f32) {
        check("scale", self.context.scale(x as f64, y as f64));
    }

    /// Back to identity in CSS pixels, keeping the pixel-ratio scale
    fn reset_transform(&mut self) {
        let r = self.pixel_ratio;
        check("setTransform", self.context.set_transform(r, 0.0, 0.0, r, 0.0, 0.0));
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.context
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.context.set_image_smoothing_enabled(enabled);
    }

    fn set_background(&mut self, css: &str) {
        check("background", self.canvas.style().set_property("background", css));
    }

    fn set_focusable(&mut self, focusable: bool, outline: bool) {
        if focusable {
            self.canvas.set_tab_index(1);
            if !outline {
                check("outline", self.canvas.style().set_property("outline", "0"));
            }
        }
    }
}

type DomListener = Closure<dyn FnMut(web_sys::Event)>;

/// DOM listeners feeding a stage; dropping this removes them
pub struct InputBindings {
    canvas: HtmlCanvasElement,
    listeners: Vec<(&'static str, DomListener)>,
}

impl Drop for InputBindings {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            check(
                "removeEventListener",
                self.canvas
                    .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref()),
            );
        }
        log::debug!("input listeners removed");
    }
}

/// Mirror canvas mouse and keyboard events into `stage`
pub fn attach_input(stage: &Rc<RefCell<Stage<CanvasSurface>>>) -> Result<InputBindings> {
    let canvas = stage.borrow().surface().canvas().clone();
    let mut bindings = InputBindings {
        canvas: canvas.clone(),
        listeners: Vec::new(),
    };

    let events: [(&'static str, fn(&web_sys::Event) -> Option<InputEvent>); 5] = [
        ("mousemove", |e| {
            let e = e.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::MouseMove {
                x: e.offset_x() as f32,
                y: e.offset_y() as f32,
            })
        }),
        ("mousedown", |e| {
            let e = e.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::MouseDown { button: e.button() })
        }),
        ("mouseup", |e| {
            let e = e.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::MouseUp { button: e.button() })
        }),
        ("keydown", |e| {
            let e = e.dyn_ref::<KeyboardEvent>()?;
            Some(InputEvent::KeyDown { code: e.key_code() })
        }),
        ("keyup", |e| {
            let e = e.dyn_ref::<KeyboardEvent>()?;
            Some(InputEvent::KeyUp { code: e.key_code() })
        }),
    ];

    for (name, convert) in events {
        let stage = stage.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(input) = convert(&event) else {
                return;
            };
            match stage.try_borrow_mut() {
                Ok(mut stage) => stage.handle_input(input),
                Err(_) => log::warn!("stage busy, dropped {} event", event.type_()),
            }
        });
        canvas
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(|e| platform_err("addEventListener", e))?;
        bindings.listeners.push((name, closure));
    }

    Ok(bindings)
}

/// `requestAnimationFrame` loop ticking a stage
///
/// The loop runs until [`FrameLoop::stop`]; dropping the handle does not stop
/// it.
#[derive(Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<S: Surface + 'static>(stage: Rc<RefCell<Stage<S>>>) -> Self {
        let running = Rc::new(Cell::new(true));
        request_frame(stage, running.clone());
        log::debug!("frame loop started");
        Self { running }
    }

    /// Stop after the frame currently scheduled (which does not tick)
    pub fn stop(&self) {
        self.running.set(false);
        log::debug!("frame loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn request_frame<S: Surface + 'static>(stage: Rc<RefCell<Stage<S>>>, running: Rc<Cell<bool>>) {
    let Some(window) = web_sys::window() else {
        log::error!("no window, frame loop cannot run");
        return;
    };
    let callback = Closure::once_into_js(move |time: f64| {
        if !running.get() {
            return;
        }
        match stage.try_borrow_mut() {
            Ok(mut s) => s.tick(time),
            Err(_) => log::warn!("stage busy, skipped a frame"),
        }
        request_frame(stage, running);
    });
    if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", err);
    }
}

/// Load every `name -> url` image in parallel.
///
/// `on_image` runs as each image arrives and `on_finish` once all have, or
/// right away when `sources` is empty.
pub fn load_images(
    sources: impl IntoIterator<Item = (String, String)>,
    on_image: impl FnMut(&str, &HtmlImageElement) + 'static,
    on_finish: impl FnOnce(HashMap<String, HtmlImageElement>) + 'static,
) -> Result<()> {
    let batch = ImageBatch::new(sources).on_image(on_image).on_finish(on_finish);
    let requests: Vec<(String, String)> = batch.sources().to_vec();
    let batch = Rc::new(RefCell::new(batch));

    for (name, src) in requests {
        let image = HtmlImageElement::new().map_err(|e| platform_err("new Image", e))?;

        let loaded = image.clone();
        let batch = batch.clone();
        let onload = Closure::once_into_js(move || {
            match batch.try_borrow_mut() {
                Ok(mut batch) => {
                    batch.loaded(&name, loaded);
                }
                Err(_) => log::warn!("image batch busy, lost image {:?}", name),
            }
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_src(&src);
    }

    batch.borrow_mut().start();
    Ok(())
}
