//! Drawing surface abstraction
//!
//! `Surface` is the immediate-mode 2D drawing context a `Stage` draws into.
//! It mirrors the browser canvas 2D API closely so the web implementation is a
//! one-line forward per method. `RecordingSurface` is the headless
//! implementation used natively and in tests.

pub mod recording;

pub use recording::{DrawCommand, RecordedImage, RecordingSurface};

use crate::options::{Direction, LineCap, LineJoin, Shadow, TextAlign, TextBaseline};

/// A 2D immediate-mode drawing surface
pub trait Surface {
    /// Image handle accepted by `draw_image`
    type Image;

    /// Backing width in surface pixels
    fn width(&self) -> f32;
    /// Backing height in surface pixels
    fn height(&self) -> f32;

    // Paths
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32, counterclockwise: bool);
    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32);
    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill(&mut self);
    fn stroke(&mut self);

    // Styles
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f32);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_shadow(&mut self, shadow: &Shadow);

    // Text
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn set_direction(&mut self, direction: Direction);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);
    /// Advance width of `text` in the current font
    fn measure_text(&self, text: &str) -> f32;

    // Images
    fn image_size(&self, image: &Self::Image) -> (f32, f32);
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32, width: f32, height: f32);

    // Transform stack
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn scale(&mut self, x: f32, y: f32);
    fn reset_transform(&mut self);
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn set_image_smoothing(&mut self, enabled: bool);

    /// Element-level hints; surfaces without an element ignore them
    fn set_background(&mut self, _css: &str) {}
    fn set_focusable(&mut self, _focusable: bool, _outline: bool) {}
}
