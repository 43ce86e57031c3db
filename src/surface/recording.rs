//! Headless surface that records every call

use super::Surface;
use crate::options::{Direction, LineCap, LineJoin, Shadow, TextAlign, TextBaseline};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    ClosePath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Arc {
        x: f32,
        y: f32,
        radius: f32,
        start: f32,
        end: f32,
        counterclockwise: bool,
    },
    ArcTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        radius: f32,
    },
    BezierCurveTo {
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    },
    QuadraticCurveTo {
        cx: f32,
        cy: f32,
        x: f32,
        y: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Fill,
    Stroke,
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f32),
    LineJoin(LineJoin),
    LineCap(LineCap),
    Shadow(Shadow),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    Direction(Direction),
    FillText { text: String, x: f32, y: f32 },
    StrokeText { text: String, x: f32, y: f32 },
    DrawImage {
        name: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Save,
    Restore,
    Translate(f32, f32),
    Scale(f32, f32),
    ResetTransform,
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    ImageSmoothing(bool),
    Background(String),
    Focusable { focusable: bool, outline: bool },
}

/// Image stand-in for headless runs
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedImage {
    pub name: String,
    pub width: f32,
    pub height: f32,
}

impl RecordedImage {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// A surface that draws nothing and remembers what it was asked to do
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    /// Fixed advance per character used by `measure_text`
    glyph_width: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            glyph_width: 7.0,
            commands: Vec::new(),
        }
    }

    pub fn with_glyph_width(mut self, glyph_width: f32) -> Self {
        self.glyph_width = glyph_width;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, cmd: DrawCommand) {
        log::trace!("surface: {:?}", cmd);
        self.commands.push(cmd);
    }
}

impl Surface for RecordingSurface {
    type Image = RecordedImage;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo(x, y));
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32, counterclockwise: bool) {
        self.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start,
            end,
            counterclockwise,
        });
    }

    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) {
        self.push(DrawCommand::ArcTo {
            x1,
            y1,
            x2,
            y2,
            radius,
        });
    }

    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.push(DrawCommand::BezierCurveTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.push(DrawCommand::QuadraticCurveTo { cx, cy, x, y });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.push(DrawCommand::FillStyle(style.to_string()));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.push(DrawCommand::StrokeStyle(style.to_string()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.push(DrawCommand::LineJoin(join));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.push(DrawCommand::LineCap(cap));
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.push(DrawCommand::Shadow(shadow.clone()));
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.push(DrawCommand::TextBaseline(baseline));
    }

    fn set_direction(&mut self, direction: Direction) {
        self.push(DrawCommand::Direction(direction));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.push(DrawCommand::StrokeText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }

    fn image_size(&self, image: &RecordedImage) -> (f32, f32) {
        (image.width, image.height)
    }

    fn draw_image(&mut self, image: &RecordedImage, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::DrawImage {
            name: image.name.clone(),
            x,
            y,
            width,
            height,
        });
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Translate(x, y));
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Scale(x, y));
    }

    fn reset_transform(&mut self) {
        self.push(DrawCommand::ResetTransform);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.push(DrawCommand::ImageSmoothing(enabled));
    }

    fn set_background(&mut self, css: &str) {
        self.push(DrawCommand::Background(css.to_string()));
    }

    fn set_focusable(&mut self, focusable: bool, outline: bool) {
        self.push(DrawCommand::Focusable { focusable, outline });
    }
}
