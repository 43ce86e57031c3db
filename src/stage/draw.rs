//! Fluent drawing API
//!
//! Path operations open a path on their own when none is being built, the
//! way immediate-mode canvas code is usually written. `begin_path` and
//! `close_path` toggle that state explicitly.

use std::f32::consts::PI;

use glam::Vec2;

use super::Stage;
use crate::error::{ClibError, Result};
use crate::options::{FillOptions, Shadow, StrokeOptions, TextOptions};
use crate::surface::Surface;

fn check_radius(radius: f32) -> Result<()> {
    if radius < 0.0 {
        return Err(ClibError::InvalidGeometry(format!(
            "the radius can be no less than 0, got {}",
            radius
        )));
    }
    Ok(())
}

impl<S: Surface> Stage<S> {
    pub fn begin_path(&mut self) -> &mut Self {
        self.surface.begin_path();
        self.pathing = true;
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.surface.close_path();
        self.pathing = false;
        self
    }

    fn ensure_path(&mut self) {
        if !self.pathing {
            self.begin_path();
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.ensure_path();
        self.surface.move_to(x, y);
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.ensure_path();
        self.surface.line_to(x, y);
        self
    }

    /// Arc around `(x, y)` from `start` to `end` radians.
    ///
    /// An implicitly opened path starts at the arc's first point.
    pub fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start: f32,
        end: f32,
        counterclockwise: bool,
    ) -> Result<&mut Self> {
        check_radius(radius)?;
        if !self.pathing {
            self.begin_path();
            self.surface
                .move_to(x + radius * start.cos(), y + radius * start.sin());
        }
        self.surface.arc(x, y, radius, start, end, counterclockwise);
        Ok(self)
    }

    pub fn circle(&mut self, x: f32, y: f32, radius: f32) -> Result<&mut Self> {
        self.arc(x, y, radius, -PI, PI, false)
    }

    pub fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) -> Result<&mut Self> {
        check_radius(radius)?;
        self.ensure_path();
        self.surface.arc_to(x1, y1, x2, y2, radius);
        Ok(self)
    }

    pub fn bezier_curve_to(
        &mut self,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.ensure_path();
        self.surface.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
        self
    }

    pub fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.ensure_path();
        self.surface.quadratic_curve_to(cx, cy, x, y);
        self
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        if !self.pathing {
            self.begin_path();
            self.surface.move_to(x, y);
        }
        self.surface.rect(x, y, width, height);
        self
    }

    /// Open line through `verts`; needs at least 2 vertices.
    ///
    /// With `auto_round` on, every line vertex is snapped to a pixel center
    /// (`round(v) + 0.5`) so one-pixel lines stay crisp.
    pub fn polyline(&mut self, verts: &[Vec2]) -> Result<&mut Self> {
        if verts.len() < 2 {
            return Err(ClibError::InvalidGeometry(format!(
                "a polyline needs at least 2 vertices, got {}",
                verts.len()
            )));
        }

        self.move_to(verts[0].x, verts[0].y);
        for vert in verts {
            let pos = if self.options.auto_round {
                vert.round() + Vec2::splat(0.5)
            } else {
                *vert
            };
            self.line_to(pos.x, pos.y);
        }
        Ok(self)
    }

    /// Closed polygon through `verts`; needs at least 3 vertices
    pub fn poly(&mut self, verts: &[Vec2]) -> Result<&mut Self> {
        if verts.len() < 3 {
            return Err(ClibError::InvalidGeometry(format!(
                "a polygon needs at least 3 vertices, got {}",
                verts.len()
            )));
        }
        self.polyline(verts)?;
        self.line_to(verts[0].x, verts[0].y);
        Ok(self)
    }

    /// Stroke the current path, offset by half a pixel
    pub fn stroke(&mut self, options: &StrokeOptions, shadow: &Shadow) -> &mut Self {
        let s = &mut self.surface;
        s.set_shadow(shadow);
        s.set_stroke_style(&options.style);
        s.set_line_width(options.width);
        s.set_line_join(options.join);
        s.set_line_cap(options.cap);
        s.save();
        s.translate(0.5, 0.5);
        s.stroke();
        s.restore();
        self
    }

    pub fn fill(&mut self, options: &FillOptions, shadow: &Shadow) -> &mut Self {
        let s = &mut self.surface;
        s.set_shadow(shadow);
        s.set_fill_style(&options.style);
        s.fill();
        self
    }

    fn apply_text_options(&mut self, options: &TextOptions) {
        let s = &mut self.surface;
        s.set_font(&options.font);
        s.set_text_align(options.align);
        s.set_text_baseline(options.baseline);
        s.set_direction(options.direction);
    }

    pub fn fill_text(&mut self, text: &str, x: f32, y: f32, options: &TextOptions) -> &mut Self {
        self.apply_text_options(options);
        self.surface.set_fill_style(&options.style);
        self.surface.fill_text(text, x, y);
        self
    }

    pub fn stroke_text(&mut self, text: &str, x: f32, y: f32, options: &TextOptions) -> &mut Self {
        self.apply_text_options(options);
        self.surface.set_stroke_style(&options.style);
        self.surface.stroke_text(text, x, y);
        self
    }

    /// Width `text` would take when drawn with `options`
    pub fn measure_text(&mut self, text: &str, options: &TextOptions) -> f32 {
        self.surface.set_font(&options.font);
        self.surface.measure_text(text)
    }

    /// Draw `image` at `(x, y)`, at its natural size unless `size` is given
    pub fn draw_image(
        &mut self,
        image: &S::Image,
        x: f32,
        y: f32,
        size: Option<(f32, f32)>,
    ) -> &mut Self {
        let (width, height) = size.unwrap_or_else(|| self.surface.image_size(image));
        self.surface.draw_image(image, x, y, width, height);
        self
    }

    /// Clear the whole surface regardless of the current transform
    pub fn clear(&mut self) -> &mut Self {
        let dim = self.dimensions();
        let s = &mut self.surface;
        s.save();
        s.reset_transform();
        s.clear_rect(0.0, 0.0, dim.width, dim.height);
        s.restore();
        self
    }

    /// Translate the drawing origin; mouse positions follow
    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.surface.translate(x, y);
        self.translated += Vec2::new(x, y);
        self
    }

    pub fn translate_x(&mut self, dist: f32) -> &mut Self {
        self.translate(dist, 0.0)
    }

    pub fn translate_y(&mut self, dist: f32) -> &mut Self {
        self.translate(0.0, dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{LineCap, LineJoin, StageOptions};
    use crate::surface::{DrawCommand, RecordedImage, RecordingSurface};

    fn stage() -> Stage<RecordingSurface> {
        let mut stage = Stage::new(RecordingSurface::new(200.0, 100.0), StageOptions::default());
        stage.surface_mut().clear_commands();
        stage
    }

    fn commands(stage: &mut Stage<RecordingSurface>) -> Vec<DrawCommand> {
        stage.surface_mut().take_commands()
    }

    #[test]
    fn test_move_to_opens_path_once() {
        let mut stage = stage();
        stage.move_to(1.0, 2.0).line_to(3.0, 4.0);
        assert!(stage.is_pathing());
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(1.0, 2.0),
                DrawCommand::LineTo(3.0, 4.0),
            ]
        );

        stage.close_path();
        assert!(!stage.is_pathing());
        stage.line_to(5.0, 6.0);
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::ClosePath,
                DrawCommand::BeginPath,
                DrawCommand::LineTo(5.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_explicit_begin_path_is_respected() {
        let mut stage = stage();
        stage.begin_path().quadratic_curve_to(1.0, 1.0, 2.0, 2.0);
        stage.bezier_curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let cmds = commands(&mut stage);
        assert_eq!(cmds.iter().filter(|c| **c == DrawCommand::BeginPath).count(), 1);
        assert_eq!(cmds.len(), 3);
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let mut stage = stage();
        assert!(matches!(
            stage.arc(0.0, 0.0, -1.0, 0.0, PI, false),
            Err(ClibError::InvalidGeometry(_))
        ));
        assert!(stage.circle(0.0, 0.0, -0.5).is_err());
        assert!(stage.arc_to(0.0, 0.0, 1.0, 1.0, -2.0).is_err());
        assert!(commands(&mut stage).is_empty());
    }

    #[test]
    fn test_circle_starts_on_its_edge() {
        let mut stage = stage();
        stage.circle(10.0, 20.0, 5.0).unwrap();
        let cmds = commands(&mut stage);
        assert_eq!(cmds[0], DrawCommand::BeginPath);
        match cmds[1] {
            DrawCommand::MoveTo(x, y) => {
                assert!((x - 5.0).abs() < 1e-4);
                assert!((y - 20.0).abs() < 1e-4);
            }
            ref other => panic!("expected MoveTo, got {:?}", other),
        }
        assert_eq!(
            cmds[2],
            DrawCommand::Arc {
                x: 10.0,
                y: 20.0,
                radius: 5.0,
                start: -PI,
                end: PI,
                counterclockwise: false,
            }
        );
    }

    #[test]
    fn test_rect_moves_to_corner() {
        let mut stage = stage();
        stage.rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(1.0, 2.0),
                DrawCommand::Rect {
                    x: 1.0,
                    y: 2.0,
                    width: 3.0,
                    height: 4.0
                },
            ]
        );
    }

    #[test]
    fn test_polyline_vertex_count() {
        let mut stage = stage();
        assert!(stage.polyline(&[Vec2::ZERO]).is_err());
        assert!(stage.poly(&[Vec2::ZERO, Vec2::ONE]).is_err());
        assert!(stage.polyline(&[Vec2::ZERO, Vec2::ONE]).is_ok());
    }

    #[test]
    fn test_polyline_auto_round() {
        let mut stage = stage();
        stage
            .polyline(&[Vec2::new(1.2, 1.7), Vec2::new(10.6, 3.4)])
            .unwrap();
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(1.2, 1.7),
                DrawCommand::LineTo(1.5, 2.5),
                DrawCommand::LineTo(11.5, 3.5),
            ]
        );
    }

    #[test]
    fn test_poly_closes_back_to_first_vertex() {
        let mut stage = Stage::new(
            RecordingSurface::new(10.0, 10.0),
            StageOptions {
                auto_round: false,
                ..Default::default()
            },
        );
        stage.surface_mut().clear_commands();
        let verts = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0)];
        stage.poly(&verts).unwrap();
        let cmds = commands(&mut stage);
        assert_eq!(cmds.last(), Some(&DrawCommand::LineTo(0.0, 0.0)));
        assert_eq!(cmds.len(), 6);
    }

    #[test]
    fn test_stroke_applies_style_inside_offset() {
        let mut stage = stage();
        let opts = StrokeOptions {
            style: "red".into(),
            width: 2.0,
            join: LineJoin::Round,
            cap: LineCap::Square,
        };
        stage.stroke(&opts, &Shadow::default());
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::Shadow(Shadow::default()),
                DrawCommand::StrokeStyle("red".into()),
                DrawCommand::LineWidth(2.0),
                DrawCommand::LineJoin(LineJoin::Round),
                DrawCommand::LineCap(LineCap::Square),
                DrawCommand::Save,
                DrawCommand::Translate(0.5, 0.5),
                DrawCommand::Stroke,
                DrawCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_fill() {
        let mut stage = stage();
        stage.fill(&FillOptions { style: "blue".into() }, &Shadow::default());
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::Shadow(Shadow::default()),
                DrawCommand::FillStyle("blue".into()),
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_text() {
        let mut stage = stage();
        let opts = TextOptions::default();
        stage.fill_text("hi", 1.0, 2.0, &opts);
        let cmds = commands(&mut stage);
        assert_eq!(cmds[0], DrawCommand::Font("14px sans-serif".into()));
        assert_eq!(cmds[4], DrawCommand::FillStyle("black".into()));
        assert_eq!(
            cmds[5],
            DrawCommand::FillText {
                text: "hi".into(),
                x: 1.0,
                y: 2.0
            }
        );

        assert_eq!(stage.measure_text("abc", &opts), 21.0);
    }

    #[test]
    fn test_draw_image_natural_and_explicit_size() {
        let mut stage = stage();
        let img = RecordedImage::new("ship", 32.0, 16.0);
        stage.draw_image(&img, 1.0, 2.0, None);
        stage.draw_image(&img, 1.0, 2.0, Some((8.0, 8.0)));
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::DrawImage {
                    name: "ship".into(),
                    x: 1.0,
                    y: 2.0,
                    width: 32.0,
                    height: 16.0
                },
                DrawCommand::DrawImage {
                    name: "ship".into(),
                    x: 1.0,
                    y: 2.0,
                    width: 8.0,
                    height: 8.0
                },
            ]
        );
    }

    #[test]
    fn test_clear_resets_transform_temporarily() {
        let mut stage = stage();
        stage.clear();
        assert_eq!(
            commands(&mut stage),
            vec![
                DrawCommand::Save,
                DrawCommand::ResetTransform,
                DrawCommand::ClearRect {
                    x: 0.0,
                    y: 0.0,
                    width: 200.0,
                    height: 100.0
                },
                DrawCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_translate_accumulates() {
        let mut stage = stage();
        stage.translate(5.0, 5.0).translate_x(2.0).translate_y(-1.0);
        assert_eq!(stage.translated(), Vec2::new(7.0, 4.0));
        assert_eq!(commands(&mut stage).len(), 3);
    }
}
