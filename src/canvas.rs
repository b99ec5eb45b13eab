//! Rasterizer adapter over a tiny-skia pixel surface.

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::math::Vec2;
use crate::shape::Shape;

/// Drawing surface wrapper: one shape at a time, fixed opaque paint.
///
/// Transforms are passed per fill call, so one shape's translate/scale can
/// never leak into the next draw.
pub(crate) struct Canvas<'a> {
    surface: &'a mut Pixmap,
    allowance: f32,
}

impl<'a> Canvas<'a> {
    /// Wrap a surface, clearing any previous contents.
    pub(crate) fn new(surface: &'a mut Pixmap, allowance: f32) -> Self {
        let mut canvas = Self { surface, allowance };
        canvas.clear();
        canvas
    }

    /// Reset every pixel to fully transparent.
    pub(crate) fn clear(&mut self) {
        self.surface.fill(Color::TRANSPARENT);
    }

    /// Per-pixel alpha of the current surface contents.
    pub(crate) fn alphas(&self) -> impl Iterator<Item = u8> + '_ {
        self.surface.pixels().iter().map(|pixel| pixel.alpha())
    }

    /// Rasterize one shape. Degenerate parameters draw nothing.
    pub(crate) fn draw(&mut self, shape: &Shape) {
        match shape {
            Shape::Point { center } => self.fill_disc(*center, self.allowance),
            Shape::Line { start, end } => self.stroke_segment(*start, *end),
            Shape::Circle { center, radius } => self.fill_disc(*center, *radius),
            Shape::Ellipse { center, radius } => self.fill_ellipse(*center, *radius),
            Shape::Rect { min, max } => self.fill_rect(*min, *max),
            Shape::Polygon { points } => self.fill_polygon(points),
        }
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.surface
                .fill_path(&path, &paint(), FillRule::Winding, Transform::identity(), None);
        }
    }

    fn stroke_segment(&mut self, start: Vec2, end: Vec2) {
        // Butt caps rasterize nothing for a zero-length segment.
        if self.allowance <= 0.0 || (end - start).length_squared() == 0.0 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(start.x, start.y);
        pb.line_to(end.x, end.y);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: self.allowance,
                ..Stroke::default()
            };
            self.surface
                .stroke_path(&path, &paint(), &stroke, Transform::identity(), None);
        }
    }

    /// An ellipse is a circle of the first radius drawn under a non-uniform
    /// scale, so the circle path stays the only curved primitive.
    fn fill_ellipse(&mut self, center: Vec2, radius: Vec2) {
        if radius.x <= 0.0 || radius.y <= 0.0 {
            return;
        }
        let Some(path) = PathBuilder::from_circle(0.0, 0.0, radius.x) else {
            return;
        };
        let transform =
            Transform::from_translate(center.x, center.y).pre_scale(1.0, radius.y / radius.x);
        self.surface
            .fill_path(&path, &paint(), FillRule::Winding, transform, None);
    }

    fn fill_rect(&mut self, min: Vec2, max: Vec2) {
        if max.x <= min.x || max.y <= min.y {
            return;
        }
        if let Some(rect) = Rect::from_ltrb(min.x, min.y, max.x, max.y) {
            let path = PathBuilder::from_rect(rect);
            self.surface
                .fill_path(&path, &paint(), FillRule::Winding, Transform::identity(), None);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for point in rest {
            pb.line_to(point.x, point.y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.surface
                .fill_path(&path, &paint(), FillRule::Winding, Transform::identity(), None);
        }
    }
}

/// Solid opaque paint with anti-aliasing, shared by every draw call.
fn paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = true;
    paint
}
