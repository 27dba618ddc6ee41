// painter.rs - egui Painter as a backdrop canvas

use egui::{Color32, Painter, Pos2, Rect, Stroke, pos2, vec2};
use gol_core::canvas::{self, Canvas, Segment};
use gol_core::Rgb;

/// Draws into `painter` with the surface's origin at `origin`. Every colour
/// is composited at `opacity`.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
    opacity: f32,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, opacity: f32) -> Self {
        Self { painter, origin, opacity }
    }

    fn color(&self, rgb: Rgb) -> Color32 {
        Color32::from_rgb(rgb.r, rgb.g, rgb.b).gamma_multiply(self.opacity)
    }

    fn rect(&self, rect: canvas::Rect) -> Rect {
        Rect::from_min_size(self.point((rect.x, rect.y)), vec2(rect.width, rect.height))
    }

    fn point(&self, (x, y): (f32, f32)) -> Pos2 {
        pos2(self.origin.x + x, self.origin.y + y)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear_rect(&mut self, rect: canvas::Rect, color: Rgb) {
        self.painter.rect_filled(self.rect(rect), 0.0, self.color(color));
    }

    fn fill_rect(&mut self, rect: canvas::Rect, color: Rgb) {
        self.painter.rect_filled(self.rect(rect), 0.0, self.color(color));
    }

    fn stroke_path(&mut self, segments: &[Segment], color: Rgb) {
        let stroke = Stroke::new(1.0, self.color(color));
        for segment in segments {
            self.painter.line_segment([self.point(segment.from), self.point(segment.to)], stroke);
        }
    }

    fn stroke_rect(&mut self, rect: canvas::Rect, color: Rgb) {
        self.painter.rect_stroke(self.rect(rect), 0.0, Stroke::new(1.0, self.color(color)));
    }
}
