// canvas.rs - Drawing surface the renderer paints on

use crate::theme::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Straight line from `from` to `to`, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl Segment {
    pub fn new(from: (f32, f32), to: (f32, f32)) -> Self {
        Self { from, to }
    }
}

/// The four primitives the backdrop needs from a drawing surface.
pub trait Canvas {
    /// Resets `rect` to a solid `color`, discarding what was there.
    fn clear_rect(&mut self, rect: Rect, color: Rgb);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    /// Strokes every segment as one 1-unit-wide path.
    fn stroke_path(&mut self, segments: &[Segment], color: Rgb);
    fn stroke_rect(&mut self, rect: Rect, color: Rgb);
}

/// In-memory RGB raster. One logical unit is one pixel; strokes are one
/// pixel wide and lines on the far edge land on the last row/column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0; width * height * 3] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGB bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some(Rgb { r: self.pixels[i], g: self.pixels[i + 1], b: self.pixels[i + 2] })
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        self.pixels[i..i + 3].copy_from_slice(&color.to_array());
    }

    fn fill_span(&mut self, rect: Rect, color: Rgb) {
        let x0 = clamp_px(rect.x, self.width);
        let x1 = clamp_px(rect.x + rect.width, self.width);
        let y0 = clamp_px(rect.y, self.height);
        let y1 = clamp_px(rect.y + rect.height, self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.plot(x as i64, y as i64, color);
            }
        }
    }

    fn line(&mut self, segment: Segment, color: Rgb) {
        let (x0, y0) = (self.edge_x(segment.from.0), self.edge_y(segment.from.1));
        let (x1, y1) = (self.edge_x(segment.to.0), self.edge_y(segment.to.1));
        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        if steps == 0 {
            self.plot(x0, y0, color);
            return;
        }
        for i in 0..=steps {
            let x = x0 + (x1 - x0) * i / steps;
            let y = y0 + (y1 - y0) * i / steps;
            self.plot(x, y, color);
        }
    }

    // Lines exactly on the far edge are pulled one pixel in so they stay visible.
    // Endpoints off the surface are clamped one pixel past it, so the step
    // count never exceeds the surface size.
    fn edge_x(&self, x: f32) -> i64 {
        snap_edge(x, self.width)
    }

    fn edge_y(&self, y: f32) -> i64 {
        snap_edge(y, self.height)
    }
}

fn clamp_px(v: f32, limit: usize) -> usize {
    (v.round().max(0.0) as usize).min(limit)
}

fn snap_edge(v: f32, limit: usize) -> i64 {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let p = (v.round() as i64).clamp(-1, limit);
    if p == limit { p - 1 } else { p }
}

impl Canvas for PixelCanvas {
    fn clear_rect(&mut self, rect: Rect, color: Rgb) {
        self.fill_span(rect, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.fill_span(rect, color);
    }

    fn stroke_path(&mut self, segments: &[Segment], color: Rgb) {
        for &segment in segments {
            self.line(segment, color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        let (l, t) = (rect.x, rect.y);
        let (r, b) = (rect.x + rect.width, rect.y + rect.height);
        self.stroke_path(
            &[
                Segment::new((l, t), (r, t)),
                Segment::new((r, t), (r, b)),
                Segment::new((r, b), (l, b)),
                Segment::new((l, b), (l, t)),
            ],
            color,
        );
    }
}
