// viewport.rs - Decides whether the viewport is wide enough for the backdrop

/// Widths at or below this many logical units hide the backdrop.
pub const DEFAULT_MIN_VIEWPORT_WIDTH: f32 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportPolicy {
    pub min_width: f32,
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        Self { min_width: DEFAULT_MIN_VIEWPORT_WIDTH }
    }
}

impl ViewportPolicy {
    pub fn new(min_width: f32) -> Self {
        Self { min_width }
    }

    /// The backdrop runs only when strictly wider than `min_width`.
    pub fn allows(&self, width: f32) -> bool {
        width > self.min_width
    }
}
