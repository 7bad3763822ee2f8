/// Stroke styling for overlay rendering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerStyle {
    pub visible: bool,
    pub stroke_color: [f32; 4],
    pub stroke_width: f32,
}

impl LayerStyle {
    pub const fn new(visible: bool, stroke_color: [f32; 4], stroke_width: f32) -> Self {
        Self {
            visible,
            stroke_color,
            stroke_width,
        }
    }

    /// Boundary overlays draw in blue.
    pub const fn boundary() -> Self {
        Self::new(true, [0.20, 0.53, 1.00, 1.0], 2.0)
    }

    /// Track overlays draw in red, above boundaries.
    pub const fn track() -> Self {
        Self::new(true, [0.86, 0.20, 0.18, 1.0], 3.0)
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::new(true, [1.0, 1.0, 1.0, 1.0], 1.0)
    }
}
