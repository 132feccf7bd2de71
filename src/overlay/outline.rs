use bytemuck::{Pod, Zeroable};
use glam::IVec2;

use crate::geometry::PixelRect;

/// Default outline color (white).
pub const DEFAULT_OUTLINE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
/// One point of the outline polyline, in host pixels (bottom-left origin).
pub struct OutlineVertex {
    /// Pixel position.
    pub position: [f32; 2],
}

impl OutlineVertex {
    fn at(point: IVec2) -> Self {
        Self {
            position: point.as_vec2().to_array(),
        }
    }
}

/// Rectangle decoration drawn around the overlay while the pointer is
/// over it.
///
/// The vertices form a closed polyline (the first point is repeated) so
/// the host can upload them as a line strip without an index buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    color: [f32; 3],
    visible: bool,
    rect: PixelRect,
    vertices: [OutlineVertex; 5],
}

impl Default for Outline {
    fn default() -> Self {
        Self::new(DEFAULT_OUTLINE_COLOR)
    }
}

impl Outline {
    /// Create a hidden outline with the given color.
    #[must_use]
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            color: clamp_color(color),
            visible: false,
            rect: PixelRect::default(),
            vertices: [OutlineVertex::zeroed(); 5],
        }
    }

    /// RGB color, each channel in `[0, 1]`.
    #[must_use]
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// Set the color. Channels are clamped to `[0, 1]`.
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = clamp_color(color);
    }

    /// Whether the outline should be drawn.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the outline. Returns `true` if visibility changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    /// Pixel rectangle the polyline was last built around.
    #[must_use]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Polyline vertices.
    #[must_use]
    pub fn vertices(&self) -> &[OutlineVertex; 5] {
        &self.vertices
    }

    /// Vertex data as raw bytes for buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Regenerate the polyline around `rect`.
    pub fn rebuild(&mut self, rect: PixelRect) {
        let bottom_right = IVec2::new(rect.max.x, rect.min.y);
        let top_left = IVec2::new(rect.min.x, rect.max.y);
        self.rect = rect;
        self.vertices = [
            OutlineVertex::at(rect.min),
            OutlineVertex::at(bottom_right),
            OutlineVertex::at(rect.max),
            OutlineVertex::at(top_left),
            OutlineVertex::at(rect.min),
        ];
    }
}

fn clamp_color(color: [f32; 3]) -> [f32; 3] {
    color.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) })
}
