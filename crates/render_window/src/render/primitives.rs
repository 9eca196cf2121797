//! Color and rectangle geometry types

/// An RGBA color with floating-point channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Create an opaque color from RGB channels
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA channels
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// An axis-aligned rectangle in clip-space coordinates
///
/// `x`/`y` name the corner with the smallest coordinates when `width` and
/// `height` are positive. The fixed vertex shader applies no transform, so
/// visible geometry lies within `[-1, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Horizontal position of the origin corner
    pub x: f32,
    /// Vertical position of the origin corner
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its origin corner and extents
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Expand the rectangle into two triangles as interleaved `(x, y)` pairs
    ///
    /// The output feeds straight into the reusable vertex buffer: 6 vertices,
    /// 2 floats each, tightly packed.
    #[must_use]
    pub fn vertices(&self) -> [f32; 12] {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        #[rustfmt::skip]
        let vertices = [
            x,     y,
            x,     y + h,
            x + w, y,
            x,     y + h,
            x + w, y + h,
            x + w, y,
        ];
        vertices
    }
}
