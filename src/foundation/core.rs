pub use kurbo::{BezPath, Point};

/// Opaque 8-bit RGB color owned by a shape.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed 24-bit color reference, red in the low byte (`0x00BBGGRR`).
    pub const fn colorref(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }

    /// Inverse of [`Color::colorref`]; the high byte is ignored.
    pub const fn from_colorref(colorref: u32) -> Self {
        Self {
            r: (colorref & 0xFF) as u8,
            g: ((colorref >> 8) & 0xFF) as u8,
            b: ((colorref >> 16) & 0xFF) as u8,
        }
    }

    /// Pure black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
