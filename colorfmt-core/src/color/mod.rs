//! Canonical color representation
//!
//! Every notation understood by this crate is normalized into a [`Color`]:
//! three 8-bit channels plus a floating point alpha. The HSL and CMYK
//! models are kept as unquantized intermediates so that rounding only
//! happens once, when a value is rendered or turned back into a [`Color`].

mod cmyk;
mod hsl;

pub use cmyk::Cmyk;
pub use hsl::Hsl;

/// An 8-bit sRGB color with an alpha channel.
///
/// Alpha is stored as a fraction from 0.0 (transparent) to 1.0 (opaque).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    /// Creates an opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color with alpha clamped to 0.0-1.0.
    ///
    /// A NaN alpha is treated as fully opaque.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) };
        Self { r, g, b, a }
    }

    /// Creates a color from an alpha byte, as stored in `#AARRGGBB`.
    pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, a as f64 / 255.0)
    }

    /// Returns a copy with a different alpha, clamped to 0.0-1.0.
    pub fn with_alpha(self, a: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Alpha scaled to a byte, rounded to nearest.
    pub fn alpha_byte(&self) -> u8 {
        (self.a * 255.0).round().clamp(0.0, 255.0) as u8
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Channels normalized to 0.0-1.0.
    pub(crate) fn unit_rgb(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_color(self)
    }

    /// Converts from HSL. The result is opaque.
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_color()
    }

    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_color(self)
    }

    /// Converts from CMYK. The result is opaque.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        cmyk.to_color()
    }
}

/// Rounds a unit-range channel value to a byte.
pub(crate) fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
