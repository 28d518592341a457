use super::{unit_to_byte, Color};

/// Hue, saturation and lightness.
///
/// `h` is in degrees (0.0-360.0), `s` and `l` are fractions (0.0-1.0).
/// Values are not rounded; see [`Hsl::rounded`] for the integer form used in
/// `hsl(h, s%, l%)` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Builds from integer degrees and percentages, as written in text.
    pub fn from_degrees_percent(h: u32, s: u32, l: u32) -> Self {
        Self::new(h as f64, s as f64 / 100.0, l as f64 / 100.0)
    }

    /// Hue rounded into 0..360, saturation and lightness as rounded percent.
    pub fn rounded(&self) -> (u16, u8, u8) {
        let h = (self.h.round() as i64).rem_euclid(360) as u16;
        let s = (self.s * 100.0).round().clamp(0.0, 100.0) as u8;
        let l = (self.l * 100.0).round().clamp(0.0, 100.0) as u8;
        (h, s, l)
    }

    pub(crate) fn from_color(color: &Color) -> Self {
        let (r, g, b) = color.unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // achromatic
            return Self::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(sector * 60.0, s, l)
    }

    pub(crate) fn to_color(self) -> Color {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h_prime as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::rgb(unit_to_byte(r + m), unit_to_byte(g + m), unit_to_byte(b + m))
    }
}
