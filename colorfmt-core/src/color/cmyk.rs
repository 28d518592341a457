use super::Color;

/// Cyan, magenta, yellow and key (black), each a fraction from 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Builds from integer percentages, as written in text.
    pub fn from_percent(c: u32, m: u32, y: u32, k: u32) -> Self {
        Self::new(
            c as f64 / 100.0,
            m as f64 / 100.0,
            y as f64 / 100.0,
            k as f64 / 100.0,
        )
    }

    /// Components as rounded percentages.
    pub fn rounded(&self) -> (u8, u8, u8, u8) {
        let pct = |v: f64| (v * 100.0).round().clamp(0.0, 100.0) as u8;
        (pct(self.c), pct(self.m), pct(self.y), pct(self.k))
    }

    pub(crate) fn from_color(color: &Color) -> Self {
        let (r, g, b) = color.unit_rgb();
        let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
        let k = c.min(m).min(y);

        if k >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        Self::new(
            (c - k) / (1.0 - k),
            (m - k) / (1.0 - k),
            (y - k) / (1.0 - k),
            k,
        )
    }

    pub(crate) fn to_color(self) -> Color {
        let k = self.k.clamp(0.0, 1.0);
        let channel = |v: f64| {
            let v = v.clamp(0.0, 1.0);
            (255.0 * (1.0 - v) * (1.0 - k)).round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(channel(self.c), channel(self.m), channel(self.y))
    }
}
