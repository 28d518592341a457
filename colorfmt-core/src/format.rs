//! Textual color notations
//!
//! [`ColorFormat`] names the six notations and [`ColorFormats`] holds one
//! rendering of a color in each of them.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseError;

/// A supported color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorFormat {
    /// `#RRGGBB` (or `#RGB` on input)
    Hex,
    /// `#AARRGGBB`
    Argb,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `cmyk(c%, m%, y%, k%)`
    Cmyk,
}

impl ColorFormat {
    /// All formats, in detection and display order.
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Hex,
        ColorFormat::Argb,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Cmyk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Argb => "argb",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Cmyk => "cmyk",
        }
    }

    /// Whether the notation carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorFormat::Argb | ColorFormat::Rgba)
    }

    /// Renders `color` in this notation.
    pub fn render(self, color: &Color) -> String {
        match self {
            ColorFormat::Hex => format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b),
            ColorFormat::Argb => format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                color.alpha_byte(),
                color.r,
                color.g,
                color.b
            ),
            ColorFormat::Rgb => format!("rgb({}, {}, {})", color.r, color.g, color.b),
            ColorFormat::Rgba => format!(
                "rgba({}, {}, {}, {})",
                color.r, color.g, color.b, color.a
            ),
            ColorFormat::Hsl => {
                let (h, s, l) = color.to_hsl().rounded();
                format!("hsl({h}, {s}%, {l}%)")
            }
            ColorFormat::Cmyk => {
                let (c, m, y, k) = color.to_cmyk().rounded();
                format!("cmyk({c}%, {m}%, {y}%, {k}%)")
            }
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnrecognizedFormat(s.to_string()))
    }
}

/// One color rendered in every supported notation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorFormats {
    pub hex: String,
    pub argb: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    pub cmyk: String,
}

impl ColorFormats {
    pub fn from_color(color: &Color) -> Self {
        Self {
            hex: ColorFormat::Hex.render(color),
            argb: ColorFormat::Argb.render(color),
            rgb: ColorFormat::Rgb.render(color),
            rgba: ColorFormat::Rgba.render(color),
            hsl: ColorFormat::Hsl.render(color),
            cmyk: ColorFormat::Cmyk.render(color),
        }
    }

    pub fn get(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Hex => &self.hex,
            ColorFormat::Argb => &self.argb,
            ColorFormat::Rgb => &self.rgb,
            ColorFormat::Rgba => &self.rgba,
            ColorFormat::Hsl => &self.hsl,
            ColorFormat::Cmyk => &self.cmyk,
        }
    }

    /// Iterates `(format, rendering)` pairs in [`ColorFormat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorFormat, &str)> + '_ {
        ColorFormat::ALL
            .into_iter()
            .map(move |format| (format, self.get(format)))
    }
}

impl From<&Color> for ColorFormats {
    fn from(color: &Color) -> Self {
        Self::from_color(color)
    }
}

impl fmt::Display for ColorFormats {
    /// Labeled, one format per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (format, value)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<5} {}", format!("{format}:"), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_reference_blue() {
        let formats = ColorFormats::from_color(&Color::rgb(52, 152, 219));
        assert_eq!(
            formats,
            ColorFormats {
                hex: "#3498DB".to_string(),
                argb: "#FF3498DB".to_string(),
                rgb: "rgb(52, 152, 219)".to_string(),
                rgba: "rgba(52, 152, 219, 1)".to_string(),
                hsl: "hsl(204, 70%, 53%)".to_string(),
                cmyk: "cmyk(76%, 31%, 0%, 14%)".to_string(),
            }
        );
    }

    #[test]
    fn test_hex_is_zero_padded_uppercase() {
        let color = Color::rgb(0x0a, 0x0b, 0xfc);
        assert_eq!(ColorFormat::Hex.render(&color), "#0A0BFC");
        assert_eq!(ColorFormat::Argb.render(&color), "#FF0A0BFC");
    }

    #[test]
    fn test_alpha_keeps_its_own_precision() {
        let half = Color::rgba(1, 2, 3, 0.5);
        assert_eq!(ColorFormat::Rgba.render(&half), "rgba(1, 2, 3, 0.5)");
        assert_eq!(ColorFormat::Argb.render(&half), "#80010203");

        let from_byte = Color::argb(0x80, 1, 2, 3);
        assert_eq!(
            ColorFormat::Rgba.render(&from_byte),
            "rgba(1, 2, 3, 0.5019607843137255)"
        );

        let transparent = Color::rgba(1, 2, 3, 0.0);
        assert_eq!(ColorFormat::Rgba.render(&transparent), "rgba(1, 2, 3, 0)");
        assert_eq!(ColorFormat::Argb.render(&transparent), "#00010203");
    }

    #[test]
    fn test_black_cmyk() {
        let formats = ColorFormats::from_color(&Color::rgb(0, 0, 0));
        assert_eq!(formats.cmyk, "cmyk(0%, 0%, 0%, 100%)");
        assert_eq!(formats.hsl, "hsl(0, 0%, 0%)");
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in ColorFormat::ALL {
            assert_eq!(format.name().parse::<ColorFormat>(), Ok(format));
            assert_eq!(format.to_string(), format.name());
        }
        assert_eq!("HSL".parse::<ColorFormat>(), Ok(ColorFormat::Hsl));
        assert!("lab".parse::<ColorFormat>().is_err());
    }

    #[test]
    fn test_iter_order_and_get() {
        let formats = ColorFormats::from_color(&Color::rgb(255, 0, 0));
        let order: Vec<ColorFormat> = formats.iter().map(|(f, _)| f).collect();
        assert_eq!(order, ColorFormat::ALL.to_vec());
        assert_eq!(formats.get(ColorFormat::Rgb), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_display_is_labeled() {
        let formats = ColorFormats::from_color(&Color::rgb(255, 0, 0));
        let expected = "hex:  #FF0000\n\
                        argb: #FFFF0000\n\
                        rgb:  rgb(255, 0, 0)\n\
                        rgba: rgba(255, 0, 0, 1)\n\
                        hsl:  hsl(0, 100%, 50%)\n\
                        cmyk: cmyk(0%, 100%, 100%, 0%)";
        assert_eq!(formats.to_string(), expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_formats() {
        let formats = ColorFormats::from_color(&Color::rgb(255, 0, 0));
        let value = serde_json::to_value(&formats).unwrap();
        assert_eq!(value["hex"], "#FF0000");
        assert_eq!(value["cmyk"], "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(
            serde_json::to_value(ColorFormat::Argb).unwrap(),
            serde_json::json!("argb")
        );
    }

    #[test]
    fn test_has_alpha() {
        assert!(ColorFormat::Argb.has_alpha());
        assert!(ColorFormat::Rgba.has_alpha());
        assert!(!ColorFormat::Hex.has_alpha());
    }
}
