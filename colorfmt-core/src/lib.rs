//! # colorfmt
//!
//! Detects which notation a color string is written in, normalizes it to a
//! canonical 8-bit RGB + alpha value, and renders that value in every
//! supported notation.
//!
//! ## Supported notations
//!
//! | Format | Example                    |
//! |--------|----------------------------|
//! | HEX    | `#3498DB`, `#39D`          |
//! | ARGB   | `#FF3498DB`                |
//! | RGB    | `rgb(52, 152, 219)`        |
//! | RGBA   | `rgba(52, 152, 219, 0.5)`  |
//! | HSL    | `hsl(204, 70%, 53%)`       |
//! | CMYK   | `cmyk(76%, 31%, 0%, 14%)`  |
//!
//! ## Quick Start
//!
//! ```rust
//! use colorfmt::{convert, Result};
//!
//! # fn main() -> Result<()> {
//! let formats = convert("#3498DB")?;
//! assert_eq!(formats.rgb, "rgb(52, 152, 219)");
//! assert_eq!(formats.argb, "#FF3498DB");
//! assert_eq!(formats.hsl, "hsl(204, 70%, 53%)");
//! assert_eq!(formats.cmyk, "cmyk(76%, 31%, 0%, 14%)");
//! # Ok(())
//! # }
//! ```
//!
//! Out-of-range components are rejected by default. Use
//! [`ParseOptions::lenient`] to clamp them instead:
//!
//! ```rust
//! use colorfmt::{convert_with, ParseOptions};
//!
//! assert!(colorfmt::convert("rgb(999, 0, 0)").is_err());
//!
//! let formats = convert_with("rgb(999, 0, 0)", &ParseOptions::lenient()).unwrap();
//! assert_eq!(formats.hex, "#FF0000");
//! ```
//!
//! ## Rounding
//!
//! Conversions run in `f64` and round once per output component, to the
//! nearest integer with halves away from zero. HSL and CMYK text carry
//! integer percentages, so converting RGB through them and back can move a
//! channel by a few units.
//!
//! ## Modules
//!
//! - [`color`] - canonical [`Color`] and the [`Hsl`] / [`Cmyk`] models
//! - [`format`] - notation names and rendering
//! - [`parser`] - notation detection and parsing

pub mod color;
pub mod error;
pub mod format;
pub mod parser;

pub use color::{Cmyk, Color, Hsl};
pub use error::{ParseError, Result};
pub use format::{ColorFormat, ColorFormats};
pub use parser::{detect, parse, parse_with, ParseOptions, Parsed, RangeCheck};

/// Converts a color string into all six notations using strict parsing.
pub fn convert(input: &str) -> Result<ColorFormats> {
    convert_with(input, &ParseOptions::default())
}

/// Converts a color string into all six notations.
///
/// Either every notation is produced or an error is returned.
pub fn convert_with(input: &str, options: &ParseOptions) -> Result<ColorFormats> {
    let parsed = parse_with(input, options)?;
    Ok(ColorFormats::from_color(&parsed.color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_is_deterministic() {
        assert_eq!(convert("hsl(10, 20%, 30%)"), convert("hsl(10, 20%, 30%)"));
    }

    #[test]
    fn test_convert_error_produces_nothing() {
        assert_eq!(
            convert("not-a-color"),
            Err(ParseError::UnrecognizedFormat("not-a-color".to_string()))
        );
    }

    #[test]
    fn test_convert_with_lenient() {
        let formats = convert_with("rgba(300, 0, 0, 2)", &ParseOptions::lenient()).unwrap();
        assert_eq!(formats.rgba, "rgba(255, 0, 0, 1)");
    }
}
