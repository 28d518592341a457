//! Color string parsing
//!
//! Input is matched against each notation in a fixed order (hex, argb, rgb,
//! rgba, hsl, cmyk). The first notation whose shape matches decides the
//! outcome: its components are validated and converted to a [`Color`], or
//! the error for that notation is returned. Later notations are not tried.

mod grammar;

use std::str::FromStr;

use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{ParseError, Result};
use crate::format::ColorFormat;
use grammar::Grammar;

/// Recognizers in detection order.
const GRAMMARS: [(ColorFormat, Grammar); 6] = [
    (ColorFormat::Hex, grammar::hex),
    (ColorFormat::Argb, grammar::argb),
    (ColorFormat::Rgb, grammar::rgb),
    (ColorFormat::Rgba, grammar::rgba),
    (ColorFormat::Hsl, grammar::hsl),
    (ColorFormat::Cmyk, grammar::cmyk),
];

/// How numeric components outside their range are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeCheck {
    /// Reject with [`ParseError::OutOfRange`].
    #[default]
    Strict,
    /// Clamp to the largest allowed value.
    Clamp,
}

/// Options for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub range_check: RangeCheck,
}

impl ParseOptions {
    /// Rejects out-of-range components. This is the default.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Clamps out-of-range components instead of rejecting them.
    pub fn lenient() -> Self {
        Self::default().with_range_check(RangeCheck::Clamp)
    }

    pub fn with_range_check(mut self, range_check: RangeCheck) -> Self {
        self.range_check = range_check;
        self
    }
}

/// A successfully parsed color together with the notation it was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed {
    pub format: ColorFormat,
    pub color: Color,
}

/// Parses a color string with default (strict) options.
pub fn parse(input: &str) -> Result<Parsed> {
    parse_with(input, &ParseOptions::default())
}

/// Parses a color string.
///
/// Surrounding whitespace is ignored. Keywords and hex digits are
/// case-insensitive.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Parsed> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    for (format, grammar) in GRAMMARS {
        match grammar(input, options) {
            Some(result) => {
                let color = result?;
                debug!(%format, input, "detected color format");
                return Ok(Parsed { format, color });
            }
            None => trace!(%format, input, "notation did not match"),
        }
    }

    Err(ParseError::UnrecognizedFormat(input.to_string()))
}

/// Detects the notation of `input` without validating its components.
pub fn detect(input: &str) -> Option<ColorFormat> {
    let input = input.trim();
    let options = ParseOptions::default();
    GRAMMARS
        .into_iter()
        .find(|(_, grammar)| grammar(input, &options).is_some())
        .map(|(format, _)| format)
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(|parsed| parsed.color)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}
