//! One recognizer per notation
//!
//! Each recognizer returns `None` when the input does not have the shape of
//! its notation, and `Some` once the shape matched, even if a component then
//! turns out to be invalid.

use regex::{Captures, Regex};

use super::{ParseOptions, RangeCheck};
use crate::color::{Cmyk, Color, Hsl};
use crate::error::{ParseError, Result};
use crate::format::ColorFormat;

pub(super) type Grammar = fn(&str, &ParseOptions) -> Option<Result<Color>>;

lazy_static::lazy_static! {
    static ref HEX: Regex = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
    static ref ARGB: Regex = Regex::new(r"^#([0-9a-fA-F]{8})$").unwrap();
    static ref RGB: Regex =
        Regex::new(r"(?i)^rgb\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)$").unwrap();
    static ref RGBA: Regex =
        Regex::new(r"(?i)^rgba\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9.]+)\s*\)$").unwrap();
    static ref HSL: Regex =
        Regex::new(r"(?i)^hsl\(\s*([0-9]+)\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*\)$").unwrap();
    static ref CMYK: Regex =
        Regex::new(r"(?i)^cmyk\(\s*([0-9]+)%\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*\)$").unwrap();
}

const RGB_CHANNELS: [&str; 3] = ["red", "green", "blue"];

pub(super) fn hex(input: &str, _options: &ParseOptions) -> Option<Result<Color>> {
    let caps = HEX.captures(input)?;
    let digits = &caps[1];
    let digits = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        digits.to_string()
    };

    Some(hex_bytes::<3>(&digits, ColorFormat::Hex).map(|[r, g, b]| Color::rgb(r, g, b)))
}

pub(super) fn argb(input: &str, _options: &ParseOptions) -> Option<Result<Color>> {
    let caps = ARGB.captures(input)?;
    Some(hex_bytes::<4>(&caps[1], ColorFormat::Argb).map(|[a, r, g, b]| Color::argb(a, r, g, b)))
}

pub(super) fn rgb(input: &str, options: &ParseOptions) -> Option<Result<Color>> {
    let caps = RGB.captures(input)?;
    Some(rgb_channels(&caps, ColorFormat::Rgb, options).map(|[r, g, b]| Color::rgb(r, g, b)))
}

pub(super) fn rgba(input: &str, options: &ParseOptions) -> Option<Result<Color>> {
    let caps = RGBA.captures(input)?;
    let parsed = rgb_channels(&caps, ColorFormat::Rgba, options).and_then(|[r, g, b]| {
        let a = alpha(&caps[4], options)?;
        Ok(Color::rgba(r, g, b, a))
    });
    Some(parsed)
}

pub(super) fn hsl(input: &str, options: &ParseOptions) -> Option<Result<Color>> {
    let caps = HSL.captures(input)?;
    Some(hsl_components(&caps, options).map(Color::from_hsl))
}

pub(super) fn cmyk(input: &str, options: &ParseOptions) -> Option<Result<Color>> {
    let caps = CMYK.captures(input)?;
    Some(cmyk_components(&caps, options).map(Color::from_cmyk))
}

fn hsl_components(caps: &Captures<'_>, options: &ParseOptions) -> Result<Hsl> {
    let h = integer(caps, 1, ColorFormat::Hsl, "hue", 360, options)?;
    let s = integer(caps, 2, ColorFormat::Hsl, "saturation", 100, options)?;
    let l = integer(caps, 3, ColorFormat::Hsl, "lightness", 100, options)?;
    Ok(Hsl::from_degrees_percent(h, s, l))
}

fn cmyk_components(caps: &Captures<'_>, options: &ParseOptions) -> Result<Cmyk> {
    let c = integer(caps, 1, ColorFormat::Cmyk, "cyan", 100, options)?;
    let m = integer(caps, 2, ColorFormat::Cmyk, "magenta", 100, options)?;
    let y = integer(caps, 3, ColorFormat::Cmyk, "yellow", 100, options)?;
    let k = integer(caps, 4, ColorFormat::Cmyk, "key", 100, options)?;
    Ok(Cmyk::from_percent(c, m, y, k))
}

/// Splits a run of hex digit pairs into `N` bytes.
fn hex_bytes<const N: usize>(digits: &str, format: ColorFormat) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let pair = digits
            .get(i * 2..i * 2 + 2)
            .ok_or_else(|| ParseError::InvalidNumber {
                format,
                value: digits.to_string(),
            })?;
        *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseError::InvalidNumber {
            format,
            value: pair.to_string(),
        })?;
    }
    Ok(bytes)
}

fn rgb_channels(
    caps: &Captures<'_>,
    format: ColorFormat,
    options: &ParseOptions,
) -> Result<[u8; 3]> {
    let mut channels = [0u8; 3];
    for (i, (channel, name)) in channels.iter_mut().zip(RGB_CHANNELS).enumerate() {
        // bounded by 255 after the range check
        *channel = integer(caps, i + 1, format, name, 255, options)? as u8;
    }
    Ok(channels)
}

/// Reads an all-digit capture and applies the range policy.
fn integer(
    caps: &Captures<'_>,
    index: usize,
    format: ColorFormat,
    component: &'static str,
    max: u32,
    options: &ParseOptions,
) -> Result<u32> {
    let raw = &caps[index];
    // the capture is digits only, so the sole failure is overflow
    let value = raw.parse::<u32>().unwrap_or(u32::MAX);
    if value <= max {
        return Ok(value);
    }

    match options.range_check {
        RangeCheck::Strict => Err(ParseError::OutOfRange {
            format,
            component,
            value: raw.to_string(),
            max,
        }),
        RangeCheck::Clamp => Ok(max),
    }
}

fn alpha(raw: &str, options: &ParseOptions) -> Result<f64> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            format: ColorFormat::Rgba,
            value: raw.to_string(),
        })?;
    if value <= 1.0 {
        return Ok(value);
    }

    match options.range_check {
        RangeCheck::Strict => Err(ParseError::OutOfRange {
            format: ColorFormat::Rgba,
            component: "alpha",
            value: raw.to_string(),
            max: 1,
        }),
        RangeCheck::Clamp => Ok(1.0),
    }
}
