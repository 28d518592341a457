use thiserror::Error;

use crate::format::ColorFormat;

/// Error returned when a color string cannot be converted.
///
/// Every variant is a parse failure; the variants only differ in how
/// specific the message can be.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,

    #[error("unrecognized color format: {0}")]
    UnrecognizedFormat(String),

    #[error("invalid {format} component: {value}")]
    InvalidNumber { format: ColorFormat, value: String },

    #[error("{format} {component} out of range: {value} (must be 0-{max})")]
    OutOfRange {
        format: ColorFormat,
        component: &'static str,
        value: String,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::UnrecognizedFormat("not-a-color".to_string());
        assert_eq!(error.to_string(), "unrecognized color format: not-a-color");
    }

    #[test]
    fn test_parse_error_debug() {
        let error = ParseError::InvalidNumber {
            format: ColorFormat::Rgba,
            value: "1.2.3".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidNumber"));
        assert!(debug_str.contains("1.2.3"));
    }

    #[test]
    fn test_error_chain_display() {
        let errors = [
            ("empty color string", ParseError::Empty),
            (
                "unrecognized color format: #12",
                ParseError::UnrecognizedFormat("#12".to_string()),
            ),
            (
                "invalid rgba component: 0.5.1",
                ParseError::InvalidNumber {
                    format: ColorFormat::Rgba,
                    value: "0.5.1".to_string(),
                },
            ),
            (
                "rgb red out of range: 999 (must be 0-255)",
                ParseError::OutOfRange {
                    format: ColorFormat::Rgb,
                    component: "red",
                    value: "999".to_string(),
                    max: 255,
                },
            ),
            (
                "hsl hue out of range: 400 (must be 0-360)",
                ParseError::OutOfRange {
                    format: ColorFormat::Hsl,
                    component: "hue",
                    value: "400".to_string(),
                    max: 360,
                },
            ),
        ];

        for (expected, error) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseError>();
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<u8> = Err(ParseError::Empty);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ParseError::Empty);
    }
}
