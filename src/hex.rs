//! Hex color parsing and RGB conversion.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Accepts `RGB` or `RRGGBB`, no leading `#`.
static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([0-9A-F]{3}){1,2}$").expect("valid hex pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Renders as a space separated decimal triple, the form CSS color
/// functions accept inside `rgb(var(...) / <alpha-value>)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Validation predicate for user supplied hex input.
///
/// Surrounding whitespace is ignored. A leading `#` is rejected, the prompt
/// asks for the bare digits.
pub fn is_valid_hex(input: &str) -> bool {
    HEX_PATTERN.is_match(input.trim())
}

/// Strip a leading `#` and expand 3-digit shorthand to lowercase `rrggbb`.
pub fn normalize_hex(hex: &str) -> Result<String, HexError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(hex.to_string()));
    }

    match digits.len() {
        6 => Ok(digits.to_ascii_lowercase()),
        3 => Ok(digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>()
            .to_ascii_lowercase()),
        len => Err(HexError::InvalidLength(len)),
    }
}

/// Convert a hex color (`#` optional, 3 or 6 digits) into its RGB triple.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, HexError> {
    let digits = normalize_hex(hex)?;
    let bytes = digits.as_bytes();

    Ok(Rgb::new(
        parse_hex_byte(&bytes[0..2]),
        parse_hex_byte(&bytes[2..4]),
        parse_hex_byte(&bytes[4..6]),
    ))
}

#[inline]
const fn parse_hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

// Callers guarantee two ASCII hex digits.
#[inline]
fn parse_hex_byte(bytes: &[u8]) -> u8 {
    parse_hex_digit(bytes[0]) << 4 | parse_hex_digit(bytes[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Validation Tests ====================

    #[test]
    fn test_valid_hex_six_digits() {
        assert!(is_valid_hex("3366FF"));
        assert!(is_valid_hex("3366ff"));
        assert!(is_valid_hex("  aBc123  "));
    }

    #[test]
    fn test_valid_hex_three_digits() {
        assert!(is_valid_hex("f80"));
        assert!(is_valid_hex("FFF"));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("#3366FF"));
        assert!(!is_valid_hex("3366F"));
        assert!(!is_valid_hex("3366FFAA"));
        assert!(!is_valid_hex("GGGGGG"));
        assert!(!is_valid_hex("12 345"));
    }

    // ==================== Normalization Tests ====================

    #[test]
    fn test_normalize_expands_shorthand() {
        assert_eq!(normalize_hex("f80").unwrap(), "ff8800");
        assert_eq!(normalize_hex("#ABC").unwrap(), "aabbcc");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_hex("#3366FF").unwrap(), "3366ff");
    }

    #[test]
    fn test_normalize_rejects_bad_length() {
        assert_eq!(normalize_hex("12345"), Err(HexError::InvalidLength(5)));
        assert_eq!(normalize_hex("#"), Err(HexError::InvalidLength(0)));
    }

    #[test]
    fn test_normalize_rejects_non_hex() {
        assert!(matches!(
            normalize_hex("zz0000"),
            Err(HexError::InvalidDigit(_))
        ));
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_hex_to_rgb_primary() {
        assert_eq!(hex_to_rgb("3366FF").unwrap(), Rgb::new(51, 102, 255));
    }

    #[test]
    fn test_hex_to_rgb_with_hash() {
        assert_eq!(hex_to_rgb("#FF0000").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hex_to_rgb_shorthand_matches_expanded() {
        assert_eq!(hex_to_rgb("f80").unwrap(), hex_to_rgb("ff8800").unwrap());
    }

    #[test]
    fn test_rgb_display_is_space_separated() {
        assert_eq!(Rgb::new(51, 102, 255).to_string(), "51 102 255");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "0 0 0");
    }

    #[test]
    fn test_rgb_to_hex_pads() {
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
    }

    // ==================== Property-Based Tests ====================

    #[cfg(test)]
    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn conversion_is_big_endian_byte_decomposition(value in 0u32..=0xFF_FFFF) {
                let hex = format!("{:06X}", value);
                let rgb = hex_to_rgb(&hex).unwrap();
                prop_assert_eq!(u32::from(rgb.r), value >> 16);
                prop_assert_eq!(u32::from(rgb.g), (value >> 8) & 0xFF);
                prop_assert_eq!(u32::from(rgb.b), value & 0xFF);
            }

            #[test]
            fn leading_hash_is_ignored(hex in "[0-9a-fA-F]{6}") {
                prop_assert_eq!(hex_to_rgb(&format!("#{}", hex)), hex_to_rgb(&hex));
            }

            #[test]
            fn validated_input_always_converts(hex in "[0-9a-fA-F]{3}|[0-9a-fA-F]{6}") {
                prop_assert!(is_valid_hex(&hex));
                prop_assert!(hex_to_rgb(&hex).is_ok());
            }

            #[test]
            fn to_hex_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let rgb = Rgb::new(r, g, b);
                prop_assert_eq!(hex_to_rgb(&rgb.to_hex()).unwrap(), rgb);
            }
        }
    }
}
