use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

/// An opaque RGB color written as `#rrggbb`.
///
/// Parsing accepts upper- or lowercase hex digits; formatting always emits
/// lowercase, which is how the palette is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 6 hex digits after '#', found {0}")]
    WrongLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` literal. Bits above the low
    /// 24 are ignored.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }
        if digits.len() != 6 {
            return Err(ColorParseError::WrongLength(digits.len()));
        }

        // All ASCII hex at this point, so every digit converts.
        let packed = digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0u32, |acc, d| (acc << 4) | d);
        Ok(Self::from_u32(packed))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|e| D::Error::custom(format!("invalid color {text:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_and_uppercase() {
        let lower: HexColor = "#3daee9".parse().unwrap();
        let upper: HexColor = "#3DAEE9".parse().unwrap();
        assert_eq!(lower, HexColor::rgb(0x3d, 0xae, 0xe9));
        assert_eq!(lower, upper);
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(HexColor::from_u32(0xDA4453).to_string(), "#da4453");
        assert_eq!(HexColor::rgb(0, 0x0a, 0xff).to_string(), "#000aff");
    }

    #[test]
    fn packed_conversion() {
        let c = HexColor::from_u32(0x27ae60);
        assert_eq!((c.r, c.g, c.b), (0x27, 0xae, 0x60));
        assert_eq!(c.to_u32(), 0x27ae60);
        assert_eq!(HexColor::from_u32(0xff27ae60).to_u32(), 0x27ae60);
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(
            "3daee9".parse::<HexColor>(),
            Err(ColorParseError::MissingHash)
        );
        assert_eq!(
            "#3dae".parse::<HexColor>(),
            Err(ColorParseError::WrongLength(4))
        );
        assert_eq!(
            "#3daee900".parse::<HexColor>(),
            Err(ColorParseError::WrongLength(8))
        );
        assert_eq!(
            "#3daeg9".parse::<HexColor>(),
            Err(ColorParseError::InvalidDigit('g'))
        );
        assert_eq!("".parse::<HexColor>(), Err(ColorParseError::MissingHash));
        assert_eq!("#".parse::<HexColor>(), Err(ColorParseError::WrongLength(0)));
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&HexColor::from_u32(0xfcfcfc)).unwrap();
        assert_eq!(json, "\"#fcfcfc\"");

        let back: HexColor = serde_json::from_str("\"#FCFCFC\"").unwrap();
        assert_eq!(back, HexColor::from_u32(0xfcfcfc));

        let err = serde_json::from_str::<HexColor>("\"fcfcfc\"").unwrap_err();
        assert!(err.to_string().contains("must start with '#'"));
    }
}
