use std::{fmt::Display, str::FromStr};

/// ARGB color as stored by the app, written `#RRGGBB` or `#AARRGGBB`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct HexColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum ColorError {
    #[error("color must start with '#', got: {0}")]
    MissingHash(String),

    #[error("color must have 6 or 8 hex digits, got: {0}")]
    InvalidLength(String),

    #[error("invalid hex digits in color: {0}")]
    InvalidHex(String),
}

impl HexColor {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(0xFF, 0xFF, 0xFF);

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self { alpha: 0xFF, red, green, blue }
    }

    pub fn try_from_str(color: &str) -> Result<Self, ColorError> {
        let color = color.trim();
        let Some(hex) = color.strip_prefix('#') else {
            return Err(ColorError::MissingHash(color.to_string()));
        };

        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(color.to_string()));
        }

        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorError::InvalidLength(color.to_string()));
        }

        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorError::InvalidHex(color.to_string()))?;

        let [a, r, g, b] = value.to_be_bytes();
        if hex.len() == 6 {
            return Ok(Self::opaque(r, g, b));
        }

        Ok(Self { alpha: a, red: r, green: g, blue: b })
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.alpha == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.alpha, self.red, self.green, self.blue)
        }
    }
}

mod ffi {
    use super::{ColorError, HexColor};

    #[uniffi::export]
    pub fn hex_color_parse(color: String) -> Result<HexColor, ColorError> {
        HexColor::try_from_str(&color)
    }

    #[uniffi::export]
    pub fn hex_color_to_string(color: HexColor) -> String {
        color.to_string()
    }
}
