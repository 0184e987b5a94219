//! A generated or scanned code, as shown in the history and fed to the renderer

use qrmaster_types::{FieldMap, PayloadType, color::HexColor};
use serde::{Deserialize, Serialize};

use crate::{
    payload,
    render::{RenderOptions, logo::LogoSource},
};

pub const DEFAULT_SIZE: u32 = 512;
pub const DEFAULT_MARGIN: u32 = 4;

/// Shape used to draw each dark module
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PatternStyle {
    #[default]
    Square,
    Dot,
    Rounded,
}

/// QR error correction level, `M` unless the user picks otherwise
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    uniffi::Enum,
)]
#[strum(ascii_case_insensitive)]
pub enum ErrorCorrectionLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl PatternStyle {
    /// Unknown names fall back to [`PatternStyle::Square`]
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }
}

impl ErrorCorrectionLevel {
    /// Unknown names fall back to [`ErrorCorrectionLevel::M`]
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }
}

impl From<ErrorCorrectionLevel> for qrcode::EcLevel {
    fn from(level: ErrorCorrectionLevel) -> Self {
        match level {
            ErrorCorrectionLevel::L => qrcode::EcLevel::L,
            ErrorCorrectionLevel::M => qrcode::EcLevel::M,
            ErrorCorrectionLevel::Q => qrcode::EcLevel::Q,
            ErrorCorrectionLevel::H => qrcode::EcLevel::H,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct QrCodeData {
    /// 0 until the record is saved
    pub id: u64,
    pub content: String,
    pub data: FieldMap,
    pub payload_type: PayloadType,
    pub title: String,
    pub thumbnail_path: Option<String>,
    /// unix seconds
    pub created_at: u64,
    pub is_favorite: bool,
    pub is_scanned: bool,
    pub color_foreground: String,
    pub color_background: String,
    pub pattern_style: PatternStyle,
    pub error_correction_level: ErrorCorrectionLevel,
    pub logo_path: Option<String>,
    pub size: u32,
    pub margin: u32,
}

impl Default for QrCodeData {
    fn default() -> Self {
        Self {
            id: 0,
            content: String::new(),
            data: FieldMap::new(),
            payload_type: PayloadType::default(),
            title: String::new(),
            thumbnail_path: None,
            created_at: now_unix_seconds(),
            is_favorite: false,
            is_scanned: false,
            color_foreground: HexColor::BLACK.to_string(),
            color_background: HexColor::WHITE.to_string(),
            pattern_style: PatternStyle::default(),
            error_correction_level: ErrorCorrectionLevel::default(),
            logo_path: None,
            size: DEFAULT_SIZE,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl QrCodeData {
    /// A new, unsaved code for the generator screen
    pub fn new(payload_type: PayloadType, data: FieldMap) -> Self {
        Self {
            payload_type,
            data,
            title: payload_type.display_name().to_string(),
            ..Default::default()
        }
        .with_built_content()
    }

    /// A code read by the camera, `data` is recovered from the content
    pub fn scanned(content: String, payload_type: PayloadType) -> Self {
        Self {
            data: payload::parse(&content, payload_type),
            title: payload_type.display_name().to_string(),
            content,
            payload_type,
            is_scanned: true,
            ..Default::default()
        }
    }

    /// Rebuild `content` from the field map
    pub fn with_built_content(mut self) -> Self {
        self.content = payload::build(self.payload_type, &self.data);
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            size: self.size,
            margin: self.margin,
            foreground: self.color_foreground.clone(),
            background: self.color_background.clone(),
            pattern_style: self.pattern_style,
            error_correction_level: self.error_correction_level,
            logo: self.logo_path.clone().map(LogoSource::Path),
        }
    }
}

pub fn now_unix_seconds() -> u64 {
    jiff::Timestamp::now().as_second().max(0) as u64
}

mod ffi {
    use qrmaster_types::{FieldMap, PayloadType};
    use strum::IntoEnumIterator as _;

    use super::{ErrorCorrectionLevel, PatternStyle, QrCodeData};

    #[uniffi::export]
    pub fn qr_code_data_new(payload_type: PayloadType, data: FieldMap) -> QrCodeData {
        QrCodeData::new(payload_type, data)
    }

    #[uniffi::export]
    pub fn qr_code_data_with_built_content(qr_code: QrCodeData) -> QrCodeData {
        qr_code.with_built_content()
    }

    #[uniffi::export]
    pub fn all_pattern_styles() -> Vec<PatternStyle> {
        PatternStyle::iter().collect()
    }

    #[uniffi::export]
    pub fn all_error_correction_levels() -> Vec<ErrorCorrectionLevel> {
        ErrorCorrectionLevel::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qrmaster_types::field_map::keys::{PASSWORD, SECURITY, SSID};

    #[test]
    fn test_defaults() {
        let qr_code = QrCodeData::default();

        assert_eq!(qr_code.id, 0);
        assert_eq!(qr_code.color_foreground, "#000000");
        assert_eq!(qr_code.color_background, "#FFFFFF");
        assert_eq!(qr_code.pattern_style, PatternStyle::Square);
        assert_eq!(qr_code.error_correction_level, ErrorCorrectionLevel::M);
        assert_eq!(qr_code.size, 512);
        assert_eq!(qr_code.margin, 4);
        assert!(qr_code.created_at > 0);
    }

    #[test]
    fn test_new_builds_content() {
        let data = FieldMap::from([
            (SSID.to_string(), "Home".to_string()),
            (PASSWORD.to_string(), "pw".to_string()),
        ]);

        let qr_code = QrCodeData::new(PayloadType::Wifi, data);
        assert_eq!(qr_code.content, "WIFI:T:WPA;S:Home;P:pw;;");
        assert_eq!(qr_code.title, "Wi-Fi");
        assert!(!qr_code.is_scanned);
    }

    #[test]
    fn test_scanned_parses_fields() {
        let qr_code = QrCodeData::scanned("WIFI:T:WEP;S:Lab;;".into(), PayloadType::Wifi);

        assert!(qr_code.is_scanned);
        assert_eq!(qr_code.data[SSID], "Lab");
        assert_eq!(qr_code.data[SECURITY], "WEP");
    }

    #[test]
    fn test_lenient_names() {
        assert_eq!(PatternStyle::from_name("Dot"), PatternStyle::Dot);
        assert_eq!(PatternStyle::from_name("ROUNDED"), PatternStyle::Rounded);
        assert_eq!(PatternStyle::from_name("hexagon"), PatternStyle::Square);

        assert_eq!(ErrorCorrectionLevel::from_name("h"), ErrorCorrectionLevel::H);
        assert_eq!(ErrorCorrectionLevel::from_name("Q"), ErrorCorrectionLevel::Q);
        assert_eq!(ErrorCorrectionLevel::from_name("X"), ErrorCorrectionLevel::M);
        assert_eq!(ErrorCorrectionLevel::from_name(""), ErrorCorrectionLevel::M);
    }

    #[test]
    fn test_pattern_style_names() {
        let name: &'static str = PatternStyle::Rounded.into();
        assert_eq!(name, "rounded");
        assert_eq!(ErrorCorrectionLevel::H.to_string(), "H");
    }
}
