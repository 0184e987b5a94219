use std::str::FromStr as _;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Semantic kind of a QR / barcode payload
///
/// Only the first block of variants has a structured payload format, every
/// other kind is carried through the codec as opaque text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    uniffi::Enum,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PayloadType {
    // structured payloads
    #[default]
    Text,
    Url,
    Phone,
    Sms,
    Email,
    Wifi,
    Location,
    Contact,
    Event,
    CryptoWallet,

    // barcode formats
    QrCode,
    Aztec,
    DataMatrix,
    Pdf417,
    #[strum(serialize = "CODE_128")]
    Code128,
    #[strum(serialize = "CODE_39")]
    Code39,
    #[strum(serialize = "CODE_93")]
    Code93,
    Codabar,
    #[strum(serialize = "EAN_13")]
    Ean13,
    #[strum(serialize = "EAN_8")]
    Ean8,
    Itf,
    UpcA,
    UpcE,

    // value kinds
    DriverLicense,
    Isbn,
    Product,
    AppStore,
    Facebook,
    Twitter,
    Instagram,
    Youtube,
    Whatsapp,

    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum PayloadTypeError {
    #[error("unknown payload type: {0}")]
    UnknownType(String),
}

impl PayloadType {
    /// Strict parse of the stored name, e.g. `WIFI` or `crypto_wallet`
    pub fn try_from_name(name: &str) -> Result<Self, PayloadTypeError> {
        Self::from_str(name.trim()).map_err(|_| PayloadTypeError::UnknownType(name.to_string()))
    }

    /// Lenient parse, anything unrecognised becomes [`PayloadType::Unknown`]
    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or(Self::Unknown)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Kinds whose payload has a dedicated build / parse format
    pub const fn is_structured(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Url
                | Self::Phone
                | Self::Sms
                | Self::Email
                | Self::Wifi
                | Self::Location
                | Self::Contact
                | Self::Event
                | Self::CryptoWallet
        )
    }

    pub const fn is_barcode_format(&self) -> bool {
        matches!(
            self,
            Self::QrCode
                | Self::Aztec
                | Self::DataMatrix
                | Self::Pdf417
                | Self::Code128
                | Self::Code39
                | Self::Code93
                | Self::Codabar
                | Self::Ean13
                | Self::Ean8
                | Self::Itf
                | Self::UpcA
                | Self::UpcE
        )
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Url => "Website",
            Self::Phone => "Phone number",
            Self::Sms => "SMS",
            Self::Email => "Email",
            Self::Wifi => "Wi-Fi",
            Self::Location => "Location",
            Self::Contact => "Contact",
            Self::Event => "Event",
            Self::CryptoWallet => "Crypto wallet",
            Self::QrCode => "QR code",
            Self::Aztec => "Aztec",
            Self::DataMatrix => "Data Matrix",
            Self::Pdf417 => "PDF417",
            Self::Code128 => "Code 128",
            Self::Code39 => "Code 39",
            Self::Code93 => "Code 93",
            Self::Codabar => "Codabar",
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
            Self::Itf => "ITF",
            Self::UpcA => "UPC-A",
            Self::UpcE => "UPC-E",
            Self::DriverLicense => "Driver license",
            Self::Isbn => "ISBN (Book)",
            Self::Product => "Product",
            Self::AppStore => "App store",
            Self::Facebook => "Facebook",
            Self::Twitter => "X",
            Self::Instagram => "Instagram",
            Self::Youtube => "YouTube",
            Self::Whatsapp => "WhatsApp",
            Self::Unknown => "Unknown",
        }
    }
}

impl Serialize for PayloadType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PayloadType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

mod ffi {
    use strum::IntoEnumIterator as _;

    use super::{PayloadType, PayloadTypeError};

    #[uniffi::export]
    pub fn all_payload_types() -> Vec<PayloadType> {
        PayloadType::iter().collect()
    }

    #[uniffi::export]
    pub fn payload_type_display_name(payload_type: PayloadType) -> String {
        payload_type.display_name().to_string()
    }

    #[uniffi::export]
    pub fn payload_type_name(payload_type: PayloadType) -> String {
        payload_type.name().to_string()
    }

    #[uniffi::export]
    pub fn payload_type_from_name(name: String) -> Result<PayloadType, PayloadTypeError> {
        PayloadType::try_from_name(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_storage_names() {
        assert_eq!(PayloadType::Wifi.name(), "WIFI");
        assert_eq!(PayloadType::CryptoWallet.name(), "CRYPTO_WALLET");
        assert_eq!(PayloadType::DataMatrix.name(), "DATA_MATRIX");
        assert_eq!(PayloadType::Ean13.name(), "EAN_13");
        assert_eq!(PayloadType::Code128.name(), "CODE_128");
        assert_eq!(PayloadType::UpcA.name(), "UPC_A");
        assert_eq!(PayloadType::Pdf417.name(), "PDF417");
        assert_eq!(PayloadType::Ean8.to_string(), "EAN_8");
    }

    #[test]
    fn test_names_parse_back() {
        for payload_type in PayloadType::iter() {
            assert_eq!(PayloadType::try_from_name(payload_type.name()), Ok(payload_type));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PayloadType::from_name("wifi"), PayloadType::Wifi);
        assert_eq!(PayloadType::from_name("Crypto_Wallet"), PayloadType::CryptoWallet);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(PayloadType::from_name("HOLOGRAM"), PayloadType::Unknown);
        assert_eq!(
            PayloadType::try_from_name("HOLOGRAM"),
            Err(PayloadTypeError::UnknownType("HOLOGRAM".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_storage_name() {
        let json = serde_json::to_string(&PayloadType::CryptoWallet).unwrap();
        assert_eq!(json, "\"CRYPTO_WALLET\"");

        let parsed: PayloadType = serde_json::from_str("\"EAN_13\"").unwrap();
        assert_eq!(parsed, PayloadType::Ean13);

        let parsed: PayloadType = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(parsed, PayloadType::Unknown);
    }

    #[test]
    fn test_structured_kinds() {
        let structured = PayloadType::iter().filter(PayloadType::is_structured).count();
        assert_eq!(structured, 10);
        assert!(!PayloadType::Youtube.is_structured());
        assert!(PayloadType::Ean13.is_barcode_format());
    }
}
