use crate::PayloadType;

/// Symbology reported by the platform barcode scanner
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr, uniffi::Enum,
)]
pub enum BarcodeFormat {
    QrCode,
    Aztec,
    DataMatrix,
    Pdf417,
    Code128,
    Code39,
    Code93,
    Codabar,
    Ean13,
    Ean8,
    Itf,
    UpcA,
    UpcE,
    Unknown,
}

impl BarcodeFormat {
    /// One dimensional (linear) symbologies, they usually carry product numbers
    pub const fn is_linear(&self) -> bool {
        matches!(
            self,
            Self::Code128
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
}

impl From<BarcodeFormat> for PayloadType {
    fn from(format: BarcodeFormat) -> Self {
        match format {
            BarcodeFormat::QrCode => Self::QrCode,
            BarcodeFormat::Aztec => Self::Aztec,
            BarcodeFormat::DataMatrix => Self::DataMatrix,
            BarcodeFormat::Pdf417 => Self::Pdf417,
            BarcodeFormat::Code128 => Self::Code128,
            BarcodeFormat::Code39 => Self::Code39,
            BarcodeFormat::Code93 => Self::Code93,
            BarcodeFormat::Codabar => Self::Codabar,
            BarcodeFormat::Ean13 => Self::Ean13,
            BarcodeFormat::Ean8 => Self::Ean8,
            BarcodeFormat::Itf => Self::Itf,
            BarcodeFormat::UpcA => Self::UpcA,
            BarcodeFormat::UpcE => Self::UpcE,
            BarcodeFormat::Unknown => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_every_format_maps_to_a_barcode_payload_type() {
        for format in BarcodeFormat::iter() {
            let payload_type = PayloadType::from(format);

            if format == BarcodeFormat::Unknown {
                assert_eq!(payload_type, PayloadType::Unknown);
            } else {
                assert!(payload_type.is_barcode_format(), "{format:?}");
            }
        }
    }

    #[test]
    fn test_linear_formats() {
        assert!(BarcodeFormat::Ean13.is_linear());
        assert!(!BarcodeFormat::QrCode.is_linear());
        assert!(!BarcodeFormat::Pdf417.is_linear());
    }
}
