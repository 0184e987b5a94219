//! Guess the payload type of raw scanned content

use qrmaster_types::{BarcodeFormat, PayloadType};

const APP_STORE_PREFIXES: [&str; 2] = ["https://play.google.com", "https://apps.apple.com"];

/// Classify a raw string by its scheme / header
pub fn detect_payload_type(content: &str) -> PayloadType {
    type T = PayloadType;

    if content.starts_with("http://") || content.starts_with("https://") {
        return classify_url(content);
    }

    let prefixes = [
        ("mailto:", T::Email),
        ("tel:", T::Phone),
        ("sms:", T::Sms),
        ("WIFI:", T::Wifi),
        ("geo:", T::Location),
        ("BEGIN:VCARD", T::Contact),
        ("BEGIN:VEVENT", T::Event),
    ];

    let by_prefix = prefixes
        .into_iter()
        .find(|(prefix, _)| content.starts_with(prefix))
        .map(|(_, payload_type)| payload_type);

    if let Some(payload_type) = by_prefix {
        return payload_type;
    }

    if is_crypto_wallet_uri(content) {
        return T::CryptoWallet;
    }

    T::Text
}

/// Refine a URL into one of the link kinds the app shows with its own icon
pub fn classify_url(url: &str) -> PayloadType {
    type T = PayloadType;

    if url.trim().is_empty() {
        return T::Url;
    }

    let lower = url.to_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if contains_any(&["crypto", "wallet"]) || is_crypto_wallet_uri(&lower) {
        return T::CryptoWallet;
    }

    if APP_STORE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return T::AppStore;
    }

    if contains_any(&["facebook.com"]) {
        return T::Facebook;
    }

    if contains_any(&["twitter.com", "x.com"]) {
        return T::Twitter;
    }

    if contains_any(&["instagram.com"]) {
        return T::Instagram;
    }

    if contains_any(&["youtube.com", "youtu.be"]) {
        return T::Youtube;
    }

    if contains_any(&["wa.me", "whatsapp.com"]) {
        return T::Whatsapp;
    }

    T::Url
}

/// Combine the scanner's symbology with the content
///
/// Two dimensional codes are classified by content, linear codes carry
/// product numbers: 978 / 979 EAN-13s are books.
pub fn detect_scanned_type(content: &str, format: BarcodeFormat) -> PayloadType {
    if !format.is_linear() {
        return detect_payload_type(content);
    }

    let all_digits = !content.is_empty() && content.bytes().all(|byte| byte.is_ascii_digit());
    if !all_digits {
        return format.into();
    }

    match format {
        BarcodeFormat::Ean13 if content.starts_with("978") || content.starts_with("979") => {
            PayloadType::Isbn
        }
        BarcodeFormat::Ean13 | BarcodeFormat::Ean8 | BarcodeFormat::UpcA | BarcodeFormat::UpcE => {
            PayloadType::Product
        }
        other => other.into(),
    }
}

/// `<ticker>:0x<40 hex digits>`, an EVM style address with a currency prefix
fn is_crypto_wallet_uri(content: &str) -> bool {
    let Some((ticker, address)) = content.split_once(':') else {
        return false;
    };

    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };

    !ticker.is_empty()
        && ticker.bytes().all(|byte| byte.is_ascii_alphanumeric())
        && hex.len() == 40
        && hex.bytes().all(|byte| byte.is_ascii_hexdigit())
}

mod ffi {
    use qrmaster_types::{BarcodeFormat, PayloadType};

    #[uniffi::export]
    pub fn detect_payload_type(content: String) -> PayloadType {
        super::detect_payload_type(&content)
    }

    #[uniffi::export]
    pub fn detect_scanned_type(content: String, format: BarcodeFormat) -> PayloadType {
        super::detect_scanned_type(&content, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH_ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_detect_by_prefix() {
        type T = PayloadType;

        assert_eq!(detect_payload_type("mailto:a@b.co?subject=Hi&body=x"), T::Email);
        assert_eq!(detect_payload_type("tel:0901234567"), T::Phone);
        assert_eq!(detect_payload_type("sms:0901234567?body=hi"), T::Sms);
        assert_eq!(detect_payload_type("WIFI:T:WPA;S:Home;P:pw;;"), T::Wifi);
        assert_eq!(detect_payload_type("geo:10.5,106.7"), T::Location);
        assert_eq!(detect_payload_type("BEGIN:VCARD\nVERSION:3.0\nEND:VCARD"), T::Contact);
        assert_eq!(detect_payload_type("BEGIN:VEVENT\nSUMMARY:x\nEND:VEVENT"), T::Event);
        assert_eq!(detect_payload_type("just words"), T::Text);
        assert_eq!(detect_payload_type(""), T::Text);
    }

    #[test]
    fn test_detect_crypto_wallet() {
        let uri = format!("ethereum:{ETH_ADDRESS}");
        assert_eq!(detect_payload_type(&uri), PayloadType::CryptoWallet);

        // too short to be an address
        assert_eq!(detect_payload_type("ETH:0xABC"), PayloadType::Text);
    }

    #[test]
    fn test_scheme_wins_over_wallet_shape() {
        type T = PayloadType;

        assert_eq!(detect_payload_type(&format!("tel:{ETH_ADDRESS}")), T::Phone);
        assert_eq!(detect_payload_type(&format!("sms:{ETH_ADDRESS}")), T::Sms);
        assert_eq!(detect_payload_type(&format!("geo:{ETH_ADDRESS}")), T::Location);
    }

    #[test]
    fn test_classify_url() {
        type T = PayloadType;

        assert_eq!(classify_url("https://example.com"), T::Url);
        assert_eq!(classify_url("https://play.google.com/store/apps/details?id=a"), T::AppStore);
        assert_eq!(classify_url("https://apps.apple.com/app/id1"), T::AppStore);
        assert_eq!(classify_url("https://www.facebook.com/someone"), T::Facebook);
        assert_eq!(classify_url("https://x.com/someone"), T::Twitter);
        assert_eq!(classify_url("https://twitter.com/someone"), T::Twitter);
        assert_eq!(classify_url("https://instagram.com/someone"), T::Instagram);
        assert_eq!(classify_url("https://youtu.be/abc"), T::Youtube);
        assert_eq!(classify_url("HTTPS://WWW.YOUTUBE.COM/watch?v=1"), T::Youtube);
        assert_eq!(classify_url("https://wa.me/84901234567"), T::Whatsapp);
        assert_eq!(classify_url("https://my-wallet.example"), T::CryptoWallet);
        assert_eq!(classify_url("   "), T::Url);
    }

    #[test]
    fn test_http_prefix_goes_through_url_classifier() {
        assert_eq!(detect_payload_type("https://youtu.be/abc"), PayloadType::Youtube);
        assert_eq!(detect_payload_type("http://example.com"), PayloadType::Url);
    }

    #[test]
    fn test_detect_scanned_type() {
        type F = BarcodeFormat;
        type T = PayloadType;

        assert_eq!(detect_scanned_type("WIFI:S:x;;", F::QrCode), T::Wifi);
        assert_eq!(detect_scanned_type("hello", F::QrCode), T::Text);
        assert_eq!(detect_scanned_type("hello", F::DataMatrix), T::Text);
        assert_eq!(detect_scanned_type("9780306406157", F::Ean13), T::Isbn);
        assert_eq!(detect_scanned_type("8934563138165", F::Ean13), T::Product);
        assert_eq!(detect_scanned_type("036000291452", F::UpcA), T::Product);
        assert_eq!(detect_scanned_type("ABC-123", F::Code128), T::Code128);
        assert_eq!(detect_scanned_type("123456", F::Code39), T::Code39);
    }
}
