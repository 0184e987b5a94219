use qrmaster_types::{
    FieldMap, FieldMapExt as _, PayloadType,
    field_map::keys::{
        ADDRESS, BODY, CURRENCY, EMAIL, END, LATITUDE, LOCATION, LONGITUDE, MESSAGE, NAME,
        PASSWORD, PHONE, SECURITY, SSID, START, SUBJECT, TEXT, TITLE, URL,
    },
};

use super::{DEFAULT_COORDINATE, DEFAULT_CURRENCY, DEFAULT_WIFI_SECURITY};

/// Build the string embedded in the QR code for `payload_type`
///
/// Never fails, missing fields are treated as empty. Field values are inserted
/// as is, a value containing the format's own delimiters will not survive a
/// later [`super::parse`].
pub fn build(payload_type: PayloadType, fields: &FieldMap) -> String {
    type T = PayloadType;

    match payload_type {
        T::Text => fields.field(TEXT).to_string(),
        T::Url => fields.field(URL).to_string(),
        T::Phone => format!("tel:{}", fields.field(PHONE)),
        T::Sms => format!("sms:{}?body={}", fields.field(PHONE), fields.field(MESSAGE)),
        T::Email => build_email(fields),
        T::Wifi => build_wifi(fields),
        T::Location => build_location(fields),
        T::Contact => build_contact(fields),
        T::Event => build_event(fields),
        T::CryptoWallet => build_crypto_wallet(fields),
        _ => fields.field(TEXT).to_string(),
    }
}

fn build_email(fields: &FieldMap) -> String {
    let email = fields.field(EMAIL);
    let subject = fields.field(SUBJECT);
    let body = fields.field(BODY);

    format!("mailto:{email}?subject={subject}&body={body}")
}

fn build_wifi(fields: &FieldMap) -> String {
    let ssid = fields.field(SSID);
    let password = fields.field(PASSWORD);
    let security = fields.field_or(SECURITY, DEFAULT_WIFI_SECURITY);

    format!("WIFI:T:{security};S:{ssid};P:{password};;")
}

fn build_location(fields: &FieldMap) -> String {
    let latitude = fields.field_or(LATITUDE, DEFAULT_COORDINATE);
    let longitude = fields.field_or(LONGITUDE, DEFAULT_COORDINATE);

    format!("geo:{latitude},{longitude}")
}

fn build_contact(fields: &FieldMap) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", fields.field(NAME)),
        format!("TEL:{}", fields.field(PHONE)),
        format!("EMAIL:{}", fields.field(EMAIL)),
        format!("ADR:{}", fields.field(ADDRESS)),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

fn build_event(fields: &FieldMap) -> String {
    [
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", fields.field(TITLE)),
        format!("DTSTART:{}", fields.field(START)),
        format!("DTEND:{}", fields.field(END)),
        format!("LOCATION:{}", fields.field(LOCATION)),
        "END:VEVENT".to_string(),
    ]
    .join("\n")
}

fn build_crypto_wallet(fields: &FieldMap) -> String {
    let currency = fields.field_or(CURRENCY, DEFAULT_CURRENCY);
    let address = fields.field(ADDRESS);

    format!("{currency}:{address}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
    }

    #[test]
    fn test_build_text_and_url() {
        assert_eq!(build(PayloadType::Text, &fields(&[(TEXT, "hello world")])), "hello world");
        assert_eq!(
            build(PayloadType::Url, &fields(&[(URL, "https://example.com")])),
            "https://example.com"
        );
    }

    #[test]
    fn test_build_phone() {
        let phone = fields(&[(PHONE, "0901234567")]);
        assert_eq!(build(PayloadType::Phone, &phone), "tel:0901234567");
    }

    #[test]
    fn test_build_phone_missing_number() {
        assert_eq!(build(PayloadType::Phone, &FieldMap::new()), "tel:");
    }

    #[test]
    fn test_build_sms() {
        let sms = fields(&[(PHONE, "0901234567"), (MESSAGE, "see you")]);
        assert_eq!(build(PayloadType::Sms, &sms), "sms:0901234567?body=see you");
    }

    #[test]
    fn test_build_email() {
        let email = fields(&[(EMAIL, "a@b.co"), (SUBJECT, "Hi"), (BODY, "Lunch?")]);
        assert_eq!(build(PayloadType::Email, &email), "mailto:a@b.co?subject=Hi&body=Lunch?");
    }

    #[test]
    fn test_build_wifi() {
        let wifi = fields(&[(SSID, "Home"), (PASSWORD, "secret1"), (SECURITY, "WPA")]);
        assert_eq!(build(PayloadType::Wifi, &wifi), "WIFI:T:WPA;S:Home;P:secret1;;");
    }

    #[test]
    fn test_build_wifi_default_security() {
        let wifi = fields(&[(SSID, "Cafe"), (PASSWORD, "latte")]);
        assert_eq!(build(PayloadType::Wifi, &wifi), "WIFI:T:WPA;S:Cafe;P:latte;;");
    }

    #[test]
    fn test_build_location() {
        let location = fields(&[(LATITUDE, "10.5"), (LONGITUDE, "106.7")]);
        assert_eq!(build(PayloadType::Location, &location), "geo:10.5,106.7");
        assert_eq!(build(PayloadType::Location, &FieldMap::new()), "geo:0,0");
    }

    #[test]
    fn test_build_contact() {
        let contact = fields(&[
            (NAME, "Ann Lee"),
            (PHONE, "+84901234567"),
            (EMAIL, "ann@example.com"),
            (ADDRESS, "1 Main St"),
        ]);

        let expected = "BEGIN:VCARD\nVERSION:3.0\nFN:Ann Lee\nTEL:+84901234567\n\
                        EMAIL:ann@example.com\nADR:1 Main St\nEND:VCARD";
        assert_eq!(build(PayloadType::Contact, &contact), expected);
    }

    #[test]
    fn test_build_event() {
        let event = fields(&[
            (TITLE, "Standup"),
            (START, "20260101T090000"),
            (END, "20260101T091500"),
            (LOCATION, "Room 4"),
        ]);

        let expected = "BEGIN:VEVENT\nSUMMARY:Standup\nDTSTART:20260101T090000\n\
                        DTEND:20260101T091500\nLOCATION:Room 4\nEND:VEVENT";
        assert_eq!(build(PayloadType::Event, &event), expected);
    }

    #[test]
    fn test_build_crypto_wallet() {
        let wallet = fields(&[(CURRENCY, "ETH"), (ADDRESS, "0xABC")]);
        assert_eq!(build(PayloadType::CryptoWallet, &wallet), "ETH:0xABC");

        let wallet = fields(&[(ADDRESS, "bc1qxyz")]);
        assert_eq!(build(PayloadType::CryptoWallet, &wallet), "BTC:bc1qxyz");
    }

    #[test]
    fn test_build_other_types_use_text() {
        let product = fields(&[(TEXT, "8934563138165")]);
        assert_eq!(build(PayloadType::Ean13, &product), "8934563138165");
        assert_eq!(build(PayloadType::Youtube, &FieldMap::new()), "");
    }
}
