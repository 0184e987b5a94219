//! Payload codec, converts between a payload type with its field map and the
//! literal string that gets encoded into (or scanned out of) a QR code.
//!
//! Values are never escaped. A field containing the delimiters of its own
//! format (`;` and `:` for Wi-Fi, `\n` for contacts and events, `,` for
//! locations) builds fine but desynchronizes the parse, round trips are only
//! exact for delimiter free values.

mod build;
mod parse;

pub use build::build;
pub use parse::parse;

pub const DEFAULT_WIFI_SECURITY: &str = "WPA";
pub const DEFAULT_CURRENCY: &str = "BTC";
pub const DEFAULT_COORDINATE: &str = "0";

mod ffi {
    use qrmaster_types::{FieldMap, PayloadType};

    #[uniffi::export]
    pub fn build_payload(payload_type: PayloadType, fields: FieldMap) -> String {
        super::build(payload_type, &fields)
    }

    #[uniffi::export]
    pub fn parse_payload(payload: String, payload_type: PayloadType) -> FieldMap {
        super::parse(&payload, payload_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qrmaster_types::{FieldMap, PayloadType, field_map::keys::*};

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
    }

    fn assert_round_trip(payload_type: PayloadType, input: FieldMap) {
        let payload = build(payload_type, &input);
        assert_eq!(parse(&payload, payload_type), input, "payload: {payload:?}");
    }

    #[test]
    fn test_round_trip_every_structured_type() {
        type T = PayloadType;

        assert_round_trip(T::Text, fields(&[(TEXT, "just some text")]));
        assert_round_trip(T::Url, fields(&[(URL, "https://example.com/a?b=c")]));
        assert_round_trip(T::Phone, fields(&[(PHONE, "0901234567")]));
        assert_round_trip(T::Sms, fields(&[(PHONE, "0901234567"), (MESSAGE, "on my way")]));
        assert_round_trip(
            T::Email,
            fields(&[(EMAIL, "ann@example.com"), (SUBJECT, "Hello"), (BODY, "How are you")]),
        );
        assert_round_trip(
            T::Wifi,
            fields(&[(SSID, "Home"), (PASSWORD, "secret1"), (SECURITY, "WPA2")]),
        );
        assert_round_trip(T::Location, fields(&[(LATITUDE, "10.5"), (LONGITUDE, "106.7")]));
        assert_round_trip(
            T::Contact,
            fields(&[
                (NAME, "Ann Lee"),
                (PHONE, "0901234567"),
                (EMAIL, "ann@example.com"),
                (ADDRESS, "12 Le Loi"),
            ]),
        );
        assert_round_trip(
            T::Event,
            fields(&[
                (TITLE, "Launch"),
                (START, "20261018T100000"),
                (END, "20261018T120000"),
                (LOCATION, "HCMC"),
            ]),
        );
        assert_round_trip(T::CryptoWallet, fields(&[(CURRENCY, "ETH"), (ADDRESS, "0xABC")]));
    }

    #[test]
    fn test_round_trip_adds_defaulted_keys() {
        let payload = build(PayloadType::Wifi, &fields(&[(SSID, "Home"), (PASSWORD, "pw")]));
        assert_eq!(
            parse(&payload, PayloadType::Wifi),
            fields(&[(SSID, "Home"), (PASSWORD, "pw"), (SECURITY, "WPA")])
        );

        let payload = build(PayloadType::CryptoWallet, &fields(&[(ADDRESS, "bc1qxyz")]));
        assert_eq!(
            parse(&payload, PayloadType::CryptoWallet),
            fields(&[(CURRENCY, "BTC"), (ADDRESS, "bc1qxyz")])
        );
    }

    #[test]
    fn test_wifi_password_with_semicolon_truncates() {
        let input = fields(&[(SSID, "Home"), (PASSWORD, "pa;ss"), (SECURITY, "WPA")]);
        let payload = build(PayloadType::Wifi, &input);
        assert_eq!(payload, "WIFI:T:WPA;S:Home;P:pa;ss;;");

        let parsed = parse(&payload, PayloadType::Wifi);
        assert_eq!(parsed[PASSWORD], "pa");
        assert_ne!(parsed, input);
    }

    #[test]
    fn test_contact_value_with_newline_desynchronizes() {
        let input = fields(&[(NAME, "Ann\nLee"), (PHONE, "1"), (EMAIL, "a@b.co"), (ADDRESS, "x")]);
        let payload = build(PayloadType::Contact, &input);

        let parsed = parse(&payload, PayloadType::Contact);
        assert_eq!(parsed[NAME], "Ann");
        assert_ne!(parsed, input);
    }

    #[test]
    fn test_location_with_extra_comma_is_lossy() {
        let input = fields(&[(LATITUDE, "10,5"), (LONGITUDE, "106.7")]);
        let parsed = parse(&build(PayloadType::Location, &input), PayloadType::Location);

        assert_eq!(parsed, fields(&[(LATITUDE, "10"), (LONGITUDE, "5")]));
    }

    #[test]
    fn test_ffi_wrappers() {
        let input = fields(&[(SSID, "Home"), (PASSWORD, "secret1"), (SECURITY, "WPA")]);
        let payload = ffi::build_payload(PayloadType::Wifi, input.clone());

        assert_eq!(payload, "WIFI:T:WPA;S:Home;P:secret1;;");
        assert_eq!(ffi::parse_payload(payload, PayloadType::Wifi), input);
    }
}
