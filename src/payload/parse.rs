use std::collections::HashMap;

use qrmaster_types::{
    FieldMap, PayloadType,
    field_map::keys::{
        ADDRESS, BODY, CURRENCY, EMAIL, END, LATITUDE, LOCATION, LONGITUDE, MESSAGE, NAME,
        PASSWORD, PHONE, SECURITY, SSID, START, SUBJECT, TEXT, TITLE, URL,
    },
};
use qrmaster_util::{substring_after_or, substring_before, substring_between};

use super::{DEFAULT_COORDINATE, DEFAULT_CURRENCY, DEFAULT_WIFI_SECURITY};

/// Recover the fields of a payload previously built (or scanned) as `payload_type`
///
/// Best effort and never fails: missing delimiters degrade to empty or
/// default values. The only rejected input is a Wi-Fi payload without the
/// `WIFI:` prefix, which yields an empty map.
pub fn parse(payload: &str, payload_type: PayloadType) -> FieldMap {
    type T = PayloadType;

    match payload_type {
        T::Text => fields([(TEXT, payload)]),
        T::Url => fields([(URL, payload)]),
        T::Phone => fields([(PHONE, payload.strip_prefix("tel:").unwrap_or(payload))]),
        T::Sms => parse_sms(payload),
        T::Email => parse_email(payload),
        T::Wifi => parse_wifi(payload),
        T::Location => parse_location(payload),
        T::Contact => parse_contact(payload),
        T::Event => parse_event(payload),
        T::CryptoWallet => parse_crypto_wallet(payload),
        _ => fields([(TEXT, payload)]),
    }
}

fn fields<const N: usize>(pairs: [(&str, &str); N]) -> FieldMap {
    pairs.into_iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
}

fn parse_sms(payload: &str) -> FieldMap {
    let phone = substring_between(payload, "sms:", "?body=");
    let message = substring_after_or(payload, "body=", "");

    fields([(PHONE, phone), (MESSAGE, message)])
}

fn parse_email(payload: &str) -> FieldMap {
    let email = substring_between(payload, "mailto:", "?");
    let subject = substring_before(substring_after_or(payload, "subject=", ""), "&body=");
    let body = substring_after_or(payload, "&body=", "");

    fields([(EMAIL, email), (SUBJECT, subject), (BODY, body)])
}

fn parse_wifi(payload: &str) -> FieldMap {
    let Some(rest) = payload.strip_prefix("WIFI:") else {
        return FieldMap::new();
    };

    let rest = rest.strip_suffix(';').unwrap_or(rest);

    // later duplicates win
    let segments: HashMap<&str, &str> =
        rest.split(';').map(|segment| segment.split_once(':').unwrap_or((segment, ""))).collect();

    let value = |key: &str, default: &'static str| segments.get(key).copied().unwrap_or(default);

    fields([
        (SSID, value("S", "")),
        (PASSWORD, value("P", "")),
        (SECURITY, value("T", DEFAULT_WIFI_SECURITY)),
    ])
}

fn parse_location(payload: &str) -> FieldMap {
    let coordinates = payload.strip_prefix("geo:").unwrap_or(payload);
    let mut parts = coordinates.split(',');

    let latitude = parts.next().unwrap_or(DEFAULT_COORDINATE);
    let longitude = parts.next().unwrap_or(DEFAULT_COORDINATE);

    fields([(LATITUDE, latitude), (LONGITUDE, longitude)])
}

/// Value of a `TAG:` line, whitespace only values become empty
fn line_value<'a>(payload: &'a str, tag: &str) -> &'a str {
    let value = substring_between(payload, tag, "\n");
    if value.trim().is_empty() { "" } else { value }
}

fn parse_contact(payload: &str) -> FieldMap {
    fields([
        (NAME, line_value(payload, "FN:")),
        (PHONE, line_value(payload, "TEL:")),
        (EMAIL, line_value(payload, "EMAIL:")),
        (ADDRESS, line_value(payload, "ADR:")),
    ])
}

fn parse_event(payload: &str) -> FieldMap {
    fields([
        (TITLE, line_value(payload, "SUMMARY:")),
        (START, line_value(payload, "DTSTART:")),
        (END, line_value(payload, "DTEND:")),
        (LOCATION, line_value(payload, "LOCATION:")),
    ])
}

fn parse_crypto_wallet(payload: &str) -> FieldMap {
    let (currency, address) = payload.split_once(':').unwrap_or((DEFAULT_CURRENCY, ""));
    fields([(CURRENCY, currency), (ADDRESS, address)])
}
