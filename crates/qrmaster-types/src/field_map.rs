use std::collections::HashMap;

/// Structured key / value view of a payload, keys depend on the payload type
pub type FieldMap = HashMap<String, String>;

/// Field names used by the payload formats
pub mod keys {
    pub const TEXT: &str = "text";
    pub const URL: &str = "url";
    pub const PHONE: &str = "phone";
    pub const MESSAGE: &str = "message";
    pub const EMAIL: &str = "email";
    pub const SUBJECT: &str = "subject";
    pub const BODY: &str = "body";
    pub const SSID: &str = "ssid";
    pub const PASSWORD: &str = "password";
    pub const SECURITY: &str = "security";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const TITLE: &str = "title";
    pub const START: &str = "start";
    pub const END: &str = "end";
    pub const LOCATION: &str = "location";
    pub const CURRENCY: &str = "currency";
}

pub trait FieldMapExt {
    /// Value for `key`, empty when absent
    fn field(&self, key: &str) -> &str;

    /// Value for `key`, `default` when absent
    fn field_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str;
}

impl FieldMapExt for FieldMap {
    fn field(&self, key: &str) -> &str {
        self.field_or(key, "")
    }

    fn field_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).map(String::as_str).unwrap_or(default)
    }
}
