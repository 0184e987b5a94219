uniffi::setup_scaffolding!();

mod barcode_format;
mod payload_type;

pub mod color;
pub mod field_map;
pub mod redb;

// export the types
pub use barcode_format::BarcodeFormat;
pub use field_map::{FieldMap, FieldMapExt};
pub use payload_type::{PayloadType, PayloadTypeError};
