use std::any::type_name;

use redb::TypeName;
use serde::{Deserialize, Serialize};

/// Stores any serde value as a JSON blob in a redb table
///
/// JSON keeps records readable and lets new optional fields be added without
/// a table migration.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> redb::Value for Json<T>
where
    T: std::fmt::Debug + Serialize + for<'a> Deserialize<'a>,
{
    type SelfType<'a>
        = T
    where
        Self: 'a;

    type AsBytes<'a>
        = Vec<u8>
    where
        Self: 'a;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        serde_json::from_slice(data).expect("json written by as_bytes is always readable")
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'a,
        Self: 'b,
    {
        serde_json::to_vec(value).expect("serializing a record to json cannot fail")
    }

    fn type_name() -> TypeName {
        TypeName::new(&format!("Json<{}>", type_name::<T>()))
    }
}
