//! Serde field adapter for short UIDs.
//!
//! Use with `#[serde(with = "shortuid::field")]` on a `Uuid` field (or
//! `#[serde(with = "shortuid::field::option")]` on an `Option<Uuid>`). The field serializes as
//! the 12-character short UID and deserializes only from a valid short UID string.
//!
//! Every rejected input, string or not, produces the same field-level message:
//!
//! ```text
//! "<input>" is not a valid short code.
//! ```

use crate::codec::{from_short, to_short};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use uuid::Uuid;

/// Renders the validation message for a rejected input.
pub fn invalid_short_code_message(input: &dyn fmt::Display) -> String {
    format!("\"{}\" is not a valid short code.", input)
}

fn rejected<E: de::Error>(input: &dyn fmt::Display) -> E {
    E::custom(invalid_short_code_message(input))
}

/// Serializes `uuid` as its short UID.
pub fn serialize<S>(uuid: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_short(*uuid))
}

/// Deserializes a short UID string into a `Uuid`.
///
/// This requires a self-describing format, since non-string values must be seen to be
/// reported with the fixed message.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ShortUidVisitor)
}

struct ShortUidVisitor;

impl<'de> Visitor<'de> for ShortUidVisitor {
    type Value = Uuid;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 12-character short UID string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Uuid, E> {
        from_short(v).map_err(|_| rejected(&v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Uuid, E> {
        Err(rejected(&v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uuid, E> {
        Err(rejected(&v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Uuid, E> {
        Err(rejected(&v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uuid, E> {
        Err(rejected(&v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Uuid, E> {
        Err(rejected(&v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Uuid, E> {
        Err(rejected(&v))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Uuid, E> {
        Err(rejected(&v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Uuid, E> {
        Err(rejected(&String::from_utf8_lossy(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Uuid, E> {
        Err(rejected(&"null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Uuid, E> {
        Err(rejected(&"null"))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Uuid, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _seq: A) -> Result<Uuid, A::Error> {
        Err(rejected(&Unexpected::Seq))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, _map: A) -> Result<Uuid, A::Error> {
        Err(rejected(&Unexpected::Map))
    }
}

/// The same adapter for optional fields; `null` maps to `None`.
pub mod option {
    use super::ShortUidVisitor;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;
    use uuid::Uuid;

    pub fn serialize<S>(uuid: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match uuid {
            Some(uuid) => super::serialize(uuid, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionVisitor)
    }

    struct OptionVisitor;

    impl<'de> Visitor<'de> for OptionVisitor {
        type Value = Option<Uuid>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a 12-character short UID string or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(ShortUidVisitor).map(Some)
        }
    }
}
