//! The `ShortUid` value type.

use crate::codec::{from_short, is_conforming, matches, to_short};
use crate::{ShortUidError, ShortUidResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// A UUID that is known to have a short UID representation.
///
/// This wrapper type guarantees that once constructed, the contained UUID came either from a
/// valid 12-character short UID or from a conforming UUID. Its [`Display`](fmt::Display) form is
/// always the short UID.
///
/// # Construction
/// - [`ShortUid::parse`] validates an externally supplied short UID (URL segment, CLI argument).
/// - [`ShortUid::try_from`] accepts a UUID with the `0x80` marker and zero tail.
///
/// # Errors
/// [`ShortUid::parse`] returns [`ShortUidError::InvalidFormat`] for malformed input, and
/// `TryFrom<Uuid>` returns [`ShortUidError::NonConforming`] for UUIDs with no short form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortUid(Uuid);

impl ShortUid {
    /// Validates and decodes a short UID string.
    ///
    /// # Errors
    ///
    /// Returns [`ShortUidError::InvalidFormat`] if `input` is not 12 characters from the
    /// URL-safe base-64 alphabet.
    pub fn parse(input: &str) -> ShortUidResult<Self> {
        from_short(input).map(Self)
    }

    /// Returns true if `input` is structurally a short UID.
    ///
    /// Equivalent to [`matches`](crate::matches).
    pub fn is_valid(input: &str) -> bool {
        matches(input)
    }

    /// Returns the decoded UUID.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the 12-character short form.
    pub fn to_short(&self) -> String {
        to_short(self.0)
    }
}

impl fmt::Display for ShortUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_short(self.0))
    }
}

impl FromStr for ShortUid {
    type Err = ShortUidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShortUid::parse(s)
    }
}

impl TryFrom<Uuid> for ShortUid {
    type Error = ShortUidError;

    /// Wraps a conforming UUID.
    ///
    /// # Errors
    ///
    /// Returns [`ShortUidError::NonConforming`] unless byte 8 is `0x80` and bytes 9–15 are zero.
    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        if is_conforming(uuid) {
            Ok(Self(uuid))
        } else {
            Err(ShortUidError::NonConforming { uuid })
        }
    }
}

impl From<ShortUid> for Uuid {
    fn from(short: ShortUid) -> Self {
        short.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShortUid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::field::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ShortUid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::field::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &str = "kLOQaLheTs2A";
    const UUID: &str = "90b39068-b85e-4ecd-8000-000000000000";

    #[test]
    fn test_parse_valid_short_uid() {
        let short = ShortUid::parse(SHORT).unwrap();

        assert_eq!(short.uuid(), Uuid::parse_str(UUID).unwrap());
        assert_eq!(short.to_string(), SHORT);
        assert_eq!(short.to_short(), SHORT);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        let result = ShortUid::parse("nsdfv87b34wyebfvzxucyvaso8regfamwer9tvq3w74");

        match result {
            Err(ShortUidError::InvalidFormat { input }) => {
                assert_eq!(input, "nsdfv87b34wyebfvzxucyvaso8regfamwer9tvq3w74");
            }
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn test_from_str_valid() {
        let result: Result<ShortUid, _> = "9We21-KDSkeA".parse();

        assert_eq!(
            result.unwrap().uuid().to_string(),
            "f567b6d7-e283-4a47-8000-000000000000"
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<ShortUid, _> = "9We21 KDSkeA".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_try_from_conforming_uuid() {
        let uuid = Uuid::parse_str(UUID).unwrap();
        let short = ShortUid::try_from(uuid).unwrap();

        assert_eq!(short.to_string(), SHORT);
        assert_eq!(Uuid::from(short), uuid);
    }

    #[test]
    fn test_try_from_rejects_non_conforming_uuid() {
        let uuid = Uuid::parse_str("90b39068-b85e-4ecd-a716-446655440000").unwrap();

        match ShortUid::try_from(uuid) {
            Err(err @ ShortUidError::NonConforming { .. }) => {
                assert_eq!(err.input(), "90b39068-b85e-4ecd-a716-446655440000");
            }
            other => panic!("Expected NonConforming error, got {other:?}"),
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(ShortUid::is_valid(SHORT));
        assert!(!ShortUid::is_valid("kLOQaLheTs2"));
    }

    #[test]
    fn test_round_trip_display_to_parse() {
        let original = ShortUid::parse("OWLsD_4GR3CA").unwrap();
        let parsed = ShortUid::parse(&original.to_string()).unwrap();

        assert_eq!(original, parsed);
    }
}
