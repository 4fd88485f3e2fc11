//! Byte-level conversion between UUIDs and short UIDs.

use crate::{ShortUidError, ShortUidResult};
use base64::{engine::general_purpose, Engine as _};
use uuid::Uuid;

/// Number of characters in a short UID.
pub const SHORT_UID_LEN: usize = 12;

/// Number of leading UUID bytes carried by a short UID.
pub const ENCODED_BYTES: usize = 9;

/// Index of the fixed marker byte in a conforming UUID.
pub const TAIL_MARKER_INDEX: usize = 8;

/// Value of the fixed marker byte in a conforming UUID.
pub const TAIL_MARKER: u8 = 0x80;

/// The URL-safe base-64 alphabet, in symbol order.
pub const SHORT_UID_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Encodes the first 9 bytes of `uuid` as a 12-character short UID.
///
/// This never fails. Bytes `9..16` are ignored, so a UUID that is not conforming (see
/// [`is_conforming`]) loses information and will not decode back to itself.
pub fn to_short(uuid: Uuid) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(&uuid.as_bytes()[..ENCODED_BYTES])
}

/// Decodes a short UID back into a UUID.
///
/// The 9 decoded bytes fill indices `0..9` and the tail is zero-filled. Byte 8 is taken as
/// decoded; it is only guaranteed to be [`TAIL_MARKER`] for strings produced by [`to_short`].
///
/// # Errors
///
/// Returns [`ShortUidError::InvalidFormat`] if `input` does not satisfy [`matches`] or does not
/// decode to exactly 9 bytes.
pub fn from_short(input: &str) -> ShortUidResult<Uuid> {
    let invalid = || ShortUidError::InvalidFormat {
        input: input.to_owned(),
    };

    if !matches(input) {
        return Err(invalid());
    }

    let decoded = general_purpose::URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| invalid())?;
    let head: [u8; ENCODED_BYTES] = decoded.as_slice().try_into().map_err(|_| invalid())?;

    let mut bytes = [0u8; 16];
    bytes[..ENCODED_BYTES].copy_from_slice(&head);
    Ok(Uuid::from_bytes(bytes))
}

/// Returns true if `input` is structurally a short UID.
///
/// This is a purely syntactic check:
/// - Exactly 12 bytes long
/// - Contains only `A-Z`, `a-z`, `0-9`, `-` and `_`
///
/// It is cheap and can be used to reject input before calling [`from_short`].
pub fn matches(input: &str) -> bool {
    input.len() == SHORT_UID_LEN
        && input
            .bytes()
            .all(|b| matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_'))
}

/// Returns true if `uuid` has the `0x80` marker at byte 8 and a zero tail.
///
/// Exactly these UUIDs survive a `to_short` / `from_short` round trip.
pub fn is_conforming(uuid: Uuid) -> bool {
    let bytes = uuid.as_bytes();
    bytes[TAIL_MARKER_INDEX] == TAIL_MARKER
        && bytes[TAIL_MARKER_INDEX + 1..].iter().all(|&b| b == 0)
}

/// The capabilities an adapter needs from a short UID codec.
pub trait ShortCodec: Send + Sync {
    /// Encodes a UUID into its short form.
    fn encode(&self, uuid: Uuid) -> String;

    /// Decodes a short form into a UUID.
    fn decode(&self, input: &str) -> ShortUidResult<Uuid>;

    /// Structural check used before decoding.
    fn validate(&self, input: &str) -> bool;
}

/// The standard short UID codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShortUidCodec;

impl ShortCodec for ShortUidCodec {
    fn encode(&self, uuid: Uuid) -> String {
        to_short(uuid)
    }

    fn decode(&self, input: &str) -> ShortUidResult<Uuid> {
        from_short(input)
    }

    fn validate(&self, input: &str) -> bool {
        matches(input)
    }
}
