//! Short UID codec.
//!
//! A short UID is a 12-character, URL-safe rendering of a UUID. It is the unpadded URL-safe
//! base-64 encoding of the first 9 bytes of a *conforming* UUID.
//!
//! ## Conforming UUID layout
//! - Bytes `0..8`: free (64 bits of identity)
//! - Byte `8`: the tail marker `0x80`
//! - Bytes `9..16`: always `0x00`
//!
//! Example:
//! `90b39068-b85e-4ecd-8000-000000000000` <-> `kLOQaLheTs2A`
//!
//! Only the first 9 bytes (72 bits) carry information, and 72 bits divide exactly into twelve
//! 6-bit base-64 symbols, so no padding is ever produced.
//!
//! ## Short UID form
//! - Length: 12
//! - Characters: `A-Z`, `a-z`, `0-9`, `-` and `_`
//!
//! This crate provides:
//! - The codec primitives ([`to_short`], [`from_short`], [`matches`]).
//! - A capability trait ([`ShortCodec`]) that adapters are written against.
//! - A value type ([`ShortUid`]) that only exists for valid short UIDs.
//! - With the `serde` feature, a field adapter ([`field`]) for structured payloads.

mod codec;
mod short_uid;

#[cfg(feature = "serde")]
pub mod field;

pub use codec::{
    from_short, is_conforming, matches, to_short, ShortCodec, ShortUidCodec, ENCODED_BYTES,
    SHORT_UID_ALPHABET, SHORT_UID_LEN, TAIL_MARKER, TAIL_MARKER_INDEX,
};
pub use short_uid::ShortUid;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Error type for short UID operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortUidError {
    /// The input is not 12 characters from the URL-safe base-64 alphabet.
    #[error("invalid short UID format: '{input}'")]
    InvalidFormat { input: String },
    /// The UUID does not carry the `0x80` marker and zero tail, so it has no short form.
    #[error("UUID {uuid} is not representable as a short UID")]
    NonConforming { uuid: Uuid },
}

impl ShortUidError {
    /// Returns the offending input as text.
    pub fn input(&self) -> String {
        match self {
            Self::InvalidFormat { input } => input.clone(),
            Self::NonConforming { uuid } => uuid.to_string(),
        }
    }
}

/// Result type for short UID operations.
pub type ShortUidResult<T> = Result<T, ShortUidError>;
