//! URL-path adapter for short UIDs.
//!
//! axum routes cannot carry a character-class constraint on a path parameter, so the structural
//! check runs in the extractor instead: a segment that is not a short UID is answered as if no
//! route had matched (`404`), exactly like a pattern-constrained route would be.

use api_shared::ErrorRes;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
};
use shortuid::{ShortCodec, ShortUidCodec, ShortUidResult, Uuid};
use std::{fmt, sync::Arc};

/// Route prefix under which short UIDs are resolved.
pub const UUIDS_PREFIX: &str = "/uuids";

/// Converts between URL path segments and UUIDs through a [`ShortCodec`].
#[derive(Clone)]
pub struct ShortUidConverter {
    codec: Arc<dyn ShortCodec>,
}

impl ShortUidConverter {
    pub fn new(codec: impl ShortCodec + 'static) -> Self {
        Self {
            codec: Arc::new(codec),
        }
    }

    /// Returns true if `segment` should be routed to a short UID handler.
    pub fn accepts(&self, segment: &str) -> bool {
        self.codec.validate(segment)
    }

    /// Decodes a path segment.
    pub fn to_uuid(&self, segment: &str) -> ShortUidResult<Uuid> {
        self.codec.decode(segment)
    }

    /// Encodes a UUID as a path segment.
    pub fn to_url(&self, uuid: Uuid) -> String {
        self.codec.encode(uuid)
    }

    /// Reverses a UUID into the full path that resolves it.
    pub fn path_for(&self, uuid: Uuid) -> String {
        format!("{}/{}", UUIDS_PREFIX, self.to_url(uuid))
    }
}

impl Default for ShortUidConverter {
    fn default() -> Self {
        Self::new(ShortUidCodec)
    }
}

impl fmt::Debug for ShortUidConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortUidConverter").finish_non_exhaustive()
    }
}

/// Extracts the single path parameter as a decoded short UID.
///
/// The converter is taken from the router state via [`FromRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortUidPath(pub Uuid);

#[derive(Debug)]
pub enum ShortUidPathRejection {
    /// The segment is not a short UID; treated as an unmatched route.
    NoMatch,
    /// The segment looked like a short UID but did not decode.
    Undecodable(String),
    Path(axum::extract::rejection::PathRejection),
}

impl IntoResponse for ShortUidPathRejection {
    fn into_response(self) -> Response {
        match self {
            Self::NoMatch => (
                StatusCode::NOT_FOUND,
                Json(ErrorRes {
                    error: "Not found".into(),
                }),
            )
                .into_response(),
            Self::Undecodable(segment) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorRes {
                    error: format!("Invalid short UID: '{}'", segment),
                }),
            )
                .into_response(),
            Self::Path(rejection) => rejection.into_response(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ShortUidPath
where
    ShortUidConverter: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ShortUidPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(ShortUidPathRejection::Path)?;

        let converter = ShortUidConverter::from_ref(state);
        if !converter.accepts(&segment) {
            tracing::debug!(%segment, "path segment is not a short UID");
            return Err(ShortUidPathRejection::NoMatch);
        }

        match converter.to_uuid(&segment) {
            Ok(uuid) => Ok(Self(uuid)),
            Err(e) => {
                tracing::debug!(error = %e, "short UID segment failed to decode");
                Err(ShortUidPathRejection::Undecodable(segment))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_to_uuid() {
        let converter = ShortUidConverter::default();
        let cases = [
            ("rne6yjDWT5uA", "ae77baca-30d6-4f9b-8000-000000000000"),
            ("7-G_5mpFQAKA", "efe1bfe6-6a45-4002-8000-000000000000"),
            ("wfACxLnSTHGA", "c1f002c4-b9d2-4c71-8000-000000000000"),
            ("IcyCZGO5T8eA", "21cc8264-63b9-4fc7-8000-000000000000"),
            ("XEHJuizCR7-A", "5c41c9ba-2cc2-47bf-8000-000000000000"),
            ("cMu1sRKDQsKA", "70cbb5b1-1283-42c2-8000-000000000000"),
        ];

        for (segment, uuid) in cases {
            assert_eq!(
                converter.to_uuid(segment).unwrap(),
                Uuid::parse_str(uuid).unwrap()
            );
        }
    }

    #[test]
    fn test_converter_to_url() {
        let converter = ShortUidConverter::default();
        let cases = [
            ("90b39068-b85e-4ecd-8000-000000000000", "kLOQaLheTs2A"),
            ("f567b6d7-e283-4a47-8000-000000000000", "9We21-KDSkeA"),
            ("047c7259-d787-4859-8000-000000000000", "BHxyWdeHSFmA"),
            ("3962ec0f-fe06-4770-8000-000000000000", "OWLsD_4GR3CA"),
            ("d0c54a41-b56f-4f74-8000-000000000000", "0MVKQbVvT3SA"),
            ("39fe9fef-58ea-41a9-8000-000000000000", "Of6f71jqQamA"),
        ];

        for (uuid, segment) in cases {
            assert_eq!(converter.to_url(Uuid::parse_str(uuid).unwrap()), segment);
        }
    }

    #[test]
    fn test_converter_accepts() {
        let converter = ShortUidConverter::default();

        assert!(converter.accepts("hg56ivkhm-_X"));
        assert!(converter.accepts("____________"));
        assert!(converter.accepts("------------"));
        assert!(!converter.accepts("ad adaf"));
        assert!(!converter.accepts("9hervo3&*abc"));
        assert!(!converter.accepts("89fwkfnd=abc"));
    }

    #[test]
    fn test_path_for() {
        let converter = ShortUidConverter::default();
        let uuid = Uuid::parse_str("90b39068-b85e-4ecd-8000-000000000000").unwrap();

        assert_eq!(converter.path_for(uuid), "/uuids/kLOQaLheTs2A");
    }
}
