//! Request and response bodies for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A UUID together with its short UID and the URL path it routes to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShortUidRes {
    #[schema(example = "kLOQaLheTs2A")]
    pub short_uid: String,
    #[schema(example = "90b39068-b85e-4ecd-8000-000000000000")]
    pub uuid: String,
    #[schema(example = "/uuids/kLOQaLheTs2A")]
    pub path: String,
}

/// Body of `POST /decode`. `short_uid` goes through the short UID field adapter.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DecodeReq {
    #[serde(with = "shortuid::field")]
    #[schema(value_type = String, example = "kLOQaLheTs2A")]
    pub short_uid: Uuid,
}

/// Body of `POST /encode`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EncodeReq {
    #[schema(value_type = String, example = "90b39068-b85e-4ecd-8000-000000000000")]
    pub uuid: Uuid,
}

/// A field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorRes {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_req_uses_short_uid_field() {
        let req: DecodeReq =
            serde_json::from_value(json!({ "short_uid": "kLOQaLheTs2A" })).unwrap();
        assert_eq!(
            req.short_uid.to_string(),
            "90b39068-b85e-4ecd-8000-000000000000"
        );

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "short_uid": "kLOQaLheTs2A" })
        );
    }

    #[test]
    fn test_decode_req_rejects_integer() {
        let err = serde_json::from_value::<DecodeReq>(json!({ "short_uid": 2 })).unwrap_err();
        assert_eq!(err.to_string(), "\"2\" is not a valid short code.");
    }

    #[test]
    fn test_encode_req_accepts_hyphenated_uuid() {
        let req: EncodeReq =
            serde_json::from_value(json!({ "uuid": "f567b6d7-e283-4a47-8000-000000000000" }))
                .unwrap();
        assert_eq!(shortuid::to_short(req.uuid), "9We21-KDSkeA");
    }
}
