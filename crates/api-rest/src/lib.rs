//! # API REST
//!
//! REST API for the short UID codec.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - The URL-path adapter ([`path::ShortUidPath`]) for `/uuids/{short}`
//! - The serde field adapter at the JSON boundary (`POST /decode`)
//! - OpenAPI documentation
//!
//! Uses `api-shared` for request/response types.

#![warn(rust_2018_idioms)]

pub mod path;

use api_shared::{
    DecodeReq, EncodeReq, ErrorRes, FieldErrorRes, HealthRes, HealthService, ShortUidRes,
};
use axum::{
    extract::{FromRef, Path as AxumPath, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use shortuid::{is_conforming, Uuid};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub use path::{ShortUidConverter, ShortUidPath};

/// Name of the body field read by `POST /decode`.
const SHORT_UID_FIELD: &str = "short_uid";

/// Application state shared across REST API handlers.
#[derive(Clone, Debug, Default, FromRef)]
pub struct AppState {
    pub converter: ShortUidConverter,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, resolve_short_uid, reverse_uuid, decode, encode),
    components(schemas(HealthRes, ShortUidRes, DecodeReq, EncodeReq, FieldErrorRes, ErrorRes))
)]
pub struct ApiDoc;

/// Builds the REST router with the standard codec.
pub fn router() -> Router {
    router_with_state(AppState::default())
}

/// Builds the REST router around the given state.
pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/uuids/:short", get(resolve_short_uid))
        .route("/short-uids/:uuid", get(reverse_uuid))
        .route("/decode", post(decode))
        .route("/encode", post(encode))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn short_uid_res(converter: &ShortUidConverter, uuid: Uuid) -> ShortUidRes {
    ShortUidRes {
        short_uid: converter.to_url(uuid),
        uuid: uuid.hyphenated().to_string(),
        path: converter.path_for(uuid),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/uuids/{short}",
    params(("short" = String, Path, description = "12-character URL-safe short UID")),
    responses(
        (status = 200, description = "Decoded UUID", body = ShortUidRes),
        (status = 404, description = "Segment is not a short UID", body = ErrorRes)
    )
)]
/// Resolve a short UID path segment to its UUID.
///
/// Segments that are not 12 URL-safe base-64 characters never reach this handler; the
/// extractor answers them with `404 Not Found`.
#[axum::debug_handler]
async fn resolve_short_uid(
    State(state): State<AppState>,
    ShortUidPath(uuid): ShortUidPath,
) -> Json<ShortUidRes> {
    Json(short_uid_res(&state.converter, uuid))
}

#[utoipa::path(
    get,
    path = "/short-uids/{uuid}",
    params(("uuid" = String, Path, description = "Hyphenated or simple UUID")),
    responses(
        (status = 200, description = "Short UID for the UUID", body = ShortUidRes),
        (status = 400, description = "Not a UUID", body = ErrorRes),
        (status = 422, description = "UUID has no short form", body = ErrorRes)
    )
)]
/// Reverse a UUID into its short UID and URL path.
///
/// # Errors
/// Returns `400 Bad Request` if the segment is not a UUID and `422 Unprocessable Entity` if the
/// UUID does not carry the `0x80` marker and zero tail, since its short form would not decode
/// back to it.
#[axum::debug_handler]
async fn reverse_uuid(
    State(state): State<AppState>,
    AxumPath(raw): AxumPath<String>,
) -> Result<Json<ShortUidRes>, (StatusCode, Json<ErrorRes>)> {
    let uuid = match Uuid::parse_str(&raw) {
        Ok(uuid) => uuid,
        Err(e) => {
            tracing::debug!(error = %e, "invalid UUID path segment");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorRes {
                    error: format!("Invalid UUID: '{}'", raw),
                }),
            ));
        }
    };

    if !is_conforming(uuid) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorRes {
                error: format!("UUID {} is not representable as a short UID", uuid),
            }),
        ));
    }

    Ok(Json(short_uid_res(&state.converter, uuid)))
}

#[utoipa::path(
    post,
    path = "/decode",
    request_body = DecodeReq,
    responses(
        (status = 200, description = "Decoded UUID", body = ShortUidRes),
        (status = 400, description = "Field validation failed", body = FieldErrorRes),
        (status = 422, description = "Body has no `short_uid` field", body = ErrorRes)
    )
)]
/// Decode a short UID supplied in a JSON body.
///
/// The `short_uid` value is validated through the short UID field adapter, so any rejected value
/// (including non-strings) is reported as `"<input>" is not a valid short code.`. A body that
/// is not an object carrying that field is not a field error and gets an [`ErrorRes`].
#[axum::debug_handler]
async fn decode(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ShortUidRes>, Response> {
    let has_field = body
        .as_object()
        .is_some_and(|fields| fields.contains_key(SHORT_UID_FIELD));
    if !has_field {
        tracing::debug!("decode request body has no `{}` field", SHORT_UID_FIELD);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorRes {
                error: format!(
                    "Request body must be a JSON object with a '{}' field",
                    SHORT_UID_FIELD
                ),
            }),
        )
            .into_response());
    }

    match serde_json::from_value::<DecodeReq>(body) {
        Ok(req) => Ok(Json(short_uid_res(&state.converter, req.short_uid))),
        Err(e) => {
            tracing::debug!(error = %e, "decode request rejected");
            Err((
                StatusCode::BAD_REQUEST,
                Json(FieldErrorRes {
                    field: SHORT_UID_FIELD.into(),
                    message: e.to_string(),
                }),
            )
                .into_response())
        }
    }
}

#[utoipa::path(
    post,
    path = "/encode",
    request_body = EncodeReq,
    responses(
        (status = 200, description = "Short UID for the UUID", body = ShortUidRes)
    )
)]
/// Encode a UUID supplied in a JSON body.
///
/// Encoding is total: a UUID without the `0x80` marker and zero tail is still encoded from its
/// first 9 bytes.
#[axum::debug_handler]
async fn encode(State(state): State<AppState>, Json(req): Json<EncodeReq>) -> Json<ShortUidRes> {
    if !is_conforming(req.uuid) {
        tracing::warn!(uuid = %req.uuid, "encoding non-conforming UUID; tail bytes are dropped");
    }
    Json(short_uid_res(&state.converter, req.uuid))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
