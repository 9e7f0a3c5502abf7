//! Axum route handlers for the codigos API.

use std::{num::FpCategory, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderMap, Method, StatusCode,
    },
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use codigos_core::{CodeId, Record, RecordStore};
use serde_json::{Map, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::{error::GatewayError, negotiation::require_json};

// ── Shared state ─────────────────────────────────────────────────────────────

type Store = Arc<RecordStore>;

/// The router wrapped so that `/codigos/` and `/codigos/{id}/` resolve like
/// their slash-less forms.
pub type App = NormalizePath<Router>;

// ── Request types ─────────────────────────────────────────────────────────────

/// Body accepted by `POST /codigos`, after JavaScript-style falsy fields
/// (`null`, `false`, `0`, `""`) have been collapsed to `None`.
#[derive(Debug, Default)]
pub struct CreateCodeBody {
    pub data: Option<String>,
    pub kind: Option<String>,
}

impl CreateCodeBody {
    /// Decode a create body.
    ///
    /// An empty or blank body counts as `{}`, and so does a JSON array: it
    /// has no `data` field, so the store rejects it as missing data.
    ///
    /// # Errors
    /// Returns [`GatewayError::BadRequest`] if the bytes are not JSON, if the
    /// top-level value is a scalar, or if `data` or `type` is a truthy
    /// non-string value.
    pub fn from_json(bytes: &[u8]) -> Result<Self, GatewayError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| GatewayError::BadRequest(format!("cuerpo JSON inválido: {e}")))?;
        match value {
            Value::Object(mut fields) => Ok(Self {
                data: text_field(&mut fields, "data")?,
                kind: text_field(&mut fields, "type")?,
            }),
            Value::Array(_) => Ok(Self::default()),
            other => Err(GatewayError::BadRequest(format!(
                "cuerpo JSON inválido: se esperaba un objeto, no {other}"
            ))),
        }
    }
}

fn text_field(fields: &mut Map<String, Value>, name: &str) -> Result<Option<String>, GatewayError> {
    match fields.remove(name) {
        None => Ok(None),
        Some(value) if is_falsy(&value) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(GatewayError::BadRequest(format!(
            "el campo \"{name}\" debe ser texto, no {other}"
        ))),
    }
}

/// `null`, `false`, `0` and `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given record store.
///
/// Paths and methods outside the four code operations, and `GET` ids outside
/// `[A-Za-z0-9-]+`, answer 404 "Ruta no encontrada". A trailing slash is
/// trimmed before routing.
pub fn create_router(store: Store) -> App {
    let router = Router::new()
        .route("/codigos", get(list_codes).post(create_code))
        .route("/codigos/{id}", get(get_code).delete(delete_code))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());
    NormalizePath::trim_trailing_slash(router)
}

/// Any origin; `GET`, `POST` and `DELETE`; only `Content-Type` and `Accept`.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, ACCEPT])
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /codigos`: every stored code, in insertion order.
pub async fn list_codes(State(store): State<Store>) -> Json<Vec<Record>> {
    Json(store.list())
}

/// `GET /codigos/{id}`: a single code.
///
/// # Errors
/// Returns [`GatewayError::RouteNotFound`] if `id` falls outside the id
/// pattern, or [`GatewayError::CodeNotFound`] if no record has that id.
pub async fn get_code(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Record>, GatewayError> {
    let id = CodeId::parse(id)?;
    match store.get(id.as_str()) {
        Some(record) => Ok(Json(record)),
        None => {
            debug!(id = %id, "code not found");
            Err(GatewayError::CodeNotFound(id.to_string()))
        }
    }
}

/// `POST /codigos`: store a new code and return it with `201 Created`.
///
/// Headers are checked before the body is decoded, so a request failing both
/// checks answers 406.
///
/// # Errors
/// Returns [`GatewayError::NotAcceptable`] if `Content-Type` or `Accept` does
/// not mention JSON, or [`GatewayError::BadRequest`] if the body is malformed
/// or `data` is missing or empty.
pub async fn create_code(
    State(store): State<Store>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    require_json(&headers)?;
    let body = CreateCodeBody::from_json(&body)?;
    let record = store.create(body.data.unwrap_or_default(), body.kind)?;
    info!(id = %record.id, kind = %record.kind, "code created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `DELETE /codigos/{id}`: remove a code, answering `204 No Content`.
///
/// Unlike `GET`, any path segment is looked up as-is.
///
/// # Errors
/// Returns [`GatewayError::CodeNotFound`] if no record has that id.
pub async fn delete_code(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    if !store.delete(&id) {
        return Err(GatewayError::CodeNotFound(id));
    }
    info!(id = %id, "code deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unmatched paths and methods.
pub async fn route_not_found() -> GatewayError {
    GatewayError::RouteNotFound
}
