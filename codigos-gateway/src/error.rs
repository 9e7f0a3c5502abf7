//! Error types for the gateway crate.
//!
//! Every variant renders as `{"error": <category>, "message": <text>}` with the
//! status code the client contract assigns to it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codigos_core::CoreError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The create body is malformed or lacks a non-empty `data` field.
    #[error("{0}")]
    BadRequest(String),

    /// A create request did not declare JSON in both `Content-Type` and `Accept`.
    #[error("Para peticiones POST, los headers Accept y Content-Type deben ser application/json")]
    NotAcceptable,

    /// No stored record has the requested id.
    #[error("Código no encontrado")]
    CodeNotFound(String),

    /// No route matches the request path and method.
    #[error("Ruta no encontrada")]
    RouteNotFound,
}

impl GatewayError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            GatewayError::CodeNotFound(_) | GatewayError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CoreError> for GatewayError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingData => {
                GatewayError::BadRequest("El campo \"data\" es requerido".to_owned())
            }
            // Ids outside the route pattern never reach a handler in the
            // public contract, so they surface as an unmatched route.
            CoreError::InvalidCodeId { .. } => GatewayError::RouteNotFound,
            _ => GatewayError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let category = status.canonical_reason().unwrap_or("Error");
        (status, Json(json!({"error": category, "message": self.to_string()}))).into_response()
    }
}
