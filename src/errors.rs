use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    response::{IntoResponse, Response},
    Json,
};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::{compressor::CompressionError, converter::ConverterError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad Request, code 400
    #[error("Missing field '{0}'")]
    MissingField(&'static str),

    /// Bad Request, code 400
    #[error("Invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// Bad Request, code 400
    #[error("Unsupported output format '{0}'")]
    UnsupportedFormat(String),

    /// Bad Request, code 400
    #[error("Malformed JSON body: {}", .0.body_text())]
    Json(#[from] JsonRejection),

    /// Status taken from the multipart error: 413 for an upload over the
    /// body limit, 400 otherwise
    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    /// Not Found, code 404
    #[error("No API endpoint at {0}")]
    NotFound(String),

    /// Bad Request, code 400
    #[error("Malformed base64 image: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Bad Request or Unprocessable Entity, see `into_parts`
    #[error(transparent)]
    Conversion(#[from] ConverterError),

    /// Internal Server Error, code 500
    #[error(transparent)]
    Compression(#[from] CompressionError),

    /// Internal Server Error, code 500
    #[error("Unable to render page: {0}")]
    Render(#[from] askama::Error),

    /// Internal Server Error, code 500
    #[error("Conversion worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn invalid_field(field: impl Into<String>, message: impl ToString) -> Self {
        ApiError::InvalidField {
            field: field.into(),
            message: message.to_string(),
        }
    }

    pub fn into_parts(self) -> (StatusCode, String) {
        let status = match &self {
            ApiError::MissingField(_)
            | ApiError::InvalidField { .. }
            | ApiError::UnsupportedFormat(_)
            | ApiError::Json(_)
            | ApiError::Base64(_)
            | ApiError::Conversion(ConverterError::InvalidParameter(_)) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(err) => err.status(),
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conversion(ConverterError::Image(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Compression(_) | ApiError::Render(_) | ApiError::Worker(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match self {
            ApiError::Multipart(_) if status == StatusCode::PAYLOAD_TOO_LARGE => {
                String::from("Upload is larger than the configured limit")
            }
            other => other.to_string(),
        };

        (status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.into_parts();
        if status.is_server_error() {
            error!("{}", message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
