//! API error types with structured, localized JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::i18n::{error_message, ErrorMessage, Language};

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
    /// Legacy `{status, message}` pair kept for the language switcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API-level errors with HTTP status mapping. Each variant carries the
/// language the caller's message is rendered in.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Required field missing: {field}")]
    MissingField {
        code: &'static str,
        field: &'static str,
        lang: Language,
    },
    #[error("Unsupported language: {requested:?}")]
    UnsupportedLanguage { requested: String, lang: Language },
    #[error("Invalid request: {detail}")]
    BadRequest { detail: String, lang: Language },
    #[error("Triage calculation failed: {detail}")]
    Calculation { detail: String, lang: Language },
    #[error("Internal error: {detail}")]
    Internal { detail: String, lang: Language },
}

impl ApiError {
    pub fn missing_age(lang: Language) -> Self {
        Self::MissingField {
            code: "MISSING_AGE",
            field: crate::triage::field::AGE,
            lang,
        }
    }

    pub fn missing_complaint(lang: Language) -> Self {
        Self::MissingField {
            code: "MISSING_COMPLAINT",
            field: crate::triage::field::CHIEF_COMPLAINT,
            lang,
        }
    }

    pub fn missing_symptom(lang: Language) -> Self {
        Self::MissingField {
            code: "MISSING_SYMPTOM",
            field: crate::self_assessment::self_field::MAIN_SYMPTOM,
            lang,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { code, .. } => code,
            Self::UnsupportedLanguage { .. } => "UNSUPPORTED_LANGUAGE",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Calculation { .. } => "CALCULATION_FAILED",
            Self::Internal { .. } => "SYSTEM_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField { .. }
            | Self::UnsupportedLanguage { .. }
            | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Calculation { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = self.status();

        let (kind, lang, details) = match &self {
            ApiError::MissingField { field, lang, .. } => {
                tracing::warn!(code, field, "Missing required data");
                (
                    ErrorMessage::MissingData,
                    *lang,
                    Some(serde_json::json!({ "field": field })),
                )
            }
            ApiError::UnsupportedLanguage { requested, lang } => {
                tracing::warn!(requested = %requested, "Unsupported language requested");
                (ErrorMessage::UnsupportedLanguage, *lang, None)
            }
            ApiError::BadRequest { detail, lang } => {
                tracing::warn!(detail = %detail, "Invalid request");
                (
                    ErrorMessage::InvalidData,
                    *lang,
                    Some(serde_json::json!({ "message": detail })),
                )
            }
            // Server-side failures hide details from the client.
            ApiError::Calculation { detail, lang } => {
                tracing::error!(detail = %detail, "Triage calculation failed");
                (ErrorMessage::CalculationFailed, *lang, None)
            }
            ApiError::Internal { detail, lang } => {
                tracing::error!(detail = %detail, "API internal error");
                (ErrorMessage::Unexpected, *lang, None)
            }
        };

        let legacy = matches!(self, ApiError::UnsupportedLanguage { .. });
        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message: error_message(kind, lang),
                details,
            },
            status: legacy.then_some("error"),
            message: legacy.then_some("Unsupported language"),
        };

        (status, Json(body)).into_response()
    }
}
