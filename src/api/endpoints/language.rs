//! Language switcher.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::middleware::session::set_session_cookie;
use crate::api::types::{ApiContext, RequestSession};
use crate::i18n::Language;

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SetLanguageResponse {
    pub status: &'static str,
    pub language: Language,
}

/// `POST /set_language`: store the caller's language for this session.
/// An omitted language resets to the configured default.
pub async fn set(
    State(ctx): State<ApiContext>,
    Extension(session): Extension<RequestSession>,
    body: Result<Json<SetLanguageRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest {
        detail: rejection.body_text(),
        lang: session.language,
    })?;

    let lang = match body.language {
        None => ctx.config.default_language,
        Some(code) => match Language::parse(&code) {
            Some(lang) if ctx.config.is_supported(lang) => lang,
            _ => {
                return Err(ApiError::UnsupportedLanguage {
                    requested: code,
                    lang: session.language,
                })
            }
        },
    };

    let id = session.id.unwrap_or_else(Uuid::new_v4);
    ctx.sessions
        .lock()
        .map_err(|_| ApiError::Internal {
            detail: "session store lock poisoned".into(),
            lang: session.language,
        })?
        .set(id, lang);

    tracing::info!(language = %lang, "Language preference stored");

    let mut response = Json(SetLanguageResponse {
        status: "success",
        language: lang,
    })
    .into_response();
    set_session_cookie(&mut response, id, &ctx.config);
    Ok(response)
}
