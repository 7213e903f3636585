//! API endpoint handlers.
//!
//! Each module corresponds to one front-end feature. Handlers share the
//! guarded classification step below.

pub mod assessment;
pub mod health;
pub mod language;
pub mod self_assessment;

use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::extract::rejection::FormRejection;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Form;

use crate::api::error::ApiError;
use crate::export::CsvExport;
use crate::i18n::Language;
use crate::triage::{classify_with_decision, AssessmentInput, AssessmentResult, RangeWarning};

/// Unwrap a form body, reporting a malformed one in the caller's language.
pub(crate) fn form_body(
    form: Result<Form<AssessmentInput>, FormRejection>,
    lang: Language,
) -> Result<AssessmentInput, ApiError> {
    form.map(|Form(input)| input)
        .map_err(|rejection| ApiError::BadRequest {
            detail: rejection.body_text(),
            lang,
        })
}

/// Classify with any panic converted into `CALCULATION_FAILED`.
pub(crate) fn classify_guarded(
    input: &AssessmentInput,
    lang: Language,
) -> Result<AssessmentResult, ApiError> {
    let (result, decision) = catch_unwind(AssertUnwindSafe(|| classify_with_decision(input)))
        .map_err(|payload| ApiError::Calculation {
            detail: panic_message(payload.as_ref()),
            lang,
        })?;

    tracing::info!(
        level = result.severity_level.as_u8(),
        rule_id = decision.rule.id(),
        "Assessment classified"
    );
    Ok(result)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "classifier panicked".to_string()
    }
}

pub(crate) fn log_range_warnings(warnings: &[RangeWarning]) {
    for w in warnings {
        tracing::warn!(
            field = w.field,
            value = w.value,
            range = %w.range,
            "Value outside plausible range"
        );
    }
}

/// Attachment response for a CSV export.
pub(crate) fn csv_response(export: CsvExport) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    (
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        export.bytes,
    )
        .into_response()
}
