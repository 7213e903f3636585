//! Patient self-assessment tool: classification summary and CSV export.

use axum::extract::rejection::FormRejection;
use axum::response::Response;
use axum::{Extension, Form, Json};
use serde::Serialize;

use super::{classify_guarded, csv_response, form_body, log_range_warnings};
use crate::api::error::ApiError;
use crate::api::types::RequestSession;
use crate::export;
use crate::i18n::{display_text, recommendation, Language, Recommendation, ToolVariant};
use crate::self_assessment::{derive_clinical_fields, self_field};
use crate::triage::{field, validate_ranges, AcuityLevel, AssessmentInput, RangeWarning};

#[derive(Debug, Serialize)]
pub struct SelfAssessmentSummary {
    pub age: String,
    pub gender: Option<String>,
    pub main_symptom: String,
    pub symptom_details: String,
    pub alertness: String,
    pub breathing: String,
    pub pain: String,
    pub bleeding: String,
    pub dehydration: String,
    pub feverish: String,
    pub trauma: String,
    pub diabetes: String,
    pub glucose: String,
    pub level: AcuityLevel,
    pub reassessment_interval: u32,
    pub recommendation: Recommendation,
    pub lang: Language,
    pub validation_warnings: Vec<RangeWarning>,
}

/// `POST /calculate_self_assessment`
pub async fn calculate(
    Extension(session): Extension<RequestSession>,
    form: Result<Form<AssessmentInput>, FormRejection>,
) -> Result<Json<SelfAssessmentSummary>, ApiError> {
    let lang = session.language;
    let input = form_body(form, lang)?;

    if input.non_empty(field::AGE).is_none() {
        return Err(ApiError::missing_age(lang));
    }
    if input.non_empty(self_field::MAIN_SYMPTOM).is_none() {
        return Err(ApiError::missing_symptom(lang));
    }

    let warnings = validate_ranges(&input);
    log_range_warnings(&warnings);

    let derived = derive_clinical_fields(&input);
    let result = classify_guarded(&derived, lang)?;

    let label = |key: &str| {
        display_text(key, input.get_or(key, ""), ToolVariant::SelfAssessment, lang)
    };

    Ok(Json(SelfAssessmentSummary {
        age: input.get_or(field::AGE, "N/A").to_string(),
        gender: input
            .get("patient_gender")
            .map(|v| display_text("patient_gender", v, ToolVariant::SelfAssessment, lang)),
        main_symptom: label(self_field::MAIN_SYMPTOM),
        symptom_details: input.get_or(self_field::SYMPTOM_DETAILS, "N/A").to_string(),
        alertness: label(self_field::ALERTNESS),
        breathing: label(self_field::BREATHING_DIFFICULTY),
        pain: input.get_or(field::PAIN, "0").to_string(),
        bleeding: label(field::BLEEDING),
        dehydration: label(field::DEHYDRATION),
        feverish: label(self_field::FEVERISH),
        trauma: label(self_field::TRAUMA_OCCURRED),
        diabetes: label(field::HAS_DIABETES),
        glucose: input.get_or(field::GLUCOSE, "N/A").to_string(),
        level: result.severity_level,
        reassessment_interval: result.reassessment_minutes,
        recommendation: recommendation(result.severity_level, lang),
        lang,
        validation_warnings: warnings,
    }))
}

/// `POST /download_self_assessment_csv`
pub async fn download_csv(
    Extension(session): Extension<RequestSession>,
    form: Result<Form<AssessmentInput>, FormRejection>,
) -> Result<Response, ApiError> {
    let lang = session.language;
    let input = form_body(form, lang)?;
    let result = classify_guarded(&derive_clinical_fields(&input), lang)?;

    let now = chrono::Local::now().naive_local();
    let export = export::self_assessment_csv(&input, result.severity_level, lang, now).map_err(
        |e| ApiError::Internal {
            detail: e.to_string(),
            lang,
        },
    )?;

    tracing::info!(filename = %export.filename, "Self-assessment CSV exported");
    Ok(csv_response(export))
}
