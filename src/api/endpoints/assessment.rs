//! Professional intake tool: classification summary and CSV export.

use axum::extract::rejection::FormRejection;
use axum::response::Response;
use axum::{Extension, Form, Json};
use serde::Serialize;

use super::{classify_guarded, csv_response, form_body, log_range_warnings};
use crate::api::error::ApiError;
use crate::api::types::RequestSession;
use crate::export;
use crate::i18n::{display_text, wait_time_estimate, Language, ToolVariant};
use crate::triage::{field, validate_ranges, AcuityLevel, AssessmentInput, RangeWarning};

const NOT_AVAILABLE: &str = "N/A";

/// Summary returned to the professional tool.
#[derive(Debug, Serialize)]
pub struct AssessmentSummary {
    pub name: String,
    pub age: String,
    pub gender: Option<String>,
    pub id: String,
    pub complaint: Option<String>,
    pub complaint_details: String,
    pub vitals: String,
    pub loc: String,
    pub pain: String,
    pub resp_distress: Option<String>,
    pub bleeding: Option<String>,
    pub moi: Option<String>,
    pub glucose: String,
    pub dehydration: Option<String>,
    pub heat_exposure: String,
    pub diabetes: String,
    pub ctas_level: AcuityLevel,
    pub reassessment_interval: u32,
    pub wait_time_estimate: &'static str,
    pub lang: Language,
    pub validation_warnings: Vec<RangeWarning>,
}

/// `POST /calculate_ctas`
pub async fn calculate(
    Extension(session): Extension<RequestSession>,
    form: Result<Form<AssessmentInput>, FormRejection>,
) -> Result<Json<AssessmentSummary>, ApiError> {
    let lang = session.language;
    let input = form_body(form, lang)?;

    if input.non_empty(field::AGE).is_none() {
        return Err(ApiError::missing_age(lang));
    }
    if input.non_empty(field::CHIEF_COMPLAINT).is_none() {
        return Err(ApiError::missing_complaint(lang));
    }

    let warnings = validate_ranges(&input);
    log_range_warnings(&warnings);

    let result = classify_guarded(&input, lang)?;

    let raw = |key: &str| input.get_or(key, NOT_AVAILABLE).to_string();
    let label = |key: &str| {
        input
            .get(key)
            .map(|v| display_text(key, v, ToolVariant::Professional, lang))
    };

    Ok(Json(AssessmentSummary {
        name: raw("patient_name"),
        age: raw(field::AGE),
        gender: label("patient_gender"),
        id: raw("patient_id"),
        complaint: label(field::CHIEF_COMPLAINT),
        complaint_details: raw("complaint_details"),
        vitals: vitals_line(&input),
        loc: consciousness_line(&input),
        pain: input.get_or(field::PAIN, "0").to_string(),
        resp_distress: label(field::RESPIRATORY_DISTRESS),
        bleeding: label(field::BLEEDING),
        moi: label(field::MECHANISM),
        glucose: raw(field::GLUCOSE),
        dehydration: label(field::DEHYDRATION),
        heat_exposure: raw(field::HEAT_EXPOSURE),
        diabetes: raw(field::HAS_DIABETES),
        ctas_level: result.severity_level,
        reassessment_interval: result.reassessment_minutes,
        wait_time_estimate: wait_time_estimate(result.severity_level, lang),
        lang,
        validation_warnings: warnings,
    }))
}

/// `POST /download_csv`
pub async fn download_csv(
    Extension(session): Extension<RequestSession>,
    form: Result<Form<AssessmentInput>, FormRejection>,
) -> Result<Response, ApiError> {
    let lang = session.language;
    let input = form_body(form, lang)?;
    let result = classify_guarded(&input, lang)?;

    let now = chrono::Local::now().naive_local();
    let export = export::professional_csv(&input, result.severity_level, lang, now).map_err(
        |e| ApiError::Internal {
            detail: e.to_string(),
            lang,
        },
    )?;

    tracing::info!(filename = %export.filename, "Professional CSV exported");
    Ok(csv_response(export))
}

fn vitals_line(input: &AssessmentInput) -> String {
    let v = |key: &str| input.get_or(key, NOT_AVAILABLE);
    format!(
        "HR: {}, RR: {}, SpO2: {}%, BP: {}/{}, Temp: {}\u{00b0}C",
        v(field::HEART_RATE),
        v(field::RESP_RATE),
        v(field::SPO2),
        v(field::BP_SYSTOLIC),
        v(field::BP_DIASTOLIC),
        v(field::TEMPERATURE),
    )
}

/// GCS when recorded (with AVPU alongside if given), else AVPU, else N/A.
fn consciousness_line(input: &AssessmentInput) -> String {
    match (input.non_empty(field::GCS), input.non_empty(field::AVPU)) {
        (Some(gcs), Some(avpu)) => format!("GCS: {gcs} (AVPU: {avpu})"),
        (Some(gcs), None) => format!("GCS: {gcs}"),
        (None, Some(avpu)) => format!("AVPU: {avpu}"),
        (None, None) => NOT_AVAILABLE.to_string(),
    }
}
