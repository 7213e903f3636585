//! CSV export of a single assessment.
//!
//! Output is UTF-8 with a byte-order mark (spreadsheet apps need it to
//! detect Arabic text), one header row and one data row, CRLF terminated.

use chrono::NaiveDateTime;

use crate::i18n::{display_text, Language, ToolVariant};
use crate::self_assessment::self_field;
use crate::triage::{field, AcuityLevel, AssessmentInput};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const LEVEL_HEADER: &str = "CTAS Level (Preliminary)";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV flush failed: {0}")]
    Flush(#[from] std::io::Error),
}

/// A finished export ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

type Columns = Vec<(&'static str, String)>;

/// Professional intake export.
pub fn professional_csv(
    form: &AssessmentInput,
    level: AcuityLevel,
    lang: Language,
    now: NaiveDateTime,
) -> Result<CsvExport, ExportError> {
    let raw = |key: &str| form.get_or(key, "").to_string();
    // Unsubmitted selects stay blank rather than showing the placeholder.
    let label = |key: &str| {
        form.get(key)
            .map(|v| display_text(key, v, ToolVariant::Professional, lang))
            .unwrap_or_default()
    };

    let columns: Columns = vec![
        ("Patient Name", raw("patient_name")),
        ("Age", raw(field::AGE)),
        ("Gender", label("patient_gender")),
        ("ID/MRN", raw("patient_id")),
        ("Chief Complaint", label(field::CHIEF_COMPLAINT)),
        ("Complaint Details", raw("complaint_details")),
        ("Heart Rate", raw(field::HEART_RATE)),
        ("Resp Rate", raw(field::RESP_RATE)),
        ("SpO2", raw(field::SPO2)),
        ("BP Systolic", raw(field::BP_SYSTOLIC)),
        ("BP Diastolic", raw(field::BP_DIASTOLIC)),
        ("Temperature", raw(field::TEMPERATURE)),
        ("GCS Score", raw(field::GCS)),
        ("AVPU", raw(field::AVPU)),
        ("Pain Score", raw(field::PAIN)),
        ("Respiratory Distress", label(field::RESPIRATORY_DISTRESS)),
        ("Bleeding", label(field::BLEEDING)),
        ("Mechanism of Injury", label(field::MECHANISM)),
        ("Glucose", raw(field::GLUCOSE)),
        ("Dehydration Signs", label(field::DEHYDRATION)),
        (LEVEL_HEADER, level.as_u8().to_string()),
    ];

    let name = safe_file_stem(form.get_or("patient_name", "unknown"));
    Ok(CsvExport {
        filename: format!("ctas_assessment_{name}_{}.csv", file_timestamp(now)),
        bytes: encode(&columns)?,
    })
}

/// Patient self-assessment export. Includes the assessment time.
pub fn self_assessment_csv(
    form: &AssessmentInput,
    level: AcuityLevel,
    lang: Language,
    now: NaiveDateTime,
) -> Result<CsvExport, ExportError> {
    let raw = |key: &str| form.get_or(key, "").to_string();
    let label = |key: &str| {
        display_text(key, form.get_or(key, ""), ToolVariant::SelfAssessment, lang)
    };

    let columns: Columns = vec![
        ("Age", raw(field::AGE)),
        ("Gender", label("patient_gender")),
        ("Main Symptom", label(self_field::MAIN_SYMPTOM)),
        ("Symptom Details", raw(self_field::SYMPTOM_DETAILS)),
        ("Alertness Level", label(self_field::ALERTNESS)),
        ("Breathing Difficulty", label(self_field::BREATHING_DIFFICULTY)),
        ("Pain Score", raw(field::PAIN)),
        ("Bleeding", label(field::BLEEDING)),
        ("Dehydration Signs", label(field::DEHYDRATION)),
        ("Fever", label(self_field::FEVERISH)),
        ("Recent Trauma", label(self_field::TRAUMA_OCCURRED)),
        ("Diabetes", label(field::HAS_DIABETES)),
        ("Blood Glucose", raw(field::GLUCOSE)),
        (LEVEL_HEADER, level.as_u8().to_string()),
        ("Assessment Date/Time", now.format("%Y-%m-%d %H:%M").to_string()),
    ];

    Ok(CsvExport {
        filename: format!("self_assessment_{}.csv", file_timestamp(now)),
        bytes: encode(&columns)?,
    })
}

fn encode(columns: &Columns) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(UTF8_BOM.to_vec());
    writer.write_record(columns.iter().map(|(header, _)| *header))?;
    writer.write_record(columns.iter().map(|(_, value)| value.as_str()))?;
    writer.into_inner().map_err(|e| ExportError::Flush(e.into_error()))
}

/// ASCII alphanumerics of `name`, lowercased. Falls back to `patient` when
/// fewer than two characters survive.
pub fn safe_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if stem.len() < 2 {
        "patient".to_string()
    } else {
        stem
    }
}

fn file_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y%m%d-%H%M%S").to_string()
}
