//! Advisory plausibility bounds for numeric fields.
//!
//! Bounds are clinically extreme but possible. A value outside them is
//! reported back to the caller and never changes the acuity level.

use serde::Serialize;

use super::coerce::float_field;
use super::input::{field, AssessmentInput};

/// Plausibility bound for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicalRange {
    pub field: &'static str,
    pub min: i32,
    pub max: i32,
    pub unit: &'static str,
}

impl MedicalRange {
    const fn new(field: &'static str, min: i32, max: i32, unit: &'static str) -> Self {
        Self {
            field,
            min,
            max,
            unit,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        !(value < f64::from(self.min) || value > f64::from(self.max))
    }

    /// Human-readable bound, e.g. `30-220 bpm`.
    pub fn describe(&self) -> String {
        format!("{}-{} {}", self.min, self.max, self.unit)
    }
}

pub static MEDICAL_RANGES: [MedicalRange; 10] = [
    MedicalRange::new(field::AGE, 0, 120, "years"),
    MedicalRange::new(field::HEART_RATE, 30, 220, "bpm"),
    MedicalRange::new(field::RESP_RATE, 5, 60, "/min"),
    MedicalRange::new(field::SPO2, 70, 100, "%"),
    MedicalRange::new(field::BP_SYSTOLIC, 50, 250, "mmHg"),
    MedicalRange::new(field::BP_DIASTOLIC, 30, 150, "mmHg"),
    MedicalRange::new(field::TEMPERATURE, 32, 45, "\u{00b0}C"),
    MedicalRange::new(field::GCS, 3, 15, "points"),
    MedicalRange::new(field::PAIN, 0, 10, "points"),
    MedicalRange::new(field::GLUCOSE, 1, 50, "mmol/L"),
];

/// One out-of-range value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeWarning {
    pub field: &'static str,
    pub value: f64,
    pub range: String,
    pub message: String,
}

/// Check every bounded field that is present, non-empty and numeric.
/// Unparseable values are skipped, not reported.
pub fn validate_ranges(input: &AssessmentInput) -> Vec<RangeWarning> {
    MEDICAL_RANGES
        .iter()
        .filter_map(|range| {
            let value = float_field(input.non_empty(range.field))?;
            if range.contains(value) {
                return None;
            }
            Some(RangeWarning {
                field: range.field,
                value,
                range: range.describe(),
                message: format!("{} ({value:?}) outside normal range", range.field),
            })
        })
        .collect()
}
