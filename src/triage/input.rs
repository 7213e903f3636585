//! The flat field mapping submitted by both front-ends, and its typed view.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::coerce::{flag_field, float_field, int_field, tag_field};
use crate::models::{Avpu, Bleeding, ChiefComplaint, InjuryMechanism, Severity};

/// Form keys understood by the classifier and the range validator.
pub mod field {
    pub const AGE: &str = "patient_age";
    pub const CHIEF_COMPLAINT: &str = "chief_complaint";
    pub const HEART_RATE: &str = "heart_rate";
    pub const RESP_RATE: &str = "resp_rate";
    pub const SPO2: &str = "spo2";
    pub const BP_SYSTOLIC: &str = "bp_systolic";
    pub const BP_DIASTOLIC: &str = "bp_diastolic";
    pub const TEMPERATURE: &str = "temperature";
    pub const GLUCOSE: &str = "glucose";
    pub const GCS: &str = "gcs_score";
    pub const AVPU: &str = "avpu";
    pub const PAIN: &str = "pain_score";
    pub const RESPIRATORY_DISTRESS: &str = "respiratory_distress";
    pub const BLEEDING: &str = "bleeding";
    pub const DEHYDRATION: &str = "dehydration";
    pub const MECHANISM: &str = "mechanism_injury";
    pub const IS_FRAIL: &str = "is_frail";
    pub const SYMPTOM_ONSET: &str = "symptom_onset_time";
    pub const HEAT_EXPOSURE: &str = "heat_exposure";
    pub const HAS_DIABETES: &str = "has_diabetes";
    pub const TIME_WAITING: &str = "time_waiting";
}

/// Literal that marks `is_frail` as set.
pub const FRAIL_LITERAL: &str = "true";
/// Literal that marks `heat_exposure` and `has_diabetes` as set.
pub const YES_LITERAL: &str = "yes";

/// Raw string-keyed fields as submitted by a form.
///
/// Values are kept verbatim; nothing is validated until the classifier or
/// the range validator reads them. A key submitted more than once keeps its
/// first value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssessmentInput {
    fields: BTreeMap<String, String>,
}

impl AssessmentInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value of `key` when it is present and non-empty.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Value of `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for AssessmentInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FirstValueWins;

        impl<'de> Visitor<'de> for FirstValueWins {
            type Value = AssessmentInput;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of form fields to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fields = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    fields.entry(key).or_insert(value);
                }
                Ok(AssessmentInput { fields })
            }
        }

        deserializer.deserialize_map(FirstValueWins)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssessmentInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for AssessmentInput {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Typed findings the evaluator works on. Absent and malformed fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClinicalFindings {
    pub age_years: Option<f64>,
    pub complaint: Option<ChiefComplaint>,
    pub heart_rate: Option<i64>,
    pub resp_rate: Option<i64>,
    pub spo2: Option<i64>,
    pub bp_systolic: Option<i64>,
    pub bp_diastolic: Option<i64>,
    pub temperature: Option<f64>,
    pub glucose: Option<f64>,
    pub gcs: Option<i64>,
    pub avpu: Option<Avpu>,
    pub pain: Option<i64>,
    pub respiratory_distress: Severity,
    pub bleeding: Bleeding,
    pub dehydration: Severity,
    pub mechanism: InjuryMechanism,
    pub frail: bool,
    pub symptom_onset_hours: Option<f64>,
    pub heat_exposure: bool,
    pub has_diabetes: bool,
    pub minutes_waiting: Option<i64>,
}

impl ClinicalFindings {
    pub fn from_input(input: &AssessmentInput) -> Self {
        Self {
            age_years: float_field(input.get(field::AGE)),
            complaint: input.get(field::CHIEF_COMPLAINT).and_then(ChiefComplaint::from_tag),
            heart_rate: int_field(input.get(field::HEART_RATE)),
            resp_rate: int_field(input.get(field::RESP_RATE)),
            spo2: int_field(input.get(field::SPO2)),
            bp_systolic: int_field(input.get(field::BP_SYSTOLIC)),
            bp_diastolic: int_field(input.get(field::BP_DIASTOLIC)),
            temperature: float_field(input.get(field::TEMPERATURE)),
            glucose: float_field(input.get(field::GLUCOSE)),
            gcs: int_field(input.get(field::GCS)),
            avpu: input.get(field::AVPU).and_then(Avpu::from_tag),
            pain: int_field(input.get(field::PAIN)),
            respiratory_distress: tag_field(
                input.get(field::RESPIRATORY_DISTRESS),
                Severity::from_tag,
            ),
            bleeding: tag_field(input.get(field::BLEEDING), Bleeding::from_tag),
            dehydration: tag_field(input.get(field::DEHYDRATION), Severity::from_tag),
            mechanism: tag_field(input.get(field::MECHANISM), InjuryMechanism::from_tag),
            frail: flag_field(input.get(field::IS_FRAIL), FRAIL_LITERAL),
            symptom_onset_hours: float_field(input.get(field::SYMPTOM_ONSET)),
            heat_exposure: flag_field(input.get(field::HEAT_EXPOSURE), YES_LITERAL),
            has_diabetes: flag_field(input.get(field::HAS_DIABETES), YES_LITERAL),
            minutes_waiting: int_field(input.get(field::TIME_WAITING)),
        }
    }
}
