//! Acuity classification.
//!
//! `classify` is a pure, total function from the submitted fields to an
//! acuity level and reassessment interval. Range checking is separate and
//! advisory: it is never consulted by the classifier.
//!
//! Flow: coerce fields -> resolve age band -> tiered cascade -> interval.

pub mod age_band;
pub mod coerce;
pub mod evaluator;
pub mod input;
pub mod level;
pub mod ranges;

use serde::Serialize;

pub use age_band::AgeBand;
pub use evaluator::{evaluate, Decision, Rule};
pub use input::{field, AssessmentInput, ClinicalFindings};
pub use level::AcuityLevel;
pub use ranges::{validate_ranges, RangeWarning};

/// Level plus the reassessment interval that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub severity_level: AcuityLevel,
    pub reassessment_minutes: u32,
}

impl From<AcuityLevel> for AssessmentResult {
    fn from(level: AcuityLevel) -> Self {
        Self {
            severity_level: level,
            reassessment_minutes: level.reassessment_minutes(),
        }
    }
}

/// Classify one submission.
pub fn classify(input: &AssessmentInput) -> AssessmentResult {
    classify_with_decision(input).0
}

/// Classify and also return the deciding rule.
pub fn classify_with_decision(input: &AssessmentInput) -> (AssessmentResult, Decision) {
    let findings = ClinicalFindings::from_input(input);
    let decision = evaluate(&findings);
    (AssessmentResult::from(decision.level), decision)
}
