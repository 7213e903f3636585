//! Patient self-assessment form.
//!
//! The patient form asks plain-language questions (main symptom, alertness,
//! breathing trouble). Before classification those answers are translated
//! into the clinical fields the classifier reads, on a copy of the form.

use crate::triage::{field, AssessmentInput};

/// Self-assessment form keys.
pub mod self_field {
    pub const MAIN_SYMPTOM: &str = "main_symptom";
    pub const SYMPTOM_DETAILS: &str = "symptom_details";
    pub const ALERTNESS: &str = "alertness";
    pub const BREATHING_DIFFICULTY: &str = "breathing_difficulty";
    pub const FEVERISH: &str = "feverish";
    pub const TRAUMA_OCCURRED: &str = "trauma_occurred";
}

/// Main symptoms that map onto a professional chief complaint tag.
const SYMPTOM_COMPLAINTS: &[(&str, &str)] = &[
    ("severe_chest_pain", "chest_pain_cardiac"),
    ("active_seizure", "seizure_active"),
    ("stroke_signs", "stroke"),
    ("severe_allergic_reaction", "anaphylaxis"),
    ("poison_overdose", "overdose"),
    ("severe_pain_other", "severe_pain"),
    ("severe_abdominal_pain", "abdominal_pain_severe"),
    ("minor_injury", "minor_trauma"),
];

/// Return a copy of `form` with `respiratory_distress`, `avpu` and (when the
/// main symptom maps) `chief_complaint` filled in from the patient answers.
///
/// `respiratory_distress` and `avpu` are always overwritten. A main symptom
/// with no mapping leaves any submitted `chief_complaint` untouched.
pub fn derive_clinical_fields(form: &AssessmentInput) -> AssessmentInput {
    let main_symptom = form.get_or(self_field::MAIN_SYMPTOM, "");
    let breathing = form.get_or(self_field::BREATHING_DIFFICULTY, "none");

    let distress = match (main_symptom, breathing) {
        ("cannot_breathe" | "severe_breathing_difficulty", _) => "severe",
        ("moderate_breathing_difficulty", _) | (_, "moderate") => "moderate",
        ("mild_breathing_difficulty", _) | (_, "mild") => "mild",
        _ => "none",
    };

    let mut derived = form.clone();
    derived.insert(field::RESPIRATORY_DISTRESS, distress);
    derived.insert(field::AVPU, form.get_or(self_field::ALERTNESS, "A"));

    if let Some((_, complaint)) = SYMPTOM_COMPLAINTS.iter().find(|(s, _)| *s == main_symptom) {
        derived.insert(field::CHIEF_COMPLAINT, *complaint);
    }

    tracing::debug!(
        main_symptom,
        respiratory_distress = distress,
        "Derived clinical fields from self-assessment"
    );
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{classify, AcuityLevel};

    fn form(main_symptom: &str) -> AssessmentInput {
        AssessmentInput::new()
            .with(field::AGE, "40")
            .with(self_field::MAIN_SYMPTOM, main_symptom)
    }

    #[test]
    fn cannot_breathe_is_severe_distress() {
        let d = derive_clinical_fields(&form("cannot_breathe"));
        assert_eq!(d.get(field::RESPIRATORY_DISTRESS), Some("severe"));
        assert_eq!(classify(&d).severity_level, AcuityLevel::Resuscitation);
    }

    #[test]
    fn breathing_answer_sets_distress_when_symptom_does_not() {
        let d = derive_clinical_fields(
            &form("moderate_pain").with(self_field::BREATHING_DIFFICULTY, "mild"),
        );
        assert_eq!(d.get(field::RESPIRATORY_DISTRESS), Some("mild"));

        let d = derive_clinical_fields(
            &form("moderate_pain").with(self_field::BREATHING_DIFFICULTY, "moderate"),
        );
        assert_eq!(d.get(field::RESPIRATORY_DISTRESS), Some("moderate"));
    }

    #[test]
    fn severe_breathing_answer_alone_is_not_escalated() {
        let d = derive_clinical_fields(
            &form("other").with(self_field::BREATHING_DIFFICULTY, "severe"),
        );
        assert_eq!(d.get(field::RESPIRATORY_DISTRESS), Some("none"));
    }

    #[test]
    fn symptom_outranks_breathing_answer() {
        let d = derive_clinical_fields(
            &form("severe_breathing_difficulty").with(self_field::BREATHING_DIFFICULTY, "mild"),
        );
        assert_eq!(d.get(field::RESPIRATORY_DISTRESS), Some("severe"));
    }

    #[test]
    fn alertness_becomes_avpu() {
        let d = derive_clinical_fields(&form("other").with(self_field::ALERTNESS, "U"));
        assert_eq!(d.get(field::AVPU), Some("U"));
        assert_eq!(classify(&d).severity_level, AcuityLevel::Resuscitation);

        let d = derive_clinical_fields(&form("other"));
        assert_eq!(d.get(field::AVPU), Some("A"));
    }

    #[test]
    fn mapped_symptoms_set_chief_complaint() {
        let d = derive_clinical_fields(&form("stroke_signs"));
        assert_eq!(d.get(field::CHIEF_COMPLAINT), Some("stroke"));
        assert_eq!(classify(&d).severity_level, AcuityLevel::Emergent);

        let d = derive_clinical_fields(&form("minor_injury"));
        assert_eq!(d.get(field::CHIEF_COMPLAINT), Some("minor_trauma"));
        assert_eq!(classify(&d).severity_level, AcuityLevel::LessUrgent);
    }

    #[test]
    fn unmapped_symptom_keeps_submitted_complaint() {
        let d = derive_clinical_fields(
            &form("severe_headache").with(field::CHIEF_COMPLAINT, "sepsis"),
        );
        assert_eq!(d.get(field::CHIEF_COMPLAINT), Some("sepsis"));
    }

    #[test]
    fn original_form_is_not_modified() {
        let original = form("severe_chest_pain");
        let _ = derive_clinical_fields(&original);
        assert_eq!(original.get(field::CHIEF_COMPLAINT), None);
        assert_eq!(original.get(field::AVPU), None);
    }
}
