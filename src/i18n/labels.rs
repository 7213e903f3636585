//! Option labels for the select and radio fields of both forms.
//!
//! Tables are keyed by the form key of the field (`chief_complaint`,
//! `main_symptom`, ...). The empty value maps to the placeholder option.

use super::{Language, ToolVariant};

type Table = &'static [(&'static str, &'static str)];

/// Label for `value` of `field`. Unknown fields and values come back verbatim.
pub fn display_text(field: &str, value: &str, tool: ToolVariant, lang: Language) -> String {
    table(field, tool, lang)
        .and_then(|t| t.iter().find(|(v, _)| *v == value))
        .map_or(value, |(_, label)| *label)
        .to_string()
}

fn table(field: &str, tool: ToolVariant, lang: Language) -> Option<Table> {
    use Language::{Ar, En};
    use ToolVariant::{Professional, SelfAssessment};

    let t: Table = match (tool, lang, field) {
        (_, Ar, "patient_gender") => GENDER_AR,
        (_, En, "patient_gender") => GENDER_EN,

        (Professional, Ar, "chief_complaint") => COMPLAINT_AR,
        (Professional, En, "chief_complaint") => COMPLAINT_EN,
        (Professional, Ar, "respiratory_distress") => SEVERITY_AR,
        (Professional, En, "respiratory_distress") => SEVERITY_EN,
        (Professional, Ar, "bleeding") => BLEEDING_AR,
        (Professional, En, "bleeding") => BLEEDING_EN,
        (Professional, Ar, "mechanism_injury") => MECHANISM_AR,
        (Professional, En, "mechanism_injury") => MECHANISM_EN,
        (Professional, Ar, "dehydration") => SEVERITY_AR,
        (Professional, En, "dehydration") => DEHYDRATION_EN,

        (SelfAssessment, Ar, "has_diabetes") => DIABETES_AR,
        (SelfAssessment, En, "has_diabetes") => DIABETES_EN,
        (SelfAssessment, Ar, "main_symptom") => SYMPTOM_AR,
        (SelfAssessment, En, "main_symptom") => SYMPTOM_EN,
        (SelfAssessment, Ar, "alertness") => ALERTNESS_AR,
        (SelfAssessment, En, "alertness") => ALERTNESS_EN,
        (SelfAssessment, Ar, "breathing_difficulty") => BREATHING_AR,
        (SelfAssessment, En, "breathing_difficulty") => BREATHING_EN,
        (SelfAssessment, Ar, "bleeding") => SELF_BLEEDING_AR,
        (SelfAssessment, En, "bleeding") => SELF_BLEEDING_EN,
        (SelfAssessment, Ar, "dehydration") => SELF_DEHYDRATION_AR,
        (SelfAssessment, En, "dehydration") => SELF_DEHYDRATION_EN,
        (SelfAssessment, Ar, "feverish") => FEVERISH_AR,
        (SelfAssessment, En, "feverish") => FEVERISH_EN,
        (SelfAssessment, Ar, "trauma_occurred") => TRAUMA_AR,
        (SelfAssessment, En, "trauma_occurred") => TRAUMA_EN,

        _ => return None,
    };
    Some(t)
}

// ── Shared ──────────────────────────────────────────────────

const GENDER_AR: Table = &[("male", "ذكر"), ("female", "أنثى"), ("", "اختر")];
const GENDER_EN: Table = &[("male", "Male"), ("female", "Female"), ("", "Select")];

// ── Professional tool ───────────────────────────────────────

const COMPLAINT_AR: Table = &[
    ("cardiac_arrest", "توقف القلب"),
    ("resp_arrest", "توقف التنفس"),
    ("major_trauma", "إصابة بليغة"),
    ("chest_pain_cardiac", "ألم في الصدر (يشتبه بالقلب)"),
    ("resp_distress_severe", "ضيق تنفس حاد"),
    ("shock", "صدمة"),
    ("loc_decreased", "انخفاض مستوى الوعي"),
    ("seizure_active", "تشنج نشط"),
    ("stroke", "جلطة دماغية"),
    ("anaphylaxis", "حساسية مفرطة"),
    ("overdose", "جرعة زائدة"),
    ("sepsis", "تسمم الدم"),
    ("severe_pain", "ألم شديد"),
    ("resp_distress_moderate", "ضيق تنفس متوسط"),
    ("abdominal_pain_severe", "ألم بطن شديد"),
    ("head_injury_moderate", "إصابة رأس متوسطة"),
    ("vaginal_bleeding_heavy", "نزيف مهبلي غزير"),
    ("fever_infant", "حمى (رضيع < 3 أشهر)"),
    ("psych_severe", "حالة نفسية حادة"),
    ("minor_trauma", "إصابة طفيفة"),
    ("mild_pain", "ألم خفيف"),
    ("vomiting_diarrhea_mild", "قيء/إسهال خفيف"),
    ("rash", "طفح جلدي"),
    ("other", "أخرى"),
    ("", "-- اختر الشكوى --"),
];

const COMPLAINT_EN: Table = &[
    ("cardiac_arrest", "Cardiac Arrest / VSA"),
    ("resp_arrest", "Respiratory Arrest"),
    ("major_trauma", "Major Trauma"),
    ("chest_pain_cardiac", "Chest Pain - Cardiac?"),
    ("resp_distress_severe", "Resp Distress - Severe"),
    ("shock", "Shock"),
    ("loc_decreased", "LOC Decreased"),
    ("seizure_active", "Seizure - Active"),
    ("stroke", "Stroke / CVA"),
    ("anaphylaxis", "Anaphylaxis"),
    ("overdose", "Overdose"),
    ("sepsis", "Sepsis"),
    ("severe_pain", "Severe Pain"),
    ("resp_distress_moderate", "Resp Distress - Moderate"),
    ("abdominal_pain_severe", "Abdominal Pain - Severe"),
    ("head_injury_moderate", "Head Injury - Moderate"),
    ("vaginal_bleeding_heavy", "Vaginal Bleeding - Heavy"),
    ("fever_infant", "Fever - Infant < 3mo"),
    ("psych_severe", "Psychiatric - Severe"),
    ("minor_trauma", "Minor Trauma"),
    ("mild_pain", "Mild Pain"),
    ("vomiting_diarrhea_mild", "Vomiting/Diarrhea - Mild"),
    ("rash", "Rash"),
    ("other", "Other - specify below"),
    ("", "-- Select Complaint --"),
];

const SEVERITY_AR: Table = &[
    ("none", "لا يوجد"),
    ("mild", "خفيف"),
    ("moderate", "متوسط"),
    ("severe", "شديد"),
];
const SEVERITY_EN: Table = &[
    ("none", "None"),
    ("mild", "Mild"),
    ("moderate", "Moderate"),
    ("severe", "Severe"),
];

const BLEEDING_AR: Table = &[
    ("none", "لا يوجد"),
    ("minor", "طفيف"),
    ("moderate", "متوسط / كبير يمكن السيطرة عليه"),
    ("severe", "شديد / غير مسيطر عليه"),
];
const BLEEDING_EN: Table = &[
    ("none", "None"),
    ("minor", "Minor"),
    ("moderate", "Moderate / Significant Controlled"),
    ("severe", "Severe / Uncontrolled"),
];

const MECHANISM_AR: Table = &[
    ("none", "لا يوجد/غير مطبق"),
    ("minor", "آلية بسيطة"),
    ("significant", "آلية خطرة"),
    ("other", "أخرى"),
];
const MECHANISM_EN: Table = &[
    ("none", "None/NA"),
    ("minor", "Minor Mechanism"),
    (
        "significant",
        "Significant Mechanism - e.g., high fall/speed, rollover, penetrating",
    ),
    ("other", "Other"),
];

const DEHYDRATION_EN: Table = &[
    ("none", "None"),
    ("mild", "Mild - e.g., thirsty"),
    ("moderate", "Moderate - e.g., dry mucous membranes"),
    ("severe", "Severe - e.g., poor turgor, lethargy"),
];

// ── Self-assessment tool ────────────────────────────────────

const DIABETES_AR: Table = &[("no", "لا"), ("yes", "نعم"), ("unsure", "غير متأكد")];
const DIABETES_EN: Table = &[("no", "No"), ("yes", "Yes"), ("unsure", "Unsure")];

const SYMPTOM_AR: Table = &[
    ("cannot_breathe", "لا أستطيع التنفس / غصة شديدة"),
    ("severe_chest_pain", "ألم شديد أو ضغط في الصدر"),
    ("severe_breathing_difficulty", "صعوبة شديدة في التنفس"),
    ("severe_bleeding", "نزيف حاد لا يتوقف"),
    ("not_responding", "فقدان الوعي / صعوبة شديدة في الإفاقة"),
    ("active_seizure", "نوبة تشنج مستمرة الآن"),
    (
        "stroke_signs",
        "علامات جلطة دماغية (مثل: تدلي الوجه، ضعف ذراع، صعوبة كلام)",
    ),
    ("severe_allergic_reaction", "رد فعل تحسسي شديد (تورم، صعوبة تنفس)"),
    ("confusion_severe", "تشوش ذهني حاد / ارتباك شديد"),
    ("severe_pain_other", "ألم شديد جداً (غير الصدر)"),
    ("moderate_breathing_difficulty", "صعوبة متوسطة في التنفس"),
    ("poison_overdose", "اشتباه تسمم أو جرعة زائدة"),
    ("moderate_bleeding", "نزيف متوسط (يحتاج ضغط)"),
    ("fever_very_high", "حمى شديدة جداً"),
    ("severe_headache", "صداع شديد جداً ومفاجئ"),
    ("severe_abdominal_pain", "ألم شديد في البطن"),
    ("moderate_pain", "ألم متوسط"),
    ("mild_breathing_difficulty", "صعوبة خفيفة في التنفس"),
    ("vomiting_diarrhea", "قيء أو إسهال"),
    ("fever_mild_moderate", "حمى خفيفة أو متوسطة"),
    ("minor_injury", "إصابة طفيفة"),
    ("mild_pain_symptoms", "ألم خفيف / أعراض خفيفة أخرى"),
    ("other", "شيء آخر"),
    ("", "-- اختر العرض الأهم --"),
];

const SYMPTOM_EN: Table = &[
    ("cannot_breathe", "Cannot breathe / Severe choking"),
    ("severe_chest_pain", "Severe chest pain or pressure"),
    ("severe_breathing_difficulty", "Severe difficulty breathing"),
    ("severe_bleeding", "Severe bleeding that won't stop"),
    ("not_responding", "Unconscious / Very difficult to wake up"),
    ("active_seizure", "Ongoing seizure now"),
    ("stroke_signs", "Stroke signs"),
    ("severe_allergic_reaction", "Severe allergic reaction"),
    ("confusion_severe", "Severe confusion"),
    ("severe_pain_other", "Very severe pain - non-chest"),
    ("moderate_breathing_difficulty", "Moderate difficulty breathing"),
    ("poison_overdose", "Suspected poisoning or overdose"),
    ("moderate_bleeding", "Moderate bleeding - needs pressure"),
    ("fever_very_high", "Very high fever"),
    ("severe_headache", "Very severe, sudden headache"),
    ("severe_abdominal_pain", "Severe abdominal pain"),
    ("moderate_pain", "Moderate pain"),
    ("mild_breathing_difficulty", "Mild difficulty breathing"),
    ("vomiting_diarrhea", "Vomiting or diarrhea"),
    ("fever_mild_moderate", "Mild or moderate fever"),
    ("minor_injury", "Minor injury"),
    ("mild_pain_symptoms", "Mild pain / Other mild symptoms"),
    ("other", "Something else - describe below"),
    ("", "-- Select Main Symptom --"),
];

const ALERTNESS_AR: Table = &[
    ("A", "طبيعي وواعي تماماً"),
    ("V", "أشعر بالنعاس أو الارتباك قليلاً"),
    ("P", "مرتبك جداً / يصعب إيقاظي"),
    ("U", "لا أستجيب / فاقد الوعي"),
];
const ALERTNESS_EN: Table = &[
    ("A", "Fully awake and alert"),
    ("V", "Drowsy or a bit confused, but respond"),
    ("P", "Very confused / Difficult to wake up"),
    ("U", "Unresponsive / Unconscious"),
];

const BREATHING_AR: Table = &[
    ("none", "لا توجد صعوبة"),
    ("mild", "صعوبة خفيفة"),
    ("moderate", "صعوبة متوسطة"),
    ("severe", "صعوبة شديدة"),
    ("cannot_breathe", "لا أستطيع التنفس"),
];
const BREATHING_EN: Table = &[
    ("none", "No trouble"),
    ("mild", "Mild trouble"),
    ("moderate", "Moderate trouble"),
    ("severe", "Severe trouble"),
    ("cannot_breathe", "Cannot breathe at all"),
];

const SELF_BLEEDING_AR: Table = &[
    ("none", "لا يوجد"),
    ("minor", "نزيف خفيف (يتوقف بسهولة)"),
    ("moderate", "نزيف متوسط (يحتاج ضغط)"),
    ("severe", "نزيف شديد (يصعب إيقافه)"),
];
const SELF_BLEEDING_EN: Table = &[
    ("none", "None"),
    ("minor", "Minor - stops easily"),
    ("moderate", "Moderate - needs pressure"),
    ("severe", "Severe - hard to stop"),
];

const SELF_DEHYDRATION_AR: Table = &[
    ("none", "لا"),
    ("mild", "قليلاً"),
    ("moderate", "نعم، بشكل متوسط"),
    ("severe", "نعم، بشكل شديد"),
];
const SELF_DEHYDRATION_EN: Table = &[
    ("none", "No"),
    ("mild", "A little"),
    ("moderate", "Yes, moderately"),
    ("severe", "Yes, severely"),
];

const FEVERISH_AR: Table = &[
    ("no", "لا"),
    ("yes_mild_mod", "نعم، خفيفة أو متوسطة"),
    ("yes_high", "نعم، عالية"),
    ("unsure", "غير متأكد"),
];
const FEVERISH_EN: Table = &[
    ("no", "No"),
    ("yes_mild_mod", "Yes, mild/moderate"),
    ("yes_high", "Yes, high"),
    ("unsure", "Unsure"),
];

const TRAUMA_AR: Table = &[
    ("no", "لا"),
    ("yes_minor", "نعم، إصابة بسيطة"),
    ("yes_significant", "نعم، حادث أو إصابة خطيرة"),
];
const TRAUMA_EN: Table = &[
    ("no", "No"),
    ("yes_minor", "Yes, minor injury"),
    ("yes_significant", "Yes, serious accident/injury"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChiefComplaint;

    #[test]
    fn complaint_label_per_language() {
        assert_eq!(
            display_text("chief_complaint", "stroke", ToolVariant::Professional, Language::En),
            "Stroke / CVA"
        );
        assert_eq!(
            display_text("chief_complaint", "stroke", ToolVariant::Professional, Language::Ar),
            "جلطة دماغية"
        );
    }

    #[test]
    fn unknown_value_is_returned_verbatim() {
        assert_eq!(
            display_text("chief_complaint", "hiccups", ToolVariant::Professional, Language::En),
            "hiccups"
        );
        assert_eq!(
            display_text("no_such_field", "x", ToolVariant::SelfAssessment, Language::Ar),
            "x"
        );
    }

    #[test]
    fn same_field_differs_between_tools() {
        let pro = display_text("bleeding", "minor", ToolVariant::Professional, Language::En);
        let own = display_text("bleeding", "minor", ToolVariant::SelfAssessment, Language::En);
        assert_eq!(pro, "Minor");
        assert_eq!(own, "Minor - stops easily");
    }

    #[test]
    fn self_assessment_fields_are_not_in_professional_tables() {
        assert_eq!(
            display_text("main_symptom", "stroke_signs", ToolVariant::Professional, Language::En),
            "stroke_signs"
        );
    }

    #[test]
    fn empty_value_maps_to_placeholder() {
        assert_eq!(
            display_text("patient_gender", "", ToolVariant::SelfAssessment, Language::En),
            "Select"
        );
    }

    #[test]
    fn every_complaint_tag_has_labels() {
        for (tag, _) in COMPLAINT_EN.iter().filter(|(t, _)| !t.is_empty()) {
            assert!(ChiefComplaint::from_tag(tag).is_some(), "{tag}");
            assert!(COMPLAINT_AR.iter().any(|(t, _)| t == tag), "{tag}");
        }
    }
}
