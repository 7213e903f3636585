//! Bilingual (Arabic / English) display text.
//!
//! Everything here is static and read-only.

mod labels;

use serde::{Deserialize, Serialize};

use crate::triage::AcuityLevel;

pub use labels::display_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Exact code lookup (`ar` or `en`).
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which front-end a label table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolVariant {
    Professional,
    SelfAssessment,
}

/// Expected wait for a level, e.g. `≤ 30 minutes`.
pub fn wait_time_estimate(level: AcuityLevel, lang: Language) -> &'static str {
    match (level, lang) {
        (AcuityLevel::Resuscitation, Language::Ar) => "فوري",
        (AcuityLevel::Emergent, Language::Ar) => "≤ 15 دقيقة",
        (AcuityLevel::Urgent, Language::Ar) => "≤ 30 دقيقة",
        (AcuityLevel::LessUrgent, Language::Ar) => "≤ 60 دقيقة",
        (AcuityLevel::NonUrgent, Language::Ar) => "≤ 120 دقيقة",
        (AcuityLevel::Resuscitation, Language::En) => "Immediate",
        (AcuityLevel::Emergent, Language::En) => "≤ 15 minutes",
        (AcuityLevel::Urgent, Language::En) => "≤ 30 minutes",
        (AcuityLevel::LessUrgent, Language::En) => "≤ 60 minutes",
        (AcuityLevel::NonUrgent, Language::En) => "≤ 120 minutes",
    }
}

/// Visual weight of a recommendation, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Critical,
    Warning,
    Caution,
    Info,
    Calm,
}

/// Guidance shown to the patient after a self-assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub level: AcuityLevel,
    pub title: String,
    pub message: &'static str,
    pub action: &'static str,
    pub tone: Tone,
}

pub fn recommendation(level: AcuityLevel, lang: Language) -> Recommendation {
    let (name, message, action, tone) = match (level, lang) {
        (AcuityLevel::Resuscitation, Language::Ar) => (
            "حالة طارئة",
            "هذه الأعراض تشير إلى حالة طبية طارئة تتطلب رعاية فورية.",
            "يجب تقييم المريض فوراً من قبل الطبيب - أولوية قصوى",
            Tone::Critical,
        ),
        (AcuityLevel::Emergent, Language::Ar) => (
            "حالة عاجلة",
            "هذه الأعراض تشير إلى حالة طبية عاجلة تتطلب تقييم سريع.",
            "يجب رؤية الطبيب خلال 15 دقيقة",
            Tone::Warning,
        ),
        (AcuityLevel::Urgent, Language::Ar) => (
            "حالة مستعجلة",
            "هذه الأعراض تشير إلى حالة تتطلب تقييم طبي خلال 30 دقيقة.",
            "يرجى الانتظار في منطقة الانتظار - ستتم رؤية المريض قريباً",
            Tone::Caution,
        ),
        (AcuityLevel::LessUrgent, Language::Ar) => (
            "أقل استعجالاً",
            "هذه الأعراض تشير إلى حالة تتطلب تقييم طبي خلال 60 دقيقة.",
            "يرجى الانتظار - الوقت المتوقع للانتظار أقل من ساعة",
            Tone::Info,
        ),
        (AcuityLevel::NonUrgent, Language::Ar) => (
            "غير عاجل",
            "هذه الأعراض لا تشير إلى حالة طارئة في الوقت الحالي.",
            "يرجى الانتظار - الوقت المتوقع للانتظار أقل من ساعتين",
            Tone::Calm,
        ),
        (AcuityLevel::Resuscitation, Language::En) => (
            "Resuscitation",
            "These symptoms indicate a medical emergency requiring immediate care.",
            "Patient requires immediate physician assessment - highest priority",
            Tone::Critical,
        ),
        (AcuityLevel::Emergent, Language::En) => (
            "Emergent",
            "These symptoms indicate an urgent medical condition requiring prompt care.",
            "Patient should be seen by physician within 15 minutes",
            Tone::Warning,
        ),
        (AcuityLevel::Urgent, Language::En) => (
            "Urgent",
            "These symptoms indicate a condition requiring medical assessment within 30 minutes.",
            "Please wait in waiting area - patient will be seen soon",
            Tone::Caution,
        ),
        (AcuityLevel::LessUrgent, Language::En) => (
            "Less Urgent",
            "These symptoms indicate a condition requiring medical assessment within 60 minutes.",
            "Please wait - expected wait time less than one hour",
            Tone::Info,
        ),
        (AcuityLevel::NonUrgent, Language::En) => (
            "Non-Urgent",
            "These symptoms do not indicate an emergency at this time.",
            "Please wait - expected wait time less than two hours",
            Tone::Calm,
        ),
    };

    Recommendation {
        level,
        title: format!("CTAS {} - {name}", level.roman()),
        message,
        action,
        tone,
    }
}

/// Error categories that carry a localized headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    MissingData,
    InvalidData,
    CalculationFailed,
    UnsupportedLanguage,
    Unexpected,
}

pub fn error_message(kind: ErrorMessage, lang: Language) -> &'static str {
    match (kind, lang) {
        (ErrorMessage::MissingData, Language::Ar) => "بيانات مطلوبة مفقودة",
        (ErrorMessage::MissingData, Language::En) => "Required data missing",
        (ErrorMessage::InvalidData, Language::Ar) => "خطأ في التحقق من البيانات",
        (ErrorMessage::InvalidData, Language::En) => "Data validation error",
        (ErrorMessage::CalculationFailed, Language::Ar) => "خطأ في حساب مستوى الفرز",
        (ErrorMessage::CalculationFailed, Language::En) => "Triage calculation error",
        (ErrorMessage::UnsupportedLanguage, Language::Ar) => "لغة غير مدعومة",
        (ErrorMessage::UnsupportedLanguage, Language::En) => "Unsupported language",
        (ErrorMessage::Unexpected, Language::Ar) => "حدث خطأ غير متوقع",
        (ErrorMessage::Unexpected, Language::En) => "An unexpected error occurred",
    }
}
