//! Tiered acuity cascade.
//!
//! Order matters and is fixed:
//! 1. Regional heat illness override (levels 1-2, immediate return)
//! 2. Resuscitation (level 1, immediate return)
//! 3. Emergent (level 2, immediate return)
//! 4. Urgent and less-urgent flags (fall through, urgent wins)
//! 5. Frailty modifier on the fallen-through level
//!
//! Tiers 1-3 return as soon as they match. Tiers 3 and 4 of the scale only
//! set a working level so the frailty modifier sees the unmodified result.

use serde::Serialize;

use super::age_band::AgeBand;
use super::input::ClinicalFindings;
use super::level::AcuityLevel;
use crate::models::{Avpu, Bleeding, ChiefComplaint, InjuryMechanism, Severity};

/// Which rule decided the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    HeatStroke,
    HeatExhaustion,
    CriticalConsciousness,
    LifeThreatening,
    CriticalVitals,
    StrokeWindow,
    AlteredConsciousness,
    HighRiskPresentation,
    DiabeticGlucose,
    BorderlineHypoxia,
    PediatricFever,
    UrgentFindings,
    ProlongedWait,
    LessUrgentFindings,
    Frailty,
    NoFindings,
}

impl Rule {
    /// Stable identifier for logs.
    pub fn id(self) -> &'static str {
        match self {
            Self::HeatStroke => "HEAT-1",
            Self::HeatExhaustion => "HEAT-2",
            Self::CriticalConsciousness => "RESUS-LOC",
            Self::LifeThreatening => "RESUS-THREAT",
            Self::CriticalVitals => "RESUS-VITALS",
            Self::StrokeWindow => "EMERG-STROKE",
            Self::AlteredConsciousness => "EMERG-LOC",
            Self::HighRiskPresentation => "EMERG-RISK",
            Self::DiabeticGlucose => "EMERG-GLUCOSE",
            Self::BorderlineHypoxia => "EMERG-SPO2",
            Self::PediatricFever => "EMERG-PEDS-FEVER",
            Self::UrgentFindings => "URGENT",
            Self::ProlongedWait => "URGENT-WAIT",
            Self::LessUrgentFindings => "LESS-URGENT",
            Self::Frailty => "MOD-FRAILTY",
            Self::NoFindings => "DEFAULT",
        }
    }
}

/// Outcome of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub level: AcuityLevel,
    pub rule: Rule,
    pub age_band: AgeBand,
}

/// Stroke presentations inside this many hours of onset are emergent.
const STROKE_WINDOW_HOURS: f64 = 4.5;
/// Waiting longer than this upgrades the patient to urgent.
const MAX_WAIT_MINUTES: i64 = 120;

/// Run the cascade over typed findings. Never fails.
pub fn evaluate(findings: &ClinicalFindings) -> Decision {
    let age_band = AgeBand::resolve(findings.age_years);
    let (level, rule) = cascade(findings, age_band);

    tracing::debug!(
        level = level.as_u8(),
        rule_id = rule.id(),
        age_band = age_band.as_str(),
        "Acuity level assigned"
    );

    Decision {
        level,
        rule,
        age_band,
    }
}

fn cascade(f: &ClinicalFindings, band: AgeBand) -> (AcuityLevel, Rule) {
    if let Some(hit) = heat_illness(f) {
        return hit;
    }
    if let Some(rule) = resuscitation(f, band) {
        return (AcuityLevel::Resuscitation, rule);
    }
    if let Some(rule) = emergent(f) {
        return (AcuityLevel::Emergent, rule);
    }

    let (mut level, mut rule) = (AcuityLevel::NonUrgent, Rule::NoFindings);

    if let Some(urgent_rule) = urgent(f) {
        level = AcuityLevel::Urgent;
        rule = urgent_rule;
    }
    if less_urgent(f) && level == AcuityLevel::NonUrgent {
        level = AcuityLevel::LessUrgent;
        rule = Rule::LessUrgentFindings;
    }
    if f.frail && matches!(level, AcuityLevel::LessUrgent | AcuityLevel::NonUrgent) {
        level = AcuityLevel::Urgent;
        rule = Rule::Frailty;
    }

    (level, rule)
}

fn heat_illness(f: &ClinicalFindings) -> Option<(AcuityLevel, Rule)> {
    if !f.heat_exposure {
        return None;
    }
    let temp = f.temperature?;
    if temp >= 40.0 {
        Some((AcuityLevel::Resuscitation, Rule::HeatStroke))
    } else if temp >= 38.5 && matches!(f.dehydration, Severity::Moderate | Severity::Severe) {
        Some((AcuityLevel::Emergent, Rule::HeatExhaustion))
    } else {
        None
    }
}

fn resuscitation(f: &ClinicalFindings, band: AgeBand) -> Option<Rule> {
    // GCS wins over AVPU whenever it was recorded.
    let critical_loc = match f.gcs {
        Some(gcs) => gcs < 9,
        None => matches!(f.avpu, Some(Avpu::Unresponsive | Avpu::Pain)),
    };
    if critical_loc {
        return Some(Rule::CriticalConsciousness);
    }

    let life_threatening = f.complaint.is_some_and(ChiefComplaint::is_life_threatening)
        || f.respiratory_distress == Severity::Severe
        || f.spo2.is_some_and(|s| s < 90)
        || f.bleeding == Bleeding::Severe;
    if life_threatening {
        return Some(Rule::LifeThreatening);
    }

    band.limits()
        .is_critical(f.heart_rate, f.resp_rate, f.bp_systolic)
        .then_some(Rule::CriticalVitals)
}

fn emergent(f: &ClinicalFindings) -> Option<Rule> {
    let stroke_window = f.complaint == Some(ChiefComplaint::Stroke)
        && f.symptom_onset_hours.is_some_and(|h| h < STROKE_WINDOW_HOURS);

    let altered_loc = match f.gcs {
        Some(gcs) => (9..=13).contains(&gcs),
        None => f.avpu == Some(Avpu::Verbal),
    };

    let high_risk = f.complaint.is_some_and(ChiefComplaint::is_high_risk)
        || f.respiratory_distress == Severity::Moderate
        || f.pain.is_some_and(|p| p >= 8)
        || f.dehydration == Severity::Severe
        || f.mechanism == InjuryMechanism::Significant;

    let glucose_emergency =
        f.has_diabetes && f.glucose.is_some_and(|g| g < 3.0 || g > 20.0);

    let borderline_hypoxia = f.spo2.is_some_and(|s| (90..92).contains(&s));

    // 3 to 18 months
    let pediatric_fever = f.age_years.is_some_and(|a| (0.25..=1.5).contains(&a))
        && f.temperature.is_some_and(|t| t >= 38.5);

    [
        (stroke_window, Rule::StrokeWindow),
        (altered_loc, Rule::AlteredConsciousness),
        (high_risk, Rule::HighRiskPresentation),
        (glucose_emergency, Rule::DiabeticGlucose),
        (borderline_hypoxia, Rule::BorderlineHypoxia),
        (pediatric_fever, Rule::PediatricFever),
    ]
    .into_iter()
    .find_map(|(hit, rule)| hit.then_some(rule))
}

fn urgent(f: &ClinicalFindings) -> Option<Rule> {
    let findings = f.gcs == Some(14)
        || f.respiratory_distress == Severity::Mild
        || f.pain.is_some_and(|p| (4..=7).contains(&p))
        || f.complaint == Some(ChiefComplaint::AbdominalPainSevere)
        || f.bleeding == Bleeding::Moderate
        || f.dehydration == Severity::Moderate
        || f.temperature.is_some_and(|t| t >= 39.0);
    if findings {
        return Some(Rule::UrgentFindings);
    }
    f.minutes_waiting
        .is_some_and(|m| m > MAX_WAIT_MINUTES)
        .then_some(Rule::ProlongedWait)
}

fn less_urgent(f: &ClinicalFindings) -> bool {
    f.complaint.is_some_and(ChiefComplaint::is_less_urgent)
        || f.pain.is_some_and(|p| (2..=3).contains(&p))
        || f.bleeding == Bleeding::Minor
        || f.dehydration == Severity::Mild
        || f.temperature.is_some_and(|t| t >= 38.0)
}
