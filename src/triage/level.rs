//! Acuity levels and the reassessment interval attached to each.

use serde::{Deserialize, Serialize};

/// Five-level acuity scale. Level 1 is the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AcuityLevel {
    Resuscitation = 1,
    Emergent = 2,
    Urgent = 3,
    LessUrgent = 4,
    NonUrgent = 5,
}

impl AcuityLevel {
    pub const ALL: [AcuityLevel; 5] = [
        Self::Resuscitation,
        Self::Emergent,
        Self::Urgent,
        Self::LessUrgent,
        Self::NonUrgent,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Resuscitation),
            2 => Some(Self::Emergent),
            3 => Some(Self::Urgent),
            4 => Some(Self::LessUrgent),
            5 => Some(Self::NonUrgent),
            _ => None,
        }
    }

    /// Maximum minutes before the patient must be re-evaluated.
    /// Zero means continuous observation.
    pub fn reassessment_minutes(self) -> u32 {
        match self {
            Self::Resuscitation => 0,
            Self::Emergent => 15,
            Self::Urgent => 30,
            Self::LessUrgent => 60,
            Self::NonUrgent => 120,
        }
    }

    pub fn roman(self) -> &'static str {
        match self {
            Self::Resuscitation => "I",
            Self::Emergent => "II",
            Self::Urgent => "III",
            Self::LessUrgent => "IV",
            Self::NonUrgent => "V",
        }
    }
}

impl Serialize for AcuityLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for AcuityLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::from_u8(raw)
            .ok_or_else(|| serde::de::Error::custom(format!("acuity level out of range: {raw}")))
    }
}
