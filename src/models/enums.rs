use serde::{Deserialize, Serialize};

use super::UnknownTag;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Exact-tag lookup. Unknown or differently-cased tags yield `None`.
            pub fn from_tag(s: &str) -> Option<Self> {
                match s {
                    $($s => Some(Self::$variant)),+,
                    _ => None,
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_tag(s).ok_or_else(|| UnknownTag {
                    field: stringify!($name),
                    value: s.into(),
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Graded severity used by `respiratory_distress` and `dehydration`.
    Severity {
        None => "none",
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
    }
);

str_enum!(
    /// Bleeding grades. The intake form uses `minor` where other fields use `mild`.
    Bleeding {
        None => "none",
        Minor => "minor",
        Moderate => "moderate",
        Severe => "severe",
    }
);

str_enum!(InjuryMechanism {
    None => "none",
    Minor => "minor",
    Significant => "significant",
    Other => "other",
});

str_enum!(
    /// Alert / Verbal / Pain / Unresponsive.
    Avpu {
        Alert => "A",
        Verbal => "V",
        Pain => "P",
        Unresponsive => "U",
    }
);

str_enum!(
    /// Chief complaint tags offered by the professional intake form.
    ChiefComplaint {
        CardiacArrest => "cardiac_arrest",
        RespArrest => "resp_arrest",
        MajorTrauma => "major_trauma",
        ChestPainCardiac => "chest_pain_cardiac",
        RespDistressSevere => "resp_distress_severe",
        Shock => "shock",
        LocDecreased => "loc_decreased",
        SeizureActive => "seizure_active",
        Stroke => "stroke",
        Anaphylaxis => "anaphylaxis",
        Overdose => "overdose",
        Sepsis => "sepsis",
        SeverePain => "severe_pain",
        RespDistressModerate => "resp_distress_moderate",
        AbdominalPainSevere => "abdominal_pain_severe",
        HeadInjuryModerate => "head_injury_moderate",
        VaginalBleedingHeavy => "vaginal_bleeding_heavy",
        FeverInfant => "fever_infant",
        PsychSevere => "psych_severe",
        MinorTrauma => "minor_trauma",
        MildPain => "mild_pain",
        VomitingDiarrheaMild => "vomiting_diarrhea_mild",
        Rash => "rash",
        Other => "other",
    }
);

// Unsubmitted or unrecognised grades read as "none".
impl Default for Severity {
    fn default() -> Self {
        Self::None
    }
}

impl Default for Bleeding {
    fn default() -> Self {
        Self::None
    }
}

impl Default for InjuryMechanism {
    fn default() -> Self {
        Self::None
    }
}

impl ChiefComplaint {
    /// Presentations that are resuscitation-level on their own.
    pub fn is_life_threatening(self) -> bool {
        matches!(
            self,
            Self::CardiacArrest
                | Self::RespArrest
                | Self::Shock
                | Self::MajorTrauma
                | Self::Anaphylaxis
                | Self::SeizureActive
        )
    }

    /// Presentations that are emergent regardless of vitals.
    pub fn is_high_risk(self) -> bool {
        matches!(
            self,
            Self::ChestPainCardiac
                | Self::Stroke
                | Self::Sepsis
                | Self::Overdose
                | Self::SeverePain
                | Self::HeadInjuryModerate
                | Self::VaginalBleedingHeavy
                | Self::FeverInfant
                | Self::PsychSevere
        )
    }

    /// Presentations that are at least less-urgent.
    pub fn is_less_urgent(self) -> bool {
        matches!(self, Self::MinorTrauma | Self::VomitingDiarrheaMild)
    }
}
