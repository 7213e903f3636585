//! Age bands and their resuscitation-level vital sign limits.

use serde::Serialize;

/// Pediatric and adult age bands. Boundaries are half-open in years:
/// a patient exactly on a boundary belongs to the older band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    Newborn,
    Infant,
    Toddler,
    Preschool,
    SchoolAge,
    Adolescent,
    Adult,
}

/// Inclusive safe range for heart and respiratory rate, plus an optional
/// systolic floor. Anything outside is critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalLimits {
    pub heart_rate: (i64, i64),
    pub resp_rate: (i64, i64),
    pub min_systolic: Option<i64>,
}

impl AgeBand {
    /// Resolve the band for an age in years. Unknown age is treated as adult.
    pub fn resolve(age_years: Option<f64>) -> Self {
        let Some(age) = age_years else {
            return Self::Adult;
        };
        if age < 1.0 / 12.0 {
            Self::Newborn
        } else if age < 1.0 {
            Self::Infant
        } else if age < 3.0 {
            Self::Toddler
        } else if age < 5.0 {
            Self::Preschool
        } else if age < 12.0 {
            Self::SchoolAge
        } else if age < 18.0 {
            Self::Adolescent
        } else {
            Self::Adult
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newborn => "newborn",
            Self::Infant => "infant",
            Self::Toddler => "toddler",
            Self::Preschool => "preschool",
            Self::SchoolAge => "school_age",
            Self::Adolescent => "adolescent",
            Self::Adult => "adult",
        }
    }

    pub fn limits(self) -> VitalLimits {
        let (heart_rate, resp_rate, min_systolic) = match self {
            Self::Newborn => ((120, 200), (30, 80), None),
            Self::Infant => ((100, 200), (25, 70), None),
            Self::Toddler => ((90, 180), (20, 50), None),
            Self::Preschool => ((80, 160), (20, 40), None),
            Self::SchoolAge => ((70, 140), (15, 35), None),
            Self::Adolescent => ((60, 140), (12, 30), None),
            Self::Adult => ((40, 140), (8, 35), Some(80)),
        };
        VitalLimits {
            heart_rate,
            resp_rate,
            min_systolic,
        }
    }
}

impl VitalLimits {
    /// True when any supplied vital sits outside its safe range.
    /// Absent vitals never count as critical.
    pub fn is_critical(
        &self,
        heart_rate: Option<i64>,
        resp_rate: Option<i64>,
        systolic: Option<i64>,
    ) -> bool {
        let outside = |value: Option<i64>, (lo, hi): (i64, i64)| {
            value.is_some_and(|v| v < lo || v > hi)
        };
        let hypotensive = match (systolic, self.min_systolic) {
            (Some(sys), Some(floor)) => sys < floor,
            _ => false,
        };
        outside(heart_rate, self.heart_rate) || outside(resp_rate, self.resp_rate) || hypotensive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_age_is_adult() {
        assert_eq!(AgeBand::resolve(None), AgeBand::Adult);
    }

    #[test]
    fn one_month_exactly_is_infant() {
        assert_eq!(AgeBand::resolve(Some(1.0 / 12.0)), AgeBand::Infant);
        assert_eq!(AgeBand::resolve(Some(0.05)), AgeBand::Newborn);
    }

    #[test]
    fn boundaries_are_lower_inclusive() {
        for (age, band) in [
            (0.0, AgeBand::Newborn),
            (0.5, AgeBand::Infant),
            (1.0, AgeBand::Toddler),
            (3.0, AgeBand::Preschool),
            (5.0, AgeBand::SchoolAge),
            (12.0, AgeBand::Adolescent),
            (17.99, AgeBand::Adolescent),
            (18.0, AgeBand::Adult),
            (95.0, AgeBand::Adult),
        ] {
            assert_eq!(AgeBand::resolve(Some(age)), band, "age {age}");
        }
    }

    #[test]
    fn newborn_limits_flag_tachycardia() {
        let limits = AgeBand::Newborn.limits();
        assert!(limits.is_critical(Some(210), None, None));
        assert!(!limits.is_critical(Some(200), Some(30), None));
        assert!(limits.is_critical(None, Some(20), None));
    }

    #[test]
    fn only_adults_have_a_systolic_floor() {
        assert!(AgeBand::Adult.limits().is_critical(None, None, Some(79)));
        assert!(!AgeBand::Adult.limits().is_critical(None, None, Some(80)));
        assert!(!AgeBand::SchoolAge.limits().is_critical(None, None, Some(60)));
    }

    #[test]
    fn absent_vitals_are_never_critical() {
        for band in [AgeBand::Newborn, AgeBand::Toddler, AgeBand::Adult] {
            assert!(!band.limits().is_critical(None, None, None));
        }
    }
}
