//! Blood pressure categorization and pulse status.
//!
//! Pure lookup logic: values are classified as given, never rejected.
//! Range checking happens in `validation` before anything is stored.

use serde::{Deserialize, Serialize};

/// Severity bucket for a blood pressure reading, ordered by clinical urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    CriticalHigh,
    CriticalLow,
    Low,
    HighStage2,
    HighStage1,
    Elevated,
    Normal,
}

impl Severity {
    /// Stable class name used by the presentation layer for color coding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::CriticalHigh => "critical-high",
            Severity::CriticalLow => "critical-low",
            Severity::Low => "low",
            Severity::HighStage2 => "high-stage-2",
            Severity::HighStage1 => "high-stage-1",
            Severity::Elevated => "elevated",
            Severity::Normal => "normal",
        }
    }
}

/// Classification result for a systolic/diastolic pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressureCategory {
    pub severity: Severity,
    pub label: &'static str,
}

/// Classify a blood pressure reading.
///
/// Rules are evaluated top to bottom and the first match wins, so the
/// critical bands shadow the ordinary ones. A pair that fits no band
/// (e.g. systolic in the normal range with an elevated diastolic reported
/// as low) falls through to a "Check values" prompt.
pub fn classify_pressure(systolic: i64, diastolic: i64) -> PressureCategory {
    if systolic > 180 || diastolic > 120 {
        return PressureCategory {
            severity: Severity::CriticalHigh,
            label: "CRITICALLY HIGH",
        };
    }
    if systolic < 70 || diastolic < 50 {
        return PressureCategory {
            severity: Severity::CriticalLow,
            label: "CRITICALLY LOW",
        };
    }
    if systolic < 90 || diastolic < 60 {
        return PressureCategory {
            severity: Severity::Low,
            label: "Low",
        };
    }
    if systolic >= 140 || diastolic >= 90 {
        return PressureCategory {
            severity: Severity::HighStage2,
            label: "High: Stage 2",
        };
    }
    if (130..=139).contains(&systolic) || (80..=89).contains(&diastolic) {
        return PressureCategory {
            severity: Severity::HighStage1,
            label: "High: Stage 1",
        };
    }
    if (120..=129).contains(&systolic) && diastolic < 80 {
        return PressureCategory {
            severity: Severity::Elevated,
            label: "Elevated",
        };
    }
    if (90..120).contains(&systolic) && (60..80).contains(&diastolic) {
        return PressureCategory {
            severity: Severity::Normal,
            label: "Normal",
        };
    }
    PressureCategory {
        severity: Severity::Elevated,
        label: "Check values",
    }
}

/// Status bucket for a resting pulse value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PulseStatus {
    CriticalLow,
    VeryLow,
    Low,
    CriticalHigh,
    VeryHigh,
    High,
    Normal,
}

impl PulseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PulseStatus::CriticalLow => "critical-low",
            PulseStatus::VeryLow => "very-low",
            PulseStatus::Low => "low",
            PulseStatus::CriticalHigh => "critical-high",
            PulseStatus::VeryHigh => "very-high",
            PulseStatus::High => "high",
            PulseStatus::Normal => "normal",
        }
    }

    /// User-facing status text, including the advice suffix for the
    /// buckets that warrant one.
    pub fn label(&self) -> &'static str {
        match self {
            PulseStatus::CriticalLow => "Critical-low - Seek immediate medical attention",
            PulseStatus::VeryLow => "Very Low - Consult doctor",
            PulseStatus::Low => "Low",
            PulseStatus::CriticalHigh => "Critical-high - Seek immediate medical attention",
            PulseStatus::VeryHigh => "Very High - Consult doctor",
            PulseStatus::High => "High",
            PulseStatus::Normal => "Normal",
        }
    }
}

/// Classify a pulse reading. Low bands are checked before high bands,
/// first match wins.
pub fn classify_pulse(pulse: i64) -> PulseStatus {
    if pulse < 40 {
        return PulseStatus::CriticalLow;
    }
    if pulse < 50 {
        return PulseStatus::VeryLow;
    }
    if pulse < 60 {
        return PulseStatus::Low;
    }
    if pulse > 150 {
        return PulseStatus::CriticalHigh;
    }
    if pulse > 120 {
        return PulseStatus::VeryHigh;
    }
    if pulse > 100 {
        return PulseStatus::High;
    }
    PulseStatus::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_reading() {
        let category = classify_pressure(110, 70);
        assert_eq!(category.severity, Severity::Normal);
        assert_eq!(category.label, "Normal");
    }

    #[test]
    fn low_reading() {
        let category = classify_pressure(85, 55);
        assert_eq!(category.severity, Severity::Low);
    }

    #[test]
    fn critically_low_reading() {
        let category = classify_pressure(65, 45);
        assert_eq!(category.severity, Severity::CriticalLow);
        assert_eq!(category.label, "CRITICALLY LOW");
    }

    #[test]
    fn critically_high_reading() {
        let category = classify_pressure(190, 130);
        assert_eq!(category.severity, Severity::CriticalHigh);
        assert_eq!(category.label, "CRITICALLY HIGH");
    }

    #[test]
    fn critical_high_boundary() {
        assert_eq!(classify_pressure(180, 70).severity, Severity::HighStage2);
        assert_eq!(classify_pressure(181, 70).severity, Severity::CriticalHigh);
        assert_eq!(classify_pressure(110, 120).severity, Severity::HighStage2);
        assert_eq!(classify_pressure(110, 121).severity, Severity::CriticalHigh);
    }

    #[test]
    fn critical_low_boundary() {
        assert_eq!(classify_pressure(69, 70).severity, Severity::CriticalLow);
        assert_eq!(classify_pressure(70, 70).severity, Severity::Low);
        assert_eq!(classify_pressure(110, 49).severity, Severity::CriticalLow);
        assert_eq!(classify_pressure(110, 50).severity, Severity::Low);
    }

    #[test]
    fn low_boundary() {
        assert_eq!(classify_pressure(89, 70).severity, Severity::Low);
        assert_eq!(classify_pressure(90, 70).severity, Severity::Normal);
        assert_eq!(classify_pressure(110, 59).severity, Severity::Low);
        assert_eq!(classify_pressure(110, 60).severity, Severity::Normal);
    }

    #[test]
    fn stage_two_boundary() {
        assert_eq!(classify_pressure(140, 70).severity, Severity::HighStage2);
        assert_eq!(classify_pressure(139, 70).severity, Severity::HighStage1);
        assert_eq!(classify_pressure(110, 90).severity, Severity::HighStage2);
        assert_eq!(classify_pressure(110, 89).severity, Severity::HighStage1);
    }

    #[test]
    fn stage_one_and_elevated_boundaries() {
        assert_eq!(classify_pressure(130, 70).severity, Severity::HighStage1);
        assert_eq!(classify_pressure(129, 70).severity, Severity::Elevated);
        assert_eq!(classify_pressure(120, 70).severity, Severity::Elevated);
        assert_eq!(classify_pressure(119, 70).severity, Severity::Normal);
        assert_eq!(classify_pressure(110, 80).severity, Severity::HighStage1);
        assert_eq!(classify_pressure(110, 79).severity, Severity::Normal);
    }

    #[test]
    fn mixed_pairs_take_first_match() {
        // A stage-1 diastolic dominates an otherwise elevated or normal
        // systolic.
        assert_eq!(classify_pressure(125, 85).severity, Severity::HighStage1);
        assert_eq!(classify_pressure(119, 85).severity, Severity::HighStage1);
    }

    #[test]
    fn severity_class_names() {
        assert_eq!(Severity::CriticalHigh.as_str(), "critical-high");
        assert_eq!(Severity::HighStage2.as_str(), "high-stage-2");
        assert_eq!(Severity::Normal.as_str(), "normal");
    }

    #[test]
    fn pulse_boundaries() {
        assert_eq!(classify_pulse(39), PulseStatus::CriticalLow);
        assert_eq!(classify_pulse(40), PulseStatus::VeryLow);
        assert_eq!(classify_pulse(49), PulseStatus::VeryLow);
        assert_eq!(classify_pulse(50), PulseStatus::Low);
        assert_eq!(classify_pulse(59), PulseStatus::Low);
        assert_eq!(classify_pulse(60), PulseStatus::Normal);
        assert_eq!(classify_pulse(100), PulseStatus::Normal);
        assert_eq!(classify_pulse(101), PulseStatus::High);
        assert_eq!(classify_pulse(120), PulseStatus::High);
        assert_eq!(classify_pulse(121), PulseStatus::VeryHigh);
        assert_eq!(classify_pulse(150), PulseStatus::VeryHigh);
        assert_eq!(classify_pulse(151), PulseStatus::CriticalHigh);
    }

    #[test]
    fn pulse_labels() {
        assert_eq!(
            classify_pulse(35).label(),
            "Critical-low - Seek immediate medical attention"
        );
        assert_eq!(classify_pulse(45).label(), "Very Low - Consult doctor");
        assert_eq!(classify_pulse(55).label(), "Low");
        assert_eq!(classify_pulse(80).label(), "Normal");
        assert_eq!(classify_pulse(110).label(), "High");
        assert_eq!(classify_pulse(130).label(), "Very High - Consult doctor");
        assert_eq!(
            classify_pulse(160).label(),
            "Critical-high - Seek immediate medical attention"
        );
    }
}
