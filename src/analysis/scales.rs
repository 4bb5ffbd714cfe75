//! Gauge band tables for the measurement input scales.
//!
//! The presentation layer renders one colored band per range and moves an
//! indicator along the scale as the user types. Bands mirror the
//! classification cutoffs in `blood_pressure` but are deliberately coarser:
//! a gauge has no room for every clinical distinction.

/// One colored segment of a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min: i64,
    pub max: i64,
    /// Class name shared with the severity palette.
    pub class: &'static str,
}

/// A full gauge: its bands plus the total displayed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub bands: &'static [Band],
    pub min: i64,
    pub max: i64,
}

pub const SYSTOLIC: Scale = Scale {
    bands: &[
        Band { min: 0, max: 120, class: "normal" },
        Band { min: 120, max: 130, class: "elevated" },
        Band { min: 130, max: 140, class: "high-stage-1" },
        Band { min: 140, max: 180, class: "high-stage-2" },
        Band { min: 180, max: 250, class: "critical" },
    ],
    min: 0,
    max: 250,
};

pub const DIASTOLIC: Scale = Scale {
    bands: &[
        Band { min: 0, max: 80, class: "normal" },
        Band { min: 80, max: 90, class: "high-stage-1" },
        Band { min: 90, max: 120, class: "high-stage-2" },
        Band { min: 120, max: 150, class: "critical" },
    ],
    min: 0,
    max: 150,
};

pub const PULSE: Scale = Scale {
    bands: &[
        Band { min: 30, max: 60, class: "low" },
        Band { min: 60, max: 100, class: "normal" },
        Band { min: 100, max: 200, class: "high" },
    ],
    min: 30,
    max: 200,
};

/// Position of `value` along `scale` as a percentage, clamped to the
/// displayed range.
pub fn position_percent(value: i64, scale: &Scale) -> f64 {
    let clamped = value.clamp(scale.min, scale.max);
    (clamped - scale.min) as f64 / (scale.max - scale.min) as f64 * 100.0
}
