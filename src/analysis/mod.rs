pub mod blood_pressure;
pub mod scales;

pub use blood_pressure::{
    classify_pressure, classify_pulse, PressureCategory, PulseStatus, Severity,
};
