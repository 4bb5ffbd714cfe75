//! Offline-first core of a personal blood pressure tracker.
//!
//! Everything is local to one device: readings and profiles live in a
//! SQLite file, the current-profile selection in a JSON sidecar. The
//! presentation layer (calendar, charts, history list) consumes the
//! [`Tracker`] facade and the pure classification functions; it never
//! touches storage internals.

pub mod analysis;
pub mod db;
pub mod demo;
mod error;
pub mod profile;
pub mod tracker;
pub mod undo;
pub mod validation;

pub use analysis::{classify_pressure, classify_pulse, PressureCategory, PulseStatus, Severity};
pub use db::models::{Reading, User};
pub use db::Database;
pub use error::StoreError;
pub use profile::{CurrentUser, ProfileStore};
pub use tracker::Tracker;
pub use undo::{UndoRedoManager, UndoState};
pub use validation::{validate_reading, NewReading, ReadingDraft, ValidationError};
