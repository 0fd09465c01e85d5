//! Multi-step registration form state.
//!
//! The form is a fixed list of sections walked one at a time, plus an event
//! checklist capped at a few entries. Field values are only read when the
//! user submits, at which point they become a [`RegistrationDraft`].

pub mod model;
pub mod selection;
pub mod steps;

pub use model::{FormFields, PaymentMode, PaymentStatus, RegistrationDraft};
pub use selection::{EventSelection, ToggleOutcome};
pub use steps::{StepNavigator, StepState};
