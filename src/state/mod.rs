//! State Management
//!
//! Global application state and form bookkeeping.

pub mod form;
pub mod global;

pub use form::{ClinicDraft, NewClinic};
pub use global::{provide_global_state, Clinic, GlobalState};
