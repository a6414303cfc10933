//! Pages
//!
//! Top-level page components.

pub mod clinics;

pub use clinics::Clinics;
