//! Hosted Store Access
//!
//! REST client for the external database service that owns the clinic
//! records.

pub mod client;

pub use client::{create_clinic, fetch_clinics, StoreConfig};
