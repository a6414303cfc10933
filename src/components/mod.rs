//! UI Components
//!
//! Reusable Leptos components for the page.

pub mod clinic_card;
pub mod clinic_form;
pub mod loading;
pub mod nav;
pub mod toast;

pub use clinic_card::ClinicCard;
pub use clinic_form::ClinicForm;
pub use loading::CardGridSkeleton;
pub use nav::Nav;
pub use toast::Toast;
