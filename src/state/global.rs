//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Clinic records from the last successful load
    pub clinics: RwSignal<Vec<Clinic>>,
    /// A list request is outstanding
    pub loading: RwSignal<bool>,
    /// At least one load completed successfully
    pub loaded: RwSignal<bool>,
    /// Message from the last failed load, cleared on the next success
    pub load_error: RwSignal<Option<String>>,
    /// Reload trigger; every bump re-runs the list fetch
    pub reload_epoch: RwSignal<u32>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Clinic record as returned by the hosted store.
///
/// Only `id` is guaranteed; rows inserted outside the form may carry null in
/// any other column, so the read path keeps everything optional.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Clinic {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Clinic {
    /// Name shown in the list; the form guarantees one for its own records
    /// but the store tolerates rows without it.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "(sin nombre)",
        }
    }

    /// Creation date label, empty when the store did not return one.
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_default()
    }
}

/// True when the empty-state message should render: only after a successful
/// load returned zero records, never while a request is outstanding.
pub fn show_empty_state(loaded: bool, loading: bool, count: usize) -> bool {
    loaded && !loading && count == 0
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        clinics: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        loaded: create_rw_signal(false),
        load_error: create_rw_signal(None),
        reload_epoch: create_rw_signal(0),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Ask the list view to re-fetch. Bumps are not sequenced; overlapping
    /// reloads race and the last response received wins.
    pub fn request_reload(&self) {
        self.reload_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_stored_name() {
        let clinic: Clinic =
            serde_json::from_value(serde_json::json!({ "id": "1", "name": "Clínica Sol" }))
                .unwrap();
        assert_eq!(clinic.display_name(), "Clínica Sol");
    }

    #[test]
    fn test_display_name_falls_back_when_missing_or_blank() {
        let missing: Clinic = serde_json::from_value(serde_json::json!({ "id": "1" })).unwrap();
        assert_eq!(missing.display_name(), "(sin nombre)");

        let blank: Clinic =
            serde_json::from_value(serde_json::json!({ "id": "2", "name": "  " })).unwrap();
        assert_eq!(blank.display_name(), "(sin nombre)");
    }

    #[test]
    fn test_clinic_tolerates_null_columns() {
        let clinic: Clinic = serde_json::from_value(serde_json::json!({
            "id": "3",
            "name": null,
            "specialty": null,
            "city": null,
            "phone": null,
            "email": null,
            "created_at": null,
        }))
        .unwrap();

        assert_eq!(clinic.name, None);
        assert_eq!(clinic.created_at, None);
        assert_eq!(clinic.created_label(), "");
    }

    #[test]
    fn test_created_label_formats_store_timestamp() {
        let clinic: Clinic = serde_json::from_value(serde_json::json!({
            "id": "4",
            "created_at": "2026-08-07T09:30:00.120+00:00",
        }))
        .unwrap();

        assert_eq!(clinic.created_label(), "07/08/2026");
    }

    #[test]
    fn test_empty_state_only_after_successful_empty_load() {
        // never loaded yet
        assert!(!show_empty_state(false, false, 0));
        // request outstanding
        assert!(!show_empty_state(true, true, 0));
        assert!(!show_empty_state(false, true, 0));
        // loaded with records
        assert!(!show_empty_state(true, false, 2));
        // loaded and empty
        assert!(show_empty_state(true, false, 0));
    }
}
