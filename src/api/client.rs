//! Hosted Store Client
//!
//! Functions for talking to the hosted database service over its REST
//! interface. The store is the sole owner of persisted state; this client
//! only issues select and insert requests against the `clinics` table and
//! turns failures into display strings.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::state::form::NewClinic;
use crate::state::global::Clinic;

/// Table holding clinic records.
pub const CLINICS_TABLE: &str = "clinics";

/// Columns fetched for the list view.
pub const CLINIC_COLUMNS: &str = "id,name,specialty,city,phone,email,created_at";

/// Hint appended when the store rejects an operation for lack of permission.
const POLICY_HINT: &str = "Revisa las políticas de acceso (RLS) de la tabla clinics.";

/// Connection settings for the hosted store, inlined at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl StoreConfig {
    /// Read the configuration baked into the build.
    ///
    /// Both values are required; without them the page cannot reach the
    /// store, so the caller renders the configuration-error screen instead
    /// of mounting anything else.
    pub fn from_env() -> Result<Self, String> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, String> {
        let url = url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| "Falta la variable de entorno SUPABASE_URL.".to_string())?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| "Falta la variable de entorno SUPABASE_ANON_KEY.".to_string())?;

        Ok(Self {
            // Normalize: remove trailing slash
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// REST endpoint for a table.
    fn table_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// Select URL for the clinic list, newest first.
    fn select_clinics_url(&self) -> String {
        format!(
            "{}?select={}&order=created_at.desc",
            self.table_endpoint(CLINICS_TABLE),
            CLINIC_COLUMNS
        )
    }

    /// Attach the public access key headers the store expects.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }
}

/// Error body returned by the store on failed operations.
#[derive(Debug, serde::Deserialize)]
struct StoreError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

// ============ API Functions ============

/// Fetch all clinics, newest first.
pub async fn fetch_clinics() -> Result<Vec<Clinic>, String> {
    let config = StoreConfig::from_env()?;

    let response = config
        .authorize(Request::get(&config.select_clinics_url()))
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(read_store_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Respuesta no válida del servidor: {}", e))
}

/// Insert one clinic record.
pub async fn create_clinic(clinic: &NewClinic) -> Result<(), String> {
    let config = StoreConfig::from_env()?;

    let response = config
        .authorize(Request::post(&config.table_endpoint(CLINICS_TABLE)))
        .header("Prefer", "return=minimal")
        .json(clinic)
        .map_err(|e| format!("Error al preparar la petición: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(read_store_error(response).await);
    }

    Ok(())
}

// ============ Error Mapping ============

/// Decode a failed response into the message shown to the user.
async fn read_store_error(response: Response) -> String {
    let status = response.status();
    let error: StoreError = response.json().await.unwrap_or(StoreError {
        message: String::new(),
        code: None,
    });
    describe_store_error(status, &error)
}

/// Build the displayed message for a failed store operation, appending the
/// access-policy hint when the rejection looks permission-related.
fn describe_store_error(status: u16, error: &StoreError) -> String {
    let mut message = if error.message.is_empty() {
        format!("Error del servidor ({})", status)
    } else {
        error.message.clone()
    };

    if is_policy_rejection(status, error) {
        message.push(' ');
        message.push_str(POLICY_HINT);
    }

    message
}

/// Permission failures: HTTP 401/403, the Postgres `42501` code, or
/// row-level-security wording in the message body.
fn is_policy_rejection(status: u16, error: &StoreError) -> bool {
    if status == 401 || status == 403 {
        return true;
    }
    if error.code.as_deref() == Some("42501") {
        return true;
    }

    let message = error.message.to_lowercase();
    message.contains("row-level security")
        || message.contains("row level security")
        || message.contains("permission denied")
        || message.contains("policy")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_error(message: &str, code: Option<&str>) -> StoreError {
        StoreError {
            message: message.to_string(),
            code: code.map(str::to_string),
        }
    }

    #[test]
    fn test_config_requires_both_values() {
        assert!(StoreConfig::from_values(None, Some("key")).is_err());
        assert!(StoreConfig::from_values(Some("https://x.supabase.co"), None).is_err());
        assert!(StoreConfig::from_values(Some("  "), Some("key")).is_err());
        assert!(StoreConfig::from_values(Some("https://x.supabase.co"), Some("")).is_err());
    }

    #[test]
    fn test_config_normalizes_trailing_slash() {
        let config =
            StoreConfig::from_values(Some("https://x.supabase.co/"), Some("anon")).unwrap();
        assert_eq!(config.url, "https://x.supabase.co");
        assert_eq!(config.anon_key, "anon");
    }

    #[test]
    fn test_select_url_shape() {
        let config =
            StoreConfig::from_values(Some("https://x.supabase.co"), Some("anon")).unwrap();
        assert_eq!(
            config.select_clinics_url(),
            "https://x.supabase.co/rest/v1/clinics\
             ?select=id,name,specialty,city,phone,email,created_at\
             &order=created_at.desc"
        );
    }

    #[test]
    fn test_insert_endpoint_shape() {
        let config =
            StoreConfig::from_values(Some("https://x.supabase.co"), Some("anon")).unwrap();
        assert_eq!(
            config.table_endpoint(CLINICS_TABLE),
            "https://x.supabase.co/rest/v1/clinics"
        );
    }

    #[test]
    fn test_plain_server_error_gets_no_hint() {
        let message = describe_store_error(500, &store_error("relation does not exist", None));
        assert_eq!(message, "relation does not exist");
    }

    #[test]
    fn test_rls_message_gets_policy_hint() {
        let message = describe_store_error(
            400,
            &store_error(
                "new row violates row-level security policy for table \"clinics\"",
                None,
            ),
        );
        assert!(message.ends_with(POLICY_HINT));
    }

    #[test]
    fn test_unauthorized_status_gets_policy_hint() {
        let message = describe_store_error(401, &store_error("", None));
        assert_eq!(message, format!("Error del servidor (401) {}", POLICY_HINT));
    }

    #[test]
    fn test_postgres_permission_code_gets_policy_hint() {
        let message = describe_store_error(400, &store_error("denegado", Some("42501")));
        assert!(message.ends_with(POLICY_HINT));
    }
}
