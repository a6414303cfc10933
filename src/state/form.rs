//! Clinic Form State
//!
//! Editable draft behind the creation modal: field trimming, the required
//! name check, and the insert payload sent to the store.

/// Validation message shown when the name field is blank.
pub const NAME_REQUIRED: &str = "El nombre de la clínica es obligatorio.";

/// Editable text fields of the creation form, all initialized empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClinicDraft {
    pub name: String,
    pub specialty: String,
    pub city: String,
    pub phone: String,
    pub email: String,
}

/// Insert payload for one clinic.
///
/// Blank optional fields are sent as `null`, never as empty strings.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewClinic {
    pub name: String,
    pub specialty: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ClinicDraft {
    /// Trim every field and build the insert payload.
    ///
    /// Fails with [`NAME_REQUIRED`] when the trimmed name is empty; rejected
    /// drafts never reach the network.
    pub fn validate(&self) -> Result<NewClinic, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(NAME_REQUIRED.to_string());
        }

        Ok(NewClinic {
            name: name.to_string(),
            specialty: optional(&self.specialty),
            city: optional(&self.city),
            phone: optional(&self.phone),
            email: optional(&self.email),
        })
    }
}

/// Trimmed value of an optional field, `None` when blank.
fn optional(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ClinicDraft {
        ClinicDraft {
            name: name.to_string(),
            ..ClinicDraft::default()
        }
    }

    #[test]
    fn test_default_draft_is_all_empty() {
        let draft = ClinicDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.specialty.is_empty());
        assert!(draft.city.is_empty());
        assert!(draft.phone.is_empty());
        assert!(draft.email.is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert_eq!(draft("").validate(), Err(NAME_REQUIRED.to_string()));
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        assert_eq!(draft("   \t ").validate(), Err(NAME_REQUIRED.to_string()));
    }

    #[test]
    fn test_name_alone_is_enough() {
        let clinic = draft("Clínica X").validate().unwrap();
        assert_eq!(clinic.name, "Clínica X");
        assert_eq!(clinic.specialty, None);
        assert_eq!(clinic.city, None);
        assert_eq!(clinic.phone, None);
        assert_eq!(clinic.email, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let clinic = ClinicDraft {
            name: "  Clínica Sol  ".to_string(),
            specialty: " Dermatología ".to_string(),
            city: "Andorra la Vella".to_string(),
            phone: "   ".to_string(),
            email: " info@sol.ad ".to_string(),
        }
        .validate()
        .unwrap();

        assert_eq!(clinic.name, "Clínica Sol");
        assert_eq!(clinic.specialty.as_deref(), Some("Dermatología"));
        assert_eq!(clinic.city.as_deref(), Some("Andorra la Vella"));
        assert_eq!(clinic.phone, None);
        assert_eq!(clinic.email.as_deref(), Some("info@sol.ad"));
    }

    #[test]
    fn test_blank_optionals_serialize_as_null() {
        let clinic = draft("Clínica X").validate().unwrap();
        let value = serde_json::to_value(&clinic).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Clínica X",
                "specialty": null,
                "city": null,
                "phone": null,
                "email": null,
            })
        );
    }
}
