//! Contact model representing one address-book entry.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A persisted contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier, never changes after creation
    pub id: ContactId,

    /// Unique, case-sensitive display name
    pub name: String,

    /// Mobile number in the configured region
    pub phone: String,

    /// Optional email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    /// Build a contact from an id and a validated field set.
    pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
        }
    }

    /// The editable fields of this contact.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    /// Email or an empty string, for display.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// Normalized candidate field set passed to validation and the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl ContactFields {
    /// Trim every field and collapse an empty email to `None`.
    pub fn normalized(name: &str, phone: &str, email: &str) -> Self {
        let email = email.trim();
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
        }
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AddContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl AddContactInput {
    pub fn fields(&self) -> ContactFields {
        ContactFields::normalized(&self.name, &self.phone, &self.email)
    }
}

/// Body of `PUT /contact`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EditContactInput {
    pub id: String,
    #[serde(rename = "oldName")]
    pub old_name: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl EditContactInput {
    /// Pre-fill an edit form from a stored contact.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            old_name: contact.name.clone(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email_or_empty().to_string(),
        }
    }

    pub fn fields(&self) -> ContactFields {
        ContactFields::normalized(&self.name, &self.phone, &self.email)
    }

    /// The name the record had when the form was rendered.
    pub fn previous_name(&self) -> &str {
        self.old_name.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let fields = ContactFields::normalized("  Alice ", " 081234567890", "  ");
        assert_eq!(fields.name, "Alice");
        assert_eq!(fields.phone, "081234567890");
        assert_eq!(fields.email, None);
    }

    #[test]
    fn test_edit_input_round_trips_contact() {
        let contact = Contact {
            id: ContactId::new("abc").unwrap(),
            name: "Alice".to_string(),
            phone: "081234567890".to_string(),
            email: Some("a@x.com".to_string()),
        };

        let input = EditContactInput::from_contact(&contact);
        assert_eq!(input.id, "abc");
        assert_eq!(input.previous_name(), "Alice");
        assert_eq!(input.fields(), contact.fields());
    }

    #[test]
    fn test_edit_input_reads_old_name_key() {
        let input: EditContactInput =
            serde_json::from_str(r#"{"id":"1","oldName":"A","name":"B","phone":"0"}"#).unwrap();
        assert_eq!(input.old_name, "A");
        assert_eq!(input.email, "");
    }

    #[test]
    fn test_contact_serialization_skips_missing_email() {
        let contact = Contact {
            id: ContactId::new("abc").unwrap(),
            name: "Alice".to_string(),
            phone: "081234567890".to_string(),
            email: None,
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["id"], "abc");
    }
}
