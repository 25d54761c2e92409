//! Field validation for contact submissions.
//!
//! Every rule runs on every submission and all failures are reported
//! together, in form order: name, email, phone.

use crate::domain::{is_valid_email, PhoneRegion};
use crate::error::{Field, FieldError, StoreResult};
use crate::models::ContactFields;
use crate::repositories::ContactRepository;
use std::sync::Arc;

pub const NAME_REQUIRED: &str = "Name is required!";
pub const NAME_TAKEN: &str = "Contact name is already registered!";
pub const EMAIL_INVALID: &str = "Invalid email!";
pub const PHONE_INVALID: &str = "Invalid phone number!";

/// Whether a submission creates a record or edits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode<'a> {
    Create,
    /// Editing the record currently named `old_name`.
    Edit { old_name: &'a str },
}

/// Validates candidate field sets before they reach the store.
///
/// The uniqueness rule reads from the repository, so validation is async and
/// can fail with a store error. It is a pre-check only; the store's own
/// constraint decides races.
#[derive(Clone)]
pub struct ContactValidator {
    repository: Arc<dyn ContactRepository>,
    region: PhoneRegion,
}

impl ContactValidator {
    pub fn new(repository: Arc<dyn ContactRepository>, region: PhoneRegion) -> Self {
        Self { repository, region }
    }

    /// Region phone numbers are checked against.
    pub fn region(&self) -> PhoneRegion {
        self.region
    }

    /// Run all rules and collect the failures. An empty list means valid.
    pub async fn validate(
        &self,
        fields: &ContactFields,
        mode: ValidationMode<'_>,
    ) -> StoreResult<Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(err) = self.check_name(fields, mode).await? {
            errors.push(err);
        }
        if let Some(err) = Self::check_email(fields) {
            errors.push(err);
        }
        if let Some(err) = self.check_phone(fields) {
            errors.push(err);
        }

        Ok(errors)
    }

    async fn check_name(
        &self,
        fields: &ContactFields,
        mode: ValidationMode<'_>,
    ) -> StoreResult<Option<FieldError>> {
        if fields.name.is_empty() {
            return Ok(Some(FieldError::new(Field::Name, NAME_REQUIRED)));
        }

        // Keeping the same name on edit is never a duplicate of itself.
        if let ValidationMode::Edit { old_name } = mode {
            if fields.name == old_name {
                return Ok(None);
            }
        }

        let existing = self.repository.find_by_name(&fields.name).await?;
        Ok(existing.map(|_| FieldError::new(Field::Name, NAME_TAKEN)))
    }

    fn check_email(fields: &ContactFields) -> Option<FieldError> {
        fields
            .email
            .as_deref()
            .filter(|email| !is_valid_email(email))
            .map(|_| FieldError::new(Field::Email, EMAIL_INVALID))
    }

    fn check_phone(&self, fields: &ContactFields) -> Option<FieldError> {
        (!self.region.is_mobile(&fields.phone))
            .then(|| FieldError::new(Field::Phone, PHONE_INVALID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteContactRepository;

    fn fields(name: &str, phone: &str, email: &str) -> ContactFields {
        ContactFields::normalized(name, phone, email)
    }

    async fn validator_with(names: &[&str]) -> ContactValidator {
        let repo = SqliteContactRepository::in_memory().await.unwrap();
        for name in names {
            repo.insert(&fields(name, "081234567890", ""))
                .await
                .unwrap();
        }
        ContactValidator::new(Arc::new(repo), PhoneRegion::IdId)
    }

    #[tokio::test]
    async fn test_valid_submission_has_no_errors() {
        let validator = validator_with(&[]).await;
        let errors = validator
            .validate(&fields("Alice", "081234567890", "a@x.com"), ValidationMode::Create)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_email_is_optional() {
        let validator = validator_with(&[]).await;
        let errors = validator
            .validate(&fields("Alice", "081234567890", ""), ValidationMode::Create)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_name_on_create() {
        let validator = validator_with(&["Alice"]).await;
        let errors = validator
            .validate(&fields("Alice", "081234567890", ""), ValidationMode::Create)
            .await
            .unwrap();
        assert_eq!(errors, vec![FieldError::new(Field::Name, NAME_TAKEN)]);
    }

    #[tokio::test]
    async fn test_edit_keeping_name_is_not_duplicate() {
        let validator = validator_with(&["Alice"]).await;
        let errors = validator
            .validate(
                &fields("Alice", "089999999999", ""),
                ValidationMode::Edit { old_name: "Alice" },
            )
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_edit_renaming_onto_existing_name() {
        let validator = validator_with(&["Alice", "Bob"]).await;
        let errors = validator
            .validate(
                &fields("Bob", "081234567890", ""),
                ValidationMode::Edit { old_name: "Alice" },
            )
            .await
            .unwrap();
        assert_eq!(errors, vec![FieldError::new(Field::Name, NAME_TAKEN)]);
    }

    #[tokio::test]
    async fn test_all_failures_reported_in_form_order() {
        let validator = validator_with(&["Alice"]).await;
        let errors = validator
            .validate(&fields("Alice", "12", "not-an-email"), ValidationMode::Create)
            .await
            .unwrap();

        let failed: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(failed, vec![Field::Name, Field::Email, Field::Phone]);
    }

    #[tokio::test]
    async fn test_missing_name_is_required_error() {
        let validator = validator_with(&[]).await;
        let errors = validator
            .validate(&fields("  ", "081234567890", ""), ValidationMode::Create)
            .await
            .unwrap();
        assert_eq!(errors, vec![FieldError::new(Field::Name, NAME_REQUIRED)]);
    }

    #[tokio::test]
    async fn test_phone_checked_against_configured_region() {
        let repo = SqliteContactRepository::in_memory().await.unwrap();
        let validator = ContactValidator::new(Arc::new(repo), PhoneRegion::EnGb);
        assert_eq!(validator.region(), PhoneRegion::EnGb);

        let errors = validator
            .validate(&fields("Alice", "081234567890", ""), ValidationMode::Create)
            .await
            .unwrap();
        assert_eq!(errors, vec![FieldError::new(Field::Phone, PHONE_INVALID)]);
    }
}
