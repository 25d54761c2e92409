//! Contact service layer.
//!
//! Composes validation and persistence for each use case. Successful
//! mutations push a confirmation into the caller's session flash.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult, Field, FieldError, StoreError};
use crate::flash::SessionFlash;
use crate::models::{AddContactInput, Contact, EditContactInput};
use crate::repositories::ContactRepository;
use crate::services::validation_service::{ContactValidator, ValidationMode, NAME_TAKEN};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const CONTACT_ADDED: &str = "Contact added!";
pub const CONTACT_UPDATED: &str = "Contact updated!";
pub const CONTACT_DELETED: &str = "Contact deleted!";

/// Result of a form submission that passed through validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    /// Stored; `notice` was also pushed to the session flash.
    Accepted { notice: String },
    /// Not stored; the input is handed back for re-display.
    Rejected { errors: Vec<FieldError>, input: T },
}

impl<T> Submission<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Validation failures, empty when accepted.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted { .. } => &[],
            Self::Rejected { errors, .. } => errors,
        }
    }
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts, ordered by name.
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// The contact named `name`, or `ContactError::NotFound`.
    async fn get_contact(&self, name: &str) -> ContactResult<Contact>;

    /// Validate and store a new contact.
    async fn add_contact(
        &self,
        input: AddContactInput,
        flash: &SessionFlash,
    ) -> ContactResult<Submission<AddContactInput>>;

    /// Validate and replace the fields of the contact with `input.id`.
    async fn edit_contact(
        &self,
        input: EditContactInput,
        flash: &SessionFlash,
    ) -> ContactResult<Submission<EditContactInput>>;

    /// Remove the contact named `name`, returning the confirmation notice.
    async fn delete_contact(&self, name: &str, flash: &SessionFlash) -> ContactResult<String>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    validator: ContactValidator,
}

impl ContactServiceImpl {
    pub fn new(repository: Arc<dyn ContactRepository>, validator: ContactValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    fn duplicate_name() -> Vec<FieldError> {
        vec![FieldError::new(Field::Name, NAME_TAKEN)]
    }

    fn accept<T>(flash: &SessionFlash, notice: &str) -> Submission<T> {
        flash.push(notice);
        Submission::Accepted {
            notice: notice.to_string(),
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.repository.find_all().await?)
    }

    async fn get_contact(&self, name: &str) -> ContactResult<Contact> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    async fn add_contact(
        &self,
        input: AddContactInput,
        flash: &SessionFlash,
    ) -> ContactResult<Submission<AddContactInput>> {
        let fields = input.fields();
        let errors = self.validator.validate(&fields, ValidationMode::Create).await?;
        if !errors.is_empty() {
            debug!(name = %fields.name, errors = errors.len(), "Add contact rejected");
            return Ok(Submission::Rejected { errors, input });
        }

        match self.repository.insert(&fields).await {
            Ok(contact) => {
                info!(id = %contact.id, name = %contact.name, "Contact added");
                Ok(Self::accept(flash, CONTACT_ADDED))
            }
            Err(StoreError::DuplicateName(name)) => {
                warn!(name = %name, "Contact name taken between check and insert");
                Ok(Submission::Rejected {
                    errors: Self::duplicate_name(),
                    input,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn edit_contact(
        &self,
        input: EditContactInput,
        flash: &SessionFlash,
    ) -> ContactResult<Submission<EditContactInput>> {
        let fields = input.fields();
        let mode = ValidationMode::Edit {
            old_name: input.previous_name(),
        };
        let errors = self.validator.validate(&fields, mode).await?;
        if !errors.is_empty() {
            debug!(name = %fields.name, errors = errors.len(), "Edit contact rejected");
            return Ok(Submission::Rejected { errors, input });
        }

        let id = ContactId::new(input.id.as_str())
            .map_err(|_| ContactError::NotFound(input.previous_name().to_string()))?;

        match self.repository.update_by_id(&id, &fields).await {
            Ok(true) => {
                info!(id = %id, name = %fields.name, "Contact updated");
                Ok(Self::accept(flash, CONTACT_UPDATED))
            }
            Ok(false) => Err(ContactError::NotFound(id.into_inner())),
            Err(StoreError::DuplicateName(name)) => {
                warn!(name = %name, "Contact name taken between check and update");
                Ok(Submission::Rejected {
                    errors: Self::duplicate_name(),
                    input,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_contact(&self, name: &str, flash: &SessionFlash) -> ContactResult<String> {
        let contact = self.get_contact(name).await?;

        if !self.repository.delete_by_id(&contact.id).await? {
            return Err(ContactError::NotFound(name.to_string()));
        }

        info!(id = %contact.id, name = %contact.name, "Contact deleted");
        flash.push(CONTACT_DELETED);
        Ok(CONTACT_DELETED.to_string())
    }
}
