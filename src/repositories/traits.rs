use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Abstracts the document store behind field-equality lookups so the
/// service layer can run against SQLite in production and an in-memory
/// double in tests.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every stored contact, ordered by name.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Retrieve the contact whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Retrieve a contact by its store-assigned id.
    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<Contact>>;

    /// Persist a new contact, assigning its id.
    ///
    /// Fails with `StoreError::DuplicateName` when the name is taken.
    async fn insert(&self, fields: &ContactFields) -> StoreResult<Contact>;

    /// Replace name, phone and email of the record with `id`.
    ///
    /// Returns `false` when no record matched.
    async fn update_by_id(&self, id: &ContactId, fields: &ContactFields) -> StoreResult<bool>;

    /// Remove the record with `id`. Returns `false` when no record matched.
    async fn delete_by_id(&self, id: &ContactId) -> StoreResult<bool>;
}
