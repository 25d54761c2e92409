use async_trait::async_trait;
use contact_book::domain::ContactId;
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::{Contact, ContactFields};
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that enforces
/// unique names like the real store, tracks method calls for verification,
/// and can simulate outages and stale reads.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    unavailable: Arc<AtomicBool>,
    stale_name_reads: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact to the mock repository.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.to_string(), contact);
    }

    /// Seed a contact from raw fields and return it.
    pub fn seed(&self, name: &str, phone: &str, email: Option<&str>) -> Contact {
        let contact = Contact {
            id: ContactId::generate(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
        };
        self.add_contact(contact.clone());
        contact
    }

    /// Snapshot of every stored contact.
    pub fn all(&self) -> Vec<Contact> {
        let contacts = self.contacts.lock().unwrap();
        contacts.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Make every call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make `find_by_name` miss, as if another writer raced the pre-check.
    pub fn set_stale_name_reads(&self, stale: bool) {
        self.stale_name_reads.store(stale, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    /// Clear all contacts from the repository.
    pub fn clear(&self) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.clear();
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("mock store offline".to_string()));
        }
        Ok(())
    }

    fn name_taken(contacts: &HashMap<String, Contact>, name: &str, except: Option<&str>) -> bool {
        contacts
            .values()
            .any(|c| c.name == name && Some(c.id.as_str()) != except)
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all")?;

        let contacts = self.contacts.lock().unwrap();
        let mut result: Vec<Contact> = contacts.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_name")?;

        if self.stale_name_reads.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.values().find(|c| c.name == name).cloned())
    }

    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_id")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.get(id.as_str()).cloned())
    }

    async fn insert(&self, fields: &ContactFields) -> StoreResult<Contact> {
        self.track_call("insert")?;

        let mut contacts = self.contacts.lock().unwrap();
        if Self::name_taken(&contacts, &fields.name, None) {
            return Err(StoreError::DuplicateName(fields.name.clone()));
        }

        let contact = Contact::from_fields(ContactId::generate(), fields.clone());
        contacts.insert(contact.id.to_string(), contact.clone());
        Ok(contact)
    }

    async fn update_by_id(&self, id: &ContactId, fields: &ContactFields) -> StoreResult<bool> {
        self.track_call("update_by_id")?;

        let mut contacts = self.contacts.lock().unwrap();
        if !contacts.contains_key(id.as_str()) {
            return Ok(false);
        }
        if Self::name_taken(&contacts, &fields.name, Some(id.as_str())) {
            return Err(StoreError::DuplicateName(fields.name.clone()));
        }

        contacts.insert(
            id.to_string(),
            Contact::from_fields(id.clone(), fields.clone()),
        );
        Ok(true)
    }

    async fn delete_by_id(&self, id: &ContactId) -> StoreResult<bool> {
        self.track_call("delete_by_id")?;

        let mut contacts = self.contacts.lock().unwrap();
        Ok(contacts.remove(id.as_str()).is_some())
    }
}
