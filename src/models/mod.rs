//! Data models for the contact book.
//!
//! The persisted `Contact` record plus the typed form inputs that reach the
//! service layer.

pub mod contact;

pub use contact::{AddContactInput, Contact, ContactFields, EditContactInput};
