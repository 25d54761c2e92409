//! Contact Book - a server-rendered address book.
//!
//! Lists, creates, edits, deletes and shows contacts (name, mobile number,
//! email) with duplicate-name and format validation.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, email addresses, phone numbers)
//! - **models**: The `Contact` record and typed form inputs
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence gateway trait and its SQLite implementation
//! - **services**: Validation rules and the contact use cases
//! - **flash**: Per-session one-shot notifications
//! - **session**: Session cookie handling
//! - **server**: axum router, handlers and HTML views

pub mod config;
pub mod domain;
pub mod error;
pub mod flash;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{ConfigError, ContactError, FieldError, StoreError};
pub use flash::{FlashStore, SessionFlash};
pub use models::{AddContactInput, Contact, ContactFields, EditContactInput};
pub use server::{build_app, AppState};
pub use services::{ContactService, ContactServiceImpl, ContactValidator, Submission};
