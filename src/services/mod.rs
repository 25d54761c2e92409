//! Application service layer.
//!
//! Services contain the business rules: validation of submitted fields and
//! the orchestration of store calls for each contact use case. They sit
//! between the HTTP handlers and the repositories.

mod contact_service;
mod validation_service;

pub use contact_service::{
    ContactService, ContactServiceImpl, Submission, CONTACT_ADDED, CONTACT_DELETED,
    CONTACT_UPDATED,
};
pub use validation_service::{
    ContactValidator, ValidationMode, EMAIL_INVALID, NAME_REQUIRED, NAME_TAKEN, PHONE_INVALID,
};
