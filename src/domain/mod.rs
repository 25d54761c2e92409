//! Domain value objects and types.
//!
//! The contact id newtype, phone regions with their mobile patterns, and the
//! email syntax check used by form validation.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::is_valid_email;
pub use errors::ValidationError;
pub use phone::PhoneRegion;
