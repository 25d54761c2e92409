mod sqlite_contact_repository;
mod traits;

pub use sqlite_contact_repository::SqliteContactRepository;
pub use traits::ContactRepository;
