use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use crate::repositories::traits::ContactRepository;

const CREATE_CONTACTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS contacts (
        id    TEXT PRIMARY KEY NOT NULL,
        name  TEXT NOT NULL UNIQUE,
        phone TEXT NOT NULL,
        email TEXT
    )";

/// Contact repository backed by SQLite.
///
/// The `UNIQUE` constraint on `name` is the authoritative duplicate guard;
/// concurrent inserts of the same name lose with `StoreError::DuplicateName`.
#[derive(Clone)]
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    /// Connect to `url` and create the contacts table if it is missing.
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        let repo = Self { pool };
        repo.ensure_schema().await?;
        info!(url = %url, "Contact store ready");
        Ok(repo)
    }

    /// Private in-memory database (for testing).
    ///
    /// Pinned to a single connection that never expires, since every new
    /// SQLite memory connection would open an empty database.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.ensure_schema().await?;
        Ok(repo)
    }

    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_CONTACTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn row_to_contact(row: &SqliteRow) -> StoreResult<Contact> {
        let id: String = row.try_get("id")?;
        let id = ContactId::new(id).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        Ok(Contact {
            id,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
        })
    }

    fn map_write_error(err: sqlx::Error, name: &str) -> StoreError {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::DuplicateName(name.to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let rows = sqlx::query("SELECT id, name, phone, email FROM contacts ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_contact).collect()
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let row = sqlx::query("SELECT id, name, phone, email FROM contacts WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        let row = sqlx::query("SELECT id, name, phone, email FROM contacts WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn insert(&self, fields: &ContactFields) -> StoreResult<Contact> {
        let id = ContactId::generate();

        sqlx::query("INSERT INTO contacts (id, name, phone, email) VALUES (?, ?, ?, ?)")
            .bind(id.as_str())
            .bind(fields.name.as_str())
            .bind(fields.phone.as_str())
            .bind(fields.email.as_deref())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &fields.name))?;

        debug!(id = %id, name = %fields.name, "Inserted contact");
        Ok(Contact::from_fields(id, fields.clone()))
    }

    async fn update_by_id(&self, id: &ContactId, fields: &ContactFields) -> StoreResult<bool> {
        let result = sqlx::query("UPDATE contacts SET name = ?, phone = ?, email = ? WHERE id = ?")
            .bind(fields.name.as_str())
            .bind(fields.phone.as_str())
            .bind(fields.email.as_deref())
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &fields.name))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: &ContactId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
