//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use identity::UserId;
use kernel::id::ContactId;

use crate::domain::entities::Contact;
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;

/// PostgreSQL-backed contact repository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Contact Repository Implementation
// ============================================================================

impl ContactRepository for PgContactRepository {
    async fn create(&self, contact: &Contact) -> ContactResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contacts (
                id,
                owner_id,
                last_name,
                first_name,
                middle_name,
                organisation,
                job_title,
                email,
                phone_number,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(contact.id.into_uuid())
        .bind(contact.owner_id.as_i64())
        .bind(&contact.last_name)
        .bind(&contact.first_name)
        .bind(&contact.middle_name)
        .bind(&contact.organisation)
        .bind(&contact.job_title)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: ContactId) -> ContactResult<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT
                id,
                owner_id,
                last_name,
                first_name,
                middle_name,
                organisation,
                job_title,
                email,
                phone_number,
                created_at,
                updated_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_contact()))
    }

    async fn list_by_owner(&self, owner_id: UserId) -> ContactResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT
                id,
                owner_id,
                last_name,
                first_name,
                middle_name,
                organisation,
                job_title,
                email,
                phone_number,
                created_at,
                updated_at
            FROM contacts
            WHERE owner_id = $1
            ORDER BY last_name, first_name, created_at
            "#,
        )
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_contact()).collect())
    }

    async fn update(&self, contact: &Contact) -> ContactResult<()> {
        sqlx::query(
            r#"
            UPDATE contacts SET
                last_name = $2,
                first_name = $3,
                middle_name = $4,
                organisation = $5,
                job_title = $6,
                email = $7,
                phone_number = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(contact.id.into_uuid())
        .bind(&contact.last_name)
        .bind(&contact.first_name)
        .bind(&contact.middle_name)
        .bind(&contact.organisation)
        .bind(&contact.job_title)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: ContactId) -> ContactResult<()> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Type for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    owner_id: i64,
    last_name: String,
    first_name: String,
    middle_name: String,
    organisation: String,
    job_title: String,
    email: String,
    phone_number: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContactRow {
    fn into_contact(self) -> Contact {
        Contact {
            id: ContactId::from_uuid(self.id),
            owner_id: UserId::new(self.owner_id),
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            organisation: self.organisation,
            job_title: self.job_title,
            email: self.email,
            phone_number: self.phone_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
