//! Domain Entities
//!
//! Core business entities for the contacts domain.

use chrono::{DateTime, Utc};
use identity::UserId;
use kernel::id::ContactId;

/// Editable contact fields
///
/// Every field is a plain string and may be blank; the store attaches no
/// meaning to any of them. Updates replace the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organisation: String,
    pub job_title: String,
    pub email: String,
    pub phone_number: String,
}

/// Contact entity
///
/// The id is store-generated; the owner is fixed at creation and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub owner_id: UserId,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organisation: String,
    pub job_title: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact owned by `owner_id`
    pub fn new(owner_id: UserId, fields: ContactFields) -> Self {
        let now = Utc::now();
        Self {
            id: ContactId::new(),
            owner_id,
            last_name: fields.last_name,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            organisation: fields.organisation,
            job_title: fields.job_title,
            email: fields.email,
            phone_number: fields.phone_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field, leaving id and owner untouched
    pub fn apply(&mut self, fields: ContactFields) {
        self.last_name = fields.last_name;
        self.first_name = fields.first_name;
        self.middle_name = fields.middle_name;
        self.organisation = fields.organisation;
        self.job_title = fields.job_title;
        self.email = fields.email;
        self.phone_number = fields.phone_number;
        self.updated_at = Utc::now();
    }
}
