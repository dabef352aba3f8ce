//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Contact, ContactFields};

/// Contact payload, accepted by create and update
///
/// All seven fields are required on the wire; an empty string is a
/// legal value for any of them. On update the payload replaces the
/// stored contact wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organisation: String,
    pub job_title: String,
    pub email: String,
    pub phone_number: String,
}

impl From<ContactPayload> for ContactFields {
    fn from(payload: ContactPayload) -> Self {
        Self {
            last_name: payload.last_name,
            first_name: payload.first_name,
            middle_name: payload.middle_name,
            organisation: payload.organisation,
            job_title: payload.job_title,
            email: payload.email,
            phone_number: payload.phone_number,
        }
    }
}

/// Contact response
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub owner_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organisation: String,
    pub job_title: String,
    pub email: String,
    pub phone_number: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.into_uuid(),
            owner_id: contact.owner_id.as_i64(),
            last_name: contact.last_name,
            first_name: contact.first_name,
            middle_name: contact.middle_name,
            organisation: contact.organisation,
            job_title: contact.job_title,
            email: contact.email,
            phone_number: contact.phone_number,
        }
    }
}
