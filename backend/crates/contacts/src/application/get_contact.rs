//! Get Contact Use Case

use std::sync::Arc;

use identity::UserId;
use kernel::id::ContactId;

use crate::domain::entities::Contact;
use crate::domain::ownership::{AccessDecision, authorize_contact_access};
use crate::domain::repository::ContactRepository;
use crate::error::{ContactError, ContactResult};

/// Use case for fetching a single contact
pub struct GetContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> GetContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch a contact on behalf of `caller`
    ///
    /// The ownership check runs against the freshly loaded row.
    pub async fn execute(&self, caller: UserId, contact_id: ContactId) -> ContactResult<Contact> {
        let contact = self
            .repo
            .find_by_id(contact_id)
            .await?
            .ok_or(ContactError::NotFound)?;

        if authorize_contact_access(&contact, caller) == AccessDecision::Denied {
            return Err(ContactError::Denied);
        }

        Ok(contact)
    }
}
