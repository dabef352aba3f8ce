//! Create Contact Use Case

use std::sync::Arc;

use identity::UserId;

use crate::domain::entities::{Contact, ContactFields};
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;

/// Use case for creating a contact
pub struct CreateContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> CreateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a contact owned by the caller
    ///
    /// Ownership is fixed here and can never be transferred.
    pub async fn execute(&self, owner_id: UserId, fields: ContactFields) -> ContactResult<Contact> {
        let contact = Contact::new(owner_id, fields);
        self.repo.create(&contact).await?;

        tracing::info!(
            contact_id = %contact.id,
            owner_id = %contact.owner_id,
            "Contact created"
        );

        Ok(contact)
    }
}
