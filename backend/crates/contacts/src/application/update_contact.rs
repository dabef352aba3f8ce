//! Update Contact Use Case

use std::sync::Arc;

use identity::UserId;
use kernel::id::ContactId;

use crate::domain::entities::{Contact, ContactFields};
use crate::domain::ownership::{AccessDecision, authorize_contact_access};
use crate::domain::repository::ContactRepository;
use crate::error::{ContactError, ContactResult};

/// Use case for replacing a contact's fields
pub struct UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Replace all of a contact's fields with `fields`
    ///
    /// The update is a full replacement: every field takes the incoming
    /// value, including fields the caller left blank. Ownership is
    /// re-checked against the stored row before anything is written.
    ///
    /// # Errors
    ///
    /// - [`ContactError::NotFound`] if no contact has this id
    /// - [`ContactError::Denied`] if the caller does not own the contact
    pub async fn execute(
        &self,
        caller: UserId,
        contact_id: ContactId,
        fields: ContactFields,
    ) -> ContactResult<Contact> {
        let mut contact = self
            .repo
            .find_by_id(contact_id)
            .await?
            .ok_or(ContactError::NotFound)?;

        if authorize_contact_access(&contact, caller) == AccessDecision::Denied {
            return Err(ContactError::Denied);
        }

        contact.apply(fields);
        self.repo.update(&contact).await?;

        tracing::info!(
            contact_id = %contact.id,
            owner_id = %contact.owner_id,
            "Contact updated"
        );

        Ok(contact)
    }
}
