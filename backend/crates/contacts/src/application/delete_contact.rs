//! Delete Contact Use Case

use std::sync::Arc;

use identity::UserId;
use kernel::id::ContactId;

use crate::domain::ownership::{AccessDecision, authorize_contact_access};
use crate::domain::repository::ContactRepository;
use crate::error::{ContactError, ContactResult};

/// Use case for deleting a contact
pub struct DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Delete a contact the caller owns
    ///
    /// # Errors
    ///
    /// - [`ContactError::NotFound`] if no contact has this id
    /// - [`ContactError::Denied`] if the caller does not own the contact
    pub async fn execute(&self, caller: UserId, contact_id: ContactId) -> ContactResult<()> {
        let contact = self
            .repo
            .find_by_id(contact_id)
            .await?
            .ok_or(ContactError::NotFound)?;

        if authorize_contact_access(&contact, caller) == AccessDecision::Denied {
            return Err(ContactError::Denied);
        }

        self.repo.delete(contact_id).await?;

        tracing::info!(
            contact_id = %contact_id,
            owner_id = %contact.owner_id,
            "Contact deleted"
        );

        Ok(())
    }
}
