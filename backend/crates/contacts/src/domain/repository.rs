//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use identity::UserId;
use kernel::id::ContactId;

use crate::domain::entities::Contact;
use crate::error::ContactResult;

/// Contact repository trait
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    /// Persist a new contact
    async fn create(&self, contact: &Contact) -> ContactResult<()>;

    /// Find a contact by id, regardless of owner
    async fn find_by_id(&self, contact_id: ContactId) -> ContactResult<Option<Contact>>;

    /// List a user's contacts, ordered by last name, first name, creation time
    async fn list_by_owner(&self, owner_id: UserId) -> ContactResult<Vec<Contact>>;

    /// Overwrite an existing contact's fields
    async fn update(&self, contact: &Contact) -> ContactResult<()>;

    /// Delete a contact permanently
    async fn delete(&self, contact_id: ContactId) -> ContactResult<()>;
}
