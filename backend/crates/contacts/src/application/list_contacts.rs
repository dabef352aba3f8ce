//! List Contacts Use Case

use std::sync::Arc;

use identity::UserId;

use crate::domain::entities::Contact;
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;

/// Use case for listing a user's contacts
pub struct ListContactsUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> ListContactsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List every contact the caller owns
    ///
    /// Authorization is the query itself: only rows owned by `caller`
    /// are selected, so other users' contacts can never appear.
    pub async fn execute(&self, caller: UserId) -> ContactResult<Vec<Contact>> {
        self.repo.list_by_owner(caller).await
    }
}
