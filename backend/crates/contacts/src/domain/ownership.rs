//! Domain Services
//!
//! Pure ownership logic for contact access.

use identity::UserId;

use crate::domain::entities::Contact;

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied,
}

/// Decide whether a user may touch a contact
///
/// A contact is visible only to its owner; role plays no part. Callers
/// evaluate this on every read, write, and delete. The result is never
/// cached anywhere.
pub fn authorize_contact_access(contact: &Contact, user_id: UserId) -> AccessDecision {
    if contact.owner_id == user_id {
        AccessDecision::Allowed
    } else {
        AccessDecision::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContactFields;

    #[test]
    fn test_owner_is_allowed() {
        let contact = Contact::new(UserId::new(1), ContactFields::default());
        assert_eq!(
            authorize_contact_access(&contact, UserId::new(1)),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn test_everyone_else_is_denied() {
        let contact = Contact::new(UserId::new(1), ContactFields::default());
        assert_eq!(
            authorize_contact_access(&contact, UserId::new(2)),
            AccessDecision::Denied
        );
    }
}
