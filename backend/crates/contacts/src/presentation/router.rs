//! Contacts Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::ContactRepository;
use crate::infra::postgres::PgContactRepository;
use crate::presentation::handlers::{self, ContactsAppState};

/// Create the contacts router with PostgreSQL repository
///
/// Routes are absolute; merge this router at the application root and
/// layer `identity::require_access_token` over it so every handler can
/// rely on the [`identity::CurrentUser`] extension being present.
pub fn contacts_router(repo: PgContactRepository) -> Router {
    contacts_router_generic(repo)
}

/// Create a generic contacts router for any repository implementation
pub fn contacts_router_generic<R>(repo: R) -> Router
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let state = ContactsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/contacts",
            post(handlers::create_contact::<R>).get(handlers::list_contacts::<R>),
        )
        .route(
            "/contacts/{contact_id}",
            get(handlers::get_contact::<R>)
                .put(handlers::update_contact::<R>)
                .delete(handlers::delete_contact::<R>),
        )
        .with_state(state)
}
