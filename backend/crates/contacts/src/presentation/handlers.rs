//! HTTP Handlers
//!
//! Every handler reads the authenticated caller from the [`CurrentUser`]
//! request extension inserted by `identity::require_access_token`, then
//! lets the use case decide whether the caller may touch the contact.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use std::sync::Arc;
use uuid::Uuid;

use identity::CurrentUser;
use kernel::id::ContactId;

use crate::application::{
    CreateContactUseCase, DeleteContactUseCase, GetContactUseCase, ListContactsUseCase,
    UpdateContactUseCase,
};
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;
use crate::presentation::dto::{ContactPayload, ContactResponse};

/// Shared state for contact handlers
#[derive(Clone)]
pub struct ContactsAppState<R>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /contacts
pub async fn create_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ContactPayload>,
) -> ContactResult<impl IntoResponse>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateContactUseCase::new(state.repo.clone());

    let contact = use_case
        .execute(current_user.user_id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ContactResponse::from(contact))))
}

// ============================================================================
// List
// ============================================================================

/// GET /contacts
pub async fn list_contacts<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> ContactResult<Json<Vec<ContactResponse>>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListContactsUseCase::new(state.repo.clone());

    let contacts = use_case.execute(current_user.user_id).await?;

    Ok(Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

// ============================================================================
// Get
// ============================================================================

/// GET /contacts/{contact_id}
pub async fn get_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(contact_id): Path<Uuid>,
) -> ContactResult<Json<ContactResponse>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetContactUseCase::new(state.repo.clone());

    let contact = use_case
        .execute(current_user.user_id, ContactId::from_uuid(contact_id))
        .await?;

    Ok(Json(ContactResponse::from(contact)))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /contacts/{contact_id}
pub async fn update_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(contact_id): Path<Uuid>,
    Json(payload): Json<ContactPayload>,
) -> ContactResult<Json<ContactResponse>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateContactUseCase::new(state.repo.clone());

    let contact = use_case
        .execute(
            current_user.user_id,
            ContactId::from_uuid(contact_id),
            payload.into(),
        )
        .await?;

    Ok(Json(ContactResponse::from(contact)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /contacts/{contact_id}
pub async fn delete_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(contact_id): Path<Uuid>,
) -> ContactResult<StatusCode>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteContactUseCase::new(state.repo.clone());

    use_case
        .execute(current_user.user_id, ContactId::from_uuid(contact_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
