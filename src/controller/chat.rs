use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        chat::{ContactDto, MessageDto, SendMessageDto},
    },
    service::message::MessageService,
    state::AppState,
};

pub const CHAT_TAG: &str = "chat";

/// Who the signed-in user may message, with unread counts.
#[utoipa::path(
    get,
    path = "/api/chat/contacts",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Contacts", body = Vec<ContactDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let contacts = MessageService::new(&state.db).contacts(&user).await?;

    Ok((StatusCode::OK, Json(contacts)))
}

/// Message history with one contact, oldest first.
///
/// Opening a conversation marks the contact's messages as read.
#[utoipa::path(
    get,
    path = "/api/chat/conversations/{peer_id}",
    tag = CHAT_TAG,
    params(("peer_id" = i32, Path, description = "The other user")),
    responses(
        (status = 200, description = "Messages", body = Vec<MessageDto>),
        (status = 401, description = "Not authenticated or not a contact", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    session: Session,
    Path(peer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = MessageService::new(&state.db)
        .conversation(&user, peer_id)
        .await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// Send a message to a contact.
#[utoipa::path(
    post,
    path = "/api/chat/messages",
    tag = CHAT_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Sent", body = MessageDto),
        (status = 400, description = "Empty content or self-message", body = ErrorDto),
        (status = 401, description = "Not authenticated or not a contact", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .send(&user, payload.recipient_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
