use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
}

impl From<entity::message::Model> for MessageDto {
    fn from(model: entity::message::Model) -> Self {
        Self {
            id: model.id,
            sender_id: model.sender_id,
            recipient_id: model.recipient_id,
            content: model.content,
            sent_at: model.sent_at,
            is_read: model.is_read,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendMessageDto {
    pub recipient_id: i32,
    pub content: String,
}

/// A user the caller is allowed to message, with unread count for badges.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub user_id: i32,
    pub full_name: String,
    pub role: String,
    pub unread: u64,
}
