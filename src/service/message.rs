use sea_orm::DatabaseConnection;

use crate::data::message::MessageRepository;
use crate::data::user::UserRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::chat::{ContactDto, MessageDto};
use crate::model::user::RoleName;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Who this user may message. Students see the teachers of their
    /// classes, teachers see their students, admins see every account.
    pub async fn contacts(&self, user: &entity::user::Model) -> Result<Vec<ContactDto>, AppError> {
        let contact_ids = self.contact_ids(user).await?;

        let user_repo = UserRepository::new(self.db);
        let unread = MessageRepository::new(self.db).unread_counts(user.id).await?;

        let mut contacts = Vec::new();
        for contact_id in contact_ids {
            if let Some((contact, role)) = user_repo.find_with_role(contact_id).await? {
                contacts.push(ContactDto {
                    user_id: contact.id,
                    full_name: contact.full_name,
                    role: role.map(|r| r.name).unwrap_or_default(),
                    unread: unread.get(&contact.id).copied().unwrap_or(0),
                });
            }
        }
        contacts.sort_by(|a, b| a.full_name.cmp(&b.full_name));

        Ok(contacts)
    }

    /// Opens a thread with a contact. Reading marks the peer's messages as
    /// read as a side effect.
    pub async fn conversation(
        &self,
        user: &entity::user::Model,
        peer_id: i32,
    ) -> Result<Vec<MessageDto>, AppError> {
        self.require_contact(user, peer_id).await?;

        let repo = MessageRepository::new(self.db);
        repo.mark_read(user.id, peer_id).await?;
        let messages = repo.conversation(user.id, peer_id).await?;

        Ok(messages.into_iter().map(Into::into).collect())
    }

    pub async fn send(
        &self,
        user: &entity::user::Model,
        recipient_id: i32,
        content: String,
    ) -> Result<MessageDto, AppError> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Message content must not be empty".to_string(),
            ));
        }

        self.require_contact(user, recipient_id).await?;

        let message = MessageRepository::new(self.db)
            .create(user.id, recipient_id, content)
            .await?;

        Ok(message.into())
    }

    async fn require_contact(
        &self,
        user: &entity::user::Model,
        peer_id: i32,
    ) -> Result<(), AppError> {
        if peer_id == user.id {
            return Err(AppError::BadRequest(
                "Cannot message yourself".to_string(),
            ));
        }

        let contact_ids = self.contact_ids(user).await?;
        if !contact_ids.contains(&peer_id) {
            return Err(AuthError::AccessDenied(
                user.id,
                "message a user outside their contacts".to_string(),
            )
            .into());
        }

        Ok(())
    }

    async fn contact_ids(&self, user: &entity::user::Model) -> Result<Vec<i32>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let message_repo = MessageRepository::new(self.db);

        let role = user_repo
            .find_with_role(user.id)
            .await?
            .and_then(|(_, role)| role)
            .and_then(|r| RoleName::parse(&r.name));

        let ids = match role {
            Some(RoleName::Student) => {
                let student = user_repo
                    .find_student_by_user_id(user.id)
                    .await?
                    .ok_or(AuthError::UserNotInDatabase(user.id))?;
                message_repo.teacher_contacts_of_student(student.id).await?
            }
            Some(RoleName::Teacher) => {
                let teacher = user_repo
                    .find_teacher_by_user_id(user.id)
                    .await?
                    .ok_or(AuthError::UserNotInDatabase(user.id))?;
                message_repo.student_contacts_of_teacher(teacher.id).await?
            }
            Some(RoleName::Admin) => user_repo
                .all_ids()
                .await?
                .into_iter()
                .filter(|id| *id != user.id)
                .collect(),
            _ => Vec::new(),
        };

        Ok(ids)
    }
}
