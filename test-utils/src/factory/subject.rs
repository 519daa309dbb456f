//! Subject factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a subject with a unique name and code.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    let id = next_id();

    entity::subject::ActiveModel {
        name: ActiveValue::Set(format!("Subject {}", id)),
        code: ActiveValue::Set(format!("SUB{}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
