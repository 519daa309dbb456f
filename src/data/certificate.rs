use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::certificate::CertificateDto;

pub struct CertificateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a newly submitted certificate in "pending" status.
    pub async fn create(
        &self,
        teacher_id: i32,
        name: String,
        file_url: String,
        issued_date: NaiveDate,
    ) -> Result<entity::teacher_certificate::Model, DbErr> {
        entity::teacher_certificate::ActiveModel {
            teacher_id: ActiveValue::Set(teacher_id),
            name: ActiveValue::Set(name),
            file_url: ActiveValue::Set(file_url),
            issued_date: ActiveValue::Set(issued_date),
            status: ActiveValue::Set("pending".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::teacher_certificate::Model>, DbErr> {
        entity::prelude::TeacherCertificate::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_for_teacher(
        &self,
        teacher_id: i32,
    ) -> Result<Vec<entity::teacher_certificate::Model>, DbErr> {
        entity::prelude::TeacherCertificate::find()
            .filter(entity::teacher_certificate::Column::TeacherId.eq(teacher_id))
            .order_by_desc(entity::teacher_certificate::Column::IssuedDate)
            .all(self.db)
            .await
    }

    /// All certificates with teacher names, optionally filtered by status,
    /// for the admin review queue.
    pub async fn get_all_enriched(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<CertificateDto>, DbErr> {
        let mut query = entity::prelude::TeacherCertificate::find()
            .order_by_desc(entity::teacher_certificate::Column::Id);

        if let Some(status) = status {
            query = query.filter(entity::teacher_certificate::Column::Status.eq(status));
        }

        let certificates = query.all(self.db).await?;

        let teacher_names = super::user::UserRepository::new(self.db)
            .full_names_for_teachers(certificates.iter().map(|c| c.teacher_id).collect())
            .await?;

        Ok(certificates
            .into_iter()
            .map(|c| {
                let teacher_name = teacher_names.get(&c.teacher_id).cloned();
                CertificateDto::from_model(c, teacher_name)
            })
            .collect())
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: String,
    ) -> Result<entity::teacher_certificate::Model, DbErr> {
        let certificate = entity::prelude::TeacherCertificate::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Certificate with id {id} not found"
            )))?;

        let mut active_model: entity::teacher_certificate::ActiveModel = certificate.into();
        active_model.status = ActiveValue::Set(status);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TeacherCertificate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
