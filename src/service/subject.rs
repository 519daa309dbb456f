use sea_orm::DatabaseConnection;

use crate::data::subject::SubjectRepository;
use crate::error::AppError;
use crate::model::subject::{SaveSubjectDto, SubjectDto};

pub struct SubjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveSubjectDto) -> Result<SubjectDto, AppError> {
        let repo = SubjectRepository::new(self.db);
        if repo.code_taken(&params.code, None).await? {
            return Err(AppError::Conflict(format!(
                "Subject code {} is already in use",
                params.code
            )));
        }

        Ok(repo.create(params).await?.into())
    }

    pub async fn get_all(&self) -> Result<Vec<SubjectDto>, AppError> {
        let subjects = SubjectRepository::new(self.db).get_all().await?;

        Ok(subjects.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i32, params: SaveSubjectDto) -> Result<SubjectDto, AppError> {
        let repo = SubjectRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Subject {id} not found")));
        }
        if repo.code_taken(&params.code, Some(id)).await? {
            return Err(AppError::Conflict(format!(
                "Subject code {} is already in use",
                params.code
            )));
        }

        Ok(repo.update(id, params).await?.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SubjectRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Subject {id} not found")));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
