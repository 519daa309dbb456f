use sea_orm::DatabaseConnection;

use crate::data::academic_year::AcademicYearRepository;
use crate::data::semester::SemesterRepository;
use crate::error::AppError;
use crate::model::semester::{SaveSemesterDto, SemesterDto};

pub struct SemesterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SemesterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveSemesterDto) -> Result<SemesterDto, AppError> {
        self.validate(&params, None).await?;

        Ok(SemesterRepository::new(self.db).create(params).await?.into())
    }

    pub async fn get_all(&self, academic_year_id: Option<i32>) -> Result<Vec<SemesterDto>, AppError> {
        let repo = SemesterRepository::new(self.db);
        let semesters = match academic_year_id {
            Some(year_id) => repo.get_by_year(year_id).await?,
            None => repo.get_all().await?,
        };

        Ok(semesters.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i32, params: SaveSemesterDto) -> Result<SemesterDto, AppError> {
        let repo = SemesterRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Semester {id} not found")));
        }

        self.validate(&params, Some(id)).await?;

        Ok(repo.update(id, params).await?.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SemesterRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Semester {id} not found")));
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn validate(
        &self,
        params: &SaveSemesterDto,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if params.end_date <= params.start_date {
            return Err(AppError::BadRequest(
                "End date must be after start date".to_string(),
            ));
        }

        if AcademicYearRepository::new(self.db)
            .get_by_id(params.academic_year_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Academic year {} does not exist",
                params.academic_year_id
            )));
        }

        if SemesterRepository::new(self.db)
            .name_taken_in_year(params.academic_year_id, &params.name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Semester {} already exists in this academic year",
                params.name
            )));
        }

        Ok(())
    }
}
