use sea_orm::DatabaseConnection;

use crate::data::academic_year::AcademicYearRepository;
use crate::error::AppError;
use crate::model::academic_year::{AcademicYearDto, SaveAcademicYearDto};

pub struct AcademicYearService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicYearService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveAcademicYearDto) -> Result<AcademicYearDto, AppError> {
        validate_dates(&params)?;

        let repo = AcademicYearRepository::new(self.db);
        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(format!(
                "Academic year {} already exists",
                params.name
            )));
        }

        Ok(repo.create(params).await?.into())
    }

    pub async fn get_all(&self) -> Result<Vec<AcademicYearDto>, AppError> {
        let years = AcademicYearRepository::new(self.db).get_all().await?;

        Ok(years.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveAcademicYearDto,
    ) -> Result<AcademicYearDto, AppError> {
        validate_dates(&params)?;

        let repo = AcademicYearRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Academic year {id} not found")));
        }
        if repo.name_taken(&params.name, Some(id)).await? {
            return Err(AppError::Conflict(format!(
                "Academic year {} already exists",
                params.name
            )));
        }

        Ok(repo.update(id, params).await?.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AcademicYearRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Academic year {id} not found")));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

fn validate_dates(params: &SaveAcademicYearDto) -> Result<(), AppError> {
    if params.end_date <= params.start_date {
        return Err(AppError::BadRequest(
            "End date must be after start date".to_string(),
        ));
    }

    Ok(())
}
