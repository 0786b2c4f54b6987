use crate::modules::students::model::{CreateStudentDto, PageQuery, Student, UpdateStudentDto};
use crate::validator::validation_error;
use alunos_core::AppError;
use alunos_db::{StudentFilter, StudentStore};
use anyhow::anyhow;
use tracing::{info, instrument};
use validator::Validate;

const NOT_FOUND_MESSAGE: &str = "Aluno não encontrado";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(store, dto))]
    pub async fn create_student(
        store: &dyn StudentStore,
        dto: CreateStudentDto,
    ) -> Result<Student, AppError> {
        dto.validate().map_err(validation_error)?;

        let student = store.create(&dto).await.map_err(AppError::database)?;
        info!(id = student.id, "Student created");

        Ok(student)
    }

    /// Lists students in id order, sliced by `page`/`limit` when either is set.
    #[instrument(skip(store))]
    pub async fn list_students(
        store: &dyn StudentStore,
        query: &PageQuery,
    ) -> Result<Vec<Student>, AppError> {
        store
            .find(&StudentFilter::all(), query.window())
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_student(store: &dyn StudentStore, id: i64) -> Result<Student, AppError> {
        if id == 0 {
            return Err(AppError::not_found(anyhow!(NOT_FOUND_MESSAGE)));
        }

        Self::find_first(store, &StudentFilter::by_id(id)).await
    }

    /// Returns the lowest-id student holding `cpf`.
    #[instrument(skip_all)]
    pub async fn get_student_by_cpf(
        store: &dyn StudentStore,
        cpf: &str,
    ) -> Result<Student, AppError> {
        Self::find_first(store, &StudentFilter::by_cpf(cpf)).await
    }

    /// Overlays the submitted fields onto the stored record and saves it.
    ///
    /// When no record has `id`, the overlaid fields are saved as a new row
    /// with a store-assigned id.
    #[instrument(skip(store, dto))]
    pub async fn update_student(
        store: &dyn StudentStore,
        id: i64,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let existing = store
            .find(&StudentFilter::by_id(id), None)
            .await
            .map_err(AppError::database)?
            .into_iter()
            .next()
            .filter(Student::is_persisted);

        let base = existing
            .as_ref()
            .map(Student::fields)
            .unwrap_or_default();
        let fields = dto.overlay(base);
        fields.validate().map_err(validation_error)?;

        if let Some(existing) = existing {
            let changed = existing.with_fields(fields.clone());
            if let Some(updated) = store.update(&changed).await.map_err(AppError::database)? {
                info!(id = updated.id, "Student updated");
                return Ok(updated);
            }
        }

        let created = store.create(&fields).await.map_err(AppError::database)?;
        info!(id = created.id, "Student saved as new record");

        Ok(created)
    }

    /// Deletes the student with `id`. Succeeds whether or not a row matched.
    #[instrument(skip(store))]
    pub async fn delete_student(store: &dyn StudentStore, id: i64) -> Result<(), AppError> {
        let deleted = store
            .delete(&StudentFilter::by_id(id))
            .await
            .map_err(AppError::database)?;
        info!(deleted, "Student delete processed");

        Ok(())
    }

    async fn find_first(
        store: &dyn StudentStore,
        filter: &StudentFilter,
    ) -> Result<Student, AppError> {
        let student = store
            .find(filter, None)
            .await
            .map_err(AppError::database)?
            .into_iter()
            .next()
            .filter(Student::is_persisted)
            .ok_or_else(|| AppError::not_found(anyhow!(NOT_FOUND_MESSAGE)))?;

        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alunos_db::MemoryStudentStore;
    use axum::http::StatusCode;

    fn ana() -> CreateStudentDto {
        CreateStudentDto {
            name: "Ana".to_string(),
            cpf: "12345678901".to_string(),
            rg: "123456789".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields_without_touching_store() {
        let store = MemoryStudentStore::new();
        let dto = CreateStudentDto {
            cpf: "123".to_string(),
            ..ana()
        };

        let err = StudentService::create_student(&store, dto).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_student_with_zero_id_is_not_found() {
        let store = MemoryStudentStore::new();
        StudentService::create_student(&store, ana()).await.unwrap();

        let err = StudentService::get_student(&store, 0).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Aluno não encontrado");
    }

    #[tokio::test]
    async fn test_get_by_cpf_returns_lowest_id() {
        let store = MemoryStudentStore::new();
        let first = StudentService::create_student(&store, ana()).await.unwrap();
        StudentService::create_student(
            &store,
            CreateStudentDto {
                name: "Ana Clara".to_string(),
                ..ana()
            },
        )
        .await
        .unwrap();

        let found = StudentService::get_student_by_cpf(&store, "12345678901")
            .await
            .unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_update_keeps_unsent_fields() {
        let store = MemoryStudentStore::new();
        let created = StudentService::create_student(&store, ana()).await.unwrap();

        let dto = UpdateStudentDto {
            name: Some("Ana Maria".to_string()),
            ..Default::default()
        };
        let updated = StudentService::update_student(&store, created.id, dto)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.cpf, created.cpf);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_that_breaks_invariants_is_rejected() {
        let store = MemoryStudentStore::new();
        let created = StudentService::create_student(&store, ana()).await.unwrap();

        let dto = UpdateStudentDto {
            rg: Some("1".to_string()),
            ..Default::default()
        };
        let err = StudentService::update_student(&store, created.id, dto)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let stored = StudentService::get_student(&store, created.id).await.unwrap();
        assert_eq!(stored.rg, "123456789");
    }

    #[tokio::test]
    async fn test_update_of_missing_id_saves_new_record() {
        let store = MemoryStudentStore::new();
        let dto = UpdateStudentDto {
            name: Some("Bia".to_string()),
            cpf: Some("10987654321".to_string()),
            rg: Some("987654321".to_string()),
        };

        let saved = StudentService::update_student(&store, 99, dto).await.unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(saved.name, "Bia");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_of_missing_id_with_partial_body_is_rejected() {
        let store = MemoryStudentStore::new();
        let dto = UpdateStudentDto {
            name: Some("Bia".to_string()),
            ..Default::default()
        };

        let err = StudentService::update_student(&store, 99, dto).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let store = MemoryStudentStore::new();
        assert!(StudentService::delete_student(&store, 42).await.is_ok());
    }
}
