use crate::middleware::auth::AuthUser;
use crate::modules::students::model::{
    CreateStudentDto, DeleteStudentResponse, PageQuery, Student, UpdateStudentDto,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use alunos_core::{AppError, pagination::parse_or_zero};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

/// Path ids are parsed leniently: anything that is not an integer becomes 0,
/// which never matches a stored record.
fn student_id(raw: &str) -> i64 {
    parse_or_zero(Some(raw))
}

#[instrument(skip_all)]
pub async fn create_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::create_student(state.store.as_ref(), dto).await?;
    Ok(Json(student))
}

#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::list_students(state.store.as_ref(), &query).await?;
    Ok(Json(students))
}

#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student(state.store.as_ref(), student_id(&id)).await?;
    Ok(Json(student))
}

#[instrument(skip_all)]
pub async fn get_student_by_cpf(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student_by_cpf(state.store.as_ref(), &cpf).await?;
    Ok(Json(student))
}

#[instrument(skip(state, _auth_user, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student =
        StudentService::update_student(state.store.as_ref(), student_id(&id), dto).await?;
    Ok(Json(student))
}

#[instrument(skip(state, _auth_user))]
pub async fn delete_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteStudentResponse>, AppError> {
    StudentService::delete_student(state.store.as_ref(), student_id(&id)).await?;
    Ok(Json(DeleteStudentResponse::default()))
}
