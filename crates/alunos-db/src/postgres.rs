//! PostgreSQL-backed [`StudentStore`].

use alunos_core::PageWindow;
use alunos_models::{CreateStudentDto, Student};
use anyhow::{Context, bail};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use crate::store::{StudentFilter, StudentStore};

const STUDENT_COLUMNS: &str = "id, name, cpf, rg, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &StudentFilter) {
    builder.push(" WHERE TRUE");
    if let Some(id) = filter.id {
        builder.push(" AND id = ").push_bind(id);
    }
    if let Some(cpf) = &filter.cpf {
        builder.push(" AND cpf = ").push_bind(cpf.clone());
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    #[instrument(skip(self))]
    async fn find(
        &self,
        filter: &StudentFilter,
        window: Option<PageWindow>,
    ) -> anyhow::Result<Vec<Student>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM alunos",
            STUDENT_COLUMNS
        ));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id");

        if let Some(window) = window {
            builder
                .push(" LIMIT ")
                .push_bind(window.limit)
                .push(" OFFSET ")
                .push_bind(window.offset);
        }

        builder
            .build_query_as::<Student>()
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch students")
    }

    #[instrument(skip(self, fields))]
    async fn create(&self, fields: &CreateStudentDto) -> anyhow::Result<Student> {
        let query = format!(
            r#"
            INSERT INTO alunos (name, cpf, rg, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING {}
            "#,
            STUDENT_COLUMNS
        );

        sqlx::query_as::<_, Student>(&query)
            .bind(&fields.name)
            .bind(&fields.cpf)
            .bind(&fields.rg)
            .fetch_one(&self.pool)
            .await
            .context("Failed to create student")
    }

    #[instrument(skip(self, student), fields(id = student.id))]
    async fn update(&self, student: &Student) -> anyhow::Result<Option<Student>> {
        let query = format!(
            r#"
            UPDATE alunos
            SET name = $1, cpf = $2, rg = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING {}
            "#,
            STUDENT_COLUMNS
        );

        sqlx::query_as::<_, Student>(&query)
            .bind(&student.name)
            .bind(&student.cpf)
            .bind(&student.rg)
            .bind(student.id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to update student")
    }

    #[instrument(skip(self))]
    async fn delete(&self, filter: &StudentFilter) -> anyhow::Result<u64> {
        if filter.is_empty() {
            bail!("Refusing to delete students without a filter");
        }

        let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM alunos");
        push_filter(&mut builder, filter);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .context("Failed to delete students")?;

        Ok(result.rows_affected())
    }
}
