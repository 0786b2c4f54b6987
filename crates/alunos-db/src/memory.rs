//! In-memory [`StudentStore`].
//!
//! Rows live in a `BTreeMap` keyed by id behind a tokio `RwLock`, so reads run
//! concurrently and writes are serialized. Ids start at 1 and are never
//! reused.

use std::collections::BTreeMap;

use alunos_core::PageWindow;
use alunos_models::{CreateStudentDto, Student};
use anyhow::bail;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::store::{StudentFilter, StudentStore};

#[derive(Debug, Default)]
struct Rows {
    by_id: BTreeMap<i64, Student>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    rows: RwLock<Rows>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn find(
        &self,
        filter: &StudentFilter,
        window: Option<PageWindow>,
    ) -> anyhow::Result<Vec<Student>> {
        let rows = self.rows.read().await;
        let matching = rows.by_id.values().filter(|s| filter.matches(s)).cloned();

        Ok(match window {
            Some(window) => window.apply(matching).collect(),
            None => matching.collect(),
        })
    }

    async fn create(&self, fields: &CreateStudentDto) -> anyhow::Result<Student> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;

        let now = Utc::now();
        let student = Student {
            id: rows.last_id,
            name: fields.name.clone(),
            cpf: fields.cpf.clone(),
            rg: fields.rg.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        };
        rows.by_id.insert(student.id, student.clone());

        Ok(student)
    }

    async fn update(&self, student: &Student) -> anyhow::Result<Option<Student>> {
        let mut rows = self.rows.write().await;

        let Some(existing) = rows.by_id.get_mut(&student.id) else {
            return Ok(None);
        };

        existing.name = student.name.clone();
        existing.cpf = student.cpf.clone();
        existing.rg = student.rg.clone();
        existing.updated_at = Some(Utc::now());

        Ok(Some(existing.clone()))
    }

    async fn delete(&self, filter: &StudentFilter) -> anyhow::Result<u64> {
        if filter.is_empty() {
            bail!("Refusing to delete students without a filter");
        }

        let mut rows = self.rows.write().await;
        let before = rows.by_id.len();
        rows.by_id.retain(|_, s| !filter.matches(s));

        Ok((before - rows.by_id.len()) as u64)
    }
}
