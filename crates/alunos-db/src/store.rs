//! Store abstraction for student records.
//!
//! The record service talks to persistence only through [`StudentStore`]:
//! a filtered find, a create, an update and a delete-by-filter. Backends own
//! their concurrency; the service adds no locking or transactions on top.

use std::fmt::Debug;

use alunos_core::PageWindow;
use alunos_models::{CreateStudentDto, Student};
use async_trait::async_trait;

/// Row filter. Unset fields match everything; set fields must all match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub id: Option<i64>,
    pub cpf: Option<String>,
}

impl StudentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_cpf(cpf: impl Into<String>) -> Self {
        Self {
            cpf: Some(cpf.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.cpf.is_none()
    }

    pub fn matches(&self, student: &Student) -> bool {
        self.id.is_none_or(|id| student.id == id)
            && self.cpf.as_deref().is_none_or(|cpf| student.cpf == cpf)
    }
}

#[async_trait]
pub trait StudentStore: Send + Sync + Debug {
    /// Rows matching `filter`, ordered by id, sliced by `window` when given.
    async fn find(
        &self,
        filter: &StudentFilter,
        window: Option<PageWindow>,
    ) -> anyhow::Result<Vec<Student>>;

    /// Inserts a row and returns it with its assigned id and timestamps.
    async fn create(&self, fields: &CreateStudentDto) -> anyhow::Result<Student>;

    /// Overwrites the mutable fields of the row with `student.id`.
    ///
    /// Returns `None` when no such row exists.
    async fn update(&self, student: &Student) -> anyhow::Result<Option<Student>>;

    /// Deletes every row matching `filter` and returns how many were removed.
    ///
    /// An empty filter is refused rather than wiping the table.
    async fn delete(&self, filter: &StudentFilter) -> anyhow::Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i64, cpf: &str) -> Student {
        Student {
            id,
            name: "Ana".to_string(),
            cpf: cpf.to_string(),
            rg: "123456789".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(StudentFilter::all().matches(&student(1, "12345678901")));
        assert!(StudentFilter::all().is_empty());
    }

    #[test]
    fn test_by_id() {
        let filter = StudentFilter::by_id(2);
        assert!(filter.matches(&student(2, "12345678901")));
        assert!(!filter.matches(&student(3, "12345678901")));
    }

    #[test]
    fn test_by_cpf() {
        let filter = StudentFilter::by_cpf("12345678901");
        assert!(filter.matches(&student(9, "12345678901")));
        assert!(!filter.matches(&student(9, "10987654321")));
        assert!(!filter.is_empty());
    }
}
