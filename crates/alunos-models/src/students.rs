//! Student domain models and DTOs.
//!
//! A student ("aluno") has a store-assigned numeric id, a name, a CPF
//! (national id, 11 characters) and an RG (secondary id, 9 characters).
//! Field rules are checked on [`CreateStudentDto`]; updates are merged onto
//! the stored fields first and then checked with the same rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A student as stored.
///
/// An `id` of `0` means the record has not been persisted.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub rg: String,
    #[sqlx(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[sqlx(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// The mutable fields of this record.
    pub fn fields(&self) -> CreateStudentDto {
        CreateStudentDto {
            name: self.name.clone(),
            cpf: self.cpf.clone(),
            rg: self.rg.clone(),
        }
    }

    /// Overwrites the mutable fields, leaving id and timestamps alone.
    pub fn with_fields(self, fields: CreateStudentDto) -> Self {
        Self {
            name: fields.name,
            cpf: fields.cpf,
            rg: fields.rg,
            ..self
        }
    }
}

/// DTO for creating a student. Also the validated field set for updates.
///
/// Missing fields deserialize as empty strings and then fail validation.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CreateStudentDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(equal = 11, message = "cpf must have exactly 11 characters"))]
    pub cpf: String,
    #[serde(default)]
    #[validate(length(equal = 9, message = "rg must have exactly 9 characters"))]
    pub rg: String,
}

/// DTO for updating a student.
///
/// Only provided fields overwrite the stored ones. Provided fields are held
/// to the same rules as on create.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(equal = 11, message = "cpf must have exactly 11 characters"))]
    pub cpf: Option<String>,
    #[validate(length(equal = 9, message = "rg must have exactly 9 characters"))]
    pub rg: Option<String>,
}

impl UpdateStudentDto {
    pub fn overlay(self, base: CreateStudentDto) -> CreateStudentDto {
        CreateStudentDto {
            name: self.name.unwrap_or(base.name),
            cpf: self.cpf.unwrap_or(base.cpf),
            rg: self.rg.unwrap_or(base.rg),
        }
    }
}

/// Body returned by a successful delete.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeleteStudentResponse {
    pub data: String,
}

impl Default for DeleteStudentResponse {
    fn default() -> Self {
        Self {
            data: "Aluno deletado com sucesso".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateStudentDto {
        CreateStudentDto {
            name: "Ana".to_string(),
            cpf: "12345678901".to_string(),
            rg: "123456789".to_string(),
        }
    }

    #[test]
    fn test_create_student_dto_validation() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_create_student_dto_empty_name() {
        let dto = CreateStudentDto {
            name: "".to_string(),
            ..valid_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_student_dto_cpf_length() {
        for cpf in ["", "1234567890", "123456789012"] {
            let dto = CreateStudentDto {
                cpf: cpf.to_string(),
                ..valid_dto()
            };
            assert!(dto.validate().is_err(), "cpf {:?} should be rejected", cpf);
        }
    }

    #[test]
    fn test_create_student_dto_rg_length() {
        for rg in ["", "12345678", "1234567890"] {
            let dto = CreateStudentDto {
                rg: rg.to_string(),
                ..valid_dto()
            };
            assert!(dto.validate().is_err(), "rg {:?} should be rejected", rg);
        }
    }

    #[test]
    fn test_lengths_count_characters() {
        let dto = CreateStudentDto {
            name: "José".to_string(),
            cpf: "1234567890é".to_string(),
            rg: "12345678ã".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_student_dto_missing_fields_fail_validation() {
        let dto: CreateStudentDto = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_overlay_keeps_unsent_fields() {
        let dto = UpdateStudentDto {
            name: Some("Ana Maria".to_string()),
            ..Default::default()
        };
        let merged = dto.overlay(valid_dto());
        assert_eq!(merged.name, "Ana Maria");
        assert_eq!(merged.cpf, "12345678901");
        assert_eq!(merged.rg, "123456789");
    }

    #[test]
    fn test_update_overlay_onto_blank_record() {
        let dto = UpdateStudentDto {
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        let merged = dto.overlay(CreateStudentDto::default());
        assert!(merged.validate().is_err());
    }

    #[test]
    fn test_update_dto_checks_only_provided_fields() {
        assert!(UpdateStudentDto::default().validate().is_ok());

        let dto = UpdateStudentDto {
            cpf: Some("123".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_student_with_fields_keeps_identity() {
        let student = Student {
            id: 7,
            name: "Ana".to_string(),
            cpf: "12345678901".to_string(),
            rg: "123456789".to_string(),
            created_at: None,
            updated_at: None,
        };
        let updated = student.with_fields(CreateStudentDto {
            name: "Bia".to_string(),
            ..valid_dto()
        });
        assert_eq!(updated.id, 7);
        assert_eq!(updated.name, "Bia");
    }

    #[test]
    fn test_is_persisted() {
        let mut student = Student {
            id: 0,
            name: String::new(),
            cpf: String::new(),
            rg: String::new(),
            created_at: None,
            updated_at: None,
        };
        assert!(!student.is_persisted());
        student.id = 1;
        assert!(student.is_persisted());
    }
}
