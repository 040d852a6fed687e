//! Student (aluno) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::ToSchema;
use validator::Validate;

/// Student record as returned by the remote API
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Aluno {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub cpf: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub nome: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub sobrenome: String,
    #[serde(default)]
    pub nascimento: Option<NaiveDate>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub email: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tel1: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tel2: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub endereco: String,
}

impl Aluno {
    pub fn nome_completo(&self) -> String {
        format!("{} {}", self.nome, self.sobrenome).trim().to_string()
    }
}

/// Create student request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAluno {
    #[validate(length(min = 1, message = "Por favor, preencha os campos obrigatórios"))]
    pub cpf: String,
    #[validate(length(min = 1, message = "Por favor, preencha os campos obrigatórios"))]
    pub nome: String,
    #[serde(default)]
    pub sobrenome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nascimento: Option<NaiveDate>,
    #[validate(email(message = "Email inválido"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub tel1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel2: Option<String>,
    #[serde(default)]
    pub endereco: String,
}

/// Field updates for a student. Only the fields present are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct AlunoUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sobrenome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nascimento: Option<NaiveDate>,
    #[validate(email(message = "Email inválido"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
}

impl AlunoUpdates {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Mutation answer from the remote API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlunoResponse {
    pub status: String,
    pub dados: Aluno,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_become_empty_strings() {
        let aluno: Aluno = serde_json::from_str(
            r#"{"id": 3, "cpf": "123", "nome": "Ana", "sobrenome": null, "nascimento": "2001-05-04",
                "email": "ana@x.com", "tel1": "1", "tel2": null, "endereco": "Rua A"}"#,
        )
        .unwrap();
        assert_eq!(aluno.sobrenome, "");
        assert_eq!(aluno.tel2, "");
        assert_eq!(aluno.nascimento, NaiveDate::from_ymd_opt(2001, 5, 4));
        assert_eq!(aluno.nome_completo(), "Ana");
    }

    #[test]
    fn test_updates_serialize_only_present_fields() {
        let updates = AlunoUpdates {
            email: Some("b@x.com".into()),
            ..Default::default()
        };
        assert!(!updates.is_empty());
        assert_eq!(
            serde_json::to_value(&updates).unwrap(),
            serde_json::json!({"email": "b@x.com"})
        );
        assert!(AlunoUpdates::default().is_empty());
    }
}
