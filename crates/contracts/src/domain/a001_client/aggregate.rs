use crate::domain::common::AggregateId;
use crate::enums::{ClientStatus, ClientType};
use crate::shared::money;
use crate::shared::validation::{require, require_opt, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Cadastro de cliente: pessoa física, construtora ou revenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub nome: String,
    /// CPF ou CNPJ, conforme o tipo.
    pub documento: String,
    pub tipo: ClientType,
    pub contato: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,
    /// Valores monetários como exibidos no cadastro ("R$ 500.000").
    pub limite_credito: String,
    pub credito_utilizado: String,
    pub status: ClientStatus,
    pub ultima_compra: NaiveDate,
    pub total_compras: String,
}

impl Client {
    /// Percentual do limite de crédito já utilizado (limite zero conta 0%).
    pub fn credit_percentage(&self) -> u32 {
        money::credit_percentage(&self.credito_utilizado, &self.limite_credito)
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub nome: String,
    pub documento: String,
    pub tipo: Option<String>,
    pub contato: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,
    #[serde(rename = "limiteCredito")]
    pub limite_credito: String,
}

impl ClientDto {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        require(&mut errors, "nome", &self.nome, "Nome é obrigatório");
        require(&mut errors, "documento", &self.documento, "Documento é obrigatório");
        require_opt(&mut errors, "tipo", self.tipo.as_deref(), "Tipo é obrigatório");
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_validate_requires_nome_documento_tipo() {
        let dto = ClientDto {
            nome: "Construtora Nova".to_string(),
            documento: String::new(),
            tipo: Some("construtora".to_string()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "documento");
    }

    #[test]
    fn test_dto_validate_treats_missing_tipo_as_blank() {
        let dto = ClientDto {
            nome: "Construtora Nova".to_string(),
            documento: "11.222.333/0001-44".to_string(),
            tipo: None,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tipo");
        assert_eq!(errors[0].message, "Tipo é obrigatório");
    }
}
