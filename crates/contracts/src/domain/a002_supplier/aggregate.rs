use crate::domain::common::AggregateId;
use crate::enums::SupplierStatus;
use crate::shared::validation::{require, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Fornecedor de insumos (cimento, agregados, aditivos).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub razao_social: String,
    pub cnpj: String,
    pub contato: String,
    pub telefone: String,
    pub email: String,
    pub cidade: String,
    /// Produtos fornecidos, na ordem cadastrada.
    pub produtos: Vec<String>,
    /// Avaliação de 0.0 a 5.0.
    pub avaliacao: f64,
    pub status: SupplierStatus,
    pub ultima_compra: NaiveDate,
    pub valor_total: String,
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    pub id: Option<String>,
    #[serde(rename = "razaoSocial")]
    pub razao_social: String,
    pub cnpj: String,
    pub contato: String,
    pub telefone: String,
    pub email: String,
    pub cidade: String,
    pub produtos: Vec<String>,
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        require(
            &mut errors,
            "razaoSocial",
            &self.razao_social,
            "Razão social é obrigatória",
        );
        require(&mut errors, "cnpj", &self.cnpj, "CNPJ é obrigatório");
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
