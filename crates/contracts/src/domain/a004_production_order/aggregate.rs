use crate::domain::common::AggregateId;
use crate::enums::OrderStatus;
use crate::shared::validation::{require, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionOrderId(pub Uuid);

impl ProductionOrderId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductionOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductionOrderId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Ordem de produção (OP): quantidade planejada versus produzida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub id: ProductionOrderId,
    /// Número de negócio ("OP-2024-001").
    pub numero: String,
    pub cliente: String,
    pub produto: String,
    /// Referência ao traço utilizado ("Traço 1:2:3").
    pub traco: String,
    pub quantidade: u32,
    /// Pode ficar atrás da quantidade planejada; nunca é negativa.
    pub quantidade_produzida: u32,
    pub data_inicio: NaiveDate,
    pub data_prevista: NaiveDate,
    pub status: OrderStatus,
    pub responsavel: String,
    pub observacoes: Option<String>,
}

impl ProductionOrder {
    /// Progresso da produção em percentual arredondado. Quantidade planejada
    /// zero conta como 0%.
    pub fn progress_percentage(&self) -> u32 {
        if self.quantidade == 0 {
            return 0;
        }
        (self.quantidade_produzida as f64 / self.quantidade as f64 * 100.0).round() as u32
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductionOrderDto {
    pub id: Option<String>,
    pub cliente: String,
    pub produto: String,
    pub traco: String,
    pub quantidade: Option<u32>,
    #[serde(rename = "dataPrevista")]
    pub data_prevista: String,
    pub responsavel: String,
    pub observacoes: Option<String>,
}

impl ProductionOrderDto {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        require(&mut errors, "cliente", &self.cliente, "Cliente é obrigatório");
        require(&mut errors, "produto", &self.produto, "Produto é obrigatório");
        require(&mut errors, "traco", &self.traco, "Traço é obrigatório");
        if self.quantidade.unwrap_or(0) == 0 {
            errors.push(ValidationError::new(
                "quantidade",
                "Quantidade deve ser maior que zero",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
