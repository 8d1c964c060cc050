use crate::domain::common::AggregateId;
use crate::enums::{EntryDirection, EntryStatus};
use crate::shared::validation::{require, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinancialEntryId(pub Uuid);

impl FinancialEntryId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for FinancialEntryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FinancialEntryId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Conta a receber ou a pagar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: FinancialEntryId,
    pub direcao: EntryDirection,
    pub descricao: String,
    /// Valor como exibido ("R$ 45.800").
    pub valor: String,
    pub vencimento: NaiveDate,
    pub status: EntryStatus,
    /// Contraparte: nome do cliente (contas a receber).
    pub cliente: Option<String>,
    /// Contraparte: nome do fornecedor (contas a pagar).
    pub fornecedor: Option<String>,
    pub categoria: String,
}

impl FinancialEntry {
    /// Descrição da contraparte exibida na lista.
    pub fn counterparty_label(&self) -> String {
        match self.direcao {
            EntryDirection::Receber => match &self.cliente {
                Some(cliente) => format!("Cliente: {}", cliente),
                None => "Recebimento avulso".to_string(),
            },
            EntryDirection::Pagar => match &self.fornecedor {
                Some(fornecedor) => format!("Fornecedor: {}", fornecedor),
                None => "Despesa operacional".to_string(),
            },
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FinancialEntryDto {
    pub id: Option<String>,
    pub direcao: Option<String>,
    pub descricao: String,
    pub valor: String,
    pub vencimento: String,
    pub categoria: String,
}

impl FinancialEntryDto {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        require(&mut errors, "descricao", &self.descricao, "Descrição é obrigatória");
        require(&mut errors, "valor", &self.valor, "Valor é obrigatório");
        require(&mut errors, "vencimento", &self.vencimento, "Vencimento é obrigatório");
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
