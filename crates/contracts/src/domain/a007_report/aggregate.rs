use crate::domain::common::AggregateId;
use crate::enums::ReportStatus;
use crate::shared::validation::{require, ValidationError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub Uuid);

impl ReportId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ReportId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReportId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Relatório já gerado pelo sistema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub nome: String,
    /// Categoria: "producao", "financeiro", "comercial" ou "qualidade".
    pub categoria: String,
    /// Formato do arquivo ("PDF", "Excel").
    pub tipo: String,
    pub data_geracao: NaiveDateTime,
    /// Período coberto ("Janeiro 2024", "Q4 2023").
    pub periodo: String,
    pub status: ReportStatus,
    /// Tamanho do arquivo; "-" enquanto processa.
    pub tamanho: String,
}

/// Entrada do catálogo de tipos de relatório disponíveis.
#[derive(Debug, Clone, Serialize)]
pub struct ReportKind {
    pub id: &'static str,
    pub nome: &'static str,
    pub descricao: &'static str,
}

// ============================================================================
// DTO
// ============================================================================
/// Pedido de geração de relatório (tipo + período).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportRequestDto {
    pub tipo: String,
    pub periodo: String,
    pub data: Option<String>,
}

impl ReportRequestDto {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        require(&mut errors, "tipo", &self.tipo, "Tipo de relatório é obrigatório");
        require(&mut errors, "periodo", &self.periodo, "Período é obrigatório");
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
