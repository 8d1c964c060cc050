use crate::domain::common::AggregateId;
use crate::enums::FormulaStatus;
use crate::shared::validation::{require, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MixFormulaId(pub Uuid);

impl MixFormulaId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MixFormulaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MixFormulaId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Traço de concreto: proporções de cimento, areia, brita e água.
///
/// As quantidades ficam como grandeza+unidade ("350kg", "175L"), do jeito
/// que aparecem na ficha do traço.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixFormula {
    pub id: MixFormulaId,
    pub nome: String,
    /// Categoria de bloco ("Bloco Estrutural", "Bloco Vedação", ...).
    pub tipo: String,
    pub cimento: String,
    pub areia: String,
    pub brita: String,
    pub agua: String,
    /// "-" quando o traço não leva aditivo.
    pub aditivos: String,
    /// Resistência alvo ("15 MPa").
    pub resistencia: String,
    pub status: FormulaStatus,
    pub ultimo_teste: NaiveDate,
    /// Lotes já produzidos com este traço.
    pub lotes: u32,
}

// ============================================================================
// DTO
// ============================================================================
/// Formulário de cadastro de traço. Campos obrigatórios seguem a ficha:
/// nome, tipo e as quatro quantidades base.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MixFormulaDto {
    pub id: Option<String>,
    pub nome: String,
    pub tipo: String,
    pub cimento: String,
    pub areia: String,
    pub brita: String,
    pub agua: String,
    pub aditivos: Option<String>,
    pub observacoes: Option<String>,
}

impl MixFormulaDto {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        require(&mut errors, "nome", &self.nome, "Nome é obrigatório");
        require(&mut errors, "tipo", &self.tipo, "Tipo é obrigatório");
        require(&mut errors, "cimento", &self.cimento, "Quantidade de cimento é obrigatória");
        require(&mut errors, "areia", &self.areia, "Quantidade de areia é obrigatória");
        require(&mut errors, "brita", &self.brita, "Quantidade de brita é obrigatória");
        require(&mut errors, "agua", &self.agua, "Quantidade de água é obrigatória");
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

    fn filled_dto() -> MixFormulaDto {
        MixFormulaDto {
            nome: "Traço Standard 15MPa".to_string(),
            tipo: "estrutural".to_string(),
            cimento: "350".to_string(),
            areia: "650".to_string(),
            brita: "1200".to_string(),
            agua: "175".to_string(),
            aditivos: Some("Plastificante 2L".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert!(filled_dto().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_cimento() {
        let mut dto = filled_dto();
        dto.cimento = String::new();
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cimento");
        assert_eq!(errors[0].message, "Quantidade de cimento é obrigatória");
    }

    #[test]
    fn test_validate_collects_all_missing_fields() {
        let dto = MixFormulaDto::default();
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 6);
    }
}
