use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaStatus {
    Ativo,
    Inativo,
}

impl FormulaStatus {
    pub fn code(&self) -> &'static str {
        match self {
            FormulaStatus::Ativo => "ativo",
            FormulaStatus::Inativo => "inativo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormulaStatus::Ativo => "Ativo",
            FormulaStatus::Inativo => "Inativo",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            FormulaStatus::Ativo => BadgeTone::Success,
            FormulaStatus::Inativo => BadgeTone::Muted,
        }
    }

    pub fn all() -> Vec<FormulaStatus> {
        vec![FormulaStatus::Ativo, FormulaStatus::Inativo]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ativo" => Some(FormulaStatus::Ativo),
            "inativo" => Some(FormulaStatus::Inativo),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormulaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
