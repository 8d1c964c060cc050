use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStatus {
    Ativo,
    Inativo,
}

impl SupplierStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SupplierStatus::Ativo => "ativo",
            SupplierStatus::Inativo => "inativo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupplierStatus::Ativo => "Ativo",
            SupplierStatus::Inativo => "Inativo",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            SupplierStatus::Ativo => BadgeTone::Success,
            SupplierStatus::Inativo => BadgeTone::Muted,
        }
    }

    pub fn all() -> Vec<SupplierStatus> {
        vec![SupplierStatus::Ativo, SupplierStatus::Inativo]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ativo" => Some(SupplierStatus::Ativo),
            "inativo" => Some(SupplierStatus::Inativo),
            _ => None,
        }
    }
}

impl std::fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
