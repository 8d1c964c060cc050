use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

/// Situação de uma conta financeira.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Pendente,
    Vencido,
    Pago,
}

impl EntryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EntryStatus::Pendente => "pendente",
            EntryStatus::Vencido => "vencido",
            EntryStatus::Pago => "pago",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Pendente => "Pendente",
            EntryStatus::Vencido => "Vencido",
            EntryStatus::Pago => "Pago",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            EntryStatus::Pendente => BadgeTone::Warning,
            EntryStatus::Vencido => BadgeTone::Danger,
            EntryStatus::Pago => BadgeTone::Success,
        }
    }

    pub fn all() -> Vec<EntryStatus> {
        vec![EntryStatus::Pendente, EntryStatus::Vencido, EntryStatus::Pago]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pendente" => Some(EntryStatus::Pendente),
            "vencido" => Some(EntryStatus::Vencido),
            "pago" => Some(EntryStatus::Pago),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
