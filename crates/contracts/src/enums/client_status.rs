use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

/// Situação cadastral do cliente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Ativo,
    Inativo,
    Bloqueado,
}

impl ClientStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ClientStatus::Ativo => "ativo",
            ClientStatus::Inativo => "inativo",
            ClientStatus::Bloqueado => "bloqueado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Ativo => "Ativo",
            ClientStatus::Inativo => "Inativo",
            ClientStatus::Bloqueado => "Bloqueado",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ClientStatus::Ativo => BadgeTone::Success,
            ClientStatus::Inativo => BadgeTone::Muted,
            ClientStatus::Bloqueado => BadgeTone::Danger,
        }
    }

    pub fn all() -> Vec<ClientStatus> {
        vec![
            ClientStatus::Ativo,
            ClientStatus::Inativo,
            ClientStatus::Bloqueado,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ativo" => Some(ClientStatus::Ativo),
            "inativo" => Some(ClientStatus::Inativo),
            "bloqueado" => Some(ClientStatus::Bloqueado),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
