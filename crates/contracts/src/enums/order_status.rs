use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

/// Situação de uma ordem de produção.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pendente,
    EmProducao,
    Concluido,
    Atrasado,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pendente => "pendente",
            OrderStatus::EmProducao => "em_producao",
            OrderStatus::Concluido => "concluido",
            OrderStatus::Atrasado => "atrasado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pendente => "Pendente",
            OrderStatus::EmProducao => "Em Produção",
            OrderStatus::Concluido => "Concluído",
            OrderStatus::Atrasado => "Atrasado",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            OrderStatus::Pendente => BadgeTone::Muted,
            OrderStatus::EmProducao => BadgeTone::Info,
            OrderStatus::Concluido => BadgeTone::Success,
            OrderStatus::Atrasado => BadgeTone::Danger,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pendente,
            OrderStatus::EmProducao,
            OrderStatus::Concluido,
            OrderStatus::Atrasado,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pendente" => Some(OrderStatus::Pendente),
            "em_producao" => Some(OrderStatus::EmProducao),
            "concluido" => Some(OrderStatus::Concluido),
            "atrasado" => Some(OrderStatus::Atrasado),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
