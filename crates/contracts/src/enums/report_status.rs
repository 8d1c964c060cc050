use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

/// Situação de geração de um relatório.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Concluido,
    Processando,
    Erro,
}

impl ReportStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReportStatus::Concluido => "concluido",
            ReportStatus::Processando => "processando",
            ReportStatus::Erro => "erro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Concluido => "Concluído",
            ReportStatus::Processando => "Processando",
            ReportStatus::Erro => "Erro",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ReportStatus::Concluido => BadgeTone::Success,
            ReportStatus::Processando => BadgeTone::Info,
            ReportStatus::Erro => BadgeTone::Danger,
        }
    }

    pub fn all() -> Vec<ReportStatus> {
        vec![
            ReportStatus::Concluido,
            ReportStatus::Processando,
            ReportStatus::Erro,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "concluido" => Some(ReportStatus::Concluido),
            "processando" => Some(ReportStatus::Processando),
            "erro" => Some(ReportStatus::Erro),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
