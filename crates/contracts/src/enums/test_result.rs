use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

/// Resultado de um teste de qualidade (resistência + slump).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestResult {
    Aprovado,
    Reprovado,
}

impl TestResult {
    pub fn code(&self) -> &'static str {
        match self {
            TestResult::Aprovado => "aprovado",
            TestResult::Reprovado => "reprovado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestResult::Aprovado => "Aprovado",
            TestResult::Reprovado => "Reprovado",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            TestResult::Aprovado => BadgeTone::Success,
            TestResult::Reprovado => BadgeTone::Danger,
        }
    }

    pub fn all() -> Vec<TestResult> {
        vec![TestResult::Aprovado, TestResult::Reprovado]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "aprovado" => Some(TestResult::Aprovado),
            "reprovado" => Some(TestResult::Reprovado),
            _ => None,
        }
    }
}

impl std::fmt::Display for TestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
