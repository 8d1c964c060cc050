use crate::domain::common::AggregateId;
use crate::enums::TestResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualityTestId(pub Uuid);

impl QualityTestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for QualityTestId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(QualityTestId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Teste de qualidade de um traço: resistência medida e slump test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityTest {
    pub id: QualityTestId,
    /// Nome do traço testado.
    pub traco: String,
    pub data: NaiveDate,
    /// Resistência medida ("16.2 MPa").
    pub resistencia: String,
    /// Medida do slump test ("8cm").
    pub slump: String,
    pub resultado: TestResult,
    pub responsavel: String,
}
