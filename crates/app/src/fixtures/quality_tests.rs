use super::date;
use contracts::domain::a006_quality_test::aggregate::{QualityTest, QualityTestId};
use contracts::enums::TestResult;
use once_cell::sync::Lazy;

pub static QUALITY_TESTS: Lazy<Vec<QualityTest>> = Lazy::new(|| {
    vec![
        QualityTest {
            id: QualityTestId::new_v4(),
            traco: "Traço Standard 15MPa".to_string(),
            data: date(2024, 1, 15),
            resistencia: "16.2 MPa".to_string(),
            slump: "8cm".to_string(),
            resultado: TestResult::Aprovado,
            responsavel: "João Silva".to_string(),
        },
        QualityTest {
            id: QualityTestId::new_v4(),
            traco: "Traço Premium 20MPa".to_string(),
            data: date(2024, 1, 12),
            resistencia: "21.8 MPa".to_string(),
            slump: "10cm".to_string(),
            resultado: TestResult::Aprovado,
            responsavel: "Maria Santos".to_string(),
        },
        QualityTest {
            id: QualityTestId::new_v4(),
            traco: "Traço Standard 15MPa".to_string(),
            data: date(2024, 1, 10),
            resistencia: "13.5 MPa".to_string(),
            slump: "6cm".to_string(),
            resultado: TestResult::Reprovado,
            responsavel: "João Silva".to_string(),
        },
    ]
});
