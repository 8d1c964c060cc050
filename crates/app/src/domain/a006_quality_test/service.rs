use contracts::domain::a006_quality_test::aggregate::QualityTest;
use contracts::enums::TestResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityStats {
    pub total: usize,
    pub aprovados: usize,
    pub reprovados: usize,
    /// Rounded share of approved tests; empty fixture counts as 0.
    pub taxa_aprovacao: u32,
}

pub fn stats(records: &[QualityTest]) -> QualityStats {
    let aprovados = records
        .iter()
        .filter(|t| t.resultado == TestResult::Aprovado)
        .count();
    let taxa_aprovacao = if records.is_empty() {
        0
    } else {
        (aprovados as f64 / records.len() as f64 * 100.0).round() as u32
    };
    QualityStats {
        total: records.len(),
        aprovados,
        reprovados: records.len() - aprovados,
        taxa_aprovacao,
    }
}

/// Tests of one formula, newest first.
pub fn tests_for<'a>(records: &'a [QualityTest], traco: &str) -> Vec<&'a QualityTest> {
    let mut found: Vec<&QualityTest> = records.iter().filter(|t| t.traco == traco).collect();
    found.sort_by(|a, b| b.data.cmp(&a.data));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::quality_tests::QUALITY_TESTS;

    #[test]
    fn test_approval_rate_over_seed_tests() {
        let s = stats(&QUALITY_TESTS);
        assert_eq!(s.total, 3);
        assert_eq!(s.aprovados, 2);
        assert_eq!(s.reprovados, 1);
        assert_eq!(s.taxa_aprovacao, 67);
    }

    #[test]
    fn test_empty_fixture_rate_is_zero() {
        assert_eq!(stats(&[]).taxa_aprovacao, 0);
    }

    #[test]
    fn test_tests_for_formula_newest_first() {
        let found = tests_for(&QUALITY_TESTS, "Traço Standard 15MPa");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].resistencia, "16.2 MPa");
        assert_eq!(found[1].resistencia, "13.5 MPa");
    }
}
