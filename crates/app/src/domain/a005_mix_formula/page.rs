use super::service;
use crate::domain::a006_quality_test::service as quality_service;
use contracts::domain::a005_mix_formula::aggregate::MixFormula;
use contracts::domain::a006_quality_test::aggregate::QualityTest;
use contracts::shared::indicators::{BadgeTone, StatCard, ValueFormat};
use serde::Serialize;

/// Traços page: formula cards plus the recent quality-test table.
#[derive(Debug, Default)]
pub struct FormulasPage {
    pub query: String,
    pub dialog_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormulasPageView {
    pub cards: Vec<StatCard>,
    pub rows: Vec<MixFormula>,
    pub testes_recentes: Vec<QualityTest>,
    pub dialog_open: bool,
}

impl FormulasPage {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn build(&self, formulas: &[MixFormula], testes: &[QualityTest]) -> FormulasPageView {
        let formula_stats = service::stats(formulas);
        let quality_stats = quality_service::stats(testes);
        let cards = vec![
            StatCard::new(
                "Traços Cadastrados",
                formula_stats.total as f64,
                ValueFormat::Integer,
                BadgeTone::Info,
            ),
            StatCard::new(
                "Traços Ativos",
                formula_stats.ativos as f64,
                ValueFormat::Integer,
                BadgeTone::Success,
            ),
            StatCard::new(
                "Lotes Produzidos",
                formula_stats.lotes_produzidos as f64,
                ValueFormat::Integer,
                BadgeTone::Info,
            ),
            StatCard::new(
                "Taxa de Aprovação",
                quality_stats.taxa_aprovacao as f64,
                ValueFormat::Integer,
                BadgeTone::Warning,
            )
            .with_subtitle("Testes de resistência"),
        ];

        let rows = service::filter(formulas, &self.query)
            .into_iter()
            .cloned()
            .collect();

        FormulasPageView {
            cards,
            rows,
            testes_recentes: testes.to_vec(),
            dialog_open: self.dialog_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mix_formulas::MIX_FORMULAS;
    use crate::fixtures::quality_tests::QUALITY_TESTS;

    #[test]
    fn test_page_composes_formulas_and_tests() {
        let page = FormulasPage::default();
        let view = page.build(&MIX_FORMULAS, &QUALITY_TESTS);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.testes_recentes.len(), 3);
        assert_eq!(view.cards[3].value, 67.0);
    }

    #[test]
    fn test_search_narrows_formula_rows_only() {
        let mut page = FormulasPage::default();
        page.set_query("premium");
        let view = page.build(&MIX_FORMULAS, &QUALITY_TESTS);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.testes_recentes.len(), 3);
    }
}
