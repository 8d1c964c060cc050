use super::service;
use contracts::domain::a007_report::aggregate::{Report, ReportKind};
use contracts::shared::indicators::{BadgeTone, StatCard, ValueFormat};
use serde::Serialize;

/// Reports page: the type catalog, the generated-report history and the
/// request form selection.
#[derive(Debug, Default)]
pub struct ReportsPage {
    pub tipo_selecionado: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportsPageView {
    pub cards: Vec<StatCard>,
    pub catalogo: Vec<ReportKind>,
    pub historico: Vec<Report>,
    pub tipo_selecionado: Option<String>,
}

impl ReportsPage {
    pub fn select_tipo(&mut self, tipo: &str) {
        self.tipo_selecionado = Some(tipo.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.tipo_selecionado = None;
    }

    pub fn build(&self, records: &[Report], catalogo: &[ReportKind]) -> ReportsPageView {
        let stats = service::stats(records);
        let cards = vec![
            StatCard::new(
                "Relatórios Gerados",
                stats.total as f64,
                ValueFormat::Integer,
                BadgeTone::Info,
            ),
            StatCard::new(
                "Concluídos",
                stats.concluidos as f64,
                ValueFormat::Integer,
                BadgeTone::Success,
            ),
            StatCard::new(
                "Em Processamento",
                stats.processando as f64,
                ValueFormat::Integer,
                BadgeTone::Warning,
            ),
        ];

        ReportsPageView {
            cards,
            catalogo: catalogo.to_vec(),
            historico: service::recent(records).into_iter().cloned().collect(),
            tipo_selecionado: self.tipo_selecionado.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reports::{REPORTS, REPORT_KINDS};

    #[test]
    fn test_page_lists_catalog_and_history() {
        let mut page = ReportsPage::default();
        page.select_tipo("financeiro");
        let view = page.build(&REPORTS, REPORT_KINDS);
        assert_eq!(view.catalogo.len(), 4);
        assert_eq!(view.historico.len(), 4);
        assert_eq!(view.tipo_selecionado.as_deref(), Some("financeiro"));
    }
}
