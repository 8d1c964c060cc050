use super::service;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::shared::indicators::{BadgeTone, StatCard, ValueFormat};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct SuppliersPage {
    pub query: String,
    pub dialog_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuppliersPageView {
    pub cards: Vec<StatCard>,
    pub rows: Vec<Supplier>,
    pub dialog_open: bool,
}

impl SuppliersPage {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn build(&self, records: &[Supplier]) -> SuppliersPageView {
        let stats = service::stats(records);
        let cards = vec![
            StatCard::new(
                "Fornecedores",
                stats.total as f64,
                ValueFormat::Integer,
                BadgeTone::Info,
            ),
            StatCard::new(
                "Ativos",
                stats.ativos as f64,
                ValueFormat::Integer,
                BadgeTone::Success,
            ),
            StatCard::new(
                "Avaliação Média",
                stats.avaliacao_media,
                ValueFormat::Decimal { decimals: 1 },
                BadgeTone::Warning,
            ),
            StatCard::new(
                "Compras Acumuladas",
                stats.valor_total,
                ValueFormat::CurrencyCompact,
                BadgeTone::Info,
            ),
        ];

        let rows = service::filter(records, &self.query)
            .into_iter()
            .cloned()
            .collect();

        SuppliersPageView {
            cards,
            rows,
            dialog_open: self.dialog_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::suppliers::SUPPLIERS;

    #[test]
    fn test_cards_stay_unfiltered() {
        let mut page = SuppliersPage::default();
        page.set_query("osasco");
        let view = page.build(&SUPPLIERS);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.cards[0].value, 3.0);
        assert_eq!(view.cards[3].display_value(), "R$ 239k");
    }
}
