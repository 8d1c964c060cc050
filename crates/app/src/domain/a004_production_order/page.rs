use super::service;
use contracts::domain::a004_production_order::aggregate::ProductionOrder;
use contracts::shared::indicators::{BadgeTone, SeverityBand, StatCard, ValueFormat};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct ProductionPage {
    pub query: String,
    pub dialog_open: bool,
}

/// One row of the production board: the order plus its progress bar data.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRow {
    pub order: ProductionOrder,
    pub progress_percent: u32,
    pub progress_band: SeverityBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionPageView {
    pub cards: Vec<StatCard>,
    pub rows: Vec<OrderRow>,
    pub dialog_open: bool,
}

impl ProductionPage {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn build(&self, records: &[ProductionOrder]) -> ProductionPageView {
        let stats = service::stats(records);
        let cards = vec![
            StatCard::new(
                "Em Produção",
                stats.em_producao as f64,
                ValueFormat::Integer,
                BadgeTone::Info,
            ),
            StatCard::new(
                "Concluídas",
                stats.concluidas as f64,
                ValueFormat::Integer,
                BadgeTone::Success,
            ),
            StatCard::new(
                "Atrasadas",
                stats.atrasadas as f64,
                ValueFormat::Integer,
                BadgeTone::Danger,
            ),
            StatCard::new(
                "Blocos Produzidos",
                stats.blocos_produzidos as f64,
                ValueFormat::Integer,
                BadgeTone::Info,
            ),
        ];

        let rows = service::filter(records, &self.query)
            .into_iter()
            .map(|o| {
                let percent = o.progress_percentage();
                OrderRow {
                    order: o.clone(),
                    progress_percent: percent,
                    progress_band: SeverityBand::from_percent(percent),
                }
            })
            .collect();

        ProductionPageView {
            cards,
            rows,
            dialog_open: self.dialog_open,
        }
    }
}
