use super::service;
use contracts::domain::a003_financial_entry::aggregate::FinancialEntry;
use contracts::enums::EntryDirection;
use contracts::shared::indicators::{BadgeTone, StatCard, ValueFormat};
use serde::Serialize;

/// Financial page state: the active tab and the new-entry dialog.
#[derive(Debug)]
pub struct FinancialPage {
    pub tab: EntryDirection,
    pub dialog_open: bool,
}

impl Default for FinancialPage {
    fn default() -> Self {
        Self {
            tab: EntryDirection::Receber,
            dialog_open: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialRow {
    pub entry: FinancialEntry,
    pub counterparty: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialPageView {
    pub cards: Vec<StatCard>,
    pub tab: EntryDirection,
    pub rows: Vec<FinancialRow>,
    pub dialog_open: bool,
}

impl FinancialPage {
    pub fn select_tab(&mut self, tab: EntryDirection) {
        self.tab = tab;
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn build(&self, records: &[FinancialEntry]) -> FinancialPageView {
        let stats = service::stats(records);
        let saldo_tone = if stats.saldo_previsto < 0.0 {
            BadgeTone::Danger
        } else {
            BadgeTone::Info
        };
        let cards = vec![
            StatCard::new(
                "A Receber",
                stats.a_receber,
                ValueFormat::Currency,
                BadgeTone::Success,
            )
            .with_subtitle("Pendentes e vencidos"),
            StatCard::new(
                "A Pagar",
                stats.a_pagar,
                ValueFormat::Currency,
                BadgeTone::Danger,
            )
            .with_subtitle("Pendentes e vencidos"),
            StatCard::new(
                "Saldo Previsto",
                stats.saldo_previsto,
                ValueFormat::Currency,
                saldo_tone,
            ),
            StatCard::new(
                "Títulos Vencidos",
                stats.vencidos as f64,
                ValueFormat::Integer,
                BadgeTone::Warning,
            ),
        ];

        let rows = service::entries_for(records, self.tab)
            .into_iter()
            .map(|e| FinancialRow {
                counterparty: e.counterparty_label(),
                entry: e.clone(),
            })
            .collect();

        FinancialPageView {
            cards,
            tab: self.tab,
            rows,
            dialog_open: self.dialog_open,
        }
    }
}
