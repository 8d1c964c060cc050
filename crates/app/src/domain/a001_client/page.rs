use super::service;
use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::indicators::{BadgeTone, SeverityBand, StatCard, ValueFormat};
use serde::Serialize;

/// Interaction state of the clients page, private to one activation.
#[derive(Debug, Default)]
pub struct ClientsPage {
    pub query: String,
    pub dialog_open: bool,
}

/// One row of the clients table.
#[derive(Debug, Clone, Serialize)]
pub struct ClientRow {
    pub client: Client,
    pub credit_percent: u32,
    pub credit_band: SeverityBand,
}

/// Renderer-agnostic view model of the clients page.
#[derive(Debug, Clone, Serialize)]
pub struct ClientsPageView {
    pub cards: Vec<StatCard>,
    pub rows: Vec<ClientRow>,
    pub dialog_open: bool,
}

impl ClientsPage {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Summary cards come from the full fixture; only the rows follow the
    /// search box.
    pub fn build(&self, records: &[Client]) -> ClientsPageView {
        let stats = service::stats(records);
        let cards = vec![
            StatCard::new(
                "Total de Clientes",
                stats.total as f64,
                ValueFormat::Integer,
                BadgeTone::Info,
            ),
            StatCard::new(
                "Clientes Ativos",
                stats.ativos as f64,
                ValueFormat::Integer,
                BadgeTone::Success,
            ),
            StatCard::new(
                "Limite de Crédito",
                stats.limite_total,
                ValueFormat::CurrencyCompact,
                BadgeTone::Info,
            ),
            StatCard::new(
                "Crédito Utilizado",
                stats.utilizado_total,
                ValueFormat::CurrencyCompact,
                BadgeTone::Warning,
            ),
        ];

        let rows = service::filter(records, &self.query)
            .into_iter()
            .map(|c| {
                let percent = c.credit_percentage();
                ClientRow {
                    client: c.clone(),
                    credit_percent: percent,
                    credit_band: SeverityBand::from_percent(percent),
                }
            })
            .collect();

        ClientsPageView {
            cards,
            rows,
            dialog_open: self.dialog_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::clients::CLIENTS;

    #[test]
    fn test_cards_ignore_search_filter() {
        let mut page = ClientsPage::default();
        page.set_query("paulista");
        let view = page.build(&CLIENTS);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.cards[0].value, 3.0);
    }

    #[test]
    fn test_credit_bands_for_seed_clients() {
        let page = ClientsPage::default();
        let view = page.build(&CLIENTS);
        assert!(view
            .rows
            .iter()
            .all(|r| r.credit_band == SeverityBand::Normal));
    }

    #[test]
    fn test_dialog_toggles() {
        let mut page = ClientsPage::default();
        page.open_dialog();
        assert!(page.build(&CLIENTS).dialog_open);
        page.close_dialog();
        assert!(!page.build(&CLIENTS).dialog_open);
    }
}
