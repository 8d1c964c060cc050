use crate::shared::error::SubmitError;
use crate::system::store::Store;
use contracts::domain::a001_client::aggregate::{Client, ClientDto};
use contracts::enums::ClientStatus;
use contracts::shared::money::parse_currency;
use serde::Serialize;

/// Case-insensitive substring search over nome, endereço and contato.
/// Empty query returns all records in fixture order.
pub fn filter<'a>(records: &'a [Client], query: &str) -> Vec<&'a Client> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let q = query.to_lowercase();
    records
        .iter()
        .filter(|c| {
            c.nome.to_lowercase().contains(&q)
                || c.endereco.to_lowercase().contains(&q)
                || c.contato.to_lowercase().contains(&q)
        })
        .collect()
}

/// Summary numbers for the page header, always over the full fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClientStats {
    pub total: usize,
    pub ativos: usize,
    pub limite_total: f64,
    pub utilizado_total: f64,
}

pub fn stats(records: &[Client]) -> ClientStats {
    ClientStats {
        total: records.len(),
        ativos: records
            .iter()
            .filter(|c| c.status == ClientStatus::Ativo)
            .count(),
        limite_total: records
            .iter()
            .map(|c| parse_currency(&c.limite_credito).unwrap_or(0.0))
            .sum(),
        utilizado_total: records
            .iter()
            .map(|c| parse_currency(&c.credito_utilizado).unwrap_or(0.0))
            .sum(),
    }
}

/// Validate the client form and hand the payload to the store.
/// The fixture itself is never touched.
pub fn submit(dto: &ClientDto, store: &dyn Store) -> Result<(), SubmitError> {
    dto.validate().map_err(SubmitError::Validation)?;
    let payload = serde_json::to_value(dto).map_err(anyhow::Error::from)?;
    store.save("client", payload)?;
    tracing::info!(nome = %dto.nome, "client form accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::clients::CLIENTS;
    use crate::system::store::RecordingStore;

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let filtered = filter(&CLIENTS, "");
        assert_eq!(filtered.len(), CLIENTS.len());
        for (original, kept) in CLIENTS.iter().zip(&filtered) {
            assert_eq!(original.nome, kept.nome);
        }
    }

    #[test]
    fn test_search_matches_address() {
        let filtered = filter(&CLIENTS, "paulista");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nome, "Construtora ABC Ltda");
    }

    #[test]
    fn test_unmatched_query_is_empty_not_error() {
        assert!(filter(&CLIENTS, "inexistente").is_empty());
    }

    #[test]
    fn test_stats_over_seed_clients() {
        let s = stats(&CLIENTS);
        assert_eq!(s.total, 3);
        assert_eq!(s.ativos, 3);
        assert_eq!(s.limite_total, 715_000.0);
        assert_eq!(s.utilizado_total, 172_500.0);
    }

    #[test]
    fn test_seed_credit_percentages() {
        let percents: Vec<u32> = CLIENTS.iter().map(|c| c.credit_percentage()).collect();
        assert_eq!(percents, vec![25, 23, 17]);
    }

    #[test]
    fn test_submit_requires_nome() {
        let store = RecordingStore::new();
        let dto = ClientDto {
            documento: "123.456.789-00".to_string(),
            tipo: Some("pessoa_fisica".to_string()),
            ..Default::default()
        };
        let err = submit(&dto, &store).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert!(errors.iter().any(|e| e.field == "nome"));
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_submit_accepts_valid_form() {
        let store = RecordingStore::new();
        let dto = ClientDto {
            nome: "Construtora Nova".to_string(),
            documento: "11.222.333/0001-44".to_string(),
            tipo: Some("construtora".to_string()),
            ..Default::default()
        };
        submit(&dto, &store).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].aggregate, "client");
    }
}
