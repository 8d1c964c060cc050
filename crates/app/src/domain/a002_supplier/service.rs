use crate::shared::error::SubmitError;
use crate::system::store::Store;
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};
use contracts::enums::SupplierStatus;
use contracts::shared::money::parse_currency;
use serde::Serialize;

/// Search over razão social, cidade and every item of the product list.
pub fn filter<'a>(records: &'a [Supplier], query: &str) -> Vec<&'a Supplier> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let q = query.to_lowercase();
    records
        .iter()
        .filter(|s| {
            s.razao_social.to_lowercase().contains(&q)
                || s.cidade.to_lowercase().contains(&q)
                || s.produtos.iter().any(|p| p.to_lowercase().contains(&q))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplierStats {
    pub total: usize,
    pub ativos: usize,
    /// Mean rating, 0.0 when the fixture is empty.
    pub avaliacao_media: f64,
    pub valor_total: f64,
}

pub fn stats(records: &[Supplier]) -> SupplierStats {
    let avaliacao_media = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|s| s.avaliacao).sum::<f64>() / records.len() as f64
    };
    SupplierStats {
        total: records.len(),
        ativos: records
            .iter()
            .filter(|s| s.status == SupplierStatus::Ativo)
            .count(),
        avaliacao_media,
        valor_total: records
            .iter()
            .map(|s| parse_currency(&s.valor_total).unwrap_or(0.0))
            .sum(),
    }
}

pub fn submit(dto: &SupplierDto, store: &dyn Store) -> Result<(), SubmitError> {
    dto.validate().map_err(SubmitError::Validation)?;
    let payload = serde_json::to_value(dto).map_err(anyhow::Error::from)?;
    store.save("supplier", payload)?;
    tracing::info!(razao_social = %dto.razao_social, "supplier form accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::suppliers::SUPPLIERS;
    use crate::system::store::RecordingStore;

    #[test]
    fn test_search_matches_product() {
        let filtered = filter(&SUPPLIERS, "brita 1");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].razao_social, "Areia & Brita São José");
    }

    #[test]
    fn test_search_matches_city() {
        let filtered = filter(&SUPPLIERS, "osasco");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].razao_social, "Aditivos Químicos Pro");
    }

    #[test]
    fn test_filter_is_subset_of_input() {
        let filtered = filter(&SUPPLIERS, "cimento");
        assert!(filtered.len() <= SUPPLIERS.len());
        for kept in &filtered {
            assert!(SUPPLIERS.iter().any(|s| s.cnpj == kept.cnpj));
        }
    }

    #[test]
    fn test_stats_over_seed_suppliers() {
        let s = stats(&SUPPLIERS);
        assert_eq!(s.total, 3);
        assert_eq!(s.ativos, 2);
        assert_eq!(s.valor_total, 239_000.0);
        assert!((s.avaliacao_media - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_submit_requires_cnpj() {
        let store = RecordingStore::new();
        let dto = SupplierDto {
            razao_social: "Blocos & Cia".to_string(),
            ..Default::default()
        };
        let err = submit(&dto, &store).unwrap_err();
        assert!(err
            .validation_errors()
            .unwrap()
            .iter()
            .any(|e| e.field == "cnpj"));
    }
}
