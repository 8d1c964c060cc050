use crate::shared::error::SubmitError;
use crate::system::store::Store;
use contracts::domain::a004_production_order::aggregate::{ProductionOrder, ProductionOrderDto};
use contracts::enums::OrderStatus;
use serde::Serialize;

/// Search over número da OP, cliente and produto.
pub fn filter<'a>(records: &'a [ProductionOrder], query: &str) -> Vec<&'a ProductionOrder> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let q = query.to_lowercase();
    records
        .iter()
        .filter(|o| {
            o.numero.to_lowercase().contains(&q)
                || o.cliente.to_lowercase().contains(&q)
                || o.produto.to_lowercase().contains(&q)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub em_producao: usize,
    pub concluidas: usize,
    pub pendentes: usize,
    pub atrasadas: usize,
    /// Blocks already produced across every order.
    pub blocos_produzidos: u32,
}

pub fn stats(records: &[ProductionOrder]) -> OrderStats {
    let count = |status: OrderStatus| records.iter().filter(|o| o.status == status).count();
    OrderStats {
        em_producao: count(OrderStatus::EmProducao),
        concluidas: count(OrderStatus::Concluido),
        pendentes: count(OrderStatus::Pendente),
        atrasadas: count(OrderStatus::Atrasado),
        blocos_produzidos: records.iter().map(|o| o.quantidade_produzida).sum(),
    }
}

pub fn submit(dto: &ProductionOrderDto, store: &dyn Store) -> Result<(), SubmitError> {
    dto.validate().map_err(SubmitError::Validation)?;
    let payload = serde_json::to_value(dto).map_err(anyhow::Error::from)?;
    store.save("production_order", payload)?;
    tracing::info!(cliente = %dto.cliente, produto = %dto.produto, "production order form accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::production_orders::PRODUCTION_ORDERS;
    use crate::system::store::RecordingStore;

    #[test]
    fn test_filter_by_client_abc() {
        let filtered = filter(&PRODUCTION_ORDERS, "ABC");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].numero, "OP-2024-001");
        assert_eq!(filtered[0].cliente, "Construtora ABC");
    }

    #[test]
    fn test_filter_by_order_number() {
        let filtered = filter(&PRODUCTION_ORDERS, "op-2024-003");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].cliente, "João Pereira");
    }

    #[test]
    fn test_empty_query_preserves_fixture_order() {
        let filtered = filter(&PRODUCTION_ORDERS, "");
        let numeros: Vec<&str> = filtered.iter().map(|o| o.numero.as_str()).collect();
        assert_eq!(
            numeros,
            vec!["OP-2024-001", "OP-2024-002", "OP-2024-003", "OP-2024-004"]
        );
    }

    #[test]
    fn test_status_counts_and_produced_total() {
        let s = stats(&PRODUCTION_ORDERS);
        assert_eq!(s.em_producao, 1);
        assert_eq!(s.concluidas, 1);
        assert_eq!(s.pendentes, 1);
        assert_eq!(s.atrasadas, 1);
        assert_eq!(s.blocos_produzidos, 4500);
    }

    #[test]
    fn test_progress_percentages() {
        let percents: Vec<u32> = PRODUCTION_ORDERS
            .iter()
            .map(|o| o.progress_percentage())
            .collect();
        assert_eq!(percents, vec![100, 67, 0, 25]);
    }

    #[test]
    fn test_submit_requires_quantidade() {
        let store = RecordingStore::new();
        let dto = ProductionOrderDto {
            cliente: "Construtora ABC".to_string(),
            produto: "Bloco 14x19x39".to_string(),
            traco: "Traço 1:2:3".to_string(),
            quantidade: None,
            ..Default::default()
        };
        let err = submit(&dto, &store).unwrap_err();
        assert!(err
            .validation_errors()
            .unwrap()
            .iter()
            .any(|e| e.field == "quantidade"));
    }
}
