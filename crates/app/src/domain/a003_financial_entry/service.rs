use crate::shared::error::SubmitError;
use crate::system::store::Store;
use contracts::domain::a003_financial_entry::aggregate::{FinancialEntry, FinancialEntryDto};
use contracts::enums::{EntryDirection, EntryStatus};
use contracts::shared::money::parse_currency;
use serde::Serialize;

/// Entries of one tab, in fixture order. The page has no text search,
/// only the receber/pagar tab split.
pub fn entries_for<'a>(
    records: &'a [FinancialEntry],
    direction: EntryDirection,
) -> Vec<&'a FinancialEntry> {
    records.iter().filter(|e| e.direcao == direction).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialStats {
    /// Open receivables (pago entries do not count).
    pub a_receber: f64,
    /// Open payables (pago entries do not count).
    pub a_pagar: f64,
    pub saldo_previsto: f64,
    pub vencidos: usize,
}

pub fn stats(records: &[FinancialEntry]) -> FinancialStats {
    let open_sum = |direction: EntryDirection| {
        records
            .iter()
            .filter(|e| e.direcao == direction && e.status != EntryStatus::Pago)
            .map(|e| parse_currency(&e.valor).unwrap_or(0.0))
            .sum::<f64>()
    };
    let a_receber = open_sum(EntryDirection::Receber);
    let a_pagar = open_sum(EntryDirection::Pagar);
    FinancialStats {
        a_receber,
        a_pagar,
        saldo_previsto: a_receber - a_pagar,
        vencidos: records
            .iter()
            .filter(|e| e.status == EntryStatus::Vencido)
            .count(),
    }
}

pub fn submit(dto: &FinancialEntryDto, store: &dyn Store) -> Result<(), SubmitError> {
    dto.validate().map_err(SubmitError::Validation)?;
    let payload = serde_json::to_value(dto).map_err(anyhow::Error::from)?;
    store.save("financial_entry", payload)?;
    tracing::info!(descricao = %dto.descricao, "financial entry form accepted");
    Ok(())
}
