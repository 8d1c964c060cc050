use crate::shared::error::SubmitError;
use crate::system::store::Store;
use contracts::domain::a005_mix_formula::aggregate::{MixFormula, MixFormulaDto};
use contracts::enums::FormulaStatus;
use serde::Serialize;

/// Search over nome and tipo do traço.
pub fn filter<'a>(records: &'a [MixFormula], query: &str) -> Vec<&'a MixFormula> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let q = query.to_lowercase();
    records
        .iter()
        .filter(|f| f.nome.to_lowercase().contains(&q) || f.tipo.to_lowercase().contains(&q))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaStats {
    pub total: usize,
    pub ativos: usize,
    pub lotes_produzidos: u32,
}

pub fn stats(records: &[MixFormula]) -> FormulaStats {
    FormulaStats {
        total: records.len(),
        ativos: records
            .iter()
            .filter(|f| f.status == FormulaStatus::Ativo)
            .count(),
        lotes_produzidos: records.iter().map(|f| f.lotes).sum(),
    }
}

pub fn submit(dto: &MixFormulaDto, store: &dyn Store) -> Result<(), SubmitError> {
    dto.validate().map_err(SubmitError::Validation)?;
    let payload = serde_json::to_value(dto).map_err(anyhow::Error::from)?;
    store.save("mix_formula", payload)?;
    tracing::info!(nome = %dto.nome, "mix formula form accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mix_formulas::MIX_FORMULAS;
    use crate::system::store::RecordingStore;

    #[test]
    fn test_search_by_tipo() {
        let filtered = filter(&MIX_FORMULAS, "vedação");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nome, "Traço Premium 20MPa");
    }

    #[test]
    fn test_stats_over_seed_formulas() {
        let s = stats(&MIX_FORMULAS);
        assert_eq!(s.total, 3);
        assert_eq!(s.ativos, 2);
        assert_eq!(s.lotes_produzidos, 80);
    }

    #[test]
    fn test_submit_missing_cimento_changes_no_counts() {
        let store = RecordingStore::new();
        let before = stats(&MIX_FORMULAS);

        let dto = MixFormulaDto {
            nome: "Traço Teste".to_string(),
            tipo: "Bloco Comum".to_string(),
            areia: "700kg".to_string(),
            brita: "1300kg".to_string(),
            agua: "180L".to_string(),
            ..Default::default()
        };
        let err = submit(&dto, &store).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cimento");
        assert_eq!(errors[0].message, "Quantidade de cimento é obrigatória");

        assert!(store.records().is_empty());
        assert_eq!(stats(&MIX_FORMULAS), before);
    }

    #[test]
    fn test_submit_accepts_complete_form() {
        let store = RecordingStore::new();
        let dto = MixFormulaDto {
            nome: "Traço Teste".to_string(),
            tipo: "Bloco Comum".to_string(),
            cimento: "320kg".to_string(),
            areia: "700kg".to_string(),
            brita: "1300kg".to_string(),
            agua: "180L".to_string(),
            ..Default::default()
        };
        submit(&dto, &store).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].aggregate, "mix_formula");
    }
}
