use crate::shared::error::SubmitError;
use crate::system::store::Store;
use contracts::domain::a007_report::aggregate::{Report, ReportRequestDto};
use contracts::enums::ReportStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub total: usize,
    pub concluidos: usize,
    pub processando: usize,
}

pub fn stats(records: &[Report]) -> ReportStats {
    let count = |status: ReportStatus| records.iter().filter(|r| r.status == status).count();
    ReportStats {
        total: records.len(),
        concluidos: count(ReportStatus::Concluido),
        processando: count(ReportStatus::Processando),
    }
}

/// Generated reports, newest first.
pub fn recent(records: &[Report]) -> Vec<&Report> {
    let mut sorted: Vec<&Report> = records.iter().collect();
    sorted.sort_by(|a, b| b.data_geracao.cmp(&a.data_geracao));
    sorted
}

/// Validate the generation request and hand it to the store. No file is
/// produced; generation itself is outside this core.
pub fn generate(dto: &ReportRequestDto, store: &dyn Store) -> Result<(), SubmitError> {
    dto.validate().map_err(SubmitError::Validation)?;
    let payload = serde_json::to_value(dto).map_err(anyhow::Error::from)?;
    store.save("report_request", payload)?;
    tracing::info!(tipo = %dto.tipo, periodo = %dto.periodo, "report generation requested");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reports::REPORTS;
    use crate::system::store::RecordingStore;

    #[test]
    fn test_stats_over_seed_reports() {
        let s = stats(&REPORTS);
        assert_eq!(s.total, 4);
        assert_eq!(s.concluidos, 3);
        assert_eq!(s.processando, 1);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let sorted = recent(&REPORTS);
        assert_eq!(sorted[0].nome, "Relatório de Produção Mensal");
        assert_eq!(sorted[3].nome, "Relatório de Clientes");
    }

    #[test]
    fn test_generate_requires_tipo_and_periodo() {
        let store = RecordingStore::new();
        let err = generate(&ReportRequestDto::default(), &store).unwrap_err();
        let fields: Vec<&str> = err
            .validation_errors()
            .unwrap()
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, vec!["tipo", "periodo"]);
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_generate_accepts_valid_request() {
        let store = RecordingStore::new();
        let dto = ReportRequestDto {
            tipo: "producao".to_string(),
            periodo: "Janeiro 2024".to_string(),
            data: None,
        };
        generate(&dto, &store).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].aggregate, "report_request");
    }
}
