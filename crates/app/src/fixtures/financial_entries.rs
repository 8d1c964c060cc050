use super::date;
use contracts::domain::a003_financial_entry::aggregate::{FinancialEntry, FinancialEntryId};
use contracts::enums::{EntryDirection, EntryStatus};
use once_cell::sync::Lazy;

pub static FINANCIAL_ENTRIES: Lazy<Vec<FinancialEntry>> = Lazy::new(|| {
    vec![
        FinancialEntry {
            id: FinancialEntryId::new_v4(),
            direcao: EntryDirection::Receber,
            descricao: "Venda de blocos - OP-2024-001".to_string(),
            valor: "R$ 45.800".to_string(),
            vencimento: date(2024, 1, 25),
            status: EntryStatus::Pendente,
            cliente: Some("Construtora ABC".to_string()),
            fornecedor: None,
            categoria: "Vendas".to_string(),
        },
        FinancialEntry {
            id: FinancialEntryId::new_v4(),
            direcao: EntryDirection::Pagar,
            descricao: "Compra de cimento - NF 12345".to_string(),
            valor: "R$ 28.500".to_string(),
            vencimento: date(2024, 1, 20),
            status: EntryStatus::Vencido,
            cliente: None,
            fornecedor: Some("Cimento Forte Ltda".to_string()),
            categoria: "Matéria-prima".to_string(),
        },
        FinancialEntry {
            id: FinancialEntryId::new_v4(),
            direcao: EntryDirection::Receber,
            descricao: "Venda de blocos - OP-2024-002".to_string(),
            valor: "R$ 32.100".to_string(),
            vencimento: date(2024, 1, 30),
            status: EntryStatus::Pago,
            cliente: Some("Revenda XYZ".to_string()),
            fornecedor: None,
            categoria: "Vendas".to_string(),
        },
        FinancialEntry {
            id: FinancialEntryId::new_v4(),
            direcao: EntryDirection::Pagar,
            descricao: "Energia elétrica - Janeiro".to_string(),
            valor: "R$ 8.750".to_string(),
            vencimento: date(2024, 1, 15),
            status: EntryStatus::Pago,
            cliente: None,
            fornecedor: None,
            categoria: "Operacional".to_string(),
        },
    ]
});
