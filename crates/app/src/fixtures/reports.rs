use super::datetime;
use contracts::domain::a007_report::aggregate::{Report, ReportId, ReportKind};
use contracts::enums::ReportStatus;
use once_cell::sync::Lazy;

/// Categories offered on the report generation form.
pub static REPORT_KINDS: &[ReportKind] = &[
    ReportKind {
        id: "producao",
        nome: "Produção",
        descricao: "Volume produzido, OPs, eficiência",
    },
    ReportKind {
        id: "financeiro",
        nome: "Financeiro",
        descricao: "DRE, fluxo de caixa, contas",
    },
    ReportKind {
        id: "comercial",
        nome: "Comercial",
        descricao: "Vendas, clientes, comissões",
    },
    ReportKind {
        id: "qualidade",
        nome: "Qualidade",
        descricao: "Testes, aprovações, traços",
    },
];

pub static REPORTS: Lazy<Vec<Report>> = Lazy::new(|| {
    vec![
        Report {
            id: ReportId::new_v4(),
            nome: "Relatório de Produção Mensal".to_string(),
            categoria: "producao".to_string(),
            tipo: "PDF".to_string(),
            data_geracao: datetime(2024, 1, 15, 14, 30),
            periodo: "Janeiro 2024".to_string(),
            status: ReportStatus::Concluido,
            tamanho: "2.3 MB".to_string(),
        },
        Report {
            id: ReportId::new_v4(),
            nome: "Demonstrativo Financeiro".to_string(),
            categoria: "financeiro".to_string(),
            tipo: "Excel".to_string(),
            data_geracao: datetime(2024, 1, 14, 9, 15),
            periodo: "Q4 2023".to_string(),
            status: ReportStatus::Concluido,
            tamanho: "1.8 MB".to_string(),
        },
        Report {
            id: ReportId::new_v4(),
            nome: "Análise de Qualidade - Traços".to_string(),
            categoria: "qualidade".to_string(),
            tipo: "PDF".to_string(),
            data_geracao: datetime(2024, 1, 12, 16, 45),
            periodo: "Dezembro 2023".to_string(),
            status: ReportStatus::Processando,
            tamanho: "-".to_string(),
        },
        Report {
            id: ReportId::new_v4(),
            nome: "Relatório de Clientes".to_string(),
            categoria: "comercial".to_string(),
            tipo: "PDF".to_string(),
            data_geracao: datetime(2024, 1, 10, 11, 20),
            periodo: "2023".to_string(),
            status: ReportStatus::Concluido,
            tamanho: "950 KB".to_string(),
        },
    ]
});
