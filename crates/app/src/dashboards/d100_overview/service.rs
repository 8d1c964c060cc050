//! Landing dashboard. The daily-production and stock KPIs, the 7-day volume
//! bars and the alert panel are display fixtures with no backing record set;
//! the client KPI and the recent-order panel are derived from the fixtures.

use contracts::dashboards::d100_overview::dto::{
    AlertEntry, ChangeKind, FormulaVolumeRow, KpiCard, OverviewDto, RecentOrderRow,
};
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a004_production_order::aggregate::ProductionOrder;
use contracts::enums::ClientStatus;
use contracts::shared::indicators::BadgeTone;
use contracts::shared::money::format_thousands;

const RECENT_ORDERS_SHOWN: usize = 3;

pub fn build(clients: &[Client], orders: &[ProductionOrder]) -> OverviewDto {
    OverviewDto {
        kpis: kpis(clients),
        production_by_formula: production_by_formula(),
        recent_orders: recent_orders(orders),
        alerts: alerts(),
    }
}

fn kpis(clients: &[Client]) -> Vec<KpiCard> {
    let clientes_ativos = clients
        .iter()
        .filter(|c| c.status == ClientStatus::Ativo)
        .count();
    vec![
        KpiCard {
            title: "Produção do Dia".to_string(),
            value: "2.847".to_string(),
            change: "+12% vs ontem".to_string(),
            change_kind: ChangeKind::Positive,
            description: "Blocos produzidos".to_string(),
        },
        KpiCard {
            title: "Faturamento Mensal".to_string(),
            value: "R$ 847k".to_string(),
            change: "+8% vs mês anterior".to_string(),
            change_kind: ChangeKind::Positive,
            description: "Receita bruta".to_string(),
        },
        KpiCard {
            title: "Clientes Ativos".to_string(),
            value: format_thousands(clientes_ativos as i64),
            change: "4 novos esta semana".to_string(),
            change_kind: ChangeKind::Positive,
            description: "Base de clientes".to_string(),
        },
        KpiCard {
            title: "Estoque Crítico".to_string(),
            value: "3".to_string(),
            change: "2 itens abaixo do mínimo".to_string(),
            change_kind: ChangeKind::Negative,
            description: "Matérias-primas".to_string(),
        },
    ]
}

fn production_by_formula() -> Vec<FormulaVolumeRow> {
    vec![
        FormulaVolumeRow {
            traco: "Traço 1:2:3".to_string(),
            percent: 75,
            volume: "12.5k".to_string(),
        },
        FormulaVolumeRow {
            traco: "Traço 1:3:4".to_string(),
            percent: 60,
            volume: "8.2k".to_string(),
        },
        FormulaVolumeRow {
            traco: "Traço 1:2:4".to_string(),
            percent: 45,
            volume: "5.8k".to_string(),
        },
    ]
}

/// Latest orders by start date.
fn recent_orders(orders: &[ProductionOrder]) -> Vec<RecentOrderRow> {
    let mut sorted: Vec<&ProductionOrder> = orders.iter().collect();
    sorted.sort_by(|a, b| b.data_inicio.cmp(&a.data_inicio));
    sorted
        .into_iter()
        .take(RECENT_ORDERS_SHOWN)
        .map(|o| RecentOrderRow {
            numero: o.numero.clone(),
            cliente: o.cliente.clone(),
            quantidade: o.quantidade,
            status: o.status,
        })
        .collect()
}

fn alerts() -> Vec<AlertEntry> {
    vec![
        AlertEntry {
            titulo: "Vencimento de Contrato".to_string(),
            mensagem: "Contrato com Fornecedor Cimento Forte vence em 5 dias".to_string(),
            tone: BadgeTone::Warning,
        },
        AlertEntry {
            titulo: "Estoque Baixo".to_string(),
            mensagem: "Areia fina com apenas 15m³ restantes (mínimo: 50m³)".to_string(),
            tone: BadgeTone::Danger,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::clients::CLIENTS;
    use crate::fixtures::production_orders::PRODUCTION_ORDERS;

    #[test]
    fn test_recent_orders_come_from_fixture_newest_first() {
        let dto = build(&CLIENTS, &PRODUCTION_ORDERS);
        let numeros: Vec<&str> = dto
            .recent_orders
            .iter()
            .map(|o| o.numero.as_str())
            .collect();
        assert_eq!(numeros, vec!["OP-2024-003", "OP-2024-004", "OP-2024-002"]);
    }

    #[test]
    fn test_client_kpi_counts_active_fixture_clients() {
        let dto = build(&CLIENTS, &PRODUCTION_ORDERS);
        let card = &dto.kpis[2];
        assert_eq!(card.title, "Clientes Ativos");
        assert_eq!(card.value, "3");
    }

    #[test]
    fn test_overview_panels_are_populated() {
        let dto = build(&CLIENTS, &PRODUCTION_ORDERS);
        assert_eq!(dto.kpis.len(), 4);
        assert_eq!(dto.production_by_formula.len(), 3);
        assert_eq!(dto.alerts.len(), 2);
    }
}
