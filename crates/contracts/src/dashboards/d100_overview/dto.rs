use crate::enums::OrderStatus;
use crate::shared::indicators::BadgeTone;
use serde::{Deserialize, Serialize};

/// Direction of a KPI change versus the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Positive,
    Negative,
}

/// One KPI card of the landing dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiCard {
    pub title: String,
    /// Already-formatted display value ("R$ 847k", "2.847").
    pub value: String,
    /// Change caption ("+12% vs ontem").
    pub change: String,
    pub change_kind: ChangeKind,
    pub description: String,
}

/// Production volume of one mix formula over the last 7 days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaVolumeRow {
    pub traco: String,
    /// Bar width, 0-100.
    pub percent: u32,
    /// Volume caption ("12.5k").
    pub volume: String,
}

/// Compact row of the recent-orders panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentOrderRow {
    pub numero: String,
    pub cliente: String,
    pub quantidade: u32,
    pub status: OrderStatus,
}

/// Alert entry of the notifications panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertEntry {
    pub titulo: String,
    pub mensagem: String,
    pub tone: BadgeTone,
}

/// View model of the overview dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewDto {
    pub kpis: Vec<KpiCard>,
    pub production_by_formula: Vec<FormulaVolumeRow>,
    pub recent_orders: Vec<RecentOrderRow>,
    pub alerts: Vec<AlertEntry>,
}
