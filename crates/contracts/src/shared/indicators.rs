//! View-model types for summary cards and status badges.

use serde::{Deserialize, Serialize};

use super::money::{format_currency, format_currency_compact, format_thousands};

// ---------------------------------------------------------------------------
// Badge tones & severity bands
// ---------------------------------------------------------------------------

/// Visual tone of a status badge (drives colour in any renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    Muted,
}

/// Three-level severity derived from a usage percentage (credit bar,
/// production progress). Thresholds: above 80% critical, above 60% warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Normal,
    Warning,
    Critical,
}

impl SeverityBand {
    pub fn from_percent(percent: u32) -> Self {
        if percent > 80 {
            SeverityBand::Critical
        } else if percent > 60 {
            SeverityBand::Warning
        } else {
            SeverityBand::Normal
        }
    }
}

// ---------------------------------------------------------------------------
// Stat cards
// ---------------------------------------------------------------------------

/// How a stat-card value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueFormat {
    /// Full currency string ("R$ 45.800").
    Currency,
    /// Compact currency ("R$ 485k", "R$ 2,8M").
    CurrencyCompact,
    /// Integer with thousands separators.
    Integer,
    /// Fixed-point number (supplier rating "4.6").
    Decimal { decimals: u8 },
}

/// One summary card of a page header grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: f64,
    pub format: ValueFormat,
    pub tone: BadgeTone,
    /// Optional secondary line below the value.
    pub subtitle: Option<String>,
}

impl StatCard {
    pub fn new(label: &str, value: f64, format: ValueFormat, tone: BadgeTone) -> Self {
        Self {
            label: label.to_string(),
            value,
            format,
            tone,
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    /// Render the value for display.
    pub fn display_value(&self) -> String {
        match self.format {
            ValueFormat::Currency => format_currency(self.value),
            ValueFormat::CurrencyCompact => format_currency_compact(self.value),
            ValueFormat::Integer => format_thousands(self.value.round() as i64),
            ValueFormat::Decimal { decimals } => {
                format!("{:.prec$}", self.value, prec = decimals as usize)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_band_thresholds() {
        assert_eq!(SeverityBand::from_percent(0), SeverityBand::Normal);
        assert_eq!(SeverityBand::from_percent(60), SeverityBand::Normal);
        assert_eq!(SeverityBand::from_percent(61), SeverityBand::Warning);
        assert_eq!(SeverityBand::from_percent(80), SeverityBand::Warning);
        assert_eq!(SeverityBand::from_percent(81), SeverityBand::Critical);
        assert_eq!(SeverityBand::from_percent(100), SeverityBand::Critical);
    }

    #[test]
    fn test_stat_card_display() {
        let card = StatCard::new(
            "Crédito Utilizado",
            485000.0,
            ValueFormat::CurrencyCompact,
            BadgeTone::Info,
        );
        assert_eq!(card.display_value(), "R$ 485k");

        let card = StatCard::new("Avaliação Média", 4.6, ValueFormat::Decimal { decimals: 1 }, BadgeTone::Warning);
        assert_eq!(card.display_value(), "4.6");

        let card = StatCard::new("Total Clientes", 156.0, ValueFormat::Integer, BadgeTone::Info);
        assert_eq!(card.display_value(), "156");
    }
}
