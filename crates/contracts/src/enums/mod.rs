mod client_status;
mod client_type;
mod entry_direction;
mod entry_status;
mod formula_status;
mod order_status;
mod report_status;
mod supplier_status;
mod test_result;

pub use client_status::ClientStatus;
pub use client_type::ClientType;
pub use entry_direction::EntryDirection;
pub use entry_status::EntryStatus;
pub use formula_status::FormulaStatus;
pub use order_status::OrderStatus;
pub use report_status::ReportStatus;
pub use supplier_status::SupplierStatus;
pub use test_result::TestResult;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::BadgeTone;

    // Every status value must survive the code round trip; from_code is the
    // inverse of code over the full value set.
    macro_rules! assert_code_round_trip {
        ($ty:ident) => {
            for value in $ty::all() {
                assert_eq!($ty::from_code(value.code()), Some(value));
                assert_eq!(value.to_string(), value.code());
                assert!(!value.label().is_empty());
            }
            assert_eq!($ty::from_code("???"), None);
        };
    }

    #[test]
    fn test_code_round_trips() {
        assert_code_round_trip!(ClientStatus);
        assert_code_round_trip!(ClientType);
        assert_code_round_trip!(EntryDirection);
        assert_code_round_trip!(EntryStatus);
        assert_code_round_trip!(FormulaStatus);
        assert_code_round_trip!(OrderStatus);
        assert_code_round_trip!(ReportStatus);
        assert_code_round_trip!(SupplierStatus);
        assert_code_round_trip!(TestResult);
    }

    #[test]
    fn test_badge_tones_match_registry_pages() {
        assert_eq!(ClientStatus::Bloqueado.tone(), BadgeTone::Danger);
        assert_eq!(EntryStatus::Vencido.tone(), BadgeTone::Danger);
        assert_eq!(EntryStatus::Pago.tone(), BadgeTone::Success);
        assert_eq!(OrderStatus::EmProducao.tone(), BadgeTone::Info);
        assert_eq!(OrderStatus::Atrasado.tone(), BadgeTone::Danger);
        assert_eq!(FormulaStatus::Inativo.tone(), BadgeTone::Muted);
        assert_eq!(TestResult::Reprovado.tone(), BadgeTone::Danger);
        assert_eq!(ReportStatus::Processando.tone(), BadgeTone::Info);
    }
}
