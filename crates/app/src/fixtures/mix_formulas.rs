use super::date;
use contracts::domain::a005_mix_formula::aggregate::{MixFormula, MixFormulaId};
use contracts::enums::FormulaStatus;
use once_cell::sync::Lazy;

pub static MIX_FORMULAS: Lazy<Vec<MixFormula>> = Lazy::new(|| {
    vec![
        MixFormula {
            id: MixFormulaId::new_v4(),
            nome: "Traço Standard 15MPa".to_string(),
            tipo: "Bloco Estrutural".to_string(),
            cimento: "350kg".to_string(),
            areia: "650kg".to_string(),
            brita: "1200kg".to_string(),
            agua: "175L".to_string(),
            aditivos: "Plastificante 2L".to_string(),
            resistencia: "15 MPa".to_string(),
            status: FormulaStatus::Ativo,
            ultimo_teste: date(2024, 1, 15),
            lotes: 45,
        },
        MixFormula {
            id: MixFormulaId::new_v4(),
            nome: "Traço Premium 20MPa".to_string(),
            tipo: "Bloco Vedação".to_string(),
            cimento: "400kg".to_string(),
            areia: "600kg".to_string(),
            brita: "1100kg".to_string(),
            agua: "160L".to_string(),
            aditivos: "Superplastificante 3L".to_string(),
            resistencia: "20 MPa".to_string(),
            status: FormulaStatus::Ativo,
            ultimo_teste: date(2024, 1, 12),
            lotes: 23,
        },
        MixFormula {
            id: MixFormulaId::new_v4(),
            nome: "Traço Econômico 10MPa".to_string(),
            tipo: "Bloco Comum".to_string(),
            cimento: "300kg".to_string(),
            areia: "700kg".to_string(),
            brita: "1300kg".to_string(),
            agua: "180L".to_string(),
            aditivos: "-".to_string(),
            resistencia: "10 MPa".to_string(),
            status: FormulaStatus::Inativo,
            ultimo_teste: date(2023, 12, 20),
            lotes: 12,
        },
    ]
});
