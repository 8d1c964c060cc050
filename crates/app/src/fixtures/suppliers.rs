use super::date;
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierId};
use contracts::enums::SupplierStatus;
use once_cell::sync::Lazy;

pub static SUPPLIERS: Lazy<Vec<Supplier>> = Lazy::new(|| {
    vec![
        Supplier {
            id: SupplierId::new_v4(),
            razao_social: "Cimento Forte Ltda".to_string(),
            cnpj: "12.345.678/0001-90".to_string(),
            contato: "João Santos".to_string(),
            telefone: "(11) 9999-1234".to_string(),
            email: "joao@cimentoforte.com".to_string(),
            cidade: "São Paulo, SP".to_string(),
            produtos: vec!["Cimento CP-II".to_string(), "Cimento CP-III".to_string()],
            avaliacao: 4.8,
            status: SupplierStatus::Ativo,
            ultima_compra: date(2024, 1, 15),
            valor_total: "R$ 125.800".to_string(),
        },
        Supplier {
            id: SupplierId::new_v4(),
            razao_social: "Areia & Brita São José".to_string(),
            cnpj: "98.765.432/0001-10".to_string(),
            contato: "Maria Silva".to_string(),
            telefone: "(11) 8888-5678".to_string(),
            email: "maria@sanjose.com".to_string(),
            cidade: "Guarulhos, SP".to_string(),
            produtos: vec![
                "Areia Média".to_string(),
                "Brita 1".to_string(),
                "Brita 2".to_string(),
            ],
            avaliacao: 4.5,
            status: SupplierStatus::Ativo,
            ultima_compra: date(2024, 1, 10),
            valor_total: "R$ 89.500".to_string(),
        },
        Supplier {
            id: SupplierId::new_v4(),
            razao_social: "Aditivos Químicos Pro".to_string(),
            cnpj: "55.444.333/0001-22".to_string(),
            contato: "Carlos Mendes".to_string(),
            telefone: "(11) 7777-9012".to_string(),
            email: "carlos@aditivospro.com".to_string(),
            cidade: "Osasco, SP".to_string(),
            produtos: vec!["Plastificante".to_string(), "Impermeabilizante".to_string()],
            avaliacao: 4.2,
            status: SupplierStatus::Inativo,
            ultima_compra: date(2023, 12, 28),
            valor_total: "R$ 23.700".to_string(),
        },
    ]
});
