use super::date;
use contracts::domain::a004_production_order::aggregate::{ProductionOrder, ProductionOrderId};
use contracts::enums::OrderStatus;
use once_cell::sync::Lazy;

pub static PRODUCTION_ORDERS: Lazy<Vec<ProductionOrder>> = Lazy::new(|| {
    vec![
        ProductionOrder {
            id: ProductionOrderId::new_v4(),
            numero: "OP-2024-001".to_string(),
            cliente: "Construtora ABC".to_string(),
            produto: "Bloco 14x19x39".to_string(),
            traco: "Traço 1:2:3".to_string(),
            quantidade: 2500,
            quantidade_produzida: 2500,
            data_inicio: date(2024, 1, 15),
            data_prevista: date(2024, 1, 18),
            status: OrderStatus::Concluido,
            responsavel: "João Silva".to_string(),
            observacoes: None,
        },
        ProductionOrder {
            id: ProductionOrderId::new_v4(),
            numero: "OP-2024-002".to_string(),
            cliente: "Revenda XYZ".to_string(),
            produto: "Bloco 14x19x39".to_string(),
            traco: "Traço 1:3:4".to_string(),
            quantidade: 1800,
            quantidade_produzida: 1200,
            data_inicio: date(2024, 1, 20),
            data_prevista: date(2024, 1, 23),
            status: OrderStatus::EmProducao,
            responsavel: "Maria Santos".to_string(),
            observacoes: None,
        },
        ProductionOrder {
            id: ProductionOrderId::new_v4(),
            numero: "OP-2024-003".to_string(),
            cliente: "João Pereira".to_string(),
            produto: "Bloco 09x19x39".to_string(),
            traco: "Traço 1:2:4".to_string(),
            quantidade: 500,
            quantidade_produzida: 0,
            data_inicio: date(2024, 1, 25),
            data_prevista: date(2024, 1, 26),
            status: OrderStatus::Pendente,
            responsavel: "Carlos Lima".to_string(),
            observacoes: None,
        },
        ProductionOrder {
            id: ProductionOrderId::new_v4(),
            numero: "OP-2024-004".to_string(),
            cliente: "Construtora DEF".to_string(),
            produto: "Bloco 14x19x39".to_string(),
            traco: "Traço 1:2:3".to_string(),
            quantidade: 3200,
            quantidade_produzida: 800,
            data_inicio: date(2024, 1, 22),
            data_prevista: date(2024, 1, 24),
            status: OrderStatus::Atrasado,
            responsavel: "Ana Costa".to_string(),
            observacoes: None,
        },
    ]
});
