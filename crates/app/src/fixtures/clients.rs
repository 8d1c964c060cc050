use super::date;
use contracts::domain::a001_client::aggregate::{Client, ClientId};
use contracts::enums::{ClientStatus, ClientType};
use once_cell::sync::Lazy;

pub static CLIENTS: Lazy<Vec<Client>> = Lazy::new(|| {
    vec![
        Client {
            id: ClientId::new_v4(),
            nome: "Construtora ABC Ltda".to_string(),
            documento: "12.345.678/0001-90".to_string(),
            tipo: ClientType::Construtora,
            contato: "Roberto Silva".to_string(),
            telefone: "(11) 9999-1234".to_string(),
            email: "roberto@construtorabc.com".to_string(),
            endereco: "Av. Paulista, 1000 - São Paulo, SP".to_string(),
            limite_credito: "R$ 500.000".to_string(),
            credito_utilizado: "R$ 125.000".to_string(),
            status: ClientStatus::Ativo,
            ultima_compra: date(2024, 1, 20),
            total_compras: "R$ 2.850.000".to_string(),
        },
        Client {
            id: ClientId::new_v4(),
            nome: "Revenda Material XYZ".to_string(),
            documento: "98.765.432/0001-10".to_string(),
            tipo: ClientType::Revenda,
            contato: "Ana Costa".to_string(),
            telefone: "(11) 8888-5678".to_string(),
            email: "ana@revendaxyz.com".to_string(),
            endereco: "Rua das Flores, 500 - Guarulhos, SP".to_string(),
            limite_credito: "R$ 200.000".to_string(),
            credito_utilizado: "R$ 45.000".to_string(),
            status: ClientStatus::Ativo,
            ultima_compra: date(2024, 1, 18),
            total_compras: "R$ 890.000".to_string(),
        },
        Client {
            id: ClientId::new_v4(),
            nome: "João Pereira Silva".to_string(),
            documento: "123.456.789-00".to_string(),
            tipo: ClientType::PessoaFisica,
            contato: "João Silva".to_string(),
            telefone: "(11) 7777-9012".to_string(),
            email: "joao.silva@email.com".to_string(),
            endereco: "Rua dos Pinheiros, 123 - São Paulo, SP".to_string(),
            limite_credito: "R$ 15.000".to_string(),
            credito_utilizado: "R$ 2.500".to_string(),
            status: ClientStatus::Ativo,
            ultima_compra: date(2024, 1, 15),
            total_compras: "R$ 28.500".to_string(),
        },
    ]
});
