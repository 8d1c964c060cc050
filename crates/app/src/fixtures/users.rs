use super::datetime;
use contracts::system::users::{User, UserId, UserStatus};
use once_cell::sync::Lazy;

pub static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: UserId::new_v4(),
            nome: "João Silva".to_string(),
            email: "joao@empresa.com".to_string(),
            cargo: "Administrador".to_string(),
            departamento: "TI".to_string(),
            status: UserStatus::Ativo,
            ultimo_acesso: datetime(2024, 1, 15, 14, 30),
        },
        User {
            id: UserId::new_v4(),
            nome: "Maria Santos".to_string(),
            email: "maria@empresa.com".to_string(),
            cargo: "Supervisor Produção".to_string(),
            departamento: "Produção".to_string(),
            status: UserStatus::Ativo,
            ultimo_acesso: datetime(2024, 1, 15, 12, 45),
        },
        User {
            id: UserId::new_v4(),
            nome: "Carlos Oliveira".to_string(),
            email: "carlos@empresa.com".to_string(),
            cargo: "Analista Financeiro".to_string(),
            departamento: "Financeiro".to_string(),
            status: UserStatus::Inativo,
            ultimo_acesso: datetime(2024, 1, 10, 9, 15),
        },
    ]
});
