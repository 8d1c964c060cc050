use crate::domain::common::AggregateId;
use crate::shared::indicators::BadgeTone;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Ativo,
    Inativo,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Ativo => "Ativo",
            UserStatus::Inativo => "Inativo",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            UserStatus::Ativo => BadgeTone::Success,
            UserStatus::Inativo => BadgeTone::Muted,
        }
    }
}

/// Usuário do sistema exibido na página de configurações.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nome: String,
    pub email: String,
    pub cargo: String,
    pub departamento: String,
    pub status: UserStatus,
    pub ultimo_acesso: NaiveDateTime,
}
