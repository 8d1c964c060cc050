use serde::{Deserialize, Serialize};

/// Tipo de cliente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    PessoaFisica,
    Construtora,
    Revenda,
}

impl ClientType {
    pub fn code(&self) -> &'static str {
        match self {
            ClientType::PessoaFisica => "pessoa_fisica",
            ClientType::Construtora => "construtora",
            ClientType::Revenda => "revenda",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientType::PessoaFisica => "Pessoa Física",
            ClientType::Construtora => "Construtora",
            ClientType::Revenda => "Revenda",
        }
    }

    /// Label of the tax document this client type carries.
    pub fn document_label(&self) -> &'static str {
        match self {
            ClientType::PessoaFisica => "CPF",
            ClientType::Construtora | ClientType::Revenda => "CNPJ",
        }
    }

    pub fn all() -> Vec<ClientType> {
        vec![
            ClientType::PessoaFisica,
            ClientType::Construtora,
            ClientType::Revenda,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pessoa_fisica" => Some(ClientType::PessoaFisica),
            "construtora" => Some(ClientType::Construtora),
            "revenda" => Some(ClientType::Revenda),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
