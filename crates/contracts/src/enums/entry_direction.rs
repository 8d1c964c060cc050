use serde::{Deserialize, Serialize};

/// Sentido de uma conta financeira: a receber ou a pagar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryDirection {
    Receber,
    Pagar,
}

impl EntryDirection {
    pub fn code(&self) -> &'static str {
        match self {
            EntryDirection::Receber => "receber",
            EntryDirection::Pagar => "pagar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryDirection::Receber => "Contas a Receber",
            EntryDirection::Pagar => "Contas a Pagar",
        }
    }

    pub fn all() -> Vec<EntryDirection> {
        vec![EntryDirection::Receber, EntryDirection::Pagar]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "receber" => Some(EntryDirection::Receber),
            "pagar" => Some(EntryDirection::Pagar),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
