//! Settings page: the user registry listing.

use contracts::system::users::{User, UserStatus};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SettingsPageView {
    pub usuarios: Vec<User>,
    pub ativos: usize,
}

pub fn build(users: &[User]) -> SettingsPageView {
    SettingsPageView {
        ativos: users
            .iter()
            .filter(|u| u.status == UserStatus::Ativo)
            .count(),
        usuarios: users.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::users::USERS;

    #[test]
    fn test_settings_lists_users_with_active_count() {
        let view = build(&USERS);
        assert_eq!(view.usuarios.len(), 3);
        assert_eq!(view.ativos, 2);
    }
}
