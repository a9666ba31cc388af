// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use ax_portal::domain::errors::DomainResult;
use ax_portal::domain::user::{Email, PasswordHash, Role, User, UserId, UserRepository};

use super::security::fixed_now;

/// Two accounts: `admin@example.com` / `admin-pass` and
/// `editor@example.com` / `editor-pass`, hashed the way
/// `StrictPasswordHasher` expects.
#[derive(Clone, Debug, Default)]
pub struct DummyUserRepo;

fn user(id: i64, name: &str, email: &str, password: &str, role: Role) -> User {
    User {
        id: UserId::new(id).unwrap(),
        name: name.into(),
        email: Email::new(email).unwrap(),
        password_hash: PasswordHash::new(format!("hash::{password}")).unwrap(),
        role,
        created_at: fixed_now(),
    }
}

fn accounts() -> Vec<User> {
    vec![
        user(1, "管理者", "admin@example.com", "admin-pass", Role::Admin),
        user(2, "編集者", "editor@example.com", "editor-pass", Role::Editor),
    ]
}

#[async_trait]
impl UserRepository for DummyUserRepo {
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(accounts()
            .into_iter()
            .find(|user| user.email.as_str() == email.as_str()))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(accounts())
    }
}
