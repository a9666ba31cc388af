// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{SessionPrincipal, SessionSubject, SessionToken},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: SessionSubject) -> ApplicationResult<SessionToken>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<SessionPrincipal>;
}
