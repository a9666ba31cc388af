// tests/support/mocks/mod.rs
//! Test doubles for the repository and security ports.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod security;
pub mod user_repo;

pub use content::{FailingContentRepository, FailingIncrement};
pub use security::{
    ADMIN_TOKEN, DummyPasswordHasher, DummyTokenManager, EDITOR_TOKEN, EXPIRED_TOKEN,
    StrictPasswordHasher, fixed_now,
};
pub use user_repo::DummyUserRepo;
