use std::sync::Arc;

use crate::{
    application::{
        dto::{SessionSubject, SessionToken},
        error::{ApplicationError, ApplicationResult},
        ports::security::{PasswordHasher, TokenManager},
    },
    domain::user::{Email, Role, User, UserRepository},
};
use uuid::Uuid;

pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignInResult {
    pub token: SessionToken,
    pub name: String,
    pub role: Role,
}

pub struct SessionCommandService {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_manager: Arc<dyn TokenManager>,
}

impl SessionCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
        }
    }

    pub async fn sign_in(&self, command: SignInCommand) -> ApplicationResult<SignInResult> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let subject = SessionSubject {
            user_id: user.id,
            name: user.name.clone(),
            role: user.role,
            session_id: Uuid::new_v4().to_string(),
        };
        let token = self.token_manager.issue(subject).await?;

        tracing::info!(user_id = user.id.0, role = %user.role, "user signed in");

        Ok(SignInResult {
            token,
            name: user.name,
            role: user.role,
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        // A malformed address is reported like any other credential mismatch.
        let email =
            Email::new(email).map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
