// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::session::SessionCommandService,
        dto::SessionPrincipal,
        ports::security::{PasswordHasher, TokenManager},
        queries::{admin::AdminQueryService, pages::PageQueryService},
    },
    domain::{content::ContentRepository, user::Role, user::UserRepository},
};

pub struct ApplicationServices {
    pub pages: Arc<PageQueryService>,
    pub admin: Arc<AdminQueryService>,
    pub sessions: Arc<SessionCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        content: Arc<dyn ContentRepository>,
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        let pages = Arc::new(PageQueryService::new(Arc::clone(&content)));
        let admin = Arc::new(AdminQueryService::new(
            Arc::clone(&content),
            Arc::clone(&user_repo),
        ));
        let sessions = Arc::new(SessionCommandService::new(
            user_repo,
            password_hasher,
            Arc::clone(&token_manager),
        ));

        Self {
            pages,
            admin,
            sessions,
            token_manager,
        }
    }

    /// The caller behind a raw session token, if the token verifies.
    pub async fn principal_of(&self, token: Option<&str>) -> Option<SessionPrincipal> {
        let token = token?;
        match self.token_manager.authenticate(token).await {
            Ok(principal) => Some(principal),
            Err(err) => {
                tracing::debug!(error = %err, "session token rejected");
                None
            }
        }
    }

    /// Missing, invalid and expired tokens all resolve to `Anonymous`.
    pub async fn role_of(&self, token: Option<&str>) -> Role {
        self.principal_of(token)
            .await
            .map_or(Role::Anonymous, |principal| principal.role)
    }
}
