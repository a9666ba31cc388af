// src/infrastructure/security/claims.rs
use crate::application::{
    dto::SessionPrincipal,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the session principal from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<SessionPrincipal> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let name = ctx
        .name
        .ok_or_else(|| ApplicationError::unauthorized("missing user name"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    Ok(SessionPrincipal {
        user_id: UserId::new(user_id)?,
        name,
        role,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
        session_id: ctx.session_id,
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    session_id: Option<String>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(&fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.name = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => {
                self.role = role.parse().ok();
            }
            ("issued_at", [Term::Date(seconds)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("expires_at", [Term::Date(seconds)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("session", [Term::Str(sid)]) => {
                self.session_id = Some(sid.clone());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_string(), terms)
    }

    #[test]
    fn builds_principal_from_facts() {
        let facts = vec![
            fact("user", vec![Term::Integer(7), Term::Str("山田太郎".into())]),
            fact("role", vec![Term::Str("editor".into())]),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
            fact("session", vec![Term::Str("sid-1".into())]),
        ];

        let principal = parse_claims(facts).unwrap();
        assert_eq!(principal.user_id, UserId(7));
        assert_eq!(principal.role, Role::Editor);
        assert_eq!(principal.session_id.as_deref(), Some("sid-1"));
        assert_eq!(
            (principal.expires_at - principal.issued_at).num_seconds(),
            3600
        );
    }

    #[test]
    fn missing_role_is_rejected() {
        let facts = vec![
            fact("user", vec![Term::Integer(7), Term::Str("x".into())]),
            fact("issued_at", vec![Term::Date(1)]),
            fact("expires_at", vec![Term::Date(2)]),
        ];
        assert!(matches!(
            parse_claims(facts),
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
