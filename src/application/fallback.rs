// src/application/fallback.rs
//! Datastore failures never fail a page. Each read is logged and replaced by
//! an empty value so the page still renders with degraded content.
use crate::domain::errors::DomainResult;

pub trait Degrade<T> {
    /// Unwrap the value, or log the failure and return `T::default()`.
    fn or_degrade(self, operation: &'static str) -> T
    where
        T: Default;

    /// Unwrap the value, or log the failure and return `fallback()`.
    fn or_degrade_with(self, operation: &'static str, fallback: impl FnOnce() -> T) -> T;
}

impl<T> Degrade<T> for DomainResult<T> {
    fn or_degrade(self, operation: &'static str) -> T
    where
        T: Default,
    {
        self.or_degrade_with(operation, T::default)
    }

    fn or_degrade_with(self, operation: &'static str, fallback: impl FnOnce() -> T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(operation, error = %err, "content query failed, serving empty result");
                fallback()
            }
        }
    }
}
