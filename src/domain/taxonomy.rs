// src/domain/taxonomy.rs
//! Categories and tags. Both are many-to-many with articles and share the
//! same shape; they are kept as distinct types so a tag id can never be
//! passed where a category id is expected.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
}

/// A taxonomy entry with the number of published articles linked to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithArticleCount<T> {
    pub entry: T,
    pub article_count: u64,
}

pub type CategoryWithCount = WithArticleCount<Category>;
pub type TagWithCount = WithArticleCount<Tag>;
