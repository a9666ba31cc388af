use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{content::ContentRepository, slug::Slug},
};

/// Articles per page on every public listing.
pub const LISTING_PAGE_SIZE: u32 = 9;
pub const SIDEBAR_TAG_LIMIT: u32 = 15;
pub const POPULAR_ARTICLE_LIMIT: u32 = 5;
pub const RELATED_ARTICLE_LIMIT: u32 = 3;
pub const HOME_LATEST_LIMIT: u32 = 3;
pub const POPULAR_TAG_LIMIT: usize = 12;

/// Resolves one view model per public route.
///
/// Every content read goes through [`Degrade`](crate::application::fallback::Degrade):
/// a datastore failure is logged and rendered as empty content. Only a
/// detail lookup miss surfaces as an error.
pub struct PageQueryService {
    pub(super) content: Arc<dyn ContentRepository>,
}

impl PageQueryService {
    pub fn new(content: Arc<dyn ContentRepository>) -> Self {
        Self { content }
    }

    /// Malformed slugs can never match a stored record, so they are
    /// reported exactly like a miss.
    pub(super) fn parse_slug(raw: &str, what: &str) -> ApplicationResult<Slug> {
        Slug::new(raw).map_err(|_| ApplicationError::not_found(format!("{what} not found")))
    }
}
