mod article;
mod home;
mod listing;
mod search;
mod service;
mod sidebar;
mod taxonomy;

pub use search::describe_criteria;
pub use service::{
    HOME_LATEST_LIMIT, LISTING_PAGE_SIZE, PageQueryService, POPULAR_ARTICLE_LIMIT,
    POPULAR_TAG_LIMIT, RELATED_ARTICLE_LIMIT, SIDEBAR_TAG_LIMIT,
};
