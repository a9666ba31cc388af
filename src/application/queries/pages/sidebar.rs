use super::{POPULAR_ARTICLE_LIMIT, PageQueryService, SIDEBAR_TAG_LIMIT};
use crate::application::{dto::SidebarView, fallback::Degrade};

impl PageQueryService {
    /// Categories, the first tags by name and the most read articles,
    /// fetched concurrently.
    pub async fn sidebar(&self) -> SidebarView {
        let (categories, tags, popular) = tokio::join!(
            self.content.list_categories(),
            self.content.list_tags(Some(SIDEBAR_TAG_LIMIT)),
            self.content.list_popular_articles(POPULAR_ARTICLE_LIMIT),
        );

        SidebarView {
            categories: categories.or_degrade("list_categories"),
            tags: tags.or_degrade("list_tags"),
            popular_articles: popular.or_degrade("list_popular_articles"),
        }
    }
}
