// src/domain/content/repository.rs
use crate::domain::article::{Article, ArticleId, ArticleSummary, PopularArticle};
use crate::domain::content::filter::ArticleFilter;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, CategoryId, CategoryWithCount, Tag, TagWithCount};
use async_trait::async_trait;

/// Read side of the portal's content store.
///
/// Implemented by the Postgres store and by the in-memory fixture store; the
/// implementation is chosen once at startup.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Published article with author, categories and tags.
    async fn find_article_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>>;

    /// Published articles matching `filter`, newest first.
    async fn list_articles(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleSummary>>;

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()>;

    /// Published articles sharing at least one category with the source.
    async fn list_related_articles(
        &self,
        id: ArticleId,
        category_ids: &[CategoryId],
        limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>>;

    async fn list_categories(&self) -> DomainResult<Vec<Category>>;

    async fn list_tags(&self, limit: Option<u32>) -> DomainResult<Vec<Tag>>;

    async fn list_popular_articles(&self, limit: u32) -> DomainResult<Vec<PopularArticle>>;

    async fn find_category_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;

    async fn find_tag_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;

    async fn list_categories_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>>;

    async fn list_tags_with_counts(&self) -> DomainResult<Vec<TagWithCount>>;

    async fn count_published_articles(&self) -> DomainResult<u64>;

    /// Every article, drafts included, newest first. Admin only.
    async fn list_all_articles(&self, page: PageRequest) -> DomainResult<Paged<ArticleSummary>>;
}
