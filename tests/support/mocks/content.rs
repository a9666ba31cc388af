// tests/support/mocks/content.rs
use std::sync::Arc;

use async_trait::async_trait;
use ax_portal::domain::article::{Article, ArticleId, ArticleSummary, PopularArticle};
use ax_portal::domain::content::{ArticleFilter, ContentRepository};
use ax_portal::domain::errors::{DomainError, DomainResult};
use ax_portal::domain::pagination::{PageRequest, Paged};
use ax_portal::domain::slug::Slug;
use ax_portal::domain::taxonomy::{Category, CategoryId, CategoryWithCount, Tag, TagWithCount};

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

/// Every call fails as if the datastore were down.
#[derive(Clone, Debug, Default)]
pub struct FailingContentRepository;

#[async_trait]
impl ContentRepository for FailingContentRepository {
    async fn find_article_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list_articles(
        &self,
        _filter: &ArticleFilter,
        _page: PageRequest,
    ) -> DomainResult<Paged<ArticleSummary>> {
        unavailable()
    }

    async fn increment_view_count(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }

    async fn list_related_articles(
        &self,
        _id: ArticleId,
        _category_ids: &[CategoryId],
        _limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>> {
        unavailable()
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        unavailable()
    }

    async fn list_tags(&self, _limit: Option<u32>) -> DomainResult<Vec<Tag>> {
        unavailable()
    }

    async fn list_popular_articles(&self, _limit: u32) -> DomainResult<Vec<PopularArticle>> {
        unavailable()
    }

    async fn find_category_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Category>> {
        unavailable()
    }

    async fn find_tag_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Tag>> {
        unavailable()
    }

    async fn list_categories_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        unavailable()
    }

    async fn list_tags_with_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        unavailable()
    }

    async fn count_published_articles(&self) -> DomainResult<u64> {
        unavailable()
    }

    async fn list_all_articles(&self, _page: PageRequest) -> DomainResult<Paged<ArticleSummary>> {
        unavailable()
    }
}

/// Delegates to `inner` but fails every view-count increment.
pub struct FailingIncrement {
    pub inner: Arc<dyn ContentRepository>,
}

impl FailingIncrement {
    pub fn new(inner: Arc<dyn ContentRepository>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ContentRepository for FailingIncrement {
    async fn find_article_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        self.inner.find_article_by_slug(slug).await
    }

    async fn list_articles(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleSummary>> {
        self.inner.list_articles(filter, page).await
    }

    async fn increment_view_count(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }

    async fn list_related_articles(
        &self,
        id: ArticleId,
        category_ids: &[CategoryId],
        limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>> {
        self.inner.list_related_articles(id, category_ids, limit).await
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        self.inner.list_categories().await
    }

    async fn list_tags(&self, limit: Option<u32>) -> DomainResult<Vec<Tag>> {
        self.inner.list_tags(limit).await
    }

    async fn list_popular_articles(&self, limit: u32) -> DomainResult<Vec<PopularArticle>> {
        self.inner.list_popular_articles(limit).await
    }

    async fn find_category_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        self.inner.find_category_by_slug(slug).await
    }

    async fn find_tag_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        self.inner.find_tag_by_slug(slug).await
    }

    async fn list_categories_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        self.inner.list_categories_with_counts().await
    }

    async fn list_tags_with_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        self.inner.list_tags_with_counts().await
    }

    async fn count_published_articles(&self) -> DomainResult<u64> {
        self.inner.count_published_articles().await
    }

    async fn list_all_articles(&self, page: PageRequest) -> DomainResult<Paged<ArticleSummary>> {
        self.inner.list_all_articles(page).await
    }
}
