// src/infrastructure/fixtures/repository.rs
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::FixtureDataset;
use crate::domain::article::{Article, ArticleId, ArticleSummary, PopularArticle, ViewCount};
use crate::domain::content::{ArticleFilter, ContentRepository};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{
    Category, CategoryId, CategoryWithCount, Tag, TagWithCount, WithArticleCount,
};

/// `ContentRepository` over an immutable [`FixtureDataset`].
///
/// Filtering, ordering and pagination follow the Postgres store. View
/// counts live in a mutex-guarded map seeded from the dataset.
pub struct FixtureContentRepository {
    dataset: FixtureDataset,
    view_counts: Mutex<HashMap<ArticleId, ViewCount>>,
    substitute_missing: bool,
}

impl FixtureContentRepository {
    pub fn new(dataset: FixtureDataset) -> Self {
        let view_counts = dataset
            .articles
            .iter()
            .map(|article| (article.id, article.view_count))
            .collect();

        Self {
            dataset,
            view_counts: Mutex::new(view_counts),
            substitute_missing: false,
        }
    }

    /// Serve the featured sample article, category or tag for unknown slugs.
    #[must_use]
    pub fn with_substitution(mut self, enabled: bool) -> Self {
        self.substitute_missing = enabled;
        self
    }

    fn counts(&self) -> std::sync::MutexGuard<'_, HashMap<ArticleId, ViewCount>> {
        self.view_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn with_current_count(&self, article: &Article) -> Article {
        let mut article = article.clone();
        if let Some(count) = self.counts().get(&article.id) {
            article.view_count = *count;
        }
        article
    }

    fn published(&self) -> impl Iterator<Item = &Article> {
        self.dataset.articles.iter().filter(|article| article.published)
    }

    fn matches(article: &Article, filter: &ArticleFilter) -> bool {
        filter
            .text
            .as_deref()
            .is_none_or(|text| article.matches_text(text))
            && filter
                .category
                .as_deref()
                .is_none_or(|slug| article.has_category(slug))
            && filter
                .tag
                .as_deref()
                .is_none_or(|slug| article.has_tag(slug))
    }

    /// `published_at` descending with undated articles last, then id
    /// descending.
    fn newest_first(articles: &mut [&Article]) {
        articles.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
    }

    fn paginate(mut articles: Vec<&Article>, page: PageRequest) -> Paged<ArticleSummary> {
        Self::newest_first(&mut articles);
        let total = articles.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let items = articles
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(Article::summary)
            .collect();
        Paged::new(items, total, page)
    }

    fn sorted_by_name<T: Clone>(entries: &[T], name: impl Fn(&T) -> &str) -> Vec<T> {
        let mut entries = entries.to_vec();
        entries.sort_by(|a, b| name(a).cmp(name(b)));
        entries
    }
}

#[async_trait]
impl ContentRepository for FixtureContentRepository {
    async fn find_article_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let found = self
            .published()
            .find(|article| article.slug == *slug)
            .or_else(|| {
                self.substitute_missing
                    .then(|| self.dataset.featured())
                    .flatten()
            });

        if found.is_some_and(|article| article.slug != *slug) {
            tracing::debug!(requested = %slug, "serving sample article for unknown slug");
        }

        Ok(found.map(|article| self.with_current_count(article)))
    }

    async fn list_articles(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleSummary>> {
        let matching = self
            .published()
            .filter(|article| Self::matches(article, filter))
            .collect();
        Ok(Self::paginate(matching, page))
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()> {
        let is_published = self.published().any(|article| article.id == id);
        if is_published {
            let mut counts = self.counts();
            let count = counts.entry(id).or_default();
            *count = count.incremented();
        }
        Ok(())
    }

    async fn list_related_articles(
        &self,
        id: ArticleId,
        category_ids: &[CategoryId],
        limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let mut related: Vec<&Article> = self
            .published()
            .filter(|article| article.id != id)
            .filter(|article| {
                article
                    .categories
                    .iter()
                    .any(|category| category_ids.contains(&category.id))
            })
            .collect();
        Self::newest_first(&mut related);

        Ok(related
            .into_iter()
            .take(limit as usize)
            .map(Article::summary)
            .collect())
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        Ok(Self::sorted_by_name(&self.dataset.categories, |c| {
            c.name.as_str()
        }))
    }

    async fn list_tags(&self, limit: Option<u32>) -> DomainResult<Vec<Tag>> {
        let mut tags = Self::sorted_by_name(&self.dataset.tags, |t| t.name.as_str());
        if let Some(limit) = limit {
            tags.truncate(limit as usize);
        }
        Ok(tags)
    }

    async fn list_popular_articles(&self, limit: u32) -> DomainResult<Vec<PopularArticle>> {
        let mut popular: Vec<PopularArticle> = self
            .published()
            .map(|article| self.with_current_count(article).popular_entry())
            .collect();
        popular.sort_by(|a, b| b.view_count.cmp(&a.view_count).then_with(|| a.id.cmp(&b.id)));
        popular.truncate(limit as usize);
        Ok(popular)
    }

    async fn find_category_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let found = self
            .dataset
            .categories
            .iter()
            .find(|category| category.slug == *slug)
            .or_else(|| {
                self.substitute_missing
                    .then(|| self.dataset.featured_category())
                    .flatten()
            });

        if found.is_some_and(|category| category.slug != *slug) {
            tracing::debug!(requested = %slug, "serving sample category for unknown slug");
        }

        Ok(found.cloned())
    }

    async fn find_tag_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let found = self
            .dataset
            .tags
            .iter()
            .find(|tag| tag.slug == *slug)
            .or_else(|| {
                self.substitute_missing
                    .then(|| self.dataset.featured_tag())
                    .flatten()
            });

        if found.is_some_and(|tag| tag.slug != *slug) {
            tracing::debug!(requested = %slug, "serving sample tag for unknown slug");
        }

        Ok(found.cloned())
    }

    async fn list_categories_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        Ok(Self::sorted_by_name(&self.dataset.categories, |c| c.name.as_str())
            .into_iter()
            .map(|category| {
                let article_count = self
                    .published()
                    .filter(|article| article.has_category(category.slug.as_str()))
                    .count() as u64;
                WithArticleCount {
                    entry: category,
                    article_count,
                }
            })
            .collect())
    }

    async fn list_tags_with_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        Ok(Self::sorted_by_name(&self.dataset.tags, |t| t.name.as_str())
            .into_iter()
            .map(|tag| {
                let article_count = self
                    .published()
                    .filter(|article| article.has_tag(tag.slug.as_str()))
                    .count() as u64;
                WithArticleCount {
                    entry: tag,
                    article_count,
                }
            })
            .collect())
    }

    async fn count_published_articles(&self) -> DomainResult<u64> {
        Ok(self.published().count() as u64)
    }

    async fn list_all_articles(&self, page: PageRequest) -> DomainResult<Paged<ArticleSummary>> {
        let all = self.dataset.articles.iter().collect();
        Ok(Self::paginate(all, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repo() -> FixtureContentRepository {
        FixtureContentRepository::new(FixtureDataset::sample().unwrap())
    }

    fn slug(value: &str) -> Slug {
        Slug::new(value).unwrap()
    }

    #[tokio::test]
    async fn finds_published_article_by_slug() {
        let repo = sample_repo();
        let article = repo
            .find_article_by_slug(&slug("ai-transformation-changes"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            article.title,
            "AIトランスフォーメーションが企業にもたらす5つの大きな変化"
        );
        assert!(repo
            .find_article_by_slug(&slug("missing-article"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn substitution_serves_the_featured_article() {
        let repo = sample_repo().with_substitution(true);
        let article = repo
            .find_article_by_slug(&slug("missing-article"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(article.slug.as_str(), "ai-transformation-changes");
    }

    #[tokio::test]
    async fn substitution_serves_the_featured_category_and_tag() {
        let repo = sample_repo().with_substitution(true);
        let category = repo
            .find_category_by_slug(&slug("unknown-category"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(category.slug.as_str(), "business-strategy");

        let tag = repo
            .find_tag_by_slug(&slug("unknown-tag"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(tag.slug.as_str(), "chatgpt");

        let known = repo
            .find_tag_by_slug(&slug("business-use"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(known.slug.as_str(), "business-use");
    }

    #[tokio::test]
    async fn unknown_taxonomy_is_a_miss_without_substitution() {
        let repo = sample_repo();
        assert!(repo
            .find_category_by_slug(&slug("unknown-category"))
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_tag_by_slug(&slug("unknown-tag"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let repo = sample_repo();
        let page = repo
            .list_articles(&ArticleFilter::all(), PageRequest::new(1, 3))
            .await
            .unwrap();
        let slugs: Vec<_> = page.items.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(
            slugs,
            ["ai-transformation-changes", "ai-trends-2024", "ai-transformation-manufacturing"]
        );
        assert_eq!(page.total_count, 9);
    }

    #[tokio::test]
    async fn text_search_is_case_insensitive() {
        let repo = sample_repo();
        let page = repo
            .list_articles(&ArticleFilter::text("chatgpt"), PageRequest::new(1, 9))
            .await
            .unwrap();
        assert!(page
            .items
            .iter()
            .any(|a| a.slug.as_str() == "chatgpt-business-efficiency"));
    }

    #[tokio::test]
    async fn related_articles_share_a_category_and_exclude_the_source() {
        let repo = sample_repo();
        let source = repo
            .find_article_by_slug(&slug("ai-transformation-changes"))
            .await
            .unwrap()
            .unwrap();
        let related = repo
            .list_related_articles(source.id, &source.category_ids(), 3)
            .await
            .unwrap();
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|a| a.id != source.id));
        assert!(related
            .iter()
            .all(|a| a.categories.iter().any(|c| c.slug.as_str() == "business-strategy")));

        let none = repo.list_related_articles(source.id, &[], 3).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn increments_move_the_popular_ranking() {
        let repo = sample_repo();
        let id = ArticleId::new(12).unwrap();
        for _ in 0..1000 {
            repo.increment_view_count(id).await.unwrap();
        }
        let popular = repo.list_popular_articles(5).await.unwrap();
        assert_eq!(popular[0].id, id);
        assert_eq!(popular[0].view_count.value(), 1390);
    }

    #[tokio::test]
    async fn taxonomy_counts_cover_published_articles() {
        let repo = sample_repo();
        let categories = repo.list_categories_with_counts().await.unwrap();
        let business = categories
            .iter()
            .find(|c| c.entry.slug.as_str() == "business-strategy")
            .unwrap();
        assert_eq!(business.article_count, 5);

        let tags = repo.list_tags(Some(15)).await.unwrap();
        assert_eq!(tags.len(), 15);
    }
}
