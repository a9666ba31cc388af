use super::{LISTING_PAGE_SIZE, POPULAR_TAG_LIMIT, PageQueryService};
use crate::{
    application::{
        dto::{CategoryDetailView, CategoryIndexView, TagDetailView, TagIndexView},
        error::{ApplicationError, ApplicationResult},
        fallback::Degrade,
    },
    domain::{
        content::ArticleFilter,
        pagination::{PageRequest, Paged},
    },
};

impl PageQueryService {
    pub async fn category_index(&self) -> CategoryIndexView {
        let categories = self
            .content
            .list_categories_with_counts()
            .await
            .or_degrade("list_categories_with_counts");
        CategoryIndexView { categories }
    }

    pub async fn category_detail(
        &self,
        slug: &str,
        page: u32,
    ) -> ApplicationResult<CategoryDetailView> {
        let slug = Self::parse_slug(slug, "category")?;
        let category = self
            .content
            .find_category_by_slug(&slug)
            .await
            .or_degrade("find_category_by_slug")
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let request = PageRequest::new(page, LISTING_PAGE_SIZE);
        let filter = ArticleFilter::category(category.slug.as_str());
        let (articles, sidebar) = tokio::join!(
            self.content.list_articles(&filter, request),
            self.sidebar(),
        );

        Ok(CategoryDetailView {
            category,
            articles: articles.or_degrade_with("list_articles", || Paged::empty(request)),
            sidebar,
        })
    }

    /// Every tag in name order, plus the most used ones.
    pub async fn tag_index(&self) -> TagIndexView {
        let tags = self
            .content
            .list_tags_with_counts()
            .await
            .or_degrade("list_tags_with_counts");

        let mut popular = tags.clone();
        // stable sort keeps name order among equal counts
        popular.sort_by(|a, b| b.article_count.cmp(&a.article_count));
        popular.truncate(POPULAR_TAG_LIMIT);

        TagIndexView { tags, popular }
    }

    pub async fn tag_detail(&self, slug: &str, page: u32) -> ApplicationResult<TagDetailView> {
        let slug = Self::parse_slug(slug, "tag")?;
        let tag = self
            .content
            .find_tag_by_slug(&slug)
            .await
            .or_degrade("find_tag_by_slug")
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let request = PageRequest::new(page, LISTING_PAGE_SIZE);
        let filter = ArticleFilter::tag(tag.slug.as_str());
        let (articles, sidebar) = tokio::join!(
            self.content.list_articles(&filter, request),
            self.sidebar(),
        );

        Ok(TagDetailView {
            tag,
            articles: articles.or_degrade_with("list_articles", || Paged::empty(request)),
            sidebar,
        })
    }
}
