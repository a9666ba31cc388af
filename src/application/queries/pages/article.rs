use super::{PageQueryService, RELATED_ARTICLE_LIMIT};
use crate::{
    application::{
        dto::ArticleDetailView,
        error::{ApplicationError, ApplicationResult},
        fallback::Degrade,
    },
    domain::article::Article,
};

impl PageQueryService {
    pub async fn article_detail(&self, slug: &str) -> ApplicationResult<ArticleDetailView> {
        let article = self.lookup_article(slug).await?;
        let category_ids = article.category_ids();

        let (increment, related, sidebar) = tokio::join!(
            self.content.increment_view_count(article.id),
            self.content
                .list_related_articles(article.id, &category_ids, RELATED_ARTICLE_LIMIT),
            self.sidebar(),
        );

        if let Err(err) = increment {
            tracing::warn!(article_id = article.id.0, error = %err, "view count increment failed");
        }

        Ok(ArticleDetailView {
            article,
            related: related.or_degrade("list_related_articles"),
            sidebar,
        })
    }

    async fn lookup_article(&self, slug: &str) -> ApplicationResult<Article> {
        let slug = Self::parse_slug(slug, "article")?;
        self.content
            .find_article_by_slug(&slug)
            .await
            .or_degrade("find_article_by_slug")
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
