use std::sync::Arc;

use crate::{
    application::{
        dto::{AdminDashboardView, AdminUserView},
        error::{ApplicationError, ApplicationResult},
        fallback::Degrade,
    },
    domain::{
        article::ArticleSummary,
        content::ContentRepository,
        pagination::{PageRequest, Paged},
        taxonomy::{CategoryWithCount, TagWithCount},
        user::{Role, UserRepository},
    },
};

pub const ADMIN_PAGE_SIZE: u32 = 20;

/// Read-only listings behind the admin gate.
pub struct AdminQueryService {
    content: Arc<dyn ContentRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AdminQueryService {
    pub fn new(content: Arc<dyn ContentRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { content, user_repo }
    }

    pub async fn dashboard(&self) -> AdminDashboardView {
        let (published, categories, tags) = tokio::join!(
            self.content.count_published_articles(),
            self.content.list_categories(),
            self.content.list_tags(None),
        );

        AdminDashboardView {
            published_articles: published.or_degrade("count_published_articles"),
            categories: categories.or_degrade("list_categories").len(),
            tags: tags.or_degrade("list_tags").len(),
        }
    }

    /// All articles, drafts included.
    pub async fn articles(&self, page: u32) -> Paged<ArticleSummary> {
        let request = PageRequest::new(page, ADMIN_PAGE_SIZE);
        self.content
            .list_all_articles(request)
            .await
            .or_degrade_with("list_all_articles", || Paged::empty(request))
    }

    pub async fn categories(&self) -> Vec<CategoryWithCount> {
        self.content
            .list_categories_with_counts()
            .await
            .or_degrade("list_categories_with_counts")
    }

    pub async fn tags(&self) -> Vec<TagWithCount> {
        self.content
            .list_tags_with_counts()
            .await
            .or_degrade("list_tags_with_counts")
    }

    /// Account list. Only administrators may see it.
    pub async fn users(&self, caller: Role) -> ApplicationResult<Vec<AdminUserView>> {
        if !caller.can_manage_users() {
            return Err(ApplicationError::forbidden(
                "user management requires the admin role",
            ));
        }

        let users = self.user_repo.list().await.or_degrade("list_users");
        Ok(users.into_iter().map(AdminUserView::from).collect())
    }
}
