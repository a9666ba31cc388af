use super::{LISTING_PAGE_SIZE, PageQueryService};
use crate::{
    application::{dto::ArticleListView, fallback::Degrade},
    domain::{
        content::ArticleFilter,
        pagination::{PageRequest, Paged},
    },
};

impl PageQueryService {
    /// Published articles, newest first, nine per page.
    pub async fn article_list(&self, page: u32) -> ArticleListView {
        let request = PageRequest::new(page, LISTING_PAGE_SIZE);
        let filter = ArticleFilter::all();
        let (articles, sidebar) = tokio::join!(
            self.content.list_articles(&filter, request),
            self.sidebar(),
        );

        ArticleListView {
            articles: articles.or_degrade_with("list_articles", || Paged::empty(request)),
            sidebar,
        }
    }
}
