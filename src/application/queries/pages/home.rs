use super::{HOME_LATEST_LIMIT, PageQueryService};
use crate::{
    application::{dto::HomeView, fallback::Degrade},
    domain::{
        content::ArticleFilter,
        pagination::{PageRequest, Paged},
    },
};

impl PageQueryService {
    pub async fn home(&self) -> HomeView {
        let request = PageRequest::new(1, HOME_LATEST_LIMIT);
        let filter = ArticleFilter::all();
        let (latest, sidebar) = tokio::join!(
            self.content.list_articles(&filter, request),
            self.sidebar(),
        );

        HomeView {
            latest: latest
                .or_degrade_with("list_articles", || Paged::empty(request))
                .items,
            sidebar,
        }
    }
}
