use super::{LISTING_PAGE_SIZE, PageQueryService};
use crate::{
    application::{
        dto::{SearchCriteria, SearchOutcome, SearchView, SidebarView},
        fallback::Degrade,
    },
    domain::pagination::{PageRequest, Paged},
};

impl PageQueryService {
    /// Runs a search only when at least one criterion is present. With no
    /// criteria the outcome is `NotPerformed`, which the page renders as a
    /// prompt rather than as an empty result list.
    pub async fn search(&self, criteria: SearchCriteria) -> SearchView {
        let filter = criteria.filter();

        if filter.is_unfiltered() {
            return SearchView {
                criteria,
                outcome: SearchOutcome::NotPerformed,
                description: None,
                sidebar: self.sidebar().await,
            };
        }

        let request = PageRequest::new(criteria.page, LISTING_PAGE_SIZE);
        let (results, sidebar) = tokio::join!(
            self.content.list_articles(&filter, request),
            self.sidebar(),
        );
        let results = results.or_degrade_with("list_articles", || Paged::empty(request));
        let description = describe_criteria(&criteria, &sidebar);

        SearchView {
            criteria,
            outcome: SearchOutcome::Results(results),
            description,
            sidebar,
        }
    }
}

/// `"AI" / カテゴリ: ビジネス戦略 / タグ: ChatGPT`. Slugs not present in the
/// sidebar are shown as given.
pub fn describe_criteria(criteria: &SearchCriteria, sidebar: &SidebarView) -> Option<String> {
    let filter = criteria.filter();
    let mut parts = Vec::new();

    if let Some(text) = &filter.text {
        parts.push(format!("\"{text}\""));
    }
    if let Some(category) = &filter.category {
        let name = sidebar.category_name(category).unwrap_or(category.as_str());
        parts.push(format!("カテゴリ: {name}"));
    }
    if let Some(tag) = &filter.tag {
        let name = sidebar.tag_name(tag).unwrap_or(tag.as_str());
        parts.push(format!("タグ: {name}"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" / "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        slug::Slug,
        taxonomy::{Category, CategoryId},
    };

    fn sidebar() -> SidebarView {
        SidebarView {
            categories: vec![Category {
                id: CategoryId(1),
                name: "ビジネス戦略".into(),
                slug: Slug::new("business-strategy").unwrap(),
                description: None,
            }],
            ..SidebarView::default()
        }
    }

    #[test]
    fn description_uses_known_names() {
        let criteria = SearchCriteria {
            query: Some("AI".into()),
            category: Some("business-strategy".into()),
            tag: Some("unknown-tag".into()),
            page: 1,
        };
        assert_eq!(
            describe_criteria(&criteria, &sidebar()).as_deref(),
            Some("\"AI\" / カテゴリ: ビジネス戦略 / タグ: unknown-tag")
        );
    }

    #[test]
    fn blank_criteria_have_no_description() {
        let criteria = SearchCriteria {
            query: Some("   ".into()),
            ..SearchCriteria::default()
        };
        assert!(describe_criteria(&criteria, &sidebar()).is_none());
    }
}
