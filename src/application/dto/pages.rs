// src/application/dto/pages.rs
//! View models handed from the page resolvers to the HTML renderer.
use crate::domain::article::{Article, ArticleSummary, PopularArticle};
use crate::domain::content::ArticleFilter;
use crate::domain::pagination::Paged;
use crate::domain::taxonomy::{Category, CategoryWithCount, Tag, TagWithCount};

#[derive(Debug, Clone, Default)]
pub struct SidebarView {
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub popular_articles: Vec<PopularArticle>,
}

impl SidebarView {
    pub fn category_name(&self, slug: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.slug.as_str() == slug)
            .map(|c| c.name.as_str())
    }

    pub fn tag_name(&self, slug: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.slug.as_str() == slug)
            .map(|t| t.name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub latest: Vec<ArticleSummary>,
    pub sidebar: SidebarView,
}

#[derive(Debug, Clone)]
pub struct ArticleDetailView {
    pub article: Article,
    pub related: Vec<ArticleSummary>,
    pub sidebar: SidebarView,
}

#[derive(Debug, Clone)]
pub struct ArticleListView {
    pub articles: Paged<ArticleSummary>,
    pub sidebar: SidebarView,
}

#[derive(Debug, Clone)]
pub struct CategoryDetailView {
    pub category: Category,
    pub articles: Paged<ArticleSummary>,
    pub sidebar: SidebarView,
}

#[derive(Debug, Clone)]
pub struct TagDetailView {
    pub tag: Tag,
    pub articles: Paged<ArticleSummary>,
    pub sidebar: SidebarView,
}

#[derive(Debug, Clone)]
pub struct CategoryIndexView {
    pub categories: Vec<CategoryWithCount>,
}

#[derive(Debug, Clone)]
pub struct TagIndexView {
    /// Name order.
    pub tags: Vec<TagWithCount>,
    /// Article-count order, most used first.
    pub popular: Vec<TagWithCount>,
}

/// Search parameters exactly as requested, blank values removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub page: u32,
}

impl SearchCriteria {
    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter::from_params(
            self.query.as_deref(),
            self.category.as_deref(),
            self.tag.as_deref(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.filter().is_unfiltered()
    }
}

/// "No search performed" is a distinct state from "zero results".
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    NotPerformed,
    Results(Paged<ArticleSummary>),
}

#[derive(Debug, Clone)]
pub struct SearchView {
    pub criteria: SearchCriteria,
    pub outcome: SearchOutcome,
    /// Human readable summary such as `"AI" / カテゴリ: ビジネス戦略`.
    pub description: Option<String>,
    pub sidebar: SidebarView,
}
