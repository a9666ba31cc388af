// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ViewCount};
use crate::domain::author::Author;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, CategoryId, Tag};
use chrono::{DateTime, Utc};

/// A fully resolved article: author, categories and tags included.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: Slug,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub view_count: ViewCount,
    pub featured_image: Option<String>,
    pub author: Author,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

impl Article {
    pub fn category_ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|category| category.id).collect()
    }

    pub fn has_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug.as_str() == slug)
    }

    pub fn has_tag(&self, slug: &str) -> bool {
        self.tags.iter().any(|t| t.slug.as_str() == slug)
    }

    /// Case-insensitive substring match over title, content and excerpt.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self
                .excerpt
                .as_deref()
                .is_some_and(|excerpt| excerpt.to_lowercase().contains(&needle))
    }

    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            published: self.published,
            published_at: self.published_at,
            featured_image: self.featured_image.clone(),
            author_name: self.author.name.clone(),
            categories: self.categories.clone(),
            tags: self.tags.clone(),
        }
    }

    pub fn popular_entry(&self) -> PopularArticle {
        PopularArticle {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            view_count: self.view_count,
        }
    }
}

/// Listing projection used by cards, search results and related articles.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub slug: Slug,
    pub title: String,
    pub excerpt: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

/// Sidebar projection ordered by view count.
#[derive(Debug, Clone)]
pub struct PopularArticle {
    pub id: ArticleId,
    pub slug: Slug,
    pub title: String,
    pub view_count: ViewCount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::AuthorId;
    use crate::domain::taxonomy::TagId;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            slug: Slug::new("sample").unwrap(),
            title: "ChatGPT Primer".into(),
            excerpt: Some("Short intro".into()),
            content: "# Body\n\nMachine Learning basics".into(),
            published: true,
            published_at: None,
            updated_at: None,
            view_count: ViewCount::default(),
            featured_image: None,
            author: Author {
                id: AuthorId::new(1).unwrap(),
                name: "山田太郎".into(),
                email: "yamada@example.com".into(),
            },
            categories: vec![Category {
                id: CategoryId::new(3).unwrap(),
                name: "導入事例".into(),
                slug: Slug::new("case-studies").unwrap(),
                description: None,
            }],
            tags: vec![Tag {
                id: TagId::new(1).unwrap(),
                name: "ChatGPT".into(),
                slug: Slug::new("chatgpt").unwrap(),
                description: None,
            }],
        }
    }

    #[test]
    fn text_match_is_case_insensitive_across_fields() {
        let article = sample_article();
        assert!(article.matches_text("chatgpt"));
        assert!(article.matches_text("MACHINE learning"));
        assert!(article.matches_text("short"));
        assert!(!article.matches_text("blockchain"));
    }

    #[test]
    fn taxonomy_membership() {
        let article = sample_article();
        assert!(article.has_category("case-studies"));
        assert!(!article.has_category("business-strategy"));
        assert!(article.has_tag("chatgpt"));
        assert_eq!(article.category_ids(), vec![CategoryId(3)]);
    }

    #[test]
    fn summary_keeps_listing_fields() {
        let summary = sample_article().summary();
        assert_eq!(summary.author_name, "山田太郎");
        assert_eq!(summary.slug.as_str(), "sample");
        assert_eq!(summary.categories.len(), 1);
    }
}
