// tests/support/builders.rs
use chrono::{Duration, TimeZone, Utc};

use ax_portal::domain::article::{Article, ArticleId, ViewCount};
use ax_portal::domain::author::{Author, AuthorId};
use ax_portal::domain::slug::Slug;
use ax_portal::domain::taxonomy::{Category, CategoryId, Tag, TagId};
use ax_portal::infrastructure::fixtures::FixtureDataset;

pub fn category(id: i64, name: &str, slug: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: name.into(),
        slug: Slug::new(slug).unwrap(),
        description: None,
    }
}

pub fn tag(id: i64, name: &str, slug: &str) -> Tag {
    Tag {
        id: TagId::new(id).unwrap(),
        name: name.into(),
        slug: Slug::new(slug).unwrap(),
        description: None,
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    published: bool,
    day_offset: i64,
    view_count: u64,
    categories: Vec<Category>,
    tags: Vec<Tag>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("テスト記事 {id}"),
            slug: format!("test-article-{id}"),
            content: "本文".into(),
            published: true,
            day_offset: id,
            view_count: 0,
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.view_count = views;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn build(self) -> Article {
        let published_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(self.day_offset);
        Article {
            id: ArticleId::new(self.id).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            title: self.title,
            excerpt: Some("概要".into()),
            content: self.content,
            published: self.published,
            published_at: self.published.then_some(published_at),
            updated_at: Some(published_at),
            view_count: ViewCount::new(self.view_count),
            featured_image: None,
            author: Author {
                id: AuthorId::new(1).unwrap(),
                name: "山田太郎".into(),
                email: "yamada@example.com".into(),
            },
            categories: self.categories,
            tags: self.tags,
        }
    }
}

/// `matching` published business-strategy articles, plus one draft and one
/// article in another category that must never show up in that listing.
pub fn business_strategy_dataset(matching: i64) -> FixtureDataset {
    let strategy = category(1, "ビジネス戦略", "business-strategy");
    let basics = category(2, "AI基礎", "ai-basics");
    let chatgpt = tag(1, "ChatGPT", "chatgpt");

    let mut articles: Vec<Article> = (1..=matching)
        .map(|id| {
            ArticleBuilder::new(id)
                .category(strategy.clone())
                .tag(chatgpt.clone())
                .build()
        })
        .collect();
    articles.push(
        ArticleBuilder::new(matching + 1)
            .category(strategy.clone())
            .draft()
            .build(),
    );
    articles.push(
        ArticleBuilder::new(matching + 2)
            .category(basics.clone())
            .build(),
    );

    FixtureDataset::new(articles, vec![strategy, basics], vec![chatgpt])
}
