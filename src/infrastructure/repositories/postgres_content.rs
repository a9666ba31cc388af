// src/infrastructure/repositories/postgres_content.rs
use std::collections::HashMap;

use super::error::{contains_pattern, map_sqlx, skip_invalid, to_i64, to_u64};
use crate::domain::article::{Article, ArticleId, ArticleSummary, PopularArticle, ViewCount};
use crate::domain::author::{Author, AuthorId};
use crate::domain::content::{ArticleFilter, ContentRepository};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{
    Category, CategoryId, CategoryWithCount, Tag, TagId, TagWithCount, WithArticleCount,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SUMMARY_SELECT: &str = "SELECT a.id, a.slug, a.title, a.excerpt, a.published, a.published_at, \
     a.featured_image, au.name AS author_name \
     FROM articles a JOIN authors au ON au.id = a.author_id";

const COUNT_SELECT: &str =
    "SELECT COUNT(*) FROM articles a JOIN authors au ON au.id = a.author_id";

const ORDER_NEWEST_FIRST: &str = " ORDER BY a.published_at DESC NULLS LAST, a.id DESC";

#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    excerpt: Option<String>,
    content: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    view_count: i64,
    featured_image: Option<String>,
    author_id: i64,
    author_name: String,
    author_email: String,
}

impl ArticleRow {
    fn into_article(self, categories: Vec<Category>, tags: Vec<Tag>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            slug: Slug::new(self.slug)?,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            published: self.published,
            published_at: self.published_at,
            updated_at: self.updated_at,
            view_count: ViewCount::try_from(self.view_count)?,
            featured_image: self.featured_image,
            author: Author {
                id: AuthorId::new(self.author_id)?,
                name: self.author_name,
                email: self.author_email,
            },
            categories,
            tags,
        })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    slug: String,
    title: String,
    excerpt: Option<String>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    featured_image: Option<String>,
    author_name: String,
}

impl SummaryRow {
    fn into_summary(self, categories: Vec<Category>, tags: Vec<Tag>) -> DomainResult<ArticleSummary> {
        Ok(ArticleSummary {
            id: ArticleId::new(self.id)?,
            slug: Slug::new(self.slug)?,
            title: self.title,
            excerpt: self.excerpt,
            published: self.published,
            published_at: self.published_at,
            featured_image: self.featured_image,
            author_name: self.author_name,
            categories,
            tags,
        })
    }
}

#[derive(Debug, FromRow)]
struct PopularRow {
    id: i64,
    slug: String,
    title: String,
    view_count: i64,
}

impl TryFrom<PopularRow> for PopularArticle {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: PopularRow) -> Result<Self, Self::Error> {
        Ok(PopularArticle {
            id: ArticleId::new(row.id)?,
            slug: Slug::new(row.slug)?,
            title: row.title,
            view_count: ViewCount::try_from(row.view_count)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct TaxonomyRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
}

impl TaxonomyRow {
    fn into_category(self) -> DomainResult<Category> {
        Ok(Category {
            id: CategoryId::new(self.id)?,
            name: self.name,
            slug: Slug::new(self.slug)?,
            description: self.description,
        })
    }

    fn into_tag(self) -> DomainResult<Tag> {
        Ok(Tag {
            id: TagId::new(self.id)?,
            name: self.name,
            slug: Slug::new(self.slug)?,
            description: self.description,
        })
    }
}

/// A taxonomy entry joined to one of its articles.
#[derive(Debug, FromRow)]
struct LinkedTaxonomyRow {
    owner_id: i64,
    #[sqlx(flatten)]
    entry: TaxonomyRow,
}

#[derive(Debug, FromRow)]
struct CountedTaxonomyRow {
    #[sqlx(flatten)]
    entry: TaxonomyRow,
    article_count: i64,
}

type CategoriesByArticle = HashMap<i64, Vec<Category>>;
type TagsByArticle = HashMap<i64, Vec<Tag>>;

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    if *has_where {
        builder.push(" AND ");
    } else {
        builder.push(" WHERE ");
        *has_where = true;
    }
}

impl PostgresContentRepository {
    fn apply_conditions(
        builder: &mut QueryBuilder<'_, Postgres>,
        include_drafts: bool,
        filter: &ArticleFilter,
    ) {
        let mut has_where = false;
        if !include_drafts {
            push_clause(builder, &mut has_where);
            builder.push("a.published = TRUE");
        }

        if let Some(text) = &filter.text {
            let pattern = contains_pattern(text);
            push_clause(builder, &mut has_where);
            builder.push("(a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.content ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.excerpt ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(category) = &filter.category {
            push_clause(builder, &mut has_where);
            builder.push(
                "EXISTS (SELECT 1 FROM article_categories ac \
                 JOIN categories c ON c.id = ac.category_id \
                 WHERE ac.article_id = a.id AND c.slug = ",
            );
            builder.push_bind(category.clone());
            builder.push(")");
        }

        if let Some(tag) = &filter.tag {
            push_clause(builder, &mut has_where);
            builder.push(
                "EXISTS (SELECT 1 FROM article_tags atg \
                 JOIN tags t ON t.id = atg.tag_id \
                 WHERE atg.article_id = a.id AND t.slug = ",
            );
            builder.push_bind(tag.clone());
            builder.push(")");
        }
    }

    fn count_query(include_drafts: bool, filter: &ArticleFilter) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(COUNT_SELECT);
        Self::apply_conditions(&mut builder, include_drafts, filter);
        builder
    }

    fn page_query(
        include_drafts: bool,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(SUMMARY_SELECT);
        Self::apply_conditions(&mut builder, include_drafts, filter);
        builder.push(ORDER_NEWEST_FIRST);
        builder.push(" LIMIT ");
        builder.push_bind(to_i64(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(page.offset()));
        builder
    }

    fn related_query(
        id: ArticleId,
        category_ids: &[CategoryId],
        limit: u32,
    ) -> QueryBuilder<'static, Postgres> {
        let category_ids: Vec<i64> = category_ids.iter().copied().map(i64::from).collect();
        let mut builder = QueryBuilder::new(SUMMARY_SELECT);
        builder.push(" WHERE a.published = TRUE AND a.id <> ");
        builder.push_bind(i64::from(id));
        builder.push(
            " AND EXISTS (SELECT 1 FROM article_categories ac \
             WHERE ac.article_id = a.id AND ac.category_id = ANY(",
        );
        builder.push_bind(category_ids);
        builder.push("))");
        builder.push(ORDER_NEWEST_FIRST);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder
    }

    async fn fetch_page(
        &self,
        include_drafts: bool,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleSummary>> {
        let total = Self::count_query(include_drafts, filter)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let total = to_u64(total);

        if total <= page.offset() {
            return Ok(Paged::new(Vec::new(), total, page));
        }

        let rows = Self::page_query(include_drafts, filter, page)
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = self.attach_taxonomy(rows).await?;
        Ok(Paged::new(items, total, page))
    }

    async fn attach_taxonomy(&self, rows: Vec<SummaryRow>) -> DomainResult<Vec<ArticleSummary>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let (mut categories, mut tags) = self.load_taxonomy(&ids).await?;

        let summaries = rows.into_iter().map(|row| {
            let id = row.id;
            row.into_summary(
                categories.remove(&id).unwrap_or_default(),
                tags.remove(&id).unwrap_or_default(),
            )
        });
        Ok(skip_invalid(summaries, "article"))
    }

    async fn load_taxonomy(&self, ids: &[i64]) -> DomainResult<(CategoriesByArticle, TagsByArticle)> {
        if ids.is_empty() {
            return Ok((HashMap::new(), HashMap::new()));
        }

        let (category_rows, tag_rows) = tokio::try_join!(
            sqlx::query_as::<_, LinkedTaxonomyRow>(
                "SELECT ac.article_id AS owner_id, c.id, c.name, c.slug, c.description
                 FROM article_categories ac JOIN categories c ON c.id = ac.category_id
                 WHERE ac.article_id = ANY($1)
                 ORDER BY c.name ASC, c.id ASC",
            )
            .bind(ids)
            .fetch_all(&self.pool),
            sqlx::query_as::<_, LinkedTaxonomyRow>(
                "SELECT atg.article_id AS owner_id, t.id, t.name, t.slug, t.description
                 FROM article_tags atg JOIN tags t ON t.id = atg.tag_id
                 WHERE atg.article_id = ANY($1)
                 ORDER BY t.name ASC, t.id ASC",
            )
            .bind(ids)
            .fetch_all(&self.pool),
        )
        .map_err(map_sqlx)?;

        let mut categories: CategoriesByArticle = HashMap::new();
        let linked = category_rows
            .into_iter()
            .map(|row| -> DomainResult<_> { Ok((row.owner_id, row.entry.into_category()?)) });
        for (owner_id, category) in skip_invalid(linked, "category") {
            categories.entry(owner_id).or_default().push(category);
        }

        let mut tags: TagsByArticle = HashMap::new();
        let linked = tag_rows
            .into_iter()
            .map(|row| -> DomainResult<_> { Ok((row.owner_id, row.entry.into_tag()?)) });
        for (owner_id, tag) in skip_invalid(linked, "tag") {
            tags.entry(owner_id).or_default().push(tag);
        }

        Ok((categories, tags))
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn find_article_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT a.id, a.slug, a.title, a.excerpt, a.content, a.published, a.published_at,
                    a.updated_at, a.view_count, a.featured_image,
                    au.id AS author_id, au.name AS author_name, au.email AS author_email
             FROM articles a JOIN authors au ON au.id = a.author_id
             WHERE a.slug = $1 AND a.published = TRUE",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let (mut categories, mut tags) = self.load_taxonomy(&[row.id]).await?;
        let id = row.id;
        row.into_article(
            categories.remove(&id).unwrap_or_default(),
            tags.remove(&id).unwrap_or_default(),
        )
        .map(Some)
    }

    async fn list_articles(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleSummary>> {
        self.fetch_page(false, filter, page).await
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET view_count = view_count + 1 WHERE id = $1 AND published = TRUE")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_related_articles(
        &self,
        id: ArticleId,
        category_ids: &[CategoryId],
        limit: u32,
    ) -> DomainResult<Vec<ArticleSummary>> {
        if category_ids.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let rows = Self::related_query(id, category_ids, limit)
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.attach_taxonomy(rows).await
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, TaxonomyRow>(
            "SELECT id, name, slug, description FROM categories ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(skip_invalid(
            rows.into_iter().map(TaxonomyRow::into_category),
            "category",
        ))
    }

    async fn list_tags(&self, limit: Option<u32>) -> DomainResult<Vec<Tag>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, name, slug, description FROM tags ORDER BY name ASC, id ASC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<TaxonomyRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(skip_invalid(rows.into_iter().map(TaxonomyRow::into_tag), "tag"))
    }

    async fn list_popular_articles(&self, limit: u32) -> DomainResult<Vec<PopularArticle>> {
        let rows = sqlx::query_as::<_, PopularRow>(
            "SELECT id, slug, title, view_count FROM articles
             WHERE published = TRUE
             ORDER BY view_count DESC, id ASC
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(skip_invalid(
            rows.into_iter().map(PopularArticle::try_from),
            "article",
        ))
    }

    async fn find_category_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, TaxonomyRow>(
            "SELECT id, name, slug, description FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(TaxonomyRow::into_category).transpose()
    }

    async fn find_tag_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TaxonomyRow>(
            "SELECT id, name, slug, description FROM tags WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(TaxonomyRow::into_tag).transpose()
    }

    async fn list_categories_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let rows = sqlx::query_as::<_, CountedTaxonomyRow>(
            "SELECT c.id, c.name, c.slug, c.description, COUNT(a.id) AS article_count
             FROM categories c
             LEFT JOIN article_categories ac ON ac.category_id = c.id
             LEFT JOIN articles a ON a.id = ac.article_id AND a.published = TRUE
             GROUP BY c.id
             ORDER BY c.name ASC, c.id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let counted = rows.into_iter().map(|row| -> DomainResult<_> {
            Ok(WithArticleCount {
                entry: row.entry.into_category()?,
                article_count: to_u64(row.article_count),
            })
        });
        Ok(skip_invalid(counted, "category"))
    }

    async fn list_tags_with_counts(&self) -> DomainResult<Vec<TagWithCount>> {
        let rows = sqlx::query_as::<_, CountedTaxonomyRow>(
            "SELECT t.id, t.name, t.slug, t.description, COUNT(a.id) AS article_count
             FROM tags t
             LEFT JOIN article_tags atg ON atg.tag_id = t.id
             LEFT JOIN articles a ON a.id = atg.article_id AND a.published = TRUE
             GROUP BY t.id
             ORDER BY t.name ASC, t.id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let counted = rows.into_iter().map(|row| -> DomainResult<_> {
            Ok(WithArticleCount {
                entry: row.entry.into_tag()?,
                article_count: to_u64(row.article_count),
            })
        });
        Ok(skip_invalid(counted, "tag"))
    }

    async fn count_published_articles(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles WHERE published = TRUE")
            .fetch_one(&self.pool)
            .await
            .map(to_u64)
            .map_err(map_sqlx)
    }

    async fn list_all_articles(&self, page: PageRequest) -> DomainResult<Paged<ArticleSummary>> {
        self.fetch_page(true, &ArticleFilter::all(), page).await
    }
}
