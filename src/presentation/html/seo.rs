// src/presentation/html/seo.rs
//! `<head>` metadata and schema.org JSON-LD derived from view models.
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use super::escape::escape_html;
use crate::config::SiteSettings;
use crate::domain::article::Article;

pub const DEFAULT_OG_IMAGE: &str = "/images/og-default.jpg";
pub const SITE_TAGLINE: &str = "AIトランスフォーメーション情報ポータル";
pub const DEFAULT_DESCRIPTION: &str =
    "AIトランスフォーメーションに関する最新情報と専門知識を提供する情報ポータルサイト";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// One breadcrumb step; `path` is site-relative.
#[derive(Debug, Clone)]
pub struct Crumb {
    pub name: String,
    pub path: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Page title without the site-name suffix. `None` renders the site
    /// default title.
    pub title: Option<String>,
    pub description: String,
    pub canonical_path: String,
    pub og_type: OgType,
    pub image: Option<String>,
    pub published_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub noindex: bool,
    pub structured_data: Vec<Value>,
}

impl PageMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        canonical_path: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            canonical_path: canonical_path.into(),
            og_type: OgType::Website,
            image: None,
            published_time: None,
            modified_time: None,
            author: None,
            noindex: false,
            structured_data: Vec::new(),
        }
    }

    pub fn site_default(canonical_path: impl Into<String>) -> Self {
        Self {
            title: None,
            ..Self::new("", DEFAULT_DESCRIPTION, canonical_path)
        }
    }

    /// Private pages: admin area, sign-in, errors.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.noindex = true;
        self
    }

    #[must_use]
    pub fn with_breadcrumbs(mut self, site: &SiteSettings, crumbs: &[Crumb]) -> Self {
        if !crumbs.is_empty() {
            self.structured_data.push(breadcrumb_json_ld(site, crumbs));
        }
        self
    }

    #[must_use]
    pub fn with_structured_data(mut self, value: Value) -> Self {
        self.structured_data.push(value);
        self
    }

    pub fn for_article(site: &SiteSettings, article: &Article) -> Self {
        let description = article_description(article);
        let mut meta = Self::new(
            article.title.clone(),
            description,
            format!("/articles/{}", article.slug),
        );
        meta.og_type = OgType::Article;
        meta.image = article.featured_image.clone();
        meta.published_time = article.published_at;
        meta.modified_time = article.updated_at;
        meta.author = Some(article.author.name.clone());
        meta.with_structured_data(article_json_ld(site, article))
    }

    pub fn full_title(&self, site: &SiteSettings) -> String {
        match &self.title {
            Some(title) if !title.is_empty() => format!("{title} | {}", site.name),
            _ => format!("{} | {SITE_TAGLINE}", site.name),
        }
    }
}

/// The excerpt, or a generated sentence when the article has none.
pub fn article_description(article: &Article) -> String {
    article
        .excerpt
        .clone()
        .filter(|excerpt| !excerpt.trim().is_empty())
        .unwrap_or_else(|| format!("{}についての詳細記事", article.title))
}

fn rfc3339(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    out.push_str(&format!(
        "<meta property=\"{property}\" content=\"{}\">\n",
        escape_html(content)
    ));
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    out.push_str(&format!(
        "<meta name=\"{name}\" content=\"{}\">\n",
        escape_html(content)
    ));
}

/// Everything inside `<head>` that depends on the page.
pub fn render_head(meta: &PageMeta, site: &SiteSettings) -> String {
    let title = meta.full_title(site);
    let canonical = site.absolute_url(&meta.canonical_path);
    let image = site.absolute_url(meta.image.as_deref().unwrap_or(DEFAULT_OG_IMAGE));

    let mut out = String::new();
    out.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    meta_name(&mut out, "description", &meta.description);
    if meta.noindex {
        meta_name(&mut out, "robots", "noindex, nofollow");
    }
    out.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_html(&canonical)
    ));

    meta_property(&mut out, "og:type", meta.og_type.as_str());
    meta_property(&mut out, "og:title", &title);
    meta_property(&mut out, "og:description", &meta.description);
    meta_property(&mut out, "og:url", &canonical);
    meta_property(&mut out, "og:site_name", &site.name);
    meta_property(&mut out, "og:locale", site.locale.og_locale());
    meta_property(&mut out, "og:image", &image);
    meta_property(&mut out, "og:image:width", "1200");
    meta_property(&mut out, "og:image:height", "630");
    if meta.og_type == OgType::Article {
        if let Some(published) = meta.published_time {
            meta_property(&mut out, "article:published_time", &rfc3339(published));
        }
        if let Some(modified) = meta.modified_time {
            meta_property(&mut out, "article:modified_time", &rfc3339(modified));
        }
        if let Some(author) = &meta.author {
            meta_property(&mut out, "article:author", author);
        }
    }

    meta_name(&mut out, "twitter:card", "summary_large_image");
    meta_name(&mut out, "twitter:title", &title);
    meta_name(&mut out, "twitter:description", &meta.description);
    meta_name(&mut out, "twitter:image", &image);

    for value in &meta.structured_data {
        out.push_str(&json_ld_script(value));
    }
    out
}

/// Serialize JSON-LD for inline embedding. `<`, `>` and `&` are written as
/// unicode escapes so the payload can never close the script element.
pub fn json_ld_script(value: &Value) -> String {
    let json = value.to_string();
    let mut escaped = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    format!("<script type=\"application/ld+json\">{escaped}</script>\n")
}

pub fn breadcrumb_json_ld(site: &SiteSettings, crumbs: &[Crumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(index, crumb)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": crumb.name,
                "item": site.absolute_url(&crumb.path),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn website_json_ld(site: &SiteSettings) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "url": site.url,
        "name": site.name,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/search?q={{search_term_string}}", site.url),
            "query-input": "required name=search_term_string",
        },
    })
}

pub fn organization_json_ld(site: &SiteSettings) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.name,
        "url": site.url,
        "logo": site.absolute_url("/images/logo.png"),
    })
}

pub fn article_json_ld(site: &SiteSettings, article: &Article) -> Value {
    let url = site.absolute_url(&format!("/articles/{}", article.slug));
    let image = site.absolute_url(
        article
            .featured_image
            .as_deref()
            .unwrap_or(DEFAULT_OG_IMAGE),
    );
    let published = article.published_at.map(rfc3339);
    let modified = article.updated_at.or(article.published_at).map(rfc3339);

    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article_description(article),
        "image": image,
        "url": url,
        "datePublished": published,
        "dateModified": modified,
        "author": {
            "@type": "Person",
            "name": article.author.name,
        },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": {
                "@type": "ImageObject",
                "url": site.absolute_url("/images/logo.png"),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    })
}
