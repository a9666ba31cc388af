// src/presentation/html/layout.rs
//! Document shell and components shared by public and admin pages.
use std::fmt::Write as _;

use super::escape::{encode_query_value, escape_html};
use super::format::{format_date, iso_date, truncate_text};
use super::seo::{Crumb, PageMeta, render_head};
use crate::application::dto::pages::SidebarView;
use crate::config::{SiteLocale, SiteSettings};
use crate::domain::article::ArticleSummary;
use crate::domain::user::Role;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
const CARD_EXCERPT_CHARS: usize = 120;

/// Top-level navigation entries; used to mark the active link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicSection {
    Home,
    Articles,
    Categories,
    Tags,
    Search,
    About,
    Contact,
    None,
}

const PUBLIC_NAV: [(PublicSection, &str, &str); 6] = [
    (PublicSection::Home, "/", "ホーム"),
    (PublicSection::Articles, "/articles", "記事一覧"),
    (PublicSection::Categories, "/categories", "カテゴリ"),
    (PublicSection::Tags, "/tags", "タグ"),
    (PublicSection::About, "/about", "AX総研について"),
    (PublicSection::Contact, "/contact", "お問い合わせ"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Articles,
    Categories,
    Tags,
    Users,
    Settings,
    Contacts,
}

impl AdminSection {
    const ALL: [AdminSection; 7] = [
        Self::Dashboard,
        Self::Articles,
        Self::Categories,
        Self::Tags,
        Self::Users,
        Self::Settings,
        Self::Contacts,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/admin",
            Self::Articles => "/admin/articles",
            Self::Categories => "/admin/categories",
            Self::Tags => "/admin/tags",
            Self::Users => "/admin/users",
            Self::Settings => "/admin/settings",
            Self::Contacts => "/admin/contacts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "ダッシュボード",
            Self::Articles => "記事管理",
            Self::Categories => "カテゴリ管理",
            Self::Tags => "タグ管理",
            Self::Users => "ユーザー管理",
            Self::Settings => "設定",
            Self::Contacts => "お問い合わせ",
        }
    }

    pub fn visible_to(self, role: Role) -> bool {
        match self {
            Self::Users => role.can_manage_users(),
            _ => role.can_access_admin(),
        }
    }
}

fn document(site: &SiteSettings, meta: &PageMeta, body_class: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <link rel=\"stylesheet\" href=\"/static/site.css\">\n{head}</head>\n\
         <body class=\"{body_class}\">\n{body}</body>\n</html>\n",
        lang = site.locale.as_str(),
        head = render_head(meta, site),
    )
}

pub fn public_page(
    site: &SiteSettings,
    meta: &PageMeta,
    active: PublicSection,
    main: &str,
) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<header class=\"site-header\">\n<a class=\"logo\" href=\"/\">{}</a>\n<nav>\n",
        escape_html(&site.name)
    );
    for (section, href, label) in PUBLIC_NAV {
        let current = if section == active {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(body, "<a href=\"{href}\"{current}>{label}</a>");
    }
    body.push_str(
        "</nav>\n<form class=\"header-search\" action=\"/search\" method=\"get\">\
         <input type=\"search\" name=\"q\" placeholder=\"記事を検索\">\
         <button type=\"submit\">検索</button></form>\n</header>\n",
    );
    let _ = write!(body, "<main>\n{main}</main>\n");
    let _ = write!(
        body,
        "<footer class=\"site-footer\"><p>&copy; {}</p></footer>\n",
        escape_html(&site.name)
    );
    document(site, meta, "public", &body)
}

pub fn admin_page(
    site: &SiteSettings,
    meta: &PageMeta,
    role: Role,
    active: AdminSection,
    main: &str,
) -> String {
    let mut body = String::from("<div class=\"admin\">\n<aside class=\"admin-nav\">\n<nav>\n");
    for section in AdminSection::ALL {
        if !section.visible_to(role) {
            continue;
        }
        let current = if section == active {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(
            body,
            "<a href=\"{}\"{current}>{}</a>",
            section.path(),
            section.label()
        );
    }
    let _ = write!(
        body,
        "</nav>\n<form action=\"/signout\" method=\"post\"><button type=\"submit\">\
         ログアウト</button></form>\n</aside>\n<main class=\"admin-main\">\n{main}</main>\n</div>\n"
    );
    document(site, meta, "admin", &body)
}

/// Visible breadcrumb trail. The last entry is the current page.
pub fn breadcrumbs(crumbs: &[Crumb]) -> String {
    if crumbs.is_empty() {
        return String::new();
    }
    let mut out = String::from("<nav class=\"breadcrumbs\" aria-label=\"breadcrumb\"><ol>");
    let last = crumbs.len() - 1;
    for (index, crumb) in crumbs.iter().enumerate() {
        if index == last {
            let _ = write!(
                out,
                "<li aria-current=\"page\">{}</li>",
                escape_html(&crumb.name)
            );
        } else {
            let _ = write!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                escape_html(&crumb.path),
                escape_html(&crumb.name)
            );
        }
    }
    out.push_str("</ol></nav>\n");
    out
}

fn page_href(base_path: &str, params: &[(&str, &str)], page: u32) -> String {
    let mut query: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", encode_query_value(value)))
        .collect();
    if page > 1 {
        query.push(format!("page={page}"));
    }
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{}", query.join("&"))
    }
}

/// Previous / numbered / next links. `params` are carried into every link so
/// a search keeps its criteria while paging.
pub fn pagination(base_path: &str, params: &[(&str, &str)], page: u32, total_pages: u32) -> String {
    if total_pages <= 1 {
        return String::new();
    }
    let mut out = String::from("<nav class=\"pagination\" aria-label=\"pagination\">");
    if page > 1 {
        let _ = write!(
            out,
            "<a rel=\"prev\" href=\"{}\">前へ</a>",
            escape_html(&page_href(base_path, params, page - 1))
        );
    }
    for number in 1..=total_pages {
        if number == page {
            let _ = write!(out, "<span aria-current=\"page\">{number}</span>");
        } else {
            let _ = write!(
                out,
                "<a href=\"{}\">{number}</a>",
                escape_html(&page_href(base_path, params, number))
            );
        }
    }
    if page < total_pages {
        let _ = write!(
            out,
            "<a rel=\"next\" href=\"{}\">次へ</a>",
            escape_html(&page_href(base_path, params, page + 1))
        );
    }
    out.push_str("</nav>\n");
    out
}

pub fn article_card(article: &ArticleSummary, locale: SiteLocale) -> String {
    let href = format!("/articles/{}", article.slug);
    let image = article
        .featured_image
        .as_deref()
        .unwrap_or(PLACEHOLDER_IMAGE);
    let mut out = String::from("<article class=\"card\">");
    let _ = write!(
        out,
        "<a href=\"{href}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>",
        escape_html(image),
        escape_html(&article.title)
    );
    if let Some(category) = article.categories.first() {
        let _ = write!(
            out,
            "<a class=\"card-category\" href=\"/categories/{}\">{}</a>",
            category.slug,
            escape_html(&category.name)
        );
    }
    let _ = write!(
        out,
        "<h3><a href=\"{href}\">{}</a></h3>",
        escape_html(&article.title)
    );
    if let Some(excerpt) = &article.excerpt {
        let _ = write!(
            out,
            "<p>{}</p>",
            escape_html(&truncate_text(excerpt, CARD_EXCERPT_CHARS))
        );
    }
    out.push_str("<p class=\"card-meta\">");
    match article.published_at {
        Some(date) => {
            let _ = write!(
                out,
                "<time datetime=\"{}\">{}</time>",
                iso_date(date),
                format_date(Some(date), locale)
            );
        }
        None => out.push_str(&format_date(None, locale)),
    }
    let _ = write!(
        out,
        " <span>{}</span></p></article>\n",
        escape_html(&article.author_name)
    );
    out
}

pub fn article_grid(articles: &[ArticleSummary], locale: SiteLocale) -> String {
    let mut out = String::from("<div class=\"article-grid\">\n");
    for article in articles {
        out.push_str(&article_card(article, locale));
    }
    out.push_str("</div>\n");
    out
}

pub fn sidebar(view: &SidebarView) -> String {
    let mut out = String::from("<aside class=\"sidebar\">\n");

    out.push_str("<section><h2>人気記事</h2><ol>");
    for article in &view.popular_articles {
        let _ = write!(
            out,
            "<li><a href=\"/articles/{}\">{}</a> <span>{} views</span></li>",
            article.slug,
            escape_html(&article.title),
            article.view_count.value()
        );
    }
    out.push_str("</ol></section>\n");

    out.push_str("<section><h2>カテゴリ</h2><ul>");
    for category in &view.categories {
        let _ = write!(
            out,
            "<li><a href=\"/categories/{}\">{}</a></li>",
            category.slug,
            escape_html(&category.name)
        );
    }
    out.push_str("</ul></section>\n");

    out.push_str("<section><h2>タグ</h2><div class=\"tag-list\">");
    for tag in &view.tags {
        let _ = write!(
            out,
            "<a href=\"/tags/{}\">{}</a>",
            tag.slug,
            escape_html(&tag.name)
        );
    }
    out.push_str("</div></section>\n</aside>\n");
    out
}

/// Two-column body: main content plus the sidebar.
pub fn with_sidebar(content: &str, view: &SidebarView) -> String {
    format!(
        "<div class=\"with-sidebar\">\n<div class=\"content\">\n{content}</div>\n{}</div>\n",
        sidebar(view)
    )
}
