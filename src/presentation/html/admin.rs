// src/presentation/html/admin.rs
//! Admin area pages. Every page is `noindex` and rendered with the admin
//! chrome for the caller's role.
use std::fmt::Write as _;

use super::escape::escape_html;
use super::format::format_date;
use super::layout::{AdminSection, admin_page, pagination};
use super::seo::PageMeta;
use crate::application::dto::{AdminDashboardView, AdminSettingsView, AdminUserView};
use crate::config::SiteSettings;
use crate::domain::article::ArticleSummary;
use crate::domain::pagination::Paged;
use crate::domain::taxonomy::{CategoryWithCount, TagWithCount};
use crate::domain::user::Role;

fn page(site: &SiteSettings, role: Role, section: AdminSection, main: &str) -> String {
    let meta = PageMeta::new(
        format!("{} | 管理画面", section.label()),
        "AX総研 管理画面",
        section.path(),
    )
    .private();
    let body = format!("<h1>{}</h1>\n{main}", section.label());
    admin_page(site, &meta, role, section, &body)
}

pub fn dashboard(site: &SiteSettings, role: Role, view: &AdminDashboardView) -> String {
    let main = format!(
        "<div class=\"stats\">\
         <div class=\"stat\"><span>公開記事</span><strong>{}</strong></div>\
         <div class=\"stat\"><span>カテゴリ</span><strong>{}</strong></div>\
         <div class=\"stat\"><span>タグ</span><strong>{}</strong></div>\
         </div>\n",
        view.published_articles, view.categories, view.tags
    );
    page(site, role, AdminSection::Dashboard, &main)
}

pub fn articles(site: &SiteSettings, role: Role, articles: &Paged<ArticleSummary>) -> String {
    let mut main = format!(
        "<p class=\"count\">{} 件</p>\n<table>\n<thead><tr><th>タイトル</th><th>状態</th>\
         <th>著者</th><th>公開日</th></tr></thead>\n<tbody>\n",
        articles.total_count
    );
    for article in &articles.items {
        let status = if article.published { "公開" } else { "下書き" };
        let title = if article.published {
            format!(
                "<a href=\"/articles/{}\">{}</a>",
                article.slug,
                escape_html(&article.title)
            )
        } else {
            escape_html(&article.title)
        };
        let _ = writeln!(
            main,
            "<tr><td>{title}</td><td>{status}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&article.author_name),
            format_date(article.published_at, site.locale)
        );
    }
    main.push_str("</tbody>\n</table>\n");
    main.push_str(&pagination(
        AdminSection::Articles.path(),
        &[],
        articles.page,
        articles.total_pages(),
    ));
    page(site, role, AdminSection::Articles, &main)
}

fn taxonomy_table(base: &str, rows: impl Iterator<Item = (String, String, u64)>) -> String {
    let mut out = String::from(
        "<table>\n<thead><tr><th>名前</th><th>スラッグ</th><th>記事数</th></tr></thead>\n<tbody>\n",
    );
    for (name, slug, count) in rows {
        let _ = writeln!(
            out,
            "<tr><td><a href=\"{base}/{slug}\">{}</a></td><td>{slug}</td><td>{count}</td></tr>",
            escape_html(&name)
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

pub fn categories(site: &SiteSettings, role: Role, categories: &[CategoryWithCount]) -> String {
    let rows = categories.iter().map(|row| {
        (
            row.entry.name.clone(),
            row.entry.slug.to_string(),
            row.article_count,
        )
    });
    page(
        site,
        role,
        AdminSection::Categories,
        &taxonomy_table("/categories", rows),
    )
}

pub fn tags(site: &SiteSettings, role: Role, tags: &[TagWithCount]) -> String {
    let rows = tags.iter().map(|row| {
        (
            row.entry.name.clone(),
            row.entry.slug.to_string(),
            row.article_count,
        )
    });
    page(site, role, AdminSection::Tags, &taxonomy_table("/tags", rows))
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "管理者",
        Role::Editor => "編集者",
        Role::Anonymous => "一般",
    }
}

pub fn users(site: &SiteSettings, role: Role, users: &[AdminUserView]) -> String {
    let mut main = String::from(
        "<table>\n<thead><tr><th>名前</th><th>メールアドレス</th><th>権限</th></tr></thead>\n<tbody>\n",
    );
    for user in users {
        let _ = writeln!(
            main,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&user.name),
            escape_html(&user.email),
            role_label(user.role)
        );
    }
    main.push_str("</tbody>\n</table>\n");
    page(site, role, AdminSection::Users, &main)
}

pub fn settings(site: &SiteSettings, role: Role, view: &AdminSettingsView) -> String {
    let rows = [
        ("サイト名", &view.site_name),
        ("サイトURL", &view.site_url),
        ("ロケール", &view.locale),
        ("データソース", &view.data_source),
        ("実行環境", &view.environment),
    ];
    let mut main = String::from("<dl class=\"settings\">\n");
    for (label, value) in rows {
        let _ = writeln!(main, "<dt>{label}</dt><dd>{}</dd>", escape_html(value));
    }
    main.push_str("</dl>\n");
    page(site, role, AdminSection::Settings, &main)
}

/// Inquiries go straight to the external mail endpoint, so there is nothing
/// stored to list here.
pub fn contacts(site: &SiteSettings, role: Role) -> String {
    let target = site
        .contact_form_action
        .as_deref()
        .map_or_else(|| "未設定".to_string(), escape_html);
    let main = format!(
        "<p>お問い合わせは外部のフォーム送信先で受け付けています。</p>\n\
         <dl><dt>送信先</dt><dd>{target}</dd></dl>\n"
    );
    page(site, role, AdminSection::Contacts, &main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_table_escapes_and_labels_roles() {
        let html = users(
            &SiteSettings::default(),
            Role::Admin,
            &[AdminUserView {
                name: "<script>".into(),
                email: "admin@example.com".into(),
                role: Role::Admin,
            }],
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("管理者"));
        assert!(html.contains("noindex"));
    }

    #[test]
    fn dashboard_shows_counts() {
        let html = dashboard(
            &SiteSettings::default(),
            Role::Editor,
            &AdminDashboardView {
                published_articles: 9,
                categories: 4,
                tags: 23,
            },
        );
        assert!(html.contains("<strong>9</strong>"));
        assert!(html.contains("<strong>23</strong>"));
    }
}
