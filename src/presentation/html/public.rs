// src/presentation/html/public.rs
//! Public page bodies. Every function takes a resolved view model and the
//! site settings and returns a complete document.
use std::fmt::Write as _;

use super::escape::escape_html;
use super::format::{format_date, iso_date};
use super::layout::{
    PLACEHOLDER_IMAGE, PublicSection, article_grid, breadcrumbs, pagination, public_page,
    with_sidebar,
};
use super::markdown::render_markdown;
use super::seo::{Crumb, PageMeta, organization_json_ld, website_json_ld};
use crate::application::dto::pages::{
    ArticleDetailView, ArticleListView, CategoryDetailView, CategoryIndexView, HomeView,
    SearchOutcome, SearchView, TagDetailView, TagIndexView,
};
use crate::config::SiteSettings;
use crate::domain::article::ArticleSummary;
use crate::domain::pagination::Paged;
use crate::domain::taxonomy::TagWithCount;

pub const SEARCH_PROMPT: &str = "キーワード、カテゴリ、またはタグを選択して検索してください。";
pub const NO_RESULTS: &str =
    "検索条件に一致する記事はありませんでした。別のキーワードやフィルターで試してみてください。";
const EMPTY_LISTING: &str = "記事が見つかりませんでした。";

fn home_crumb() -> Crumb {
    Crumb::new("ホーム", "/")
}

fn listing_body(articles: &Paged<ArticleSummary>, site: &SiteSettings, base_path: &str) -> String {
    if articles.is_empty() {
        return format!("<p class=\"empty\">{EMPTY_LISTING}</p>\n");
    }
    let mut out = article_grid(&articles.items, site.locale);
    out.push_str(&pagination(
        base_path,
        &[],
        articles.page,
        articles.total_pages(),
    ));
    out
}

/// Canonical path of a paginated listing; page 1 has no query string.
fn paged_path(base_path: &str, page: u32) -> String {
    if page > 1 {
        format!("{base_path}?page={page}")
    } else {
        base_path.to_string()
    }
}

pub fn home(site: &SiteSettings, view: &HomeView) -> String {
    let meta = PageMeta::site_default("/")
        .with_structured_data(website_json_ld(site))
        .with_structured_data(organization_json_ld(site));

    let mut content = format!(
        "<section class=\"hero\"><h1>{}</h1><p>{}</p>\
         <a class=\"button\" href=\"/articles\">記事を読む</a></section>\n",
        escape_html(&site.name),
        super::seo::DEFAULT_DESCRIPTION
    );
    content.push_str("<section><h2>最新記事</h2>\n");
    if view.latest.is_empty() {
        let _ = writeln!(content, "<p class=\"empty\">{EMPTY_LISTING}</p>");
    } else {
        content.push_str(&article_grid(&view.latest, site.locale));
    }
    content.push_str("<a href=\"/articles\">すべての記事を見る</a></section>\n");

    public_page(
        site,
        &meta,
        PublicSection::Home,
        &with_sidebar(&content, &view.sidebar),
    )
}

pub fn article_detail(site: &SiteSettings, view: &ArticleDetailView) -> String {
    let article = &view.article;
    let path = format!("/articles/{}", article.slug);
    let crumbs = [
        home_crumb(),
        Crumb::new("記事一覧", "/articles"),
        Crumb::new(article.title.clone(), path),
    ];
    let meta = PageMeta::for_article(site, article).with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    content.push_str("<article class=\"article\">\n<header>\n");
    if !article.categories.is_empty() {
        content.push_str("<p class=\"article-categories\">");
        for category in &article.categories {
            let _ = write!(
                content,
                "<a href=\"/categories/{}\">{}</a>",
                category.slug,
                escape_html(&category.name)
            );
        }
        content.push_str("</p>\n");
    }
    let _ = writeln!(content, "<h1>{}</h1>", escape_html(&article.title));
    content.push_str("<p class=\"article-meta\">");
    if let Some(published) = article.published_at {
        let _ = write!(content, "<time datetime=\"{}\">", iso_date(published));
        content.push_str(&format_date(Some(published), site.locale));
        content.push_str("</time>");
    } else {
        content.push_str(&format_date(None, site.locale));
    }
    let _ = writeln!(
        content,
        " <span class=\"author\">{}</span> <span class=\"views\">{} views</span></p>",
        escape_html(&article.author.name),
        article.view_count.value()
    );
    let _ = writeln!(
        content,
        "<img class=\"featured\" src=\"{}\" alt=\"{}\">",
        escape_html(
            article
                .featured_image
                .as_deref()
                .unwrap_or(PLACEHOLDER_IMAGE)
        ),
        escape_html(&article.title)
    );
    content.push_str("</header>\n<div class=\"article-body\">\n");
    content.push_str(&render_markdown(&article.content));
    content.push_str("</div>\n");

    if !article.tags.is_empty() {
        content.push_str("<footer class=\"article-tags\">");
        for tag in &article.tags {
            let _ = write!(
                content,
                "<a href=\"/tags/{}\">#{}</a>",
                tag.slug,
                escape_html(&tag.name)
            );
        }
        content.push_str("</footer>\n");
    }
    content.push_str("</article>\n");

    if !view.related.is_empty() {
        content.push_str("<section class=\"related\"><h2>関連記事</h2>\n");
        content.push_str(&article_grid(&view.related, site.locale));
        content.push_str("</section>\n");
    }

    public_page(
        site,
        &meta,
        PublicSection::Articles,
        &with_sidebar(&content, &view.sidebar),
    )
}

pub fn article_list(site: &SiteSettings, view: &ArticleListView) -> String {
    let crumbs = [home_crumb(), Crumb::new("記事一覧", "/articles")];
    let meta = PageMeta::new(
        "記事一覧",
        "AIトランスフォーメーションに関する記事の一覧です。",
        paged_path("/articles", view.articles.page),
    )
    .with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    let _ = writeln!(
        content,
        "<h1>記事一覧</h1>\n<p class=\"count\">{} 件</p>",
        view.articles.total_count
    );
    content.push_str(&listing_body(&view.articles, site, "/articles"));

    public_page(
        site,
        &meta,
        PublicSection::Articles,
        &with_sidebar(&content, &view.sidebar),
    )
}

pub fn category_index(site: &SiteSettings, view: &CategoryIndexView) -> String {
    let crumbs = [home_crumb(), Crumb::new("カテゴリ一覧", "/categories")];
    let meta = PageMeta::new(
        "カテゴリ一覧",
        "AIトランスフォーメーションに関する記事をカテゴリ別にご覧いただけます。",
        "/categories",
    )
    .with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    content.push_str("<h1>カテゴリ一覧</h1>\n<div class=\"category-grid\">\n");
    for entry in &view.categories {
        let category = &entry.entry;
        let _ = write!(
            content,
            "<a class=\"category-card\" href=\"/categories/{}\"><h2>{}</h2>",
            category.slug,
            escape_html(&category.name)
        );
        if let Some(description) = &category.description {
            let _ = write!(content, "<p>{}</p>", escape_html(description));
        }
        let _ = writeln!(content, "<span>{} 記事</span></a>", entry.article_count);
    }
    content.push_str("</div>\n");

    public_page(site, &meta, PublicSection::Categories, &content)
}

pub fn category_detail(site: &SiteSettings, view: &CategoryDetailView) -> String {
    let category = &view.category;
    let path = format!("/categories/{}", category.slug);
    let crumbs = [
        home_crumb(),
        Crumb::new("カテゴリ一覧", "/categories"),
        Crumb::new(category.name.clone(), path.clone()),
    ];
    let description = category
        .description
        .clone()
        .unwrap_or_else(|| format!("{}に関する記事の一覧です。", category.name));
    let meta = PageMeta::new(
        category.name.clone(),
        description.clone(),
        paged_path(&path, view.articles.page),
    )
    .with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    let _ = writeln!(
        content,
        "<h1>{}</h1>\n<p class=\"lead\">{}</p>",
        escape_html(&category.name),
        escape_html(&description)
    );
    content.push_str(&listing_body(&view.articles, site, &path));

    public_page(
        site,
        &meta,
        PublicSection::Categories,
        &with_sidebar(&content, &view.sidebar),
    )
}

fn tag_cloud_class(count: u64, max: u64) -> &'static str {
    if max == 0 {
        return "tag-s";
    }
    match count * 3 / max {
        0 => "tag-s",
        1 => "tag-m",
        _ => "tag-l",
    }
}

fn tag_links(out: &mut String, tags: &[TagWithCount]) {
    for entry in tags {
        let _ = write!(
            out,
            "<a href=\"/tags/{}\">{} <span>{} 記事</span></a>",
            entry.entry.slug,
            escape_html(&entry.entry.name),
            entry.article_count
        );
    }
}

pub fn tag_index(site: &SiteSettings, view: &TagIndexView) -> String {
    let crumbs = [home_crumb(), Crumb::new("タグ一覧", "/tags")];
    let meta = PageMeta::new(
        "タグ一覧",
        "AIトランスフォーメーションに関する記事をタグ別にご覧いただけます。",
        "/tags",
    )
    .with_breadcrumbs(site, &crumbs);

    let max = view
        .tags
        .iter()
        .map(|entry| entry.article_count)
        .max()
        .unwrap_or(0);

    let mut content = breadcrumbs(&crumbs);
    content.push_str("<h1>タグ一覧</h1>\n<section><h2>タグクラウド</h2><div class=\"tag-cloud\">");
    for entry in &view.tags {
        let _ = write!(
            content,
            "<a class=\"{}\" href=\"/tags/{}\">{}</a>",
            tag_cloud_class(entry.article_count, max),
            entry.entry.slug,
            escape_html(&entry.entry.name)
        );
    }
    content.push_str("</div></section>\n<section><h2>人気のタグ</h2><div class=\"tag-list\">");
    tag_links(&mut content, &view.popular);
    content.push_str("</div></section>\n<section><h2>全てのタグ（50音順）</h2><div class=\"tag-list\">");
    tag_links(&mut content, &view.tags);
    content.push_str("</div></section>\n");

    public_page(site, &meta, PublicSection::Tags, &content)
}

pub fn tag_detail(site: &SiteSettings, view: &TagDetailView) -> String {
    let tag = &view.tag;
    let path = format!("/tags/{}", tag.slug);
    let crumbs = [
        home_crumb(),
        Crumb::new("タグ一覧", "/tags"),
        Crumb::new(tag.name.clone(), path.clone()),
    ];
    let description = tag
        .description
        .clone()
        .unwrap_or_else(|| format!("「{}」タグが付いた記事の一覧です。", tag.name));
    let meta = PageMeta::new(
        format!("#{}", tag.name),
        description.clone(),
        paged_path(&path, view.articles.page),
    )
    .with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    let _ = writeln!(
        content,
        "<h1>#{}</h1>\n<p class=\"lead\">{}</p>",
        escape_html(&tag.name),
        escape_html(&description)
    );
    content.push_str(&listing_body(&view.articles, site, &path));

    public_page(
        site,
        &meta,
        PublicSection::Tags,
        &with_sidebar(&content, &view.sidebar),
    )
}

fn search_form(view: &SearchView) -> String {
    let criteria = &view.criteria;
    let mut out = format!(
        "<form class=\"search-form\" action=\"/search\" method=\"get\">\
         <input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"キーワード\">",
        escape_html(criteria.query.as_deref().unwrap_or_default())
    );

    out.push_str("<select name=\"category\"><option value=\"\">すべてのカテゴリ</option>");
    for category in &view.sidebar.categories {
        let selected = if criteria.category.as_deref() == Some(category.slug.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<option value=\"{}\"{selected}>{}</option>",
            category.slug,
            escape_html(&category.name)
        );
    }
    out.push_str("</select><select name=\"tag\"><option value=\"\">すべてのタグ</option>");
    for tag in &view.sidebar.tags {
        let selected = if criteria.tag.as_deref() == Some(tag.slug.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<option value=\"{}\"{selected}>{}</option>",
            tag.slug,
            escape_html(&tag.name)
        );
    }
    out.push_str("</select><button type=\"submit\">検索</button></form>\n");
    out
}

pub fn search(site: &SiteSettings, view: &SearchView) -> String {
    let crumbs = [home_crumb(), Crumb::new("検索", "/search")];
    let title = match &view.description {
        Some(description) => format!("検索結果: {description}"),
        None => "検索".to_string(),
    };
    let meta = PageMeta::new(
        title.clone(),
        "AIトランスフォーメーションに関する記事を検索できます。",
        "/search",
    )
    .private()
    .with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    let _ = writeln!(content, "<h1>{}</h1>", escape_html(&title));
    content.push_str(&search_form(view));

    match &view.outcome {
        SearchOutcome::NotPerformed => {
            let _ = writeln!(content, "<p class=\"prompt\">{SEARCH_PROMPT}</p>");
        }
        SearchOutcome::Results(results) if results.total_count == 0 => {
            let _ = writeln!(content, "<p class=\"empty\">{NO_RESULTS}</p>");
        }
        SearchOutcome::Results(results) => {
            let _ = writeln!(
                content,
                "<p class=\"count\">{} 件の記事が見つかりました</p>",
                results.total_count
            );
            content.push_str(&article_grid(&results.items, site.locale));
            let criteria = &view.criteria;
            content.push_str(&pagination(
                "/search",
                &[
                    ("q", criteria.query.as_deref().unwrap_or_default()),
                    ("category", criteria.category.as_deref().unwrap_or_default()),
                    ("tag", criteria.tag.as_deref().unwrap_or_default()),
                ],
                results.page,
                results.total_pages(),
            ));
        }
    }

    public_page(
        site,
        &meta,
        PublicSection::Search,
        &with_sidebar(&content, &view.sidebar),
    )
}

const ABOUT_BODY: &str = r#"<section><h2>私たちのビジョン</h2>
<p>AIトランスフォーメーションに関する確かな知識を届け、あらゆる組織がAIを実践的に活用できる社会をつくります。</p></section>
<section><h2>会社概要</h2>
<dl class="company">
<dt>会社名</dt><dd>株式会社AIトランスフォーメーション</dd>
<dt>設立</dt><dd>2020年4月1日</dd>
<dt>代表取締役</dt><dd>山田 太郎</dd>
<dt>資本金</dt><dd>5,000万円</dd>
<dt>事業内容</dt><dd><ul>
<li>AIトランスフォーメーション情報ポータルの運営</li>
<li>AIに関するコンサルティングサービス</li>
<li>AI技術の教育・トレーニングプログラムの提供</li>
<li>企業向けAIソリューションの開発・導入支援</li>
<li>AI関連セミナー・イベントの企画・運営</li>
</ul></dd>
<dt>従業員数</dt><dd>45名（2024年4月現在）</dd>
<dt>所在地</dt><dd>〒100-0001 東京都千代田区丸の内1-1-1 AIビル9階</dd>
</dl></section>
<section><h2>企業理念</h2>
<ul class="values"><li><h3>知識の共有</h3></li><li><h3>実践的支援</h3></li><li><h3>継続的革新</h3></li></ul></section>
<section><h2>リーダーシップチーム</h2>
<ul class="team">
<li><strong>山田 太郎</strong> 代表取締役CEO</li>
<li><strong>佐藤 花子</strong> 最高技術責任者（CTO）</li>
<li><strong>鈴木 一郎</strong> 最高戦略責任者（CSO）</li>
</ul></section>
"#;

pub fn about(site: &SiteSettings) -> String {
    let crumbs = [home_crumb(), Crumb::new("会社概要", "/about")];
    let meta = PageMeta::new(
        "会社概要",
        "AIトランスフォーメーション情報ポータルを運営する会社の概要、ミッション、ビジョン、および連絡先情報をご紹介します。",
        "/about",
    )
    .with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    content.push_str("<h1>会社概要</h1>\n");
    content.push_str(ABOUT_BODY);
    content.push_str(
        "<section><h2>お問い合わせ</h2><p>〒100-0001 東京都千代田区丸の内1-1-1 AIビル9階</p>\
         <p>営業時間: 平日 9:00〜18:00</p><a href=\"/contact\">お問い合わせフォーム</a></section>\n",
    );

    public_page(site, &meta, PublicSection::About, &content)
}

const INQUIRY_TYPES: [&str; 6] = [
    "一般的なお問い合わせ",
    "ビジネス活用の相談",
    "技術的な質問",
    "記事掲載依頼",
    "パートナーシップ提案",
    "その他",
];

/// The form posts straight to the configured mail endpoint; without one the
/// form is rendered disabled.
pub fn contact(site: &SiteSettings) -> String {
    let crumbs = [home_crumb(), Crumb::new("お問い合わせ", "/contact")];
    let meta = PageMeta::new(
        "お問い合わせ",
        "AIトランスフォーメーション情報ポータルへのお問い合わせフォーム。AI導入に関するご質問やご相談、記事掲載依頼などお気軽にお問い合わせください。",
        "/contact",
    )
    .with_breadcrumbs(site, &crumbs);

    let mut content = breadcrumbs(&crumbs);
    content.push_str("<h1>お問い合わせ</h1>\n");
    let (action, disabled) = match &site.contact_form_action {
        Some(action) => (escape_html(action), ""),
        None => (String::new(), " disabled"),
    };
    let _ = write!(
        content,
        "<form class=\"contact-form\" action=\"{action}\" method=\"post\">\
         <fieldset{disabled}>\
         <label>お名前<input name=\"name\" required></label>\
         <label>メールアドレス<input type=\"email\" name=\"email\" required></label>\
         <label>会社名<input name=\"company\"></label>\
         <label>お問い合わせ種別<select name=\"inquiryType\" required>\
         <option value=\"\">選択してください</option>"
    );
    for inquiry in INQUIRY_TYPES {
        let _ = write!(content, "<option>{inquiry}</option>");
    }
    content.push_str(
        "</select></label>\
         <label>お問い合わせ内容<textarea name=\"message\" rows=\"6\" required></textarea></label>\
         <label><input type=\"checkbox\" name=\"privacy\" required> \
         <a href=\"/privacy\">プライバシーポリシー</a>に同意します。</label>\
         <button type=\"submit\">送信する</button></fieldset></form>\n\
         <section><p>〒100-0001 東京都千代田区丸の内1-1-1 AIビル9階</p>\
         <p>営業時間: 平日 9:00〜18:00</p></section>\n",
    );

    public_page(site, &meta, PublicSection::Contact, &content)
}
