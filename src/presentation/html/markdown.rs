// src/presentation/html/markdown.rs
//! Article bodies are CommonMark with the GitHub table, strikethrough and
//! task-list extensions. Raw HTML in the source is shown as text and
//! script-capable URLs are dropped.
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn is_unsafe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

fn neutralize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_unsafe_url(&url) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: neutralize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: neutralize_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options).map(sanitize);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_lists_and_tables() {
        let html = render_markdown("# 見出し\n\n- **太字**\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h1>見出し</h1>"));
        assert!(html.contains("<strong>太字</strong>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("before\n\n<script>alert('x')</script>\n\ninline <b onclick=\"x\">b</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b onclick"));
    }

    #[test]
    fn script_urls_are_replaced() {
        let html = render_markdown("[click](javascript:alert(1)) ![img](data:image/png;base64,AAAA) [ok](/articles/x)");
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("data:image"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"/articles/x\""));
    }

    #[test]
    fn mixed_case_schemes_are_caught() {
        assert!(is_unsafe_url(" JavaScript:alert(1)"));
        assert!(is_unsafe_url("java\tscript:alert(1)"));
        assert!(!is_unsafe_url("https://example.com"));
    }
}
