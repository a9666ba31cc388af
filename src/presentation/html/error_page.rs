// src/presentation/html/error_page.rs
use super::escape::escape_html;
use super::layout::{PublicSection, public_page};
use super::seo::PageMeta;
use crate::config::SiteSettings;

/// Generic error document. Only the status-level message is shown; the
/// underlying error is logged by the caller.
pub fn error_page(site: &SiteSettings, status: u16, title: &str, message: &str) -> String {
    let meta = PageMeta::new(title, message, "/").private();
    let main = format!(
        "<section class=\"error-page\">\n<p class=\"status\">{status}</p>\n<h1>{}</h1>\n\
         <p>{}</p>\n<a href=\"/\">ホームに戻る</a>\n</section>\n",
        escape_html(title),
        escape_html(message)
    );
    public_page(site, &meta, PublicSection::None, &main)
}
