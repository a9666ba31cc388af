// src/presentation/html/auth.rs
use super::escape::escape_html;
use super::layout::{PublicSection, public_page};
use super::seo::PageMeta;
use crate::config::SiteSettings;

/// Sign-in form. `callback` is echoed into a hidden field so a successful
/// POST lands back on the page that required it.
pub fn sign_in(site: &SiteSettings, callback: &str, email: &str, error: Option<&str>) -> String {
    let meta = PageMeta::new("ログイン", "管理画面へのログイン", "/signin").private();
    let error = error
        .map(|message| format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape_html(message)))
        .unwrap_or_default();
    let main = format!(
        "<section class=\"signin\">\n<h1>ログイン</h1>\n{error}\
         <form action=\"/signin\" method=\"post\">\
         <input type=\"hidden\" name=\"callbackUrl\" value=\"{callback}\">\
         <label>メールアドレス<input type=\"email\" name=\"email\" value=\"{email}\" required autocomplete=\"username\"></label>\
         <label>パスワード<input type=\"password\" name=\"password\" required autocomplete=\"current-password\"></label>\
         <button type=\"submit\">ログイン</button></form>\n</section>\n",
        callback = escape_html(callback),
        email = escape_html(email),
    );
    public_page(site, &meta, PublicSection::None, &main)
}
