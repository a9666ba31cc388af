// src/presentation/html/format.rs
use chrono::{DateTime, FixedOffset, Utc};

use crate::config::SiteLocale;

const JST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Human-readable publication date. Japanese dates are shown in JST.
pub fn format_date(date: Option<DateTime<Utc>>, locale: SiteLocale) -> String {
    let Some(date) = date else {
        return match locale {
            SiteLocale::Ja => "日付なし".to_string(),
            SiteLocale::En => "Undated".to_string(),
        };
    };

    match locale {
        SiteLocale::Ja => match FixedOffset::east_opt(JST_OFFSET_SECS) {
            Some(jst) => date.with_timezone(&jst).format("%Y年%m月%d日").to_string(),
            None => date.format("%Y年%m月%d日").to_string(),
        },
        SiteLocale::En => date.format("%B %-d, %Y").to_string(),
    }
}

/// `YYYY-MM-DD` for `<time datetime>` attributes.
pub fn iso_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Cut `text` to at most `max_chars` characters, appending `...` when
/// anything was removed.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// `business-strategy` → `Business Strategy`.
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
