// src/presentation/http/params.rs
//! Lenient query-string handling. Malformed input never rejects a request:
//! the first occurrence of a key wins, blank values count as absent and a
//! bad `page` falls back to 1.
use crate::application::dto::SearchCriteria;

#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .and_then(|raw| serde_urlencoded::from_str::<Vec<(String, String)>>(raw).ok())
            .unwrap_or_default();
        Self(pairs)
    }

    /// First non-blank value for `key`, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn page(&self) -> u32 {
        coerce_page(self.get("page"))
    }

    pub fn search_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.get("q").map(str::to_owned),
            category: self.get("category").map(str::to_owned),
            tag: self.get("tag").map(str::to_owned),
            page: self.page(),
        }
    }
}

/// Absent, non-numeric, zero and negative values all become page 1.
pub fn coerce_page(value: Option<&str>) -> u32 {
    value
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map_or(1, |page| u32::try_from(page).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_coercion() {
        assert_eq!(coerce_page(None), 1);
        assert_eq!(coerce_page(Some("abc")), 1);
        assert_eq!(coerce_page(Some("0")), 1);
        assert_eq!(coerce_page(Some("-4")), 1);
        assert_eq!(coerce_page(Some("3")), 3);
        assert_eq!(coerce_page(Some("99999999999")), u32::MAX);
    }

    #[test]
    fn first_value_wins_and_blanks_are_ignored() {
        let params = QueryParams::parse(Some("q=%20&q=second&category=ai-basics&category=x"));
        assert_eq!(params.get("q"), None);
        assert_eq!(params.get("category"), Some("ai-basics"));
    }

    #[test]
    fn builds_search_criteria() {
        let criteria =
            QueryParams::parse(Some("q=ChatGPT+%E6%B4%BB%E7%94%A8&tag=chatgpt&page=2"))
                .search_criteria();
        assert_eq!(criteria.query.as_deref(), Some("ChatGPT 活用"));
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.tag.as_deref(), Some("chatgpt"));
        assert_eq!(criteria.page, 2);
    }

    #[test]
    fn unparseable_query_is_empty() {
        assert!(QueryParams::parse(Some("%%%")).get("q").is_none());
        assert_eq!(QueryParams::parse(None).page(), 1);
    }
}
