// src/domain/content/filter.rs

/// Criteria for published-article listings. Every present criterion must
/// hold; an empty filter matches all published articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub text: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
}

impl ArticleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(slug: impl Into<String>) -> Self {
        Self {
            category: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn tag(slug: impl Into<String>) -> Self {
        Self {
            tag: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn text(query: impl Into<String>) -> Self {
        Self {
            text: Some(query.into()),
            ..Self::default()
        }
    }

    /// Build a filter from raw request values, dropping blank ones.
    pub fn from_params(
        text: Option<&str>,
        category: Option<&str>,
        tag: Option<&str>,
    ) -> Self {
        fn present(value: Option<&str>) -> Option<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        }

        Self {
            text: present(text),
            category: present(category),
            tag: present(tag),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.text.is_none() && self.category.is_none() && self.tag.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_params_are_dropped() {
        let filter = ArticleFilter::from_params(Some("  "), Some(""), None);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn present_params_are_trimmed() {
        let filter = ArticleFilter::from_params(Some(" AI "), None, Some("chatgpt"));
        assert_eq!(filter.text.as_deref(), Some("AI"));
        assert_eq!(filter.tag.as_deref(), Some("chatgpt"));
        assert!(filter.category.is_none());
        assert!(!filter.is_unfiltered());
    }
}
