use crate::domain::errors::{DomainError, DomainResult};

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_VIEW_COUNT: &str = "articles_view_count_chk";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_ARTICLE_SLUG_FORMAT: &str = "articles_slug_format_chk";
const CNT_CATEGORY_SLUG_FORMAT: &str = "categories_slug_format_chk";
const CNT_TAG_SLUG_FORMAT: &str = "tags_slug_format_chk";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_ROLE: &str = "users_role_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG | CNT_CATEGORY_SLUG | CNT_TAG_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_ARTICLE_SLUG_FORMAT | CNT_CATEGORY_SLUG_FORMAT | CNT_TAG_SLUG_FORMAT => {
                        DomainError::Validation("slug is not in canonical form".into())
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_ARTICLE_VIEW_COUNT => {
                        DomainError::Validation("view count cannot be negative".into())
                    }
                    CNT_USER_ROLE => DomainError::Validation("unknown stored role".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Saturating conversion for LIMIT / OFFSET binds.
pub(super) fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Row counts come back as BIGINT and are never negative.
pub(super) fn to_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

/// `%needle%` for ILIKE with the pattern metacharacters escaped, so the
/// query text is matched literally.
pub(super) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Rows that fail domain validation are logged and dropped so that one bad
/// record cannot blank a whole listing.
pub(super) fn skip_invalid<T>(
    entries: impl IntoIterator<Item = DomainResult<T>>,
    kind: &'static str,
) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(kind, error = %err, "skipping invalid stored row");
                None
            }
        })
        .collect()
}
