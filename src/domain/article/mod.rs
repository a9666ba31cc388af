pub mod entity;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, PopularArticle};
pub use value_objects::{ArticleId, ViewCount};
