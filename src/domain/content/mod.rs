pub mod filter;
pub mod repository;

pub use filter::ArticleFilter;
pub use repository::ContentRepository;
