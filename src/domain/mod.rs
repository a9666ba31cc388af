pub mod article;
pub mod author;
pub mod content;
pub mod errors;
pub mod pagination;
pub mod slug;
pub mod taxonomy;
pub mod user;
