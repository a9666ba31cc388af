pub mod content_source;
pub mod database;
pub mod fixtures;
pub mod repositories;
pub mod security;
