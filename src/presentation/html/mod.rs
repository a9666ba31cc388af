// src/presentation/html/mod.rs
//! Server-side HTML rendering. Pages are plain strings assembled from view
//! models; every interpolated value goes through [`escape::escape_html`].
pub mod admin;
pub mod auth;
pub mod error_page;
pub mod escape;
pub mod format;
pub mod layout;
pub mod markdown;
pub mod public;
pub mod seo;
