// src/presentation/http/middleware/mod.rs
pub mod access_gate;
pub mod error_pages;
pub mod rate_limit;
