// src/presentation/mod.rs
pub mod html;
pub mod http;
