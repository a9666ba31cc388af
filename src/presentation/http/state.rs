// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::{AppEnvironment, DataSourceKind, SiteSettings};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub site: Arc<SiteSettings>,
    pub data_source: DataSourceKind,
    pub environment: AppEnvironment,
    pub allowed_origins: Arc<[String]>,
}
