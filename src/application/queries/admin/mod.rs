mod service;

pub use service::{ADMIN_PAGE_SIZE, AdminQueryService};
