use crate::domain::user::{Role, User};

#[derive(Debug, Clone)]
pub struct AdminDashboardView {
    pub published_articles: u64,
    pub categories: usize,
    pub tags: usize,
}

#[derive(Debug, Clone)]
pub struct AdminUserView {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for AdminUserView {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email.to_string(),
            role: user.role,
        }
    }
}

/// Read-only snapshot of the running site's settings.
#[derive(Debug, Clone)]
pub struct AdminSettingsView {
    pub site_name: String,
    pub site_url: String,
    pub locale: String,
    pub data_source: String,
    pub environment: String,
}
