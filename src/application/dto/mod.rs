pub mod admin;
pub mod pages;
pub mod session;

pub use admin::{AdminDashboardView, AdminSettingsView, AdminUserView};
pub use pages::{
    ArticleDetailView, ArticleListView, CategoryDetailView, CategoryIndexView, HomeView,
    SearchCriteria, SearchOutcome, SearchView, SidebarView, TagDetailView, TagIndexView,
};
pub use session::{SessionPrincipal, SessionSubject, SessionToken};
