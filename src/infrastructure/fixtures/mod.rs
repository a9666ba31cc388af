//! In-memory content store used when no populated datastore is available.
mod dataset;
mod repository;

pub use dataset::FixtureDataset;
pub use repository::FixtureContentRepository;
