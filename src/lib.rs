pub mod app;
pub mod domain;
pub mod infra;
pub mod render;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{App, AppContext, DomEvent, Target};
pub use domain::{Car, ImageResolver, Inventory, SearchCriteria, SearchForm};
pub use infra::config::SiteConfig;
pub use transport::api::ApiClient;
