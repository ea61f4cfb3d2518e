//! Domain types: the car record, search criteria, image references and the
//! demo inventory.

pub mod car;
pub mod inventory;
pub mod media;
pub mod search;

pub use car::Car;
pub use inventory::Inventory;
pub use media::{normalize_image_url, ImageResolver};
pub use search::{SearchCriteria, SearchForm};
