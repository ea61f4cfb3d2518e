//! View-model → markup for every container the app fills.

pub mod card;
pub mod detail;
pub mod escape;
pub mod format;
pub mod templates;

pub use card::{render_cars, render_search_results, CardView};
pub use detail::{render_car_detail, DetailView};
pub use escape::Html;
pub use format::{format_currency, format_number, group_thousands};
