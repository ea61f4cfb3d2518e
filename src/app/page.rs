//! In-memory model of the page the app renders into.
//!
//! It holds exactly the state the controllers read or write: container HTML,
//! the filter form, the nav menu and section geometry, scroll position, and
//! whether the detail overlay is showing.

use std::collections::HashMap;

/// Element ids the controllers address.
pub mod ids {
    pub const FEATURED_CARS: &str = "featuredCars";
    pub const ALL_CARS: &str = "allCars";
    pub const SEARCH_RESULTS: &str = "searchResults";
    pub const CAR_DETAIL: &str = "carDetailContent";

    pub const MAKE_SELECT: &str = "make";
    pub const MODEL_SELECT: &str = "model";
    pub const FUEL_TYPE: &str = "fuelType";
    pub const MIN_PRICE: &str = "minPrice";
    pub const MAX_PRICE: &str = "maxPrice";
    pub const MIN_YEAR: &str = "year";
}

pub const MAKE_PLACEHOLDER: &str = "Select Make";
pub const MODEL_PLACEHOLDER: &str = "Select Model";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A `<select>`: its options and the currently selected value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    pub options: Vec<SelectOption>,
    pub value: String,
}

impl Select {
    pub fn with_placeholder(label: &str) -> Self {
        let mut select = Select::default();
        select.replace_options(label, &[]);
        select
    }

    /// Replaces every option with an empty-valued placeholder followed by
    /// `values` (value and label identical). Selection falls back to the
    /// placeholder.
    pub fn replace_options(&mut self, placeholder: &str, values: &[String]) {
        self.options = std::iter::once(SelectOption::new("", placeholder))
            .chain(values.iter().map(|v| SelectOption::new(v, v)))
            .collect();
        self.value.clear();
    }

    /// Selects `value` if an option carries it; otherwise selects nothing.
    pub fn select(&mut self, value: &str) -> bool {
        let known = self.options.iter().any(|o| o.value == value);
        self.value = if known { value.to_string() } else { String::new() };
        known
    }

    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// In-page anchor, e.g. `#inventory`.
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub links: Vec<NavLink>,
    /// Mobile menu expanded.
    pub open: bool,
}

impl NavMenu {
    pub fn active_href(&self) -> Option<&str> {
        self.links.iter().find(|l| l.active).map(|l| l.href.as_str())
    }

    /// Marks only the link for `href` active. Unknown href leaves none active.
    pub fn activate(&mut self, href: &str) {
        for link in &mut self.links {
            link.active = link.href == href;
        }
    }

    pub fn clear_active(&mut self) {
        for link in &mut self.links {
            link.active = false;
        }
    }
}

/// A `section[id]` and its layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// A recorded smooth `scrollIntoView` call, aligned to the element's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub element_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: HashMap<String, String>,
    selects: HashMap<String, Select>,
    inputs: HashMap<String, String>,
    pub nav: NavMenu,
    pub sections: Vec<Section>,
    scroll_y: f64,
    last_scroll: Option<ScrollRequest>,
    modal_visible: bool,
}

impl Page {
    /// The listing site's layout: the four result containers, the filter form,
    /// and a nav link per section.
    pub fn showroom() -> Self {
        let mut page = Page::default();
        for id in [
            ids::FEATURED_CARS,
            ids::ALL_CARS,
            ids::SEARCH_RESULTS,
            ids::CAR_DETAIL,
        ] {
            page.containers.insert(id.to_string(), String::new());
        }
        page.selects
            .insert(ids::MAKE_SELECT.to_string(), Select::with_placeholder(MAKE_PLACEHOLDER));
        page.selects
            .insert(ids::MODEL_SELECT.to_string(), Select::with_placeholder(MODEL_PLACEHOLDER));
        for id in [ids::FUEL_TYPE, ids::MIN_PRICE, ids::MAX_PRICE, ids::MIN_YEAR] {
            page.inputs.insert(id.to_string(), String::new());
        }

        let layout = [
            ("home", 0.0, 700.0),
            ("featured", 700.0, 800.0),
            ("search", 1500.0, 900.0),
            ("inventory", 2400.0, 1200.0),
            ("contact", 3600.0, 500.0),
        ];
        page.sections = layout
            .iter()
            .map(|(id, top, height)| Section::new(id, *top, *height))
            .collect();
        page.nav.links = layout
            .iter()
            .map(|(id, _, _)| NavLink {
                href: format!("#{}", id),
                active: *id == "home",
            })
            .collect();
        page
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    /// Replaces the container's entire content.
    pub fn set_inner_html(&mut self, id: &str, html: String) {
        self.containers.insert(id.to_string(), html);
    }

    pub fn select(&self, id: &str) -> Option<&Select> {
        self.selects.get(id)
    }

    pub fn select_mut(&mut self, id: &str) -> &mut Select {
        self.selects.entry(id.to_string()).or_default()
    }

    /// Current value of a select or text input; `""` when unset or unknown.
    pub fn value(&self, id: &str) -> &str {
        self.selects
            .get(id)
            .map(|s| s.value.as_str())
            .or_else(|| self.inputs.get(id).map(String::as_str))
            .unwrap_or("")
    }

    pub fn set_input_value(&mut self, id: &str, value: &str) {
        self.inputs.insert(id.to_string(), value.to_string());
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Records a smooth scroll to `id` and, for known sections, moves the
    /// viewport to the section's top.
    pub fn scroll_into_view(&mut self, id: &str) {
        if let Some(top) = self.section(id).map(|s| s.top) {
            self.scroll_y = top;
        }
        self.last_scroll = Some(ScrollRequest {
            element_id: id.to_string(),
        });
    }

    /// The most recent `scroll_into_view` call; earlier ones are not kept.
    pub fn last_scroll(&self) -> Option<&ScrollRequest> {
        self.last_scroll.as_ref()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }
}
