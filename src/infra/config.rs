//! Centralized configuration (environment variables + defaults).

/// Default origin of the page (and of the `/api` backend behind it).
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

/// Where bare image filenames live under the origin.
pub const DEFAULT_STATIC_IMAGES: &str = "/static/images/";

pub const DEFAULT_DEV_ADDR: &str = "0.0.0.0:8000";

/// Page origin, without a trailing slash.
pub fn site_origin() -> String {
    let origin = std::env::var("SHOWROOM_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
    origin.trim_end_matches('/').to_string()
}

/// Static image base path. Always starts and ends with `/`.
pub fn static_images_path() -> String {
    let raw = std::env::var("SHOWROOM_STATIC_IMAGES")
        .unwrap_or_else(|_| DEFAULT_STATIC_IMAGES.to_string());
    normalize_base_path(&raw)
}

/// Bind address for the development inventory server.
pub fn dev_server_addr() -> String {
    std::env::var("SHOWROOM_DEV_ADDR").unwrap_or_else(|_| DEFAULT_DEV_ADDR.to_string())
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// Everything the rendering layer needs to know about where it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub origin: String,
    pub static_images_path: String,
}

impl SiteConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            static_images_path: DEFAULT_STATIC_IMAGES.to_string(),
        }
    }

    pub fn with_static_images_path(mut self, path: &str) -> Self {
        self.static_images_path = normalize_base_path(path);
        self
    }

    /// Reads `.env` (if present) and the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            origin: site_origin(),
            static_images_path: static_images_path(),
        }
    }

    /// Base URL of the JSON API.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.origin)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}
