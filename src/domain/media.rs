//! Image reference normalization.
//!
//! The backend stores images inconsistently: full URLs, site-relative paths
//! and bare filenames all occur. Every renderer resolves through here.

use crate::infra::config::SiteConfig;

fn is_absolute_http(raw: &str) -> bool {
    let has_prefix = |prefix: &str| {
        raw.get(..prefix.len())
            .map(|head| head.eq_ignore_ascii_case(prefix))
            .unwrap_or(false)
    };
    has_prefix("http://") || has_prefix("https://")
}

/// Resolves a stored image reference to a browser-loadable URL.
///
/// `origin` must not end with `/`; `static_base` must start and end with `/`.
pub fn normalize_image_url(raw: Option<&str>, origin: &str, static_base: &str) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;
    if is_absolute_http(raw) {
        return Some(raw.to_string());
    }
    if raw.starts_with('/') {
        return Some(format!("{}{}", origin, raw));
    }
    Some(format!("{}{}{}", origin, static_base, raw))
}

/// [`normalize_image_url`] bound to a site configuration.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    origin: String,
    static_base: String,
}

impl ImageResolver {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            origin: config.origin.clone(),
            static_base: config.static_images_path.clone(),
        }
    }

    pub fn resolve(&self, raw: Option<&str>) -> Option<String> {
        normalize_image_url(raw, &self.origin, &self.static_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://cars.local";
    const BASE: &str = "/static/images/";

    #[test]
    fn empty_or_absent_is_absent() {
        assert_eq!(normalize_image_url(None, ORIGIN, BASE), None);
        assert_eq!(normalize_image_url(Some(""), ORIGIN, BASE), None);
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            normalize_image_url(Some("http://x/y.png"), ORIGIN, BASE).as_deref(),
            Some("http://x/y.png")
        );
        assert_eq!(
            normalize_image_url(Some("HTTPS://cdn.example.com/a.jpg"), ORIGIN, BASE).as_deref(),
            Some("HTTPS://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn site_relative_paths_get_origin() {
        assert_eq!(
            normalize_image_url(Some("/static/images/a.png"), ORIGIN, BASE).as_deref(),
            Some("http://cars.local/static/images/a.png")
        );
    }

    #[test]
    fn bare_filenames_get_static_base() {
        assert_eq!(
            normalize_image_url(Some("a.png"), ORIGIN, BASE).as_deref(),
            Some("http://cars.local/static/images/a.png")
        );
        // Not a scheme we recognise, so it is treated as a filename.
        assert_eq!(
            normalize_image_url(Some("ftp.png"), ORIGIN, BASE).as_deref(),
            Some("http://cars.local/static/images/ftp.png")
        );
    }

    #[test]
    fn resolver_uses_config() {
        let cfg = SiteConfig::new("https://dealer.example/").with_static_images_path("img");
        let resolver = ImageResolver::new(&cfg);
        assert_eq!(
            resolver.resolve(Some("car.jpg")).as_deref(),
            Some("https://dealer.example/img/car.jpg")
        );
    }
}
