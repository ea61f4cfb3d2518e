//! The application context: built once at startup, cloned into every controller.

use crate::app::page::Page;
use crate::domain::media::ImageResolver;
use crate::infra::config::SiteConfig;
use crate::transport::api::ApiClient;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<SiteConfig>,
    pub api: ApiClient,
    pub images: ImageResolver,
    /// Never held across an `.await`.
    pub page: Arc<Mutex<Page>>,
}

impl AppContext {
    pub fn new(config: SiteConfig, page: Page) -> anyhow::Result<Self> {
        let api = ApiClient::from_config(&config)?;
        let images = ImageResolver::new(&config);
        Ok(Self {
            config: Arc::new(config),
            api,
            images,
            page: Arc::new(Mutex::new(page)),
        })
    }

    /// Context over the standard showroom page layout.
    pub fn showroom(config: SiteConfig) -> anyhow::Result<Self> {
        Self::new(config, Page::showroom())
    }

    /// Replaces a container's content.
    pub async fn fill(&self, container: &str, html: String) {
        self.page.lock().await.set_inner_html(container, html);
    }

    /// Snapshot of a container's content.
    pub async fn inner_html(&self, container: &str) -> Option<String> {
        self.page.lock().await.inner_html(container).map(str::to_owned)
    }
}
