//! The client application: controllers wired to one page through an event registry.

pub mod catalog;
pub mod context;
pub mod events;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod search;

pub use catalog::CatalogController;
pub use context::AppContext;
pub use events::{DomEvent, EventKind, EventRegistry, Handler, Node, Subscription, Target};
pub use modal::ModalController;
pub use navigation::NavigationController;
pub use page::{ids, Page};
pub use search::{SearchController, SearchOutcome};

use crate::infra::config::SiteConfig;
use tokio::sync::RwLock;

pub struct App {
    ctx: AppContext,
    registry: RwLock<EventRegistry>,
    navigation: NavigationController,
    modal: ModalController,
    search: SearchController,
    catalog: CatalogController,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            navigation: NavigationController::new(ctx.clone()),
            modal: ModalController::new(ctx.clone()),
            search: SearchController::new(ctx.clone()),
            catalog: CatalogController::new(ctx.clone()),
            registry: RwLock::new(EventRegistry::new()),
            ctx,
        }
    }

    /// App over the standard page layout.
    pub fn showroom(config: SiteConfig) -> anyhow::Result<Self> {
        Ok(Self::new(AppContext::showroom(config)?))
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Attaches every listener, then runs the three initial loads concurrently.
    pub async fn start(&self) {
        {
            let mut registry = self.registry.write().await;
            registry.clear();
            registry.extend(NavigationController::subscriptions());
            registry.extend(ModalController::subscriptions());
            registry.extend(SearchController::subscriptions());
            registry.extend(CatalogController::subscriptions());
            tracing::debug!(listeners = registry.len(), "listeners attached");
        }

        tokio::join!(
            self.catalog.load_featured(),
            self.catalog.load_all(),
            self.catalog.load_makes(),
        );
        tracing::info!(origin = %self.ctx.config.origin, "initial load complete");
    }

    /// Detaches every listener. Later dispatches do nothing.
    pub async fn teardown(&self) {
        self.registry.write().await.clear();
        tracing::debug!("listeners detached");
    }

    pub async fn listener_count(&self) -> usize {
        self.registry.read().await.len()
    }

    /// Delivers `event` to every listener on its propagation path and returns
    /// the handlers that ran.
    pub async fn dispatch(&self, event: DomEvent) -> Vec<Handler> {
        let handlers = self.registry.read().await.route(&event);
        for handler in &handlers {
            self.run(*handler, &event).await;
        }
        handlers
    }

    async fn run(&self, handler: Handler, event: &DomEvent) {
        match handler {
            Handler::ToggleMenu => self.navigation.toggle_menu().await,
            Handler::ScrollToSection => {
                if let Target::NavLink(href) = &event.target {
                    self.navigation.follow_link(href).await;
                }
            }
            Handler::SyncActiveLink => self.navigation.sync_active_link().await,
            Handler::LoadModels => {
                let make = event.value.clone().unwrap_or_default();
                self.ctx
                    .page
                    .lock()
                    .await
                    .select_mut(ids::MAKE_SELECT)
                    .select(&make);
                self.catalog.load_models(&make).await;
            }
            Handler::PerformSearch => {
                self.search.perform_search().await;
            }
            Handler::OpenDetail => {
                let Some(id) = event.car_id() else {
                    return;
                };
                match self.catalog.car_detail(id).await {
                    Some(html) => self.modal.open(html).await,
                    None => tracing::warn!(car_id = id, "Car detail unavailable; modal stays closed"),
                }
            }
            Handler::CloseModal => self.modal.close().await,
            Handler::CloseModalOnBackdrop => self.modal.close_on_backdrop(event).await,
            Handler::CloseModalOnEscape => self.modal.close_on_escape(event).await,
        }
    }
}
