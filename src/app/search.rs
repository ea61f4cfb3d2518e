//! Filter form → `POST /api/cars/search` → results grid.
//!
//! Repeated submits are not blocked. Each submit takes a ticket, and a
//! response that comes back after a newer submit was issued is dropped, so
//! the grid always shows the latest search.

use crate::app::context::AppContext;
use crate::app::events::{EventKind, Handler, Node, Subscription};
use crate::app::page::{ids, Page};
use crate::domain::search::SearchForm;
use crate::render::{render_search_results, templates};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const SEARCH_ERROR_MESSAGE: &str = "Error performing search";

/// What one `perform_search` call ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered { count: usize },
    Failed,
    /// A newer search was issued while this one was in flight.
    Superseded,
}

/// Reads the six filter controls.
pub fn read_form(page: &Page) -> SearchForm {
    SearchForm {
        make: page.value(ids::MAKE_SELECT).to_string(),
        model: page.value(ids::MODEL_SELECT).to_string(),
        fuel_type: page.value(ids::FUEL_TYPE).to_string(),
        min_price: page.value(ids::MIN_PRICE).to_string(),
        max_price: page.value(ids::MAX_PRICE).to_string(),
        min_year: page.value(ids::MIN_YEAR).to_string(),
    }
}

#[derive(Clone)]
pub struct SearchController {
    ctx: AppContext,
    latest_ticket: Arc<AtomicU64>,
}

impl SearchController {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            latest_ticket: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscriptions() -> Vec<Subscription> {
        vec![Subscription::new(
            EventKind::Click,
            Node::SearchButton,
            Handler::PerformSearch,
        )]
    }

    fn issue_ticket(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket
    }

    pub async fn perform_search(&self) -> SearchOutcome {
        let criteria = read_form(&*self.ctx.page.lock().await).to_criteria();
        let ticket = self.issue_ticket();
        tracing::debug!(ticket, ?criteria, "search submitted");

        let results = self.ctx.api.search(&criteria).await;

        if !self.is_latest(ticket) {
            tracing::warn!(ticket, "Discarding superseded search response");
            return SearchOutcome::Superseded;
        }

        let Some(cars) = results else {
            self.ctx
                .fill(ids::SEARCH_RESULTS, templates::message(SEARCH_ERROR_MESSAGE))
                .await;
            return SearchOutcome::Failed;
        };

        let html = match render_search_results(Some(cars.as_slice()), &self.ctx.images) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("{:#}", e);
                self.ctx
                    .fill(ids::SEARCH_RESULTS, templates::message(SEARCH_ERROR_MESSAGE))
                    .await;
                return SearchOutcome::Failed;
            }
        };

        let mut page = self.ctx.page.lock().await;
        page.set_inner_html(ids::SEARCH_RESULTS, html);
        page.scroll_into_view(ids::SEARCH_RESULTS);
        SearchOutcome::Rendered { count: cars.len() }
    }
}
