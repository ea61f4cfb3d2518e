//! The car detail overlay.

use crate::app::context::AppContext;
use crate::app::events::{DomEvent, EventKind, Handler, Node, Subscription, Target};
use crate::app::page::ids;

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone)]
pub struct ModalController {
    ctx: AppContext,
}

impl ModalController {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn subscriptions() -> Vec<Subscription> {
        vec![
            Subscription::new(EventKind::Click, Node::ModalClose, Handler::CloseModal),
            Subscription::new(EventKind::Click, Node::Window, Handler::CloseModalOnBackdrop),
            Subscription::new(EventKind::KeyDown, Node::Document, Handler::CloseModalOnEscape),
        ]
    }

    /// Puts `detail_html` into the dialog and shows the overlay.
    pub async fn open(&self, detail_html: String) {
        let mut page = self.ctx.page.lock().await;
        page.set_inner_html(ids::CAR_DETAIL, detail_html);
        page.set_modal_visible(true);
    }

    pub async fn close(&self) {
        self.ctx.page.lock().await.set_modal_visible(false);
    }

    pub async fn is_open(&self) -> bool {
        self.ctx.page.lock().await.modal_visible()
    }

    /// Closes only when the overlay itself was clicked, not the dialog inside it.
    pub async fn close_on_backdrop(&self, event: &DomEvent) {
        if event.target == Target::ModalBackdrop {
            self.close().await;
        }
    }

    /// Escape closes a visible overlay; anything else, or a hidden overlay, is a no-op.
    pub async fn close_on_escape(&self, event: &DomEvent) {
        if event.key.as_deref() != Some(ESCAPE_KEY) {
            return;
        }
        let mut page = self.ctx.page.lock().await;
        if page.modal_visible() {
            page.set_modal_visible(false);
        }
    }
}
