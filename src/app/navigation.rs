//! Nav menu: mobile toggle, click-to-scroll and scroll-driven highlighting.

use crate::app::context::AppContext;
use crate::app::events::{EventKind, Handler, Node, Subscription};
use crate::app::page::Page;

/// Added to the scroll position before testing which section is current.
pub const SCROLL_OFFSET: f64 = 100.0;

/// Link click: scroll to the section (if it exists), mark the link active and
/// collapse the mobile menu.
pub fn follow_link(page: &mut Page, href: &str) {
    let section_id = href.trim_start_matches('#');
    if page.section(section_id).is_some() {
        page.scroll_into_view(section_id);
    }
    page.nav.activate(href);
    page.nav.open = false;
}

/// Recomputes the active link from the scroll position. The last section
/// containing `scroll_y + SCROLL_OFFSET` wins; no match leaves nothing active.
pub fn sync_active_link(page: &mut Page) {
    let probe = page.scroll_y() + SCROLL_OFFSET;
    let current = page
        .sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| format!("#{}", s.id));
    match current {
        Some(href) => page.nav.activate(&href),
        None => page.nav.clear_active(),
    }
}

#[derive(Clone)]
pub struct NavigationController {
    ctx: AppContext,
}

impl NavigationController {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn subscriptions() -> Vec<Subscription> {
        vec![
            Subscription::new(EventKind::Click, Node::NavToggle, Handler::ToggleMenu),
            Subscription::new(EventKind::Click, Node::NavLinks, Handler::ScrollToSection),
            Subscription::new(EventKind::Scroll, Node::Window, Handler::SyncActiveLink),
        ]
    }

    pub async fn toggle_menu(&self) {
        let mut page = self.ctx.page.lock().await;
        page.nav.open = !page.nav.open;
    }

    pub async fn follow_link(&self, href: &str) {
        follow_link(&mut *self.ctx.page.lock().await, href);
    }

    pub async fn sync_active_link(&self) {
        sync_active_link(&mut *self.ctx.page.lock().await);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::page::Section;

    fn active_count(page: &Page) -> usize {
        page.nav.links.iter().filter(|l| l.active).count()
    }

    #[test]
    fn click_scrolls_activates_and_collapses() {
        let mut page = Page::showroom();
        page.nav.open = true;

        follow_link(&mut page, "#inventory");

        assert_eq!(page.nav.active_href(), Some("#inventory"));
        assert_eq!(active_count(&page), 1);
        assert!(!page.nav.open);
        assert_eq!(page.last_scroll().unwrap().element_id, "inventory");
    }

    #[test]
    fn click_on_link_without_section_still_activates() {
        let mut page = Page::showroom();
        page.nav.links.push(crate::app::page::NavLink {
            href: "#about".into(),
            active: false,
        });
        follow_link(&mut page, "#about");
        assert!(page.last_scroll().is_none());
        assert_eq!(page.nav.active_href(), Some("#about"));
    }

    #[test]
    fn scroll_uses_offset_threshold() {
        let mut page = Page::showroom();
        // featured starts at 700: 650 + 100 is inside it, 550 + 100 is not.
        page.set_scroll_y(650.0);
        sync_active_link(&mut page);
        assert_eq!(page.nav.active_href(), Some("#featured"));

        page.set_scroll_y(550.0);
        sync_active_link(&mut page);
        assert_eq!(page.nav.active_href(), Some("#home"));
        assert_eq!(active_count(&page), 1);
    }

    #[test]
    fn scroll_past_every_section_clears_active() {
        let mut page = Page::showroom();
        page.set_scroll_y(10_000.0);
        sync_active_link(&mut page);
        assert_eq!(active_count(&page), 0);
    }

    #[test]
    fn overlapping_sections_pick_the_last() {
        let mut page = Page::showroom();
        page.sections.push(Section::new("contact", 0.0, 5000.0));
        page.set_scroll_y(0.0);
        sync_active_link(&mut page);
        assert_eq!(page.nav.active_href(), Some("#contact"));
        assert_eq!(active_count(&page), 1);
    }
}
