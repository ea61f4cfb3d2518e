//! DOM events as values, and the per-app subscription registry.
//!
//! An event has a [`Target`]; dispatch walks the target's propagation path
//! (target node first, then its ancestors, ending at `document` and `window`)
//! and runs every subscription attached to each node. A subscription flagged
//! `stop_propagation` ends the walk after its node.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Change,
    Scroll,
    KeyDown,
}

/// What an event happened on. Card-related targets carry the car id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    NavLink(String),
    NavToggle,
    Card(i64),
    /// The "View Details" link inside a card.
    ViewDetails(i64),
    MakeSelect,
    SearchButton,
    ModalClose,
    /// The overlay element itself, outside the dialog content.
    ModalBackdrop,
    ModalContent,
    Document,
    Window,
}

/// A node listeners attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    NavLinks,
    NavToggle,
    Cards,
    ViewDetailsLinks,
    MakeSelect,
    SearchButton,
    ModalClose,
    ModalBackdrop,
    ModalContent,
    Document,
    Window,
}

impl Target {
    /// Nodes an event on this target visits, innermost first.
    pub fn propagation_path(&self) -> Vec<Node> {
        let mut path = match self {
            Target::NavLink(_) => vec![Node::NavLinks],
            Target::NavToggle => vec![Node::NavToggle],
            Target::Card(_) => vec![Node::Cards],
            Target::ViewDetails(_) => vec![Node::ViewDetailsLinks, Node::Cards],
            Target::MakeSelect => vec![Node::MakeSelect],
            Target::SearchButton => vec![Node::SearchButton],
            Target::ModalClose => vec![Node::ModalClose, Node::ModalBackdrop],
            Target::ModalContent => vec![Node::ModalContent, Node::ModalBackdrop],
            Target::ModalBackdrop => vec![Node::ModalBackdrop],
            Target::Document => vec![],
            Target::Window => vec![Node::Window],
        };
        if !matches!(self, Target::Window) {
            path.push(Node::Document);
            path.push(Node::Window);
        }
        path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: Target,
    /// `KeyboardEvent.key` for key events.
    pub key: Option<String>,
    /// The control's new value for change events.
    pub value: Option<String>,
}

impl DomEvent {
    pub fn click(target: Target) -> Self {
        Self {
            kind: EventKind::Click,
            target,
            key: None,
            value: None,
        }
    }

    pub fn change(target: Target, value: &str) -> Self {
        Self {
            kind: EventKind::Change,
            target,
            key: None,
            value: Some(value.to_string()),
        }
    }

    pub fn scroll() -> Self {
        Self {
            kind: EventKind::Scroll,
            target: Target::Window,
            key: None,
            value: None,
        }
    }

    pub fn key_down(key: &str) -> Self {
        Self {
            kind: EventKind::KeyDown,
            target: Target::Document,
            key: Some(key.to_string()),
            value: None,
        }
    }

    /// Car id for clicks on a card or its action link.
    pub fn car_id(&self) -> Option<i64> {
        match self.target {
            Target::Card(id) | Target::ViewDetails(id) => Some(id),
            _ => None,
        }
    }
}

/// What a subscription does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ToggleMenu,
    ScrollToSection,
    SyncActiveLink,
    LoadModels,
    PerformSearch,
    OpenDetail,
    CloseModal,
    CloseModalOnBackdrop,
    CloseModalOnEscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub kind: EventKind,
    pub node: Node,
    pub handler: Handler,
    pub stop_propagation: bool,
}

impl Subscription {
    pub fn new(kind: EventKind, node: Node, handler: Handler) -> Self {
        Self {
            kind,
            node,
            handler,
            stop_propagation: false,
        }
    }

    pub fn stopping_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }
}

/// Every listener one app instance has attached.
#[derive(Debug, Default)]
pub struct EventRegistry {
    subscriptions: Vec<Subscription>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn extend(&mut self, subscriptions: impl IntoIterator<Item = Subscription>) {
        self.subscriptions.extend(subscriptions);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Detaches every listener.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Handlers to run for `event`, in order, honouring stop-propagation.
    pub fn route(&self, event: &DomEvent) -> Vec<Handler> {
        let mut handlers = Vec::new();
        for node in event.target.propagation_path() {
            let mut stop = false;
            for sub in self
                .subscriptions
                .iter()
                .filter(|s| s.kind == event.kind && s.node == node)
            {
                handlers.push(sub.handler);
                stop |= sub.stop_propagation;
            }
            if stop {
                break;
            }
        }
        handlers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> EventRegistry {
        let mut reg = EventRegistry::new();
        reg.subscribe(Subscription::new(EventKind::Click, Node::Cards, Handler::OpenDetail));
        reg.subscribe(
            Subscription::new(EventKind::Click, Node::ViewDetailsLinks, Handler::OpenDetail)
                .stopping_propagation(),
        );
        reg.subscribe(Subscription::new(
            EventKind::Click,
            Node::Window,
            Handler::CloseModalOnBackdrop,
        ));
        reg.subscribe(Subscription::new(
            EventKind::KeyDown,
            Node::Document,
            Handler::CloseModalOnEscape,
        ));
        reg
    }

    #[test]
    fn card_click_bubbles_to_window() {
        let handlers = registry().route(&DomEvent::click(Target::Card(1)));
        assert_eq!(handlers, vec![Handler::OpenDetail, Handler::CloseModalOnBackdrop]);
    }

    #[test]
    fn view_details_stops_before_card() {
        let handlers = registry().route(&DomEvent::click(Target::ViewDetails(1)));
        assert_eq!(handlers, vec![Handler::OpenDetail]);
    }

    #[test]
    fn kinds_do_not_cross() {
        let handlers = registry().route(&DomEvent::key_down("Escape"));
        assert_eq!(handlers, vec![Handler::CloseModalOnEscape]);
        assert!(registry().route(&DomEvent::scroll()).is_empty());
    }

    #[test]
    fn cleared_registry_routes_nothing() {
        let mut reg = registry();
        assert_eq!(reg.len(), 4);
        reg.clear();
        assert!(reg.is_empty());
        assert!(reg.route(&DomEvent::click(Target::Card(1))).is_empty());
    }

    #[test]
    fn window_is_not_visited_twice() {
        assert_eq!(Target::Window.propagation_path(), vec![Node::Window]);
        assert_eq!(
            Target::ModalContent.propagation_path(),
            vec![Node::ModalContent, Node::ModalBackdrop, Node::Document, Node::Window]
        );
    }
}
