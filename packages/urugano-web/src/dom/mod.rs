//! Host page abstraction
//!
//! Handlers never touch a browser API directly. Everything they read from or
//! do to the document goes through [`Page`], which has two implementations:
//!
//! - [`HtmlPage`]: a parsed HTML document held in memory. Interaction is
//!   replayed with [`HtmlPage::dispatch`], [`HtmlPage::reveal`] and friends,
//!   and alerts, navigations and console diagnostics are recorded.
//! - `WebPage` (feature `web`): the live browser document.
//!
//! ## Blocking alerts
//!
//! [`Page::alert`] returns only once the visitor has dismissed the message.
//! Handlers rely on this ordering: the navigation that follows a success
//! alert never starts while the alert is on screen.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use serde_json::Value;

use crate::error::{PageError, Result};

mod html;
#[cfg(feature = "web")]
mod web;

pub use html::{ConsoleEntry, HtmlNode, HtmlPage};
#[cfg(feature = "web")]
pub use web::WebPage;

/// DOM events the controller listens for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// DOM event type name
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
        }
    }

    /// Whether the event propagates to ancestors of its target
    pub fn bubbles(&self) -> bool {
        matches!(self, EventKind::Click | EventKind::Submit)
    }
}

/// Event delivered to a [`Listener`].
#[derive(Debug)]
pub struct DomEvent<N> {
    kind: EventKind,
    target: N,
    current_target: N,
    default_prevented: Cell<bool>,
}

impl<N> DomEvent<N> {
    pub fn new(kind: EventKind, target: N, current_target: N) -> Self {
        Self {
            kind,
            target,
            current_target,
            default_prevented: Cell::new(false),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Element the event was dispatched to
    pub fn target(&self) -> &N {
        &self.target
    }

    /// Element the listener is attached to
    pub fn current_target(&self) -> &N {
        &self.current_target
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Event handler attached with [`Page::listen`].
///
/// An `Err` escapes to the host the way an uncaught exception would.
pub type Listener<P> = Rc<dyn Fn(&P, &DomEvent<<P as Page>::Node>) -> Result<()>>;

/// Called when an observed element scrolls into view.
pub type VisibilityCallback<P> = Rc<dyn Fn(&P, &<P as Page>::Node) -> Result<()>>;

/// A document plus the window operations handlers need.
pub trait Page: Clone + 'static {
    /// Element handle
    type Node: Clone + PartialEq + Debug + 'static;

    /// Path component of the current location
    fn pathname(&self) -> String;

    /// First element in the document matching `selector`
    fn query(&self, selector: &str) -> Result<Option<Self::Node>>;

    /// Every element in the document matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>>;

    /// First descendant of `scope` matching `selector`
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Result<Option<Self::Node>>;

    /// `node` itself or its nearest ancestor matching `selector`
    fn closest(&self, node: &Self::Node, selector: &str) -> Result<Option<Self::Node>>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Current value of a form control (`""` for anything else)
    fn value(&self, node: &Self::Node) -> String;

    fn text_content(&self, node: &Self::Node) -> String;

    /// Set an inline style property, CSS property names (`box-shadow`)
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<()>;

    fn remove_class(&self, node: &Self::Node, class: &str) -> Result<()>;

    /// Toggle `class`, returning whether it is now present
    fn toggle_class(&self, node: &Self::Node, class: &str) -> Result<bool>;

    fn scroll_into_view(&self, node: &Self::Node, smooth: bool);

    fn listen(&self, node: &Self::Node, kind: EventKind, listener: Listener<Self>) -> Result<()>;

    /// Call `callback` whenever `node` becomes visible, until [`Page::unobserve`]
    fn observe_visibility(&self, node: &Self::Node, callback: VisibilityCallback<Self>)
        -> Result<()>;

    fn unobserve(&self, node: &Self::Node);

    /// Write a diagnostic to the page console
    fn log(&self, message: &str, details: Option<&Value>);

    /// Show a modal message, returning once it is dismissed
    fn alert(&self, message: &str);

    /// Leave the page for `href`
    fn navigate(&self, href: &str) -> Result<()>;

    /// Like [`Page::query`], but absence is an error
    fn require(&self, selector: &str) -> Result<Self::Node> {
        self.query(selector)?
            .ok_or_else(|| PageError::missing(selector))
    }

    /// Like [`Page::query_within`], but absence is an error
    fn require_within(&self, scope: &Self::Node, selector: &str) -> Result<Self::Node> {
        self.query_within(scope, selector)?
            .ok_or_else(|| PageError::missing(selector))
    }
}
