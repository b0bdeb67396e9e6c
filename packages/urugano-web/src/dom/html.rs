//! In-memory page over a parsed HTML document
//!
//! The markup is parsed once with `scraper` and never rewritten. Changes made
//! through [`Page`] (attributes, classes, styles, form values) live in
//! overlays keyed by node, so selectors always match against the markup as
//! it was parsed.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::{debug, info};

use super::{DomEvent, EventKind, Listener, Page, VisibilityCallback};
use crate::error::{PageError, Result};

lazy_static! {
    static ref OPTION_SELECTOR: Selector = Selector::parse("option").unwrap();
}

/// Element handle: position of the node in the parsed tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HtmlNode(usize);

/// Diagnostic written with [`Page::log`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleEntry {
    pub message: String,
    pub details: Option<Value>,
}

/// A page held in memory.
///
/// Cloning is cheap and clones share state, the way every script on a page
/// shares one document.
#[derive(Clone)]
pub struct HtmlPage {
    inner: Rc<Inner>,
}

struct Inner {
    html: Html,
    pathname: String,
    attributes: RefCell<HashMap<HtmlNode, BTreeMap<String, String>>>,
    values: RefCell<HashMap<HtmlNode, String>>,
    styles: RefCell<HashMap<HtmlNode, BTreeMap<String, String>>>,
    listeners: RefCell<Vec<(HtmlNode, EventKind, Listener<HtmlPage>)>>,
    observers: RefCell<Vec<(HtmlNode, VisibilityCallback<HtmlPage>)>>,
    scrolled: RefCell<Vec<(HtmlNode, bool)>>,
    console: RefCell<Vec<ConsoleEntry>>,
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
}

impl HtmlPage {
    /// Parse `markup` as the document served at `pathname`.
    pub fn parse(markup: &str, pathname: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                html: Html::parse_document(markup),
                pathname: pathname.into(),
                attributes: RefCell::default(),
                values: RefCell::default(),
                styles: RefCell::default(),
                listeners: RefCell::default(),
                observers: RefCell::default(),
                scrolled: RefCell::default(),
                console: RefCell::default(),
                alerts: RefCell::default(),
                navigations: RefCell::default(),
            }),
        }
    }

    // ------------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------------

    /// Type `value` into the first control matching `selector`.
    pub fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let node = self.require(selector)?;
        self.set_value(&node, value);
        Ok(())
    }

    pub fn set_value(&self, node: &HtmlNode, value: &str) {
        self.inner
            .values
            .borrow_mut()
            .insert(*node, value.to_string());
    }

    /// Dispatch `kind` at `target`.
    ///
    /// Bubbling events visit the target and then each ancestor. The first
    /// listener error stops dispatch and is returned. On success, returns
    /// whether any listener prevented the default action.
    pub fn dispatch(&self, target: &HtmlNode, kind: EventKind) -> Result<bool> {
        let path = if kind.bubbles() {
            self.ancestry(target)
        } else {
            vec![*target]
        };

        let mut prevented = false;
        for current in path {
            let listeners: Vec<Listener<Self>> = self
                .inner
                .listeners
                .borrow()
                .iter()
                .filter(|(node, k, _)| *node == current && *k == kind)
                .map(|(_, _, listener)| listener.clone())
                .collect();

            if listeners.is_empty() {
                continue;
            }

            let event = DomEvent::new(kind, *target, current);
            for listener in listeners {
                let outcome = listener(self, &event);
                prevented |= event.default_prevented();
                outcome?;
            }
        }

        debug!(event = kind.name(), prevented, "dispatched");
        Ok(prevented)
    }

    pub fn click(&self, selector: &str) -> Result<bool> {
        let node = self.require(selector)?;
        self.dispatch(&node, EventKind::Click)
    }

    pub fn submit(&self, selector: &str) -> Result<bool> {
        let node = self.require(selector)?;
        self.dispatch(&node, EventKind::Submit)
    }

    /// Move the pointer onto `node`
    pub fn hover(&self, node: &HtmlNode) -> Result<()> {
        self.dispatch(node, EventKind::MouseEnter).map(|_| ())
    }

    /// Move the pointer off `node`
    pub fn unhover(&self, node: &HtmlNode) -> Result<()> {
        self.dispatch(node, EventKind::MouseLeave).map(|_| ())
    }

    /// Scroll `node` into the viewport, notifying its observers.
    pub fn reveal(&self, node: &HtmlNode) -> Result<()> {
        let callbacks: Vec<VisibilityCallback<Self>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .filter(|(observed, _)| observed == node)
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in callbacks {
            callback(self, node)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    pub fn alerts(&self) -> Vec<String> {
        self.inner.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.inner.navigations.borrow().clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.inner.navigations.borrow().last().cloned()
    }

    pub fn console(&self) -> Vec<ConsoleEntry> {
        self.inner.console.borrow().clone()
    }

    /// Inline style set through [`Page::set_style`]
    pub fn style(&self, node: &HtmlNode, property: &str) -> Option<String> {
        self.inner
            .styles
            .borrow()
            .get(node)
            .and_then(|styles| styles.get(property).cloned())
    }

    pub fn has_class(&self, node: &HtmlNode, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    pub fn is_observed(&self, node: &HtmlNode) -> bool {
        self.inner
            .observers
            .borrow()
            .iter()
            .any(|(observed, _)| observed == node)
    }

    pub fn listener_count(&self, node: &HtmlNode, kind: EventKind) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|(n, k, _)| n == node && *k == kind)
            .count()
    }

    /// Elements scrolled into view, with whether scrolling was smooth
    pub fn scrolled(&self) -> Vec<(HtmlNode, bool)> {
        self.inner.scrolled.borrow().clone()
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn element(&self, node: &HtmlNode) -> Option<ElementRef<'_>> {
        self.inner
            .html
            .tree
            .root()
            .descendants()
            .nth(node.0)
            .and_then(ElementRef::wrap)
    }

    fn handle(&self, element: ElementRef<'_>) -> Option<HtmlNode> {
        let id = element.id();
        self.inner
            .html
            .tree
            .root()
            .descendants()
            .position(|node| node.id() == id)
            .map(HtmlNode)
    }

    /// `node` followed by its element ancestors, innermost first
    fn ancestry(&self, node: &HtmlNode) -> Vec<HtmlNode> {
        let Some(element) = self.element(node) else {
            return vec![*node];
        };
        std::iter::once(element)
            .chain(element.ancestors().filter_map(ElementRef::wrap))
            .filter_map(|el| self.handle(el))
            .collect()
    }

    fn classes(&self, node: &HtmlNode) -> Vec<String> {
        self.attribute(node, "class")
            .map(|classes| classes.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn set_classes(&self, node: &HtmlNode, classes: &[String]) -> Result<()> {
        self.set_attribute(node, "class", &classes.join(" "))
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| PageError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn option_value(option: ElementRef<'_>) -> String {
    match option.value().attr("value") {
        Some(value) => value.to_string(),
        None => option.text().collect::<String>().trim().to_string(),
    }
}

impl Page for HtmlPage {
    type Node = HtmlNode;

    fn pathname(&self) -> String {
        self.inner.pathname.clone()
    }

    fn query(&self, selector: &str) -> Result<Option<HtmlNode>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .inner
            .html
            .select(&selector)
            .next()
            .and_then(|el| self.handle(el)))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<HtmlNode>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .inner
            .html
            .select(&selector)
            .filter_map(|el| self.handle(el))
            .collect())
    }

    fn query_within(&self, scope: &HtmlNode, selector: &str) -> Result<Option<HtmlNode>> {
        let selector = parse_selector(selector)?;
        let Some(scope) = self.element(scope) else {
            return Ok(None);
        };
        Ok(scope
            .select(&selector)
            .next()
            .and_then(|el| self.handle(el)))
    }

    fn closest(&self, node: &HtmlNode, selector: &str) -> Result<Option<HtmlNode>> {
        let selector = parse_selector(selector)?;
        let Some(element) = self.element(node) else {
            return Ok(None);
        };
        Ok(std::iter::once(element)
            .chain(element.ancestors().filter_map(ElementRef::wrap))
            .find(|el| selector.matches(el))
            .and_then(|el| self.handle(el)))
    }

    fn attribute(&self, node: &HtmlNode, name: &str) -> Option<String> {
        if let Some(overlay) = self
            .inner
            .attributes
            .borrow()
            .get(node)
            .and_then(|attrs| attrs.get(name))
        {
            return Some(overlay.clone());
        }
        self.element(node)
            .and_then(|el| el.value().attr(name).map(str::to_string))
    }

    fn set_attribute(&self, node: &HtmlNode, name: &str, value: &str) -> Result<()> {
        self.inner
            .attributes
            .borrow_mut()
            .entry(*node)
            .or_default()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn value(&self, node: &HtmlNode) -> String {
        if let Some(value) = self.inner.values.borrow().get(node) {
            return value.clone();
        }
        let Some(element) = self.element(node) else {
            return String::new();
        };
        match element.value().name() {
            "input" => element.value().attr("value").unwrap_or_default().to_string(),
            "textarea" => element.text().collect(),
            "select" => {
                let options: Vec<ElementRef<'_>> = element.select(&OPTION_SELECTOR).collect();
                options
                    .iter()
                    .copied()
                    .find(|option| option.value().attr("selected").is_some())
                    .or_else(|| options.first().copied())
                    .map(option_value)
                    .unwrap_or_default()
            }
            _ => String::new(),
        }
    }

    fn text_content(&self, node: &HtmlNode) -> String {
        self.element(node)
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }

    fn set_style(&self, node: &HtmlNode, property: &str, value: &str) -> Result<()> {
        self.inner
            .styles
            .borrow_mut()
            .entry(*node)
            .or_default()
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn remove_class(&self, node: &HtmlNode, class: &str) -> Result<()> {
        let mut classes = self.classes(node);
        classes.retain(|c| c != class);
        self.set_classes(node, &classes)
    }

    fn toggle_class(&self, node: &HtmlNode, class: &str) -> Result<bool> {
        let mut classes = self.classes(node);
        let present = if classes.iter().any(|c| c == class) {
            classes.retain(|c| c != class);
            false
        } else {
            classes.push(class.to_string());
            true
        };
        self.set_classes(node, &classes)?;
        Ok(present)
    }

    fn scroll_into_view(&self, node: &HtmlNode, smooth: bool) {
        self.inner.scrolled.borrow_mut().push((*node, smooth));
    }

    fn listen(&self, node: &HtmlNode, kind: EventKind, listener: Listener<Self>) -> Result<()> {
        self.inner
            .listeners
            .borrow_mut()
            .push((*node, kind, listener));
        Ok(())
    }

    fn observe_visibility(
        &self,
        node: &HtmlNode,
        callback: VisibilityCallback<Self>,
    ) -> Result<()> {
        self.inner.observers.borrow_mut().push((*node, callback));
        Ok(())
    }

    fn unobserve(&self, node: &HtmlNode) {
        self.inner
            .observers
            .borrow_mut()
            .retain(|(observed, _)| observed != node);
    }

    fn log(&self, message: &str, details: Option<&Value>) {
        match details {
            Some(details) => info!(%details, "console: {message}"),
            None => info!("console: {message}"),
        }
        self.inner.console.borrow_mut().push(ConsoleEntry {
            message: message.to_string(),
            details: details.cloned(),
        });
    }

    fn alert(&self, message: &str) {
        info!(alert = message, "alert shown");
        self.inner.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, href: &str) -> Result<()> {
        info!(href, "navigate");
        self.inner.navigations.borrow_mut().push(href.to_string());
        Ok(())
    }
}
