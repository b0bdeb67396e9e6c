//! Browser page over `web-sys`

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use serde_json::Value;
use tracing::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use super::{DomEvent, EventKind, Listener, Page, VisibilityCallback};
use crate::error::{PageError, Result};

/// The document the module was loaded into.
#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
    observers: Rc<RefCell<Vec<(Element, IntersectionObserver)>>>,
}

impl WebPage {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| PageError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Host("no document".into()))?;

        Ok(Self {
            window,
            document,
            observers: Rc::default(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn host_error(value: JsValue) -> PageError {
    PageError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn selector_error(selector: &str, value: JsValue) -> PageError {
    PageError::InvalidSelector {
        selector: selector.to_string(),
        reason: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

/// Rethrow a handler failure into the page, like an uncaught exception.
fn throw(err: PageError) -> ! {
    error!(error = %err, "handler failed");
    wasm_bindgen::throw_str(&err.to_string())
}

impl Page for WebPage {
    type Node = Element;

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn query(&self, selector: &str) -> Result<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|e| selector_error(selector, e))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| selector_error(selector, e))?;

        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Result<Option<Element>> {
        scope
            .query_selector(selector)
            .map_err(|e| selector_error(selector, e))
    }

    fn closest(&self, node: &Element, selector: &str) -> Result<Option<Element>> {
        node.closest(selector)
            .map_err(|e| selector_error(selector, e))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<()> {
        node.set_attribute(name, value).map_err(host_error)
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<()> {
        let element = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| PageError::Host(format!("<{}> has no inline style", node.tag_name())))?;
        element
            .style()
            .set_property(property, value)
            .map_err(host_error)
    }

    fn remove_class(&self, node: &Element, class: &str) -> Result<()> {
        node.class_list().remove_1(class).map_err(host_error)
    }

    fn toggle_class(&self, node: &Element, class: &str) -> Result<bool> {
        node.class_list().toggle(class).map_err(host_error)
    }

    fn scroll_into_view(&self, node: &Element, smooth: bool) {
        if smooth {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            node.scroll_into_view_with_scroll_into_view_options(&options);
        } else {
            node.scroll_into_view();
        }
    }

    fn listen(&self, node: &Element, kind: EventKind, listener: Listener<Self>) -> Result<()> {
        let page = self.clone();
        let current = node.clone();

        EventListener::new(node, kind.name(), move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let dom_event = DomEvent::new(kind, target, current.clone());
            let outcome = listener(&page, &dom_event);
            if dom_event.default_prevented() {
                event.prevent_default();
            }
            if let Err(err) = outcome {
                throw(err);
            }
        })
        .forget();

        Ok(())
    }

    fn observe_visibility(
        &self,
        node: &Element,
        callback: VisibilityCallback<Self>,
    ) -> Result<()> {
        let page = self.clone();
        let on_change = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Err(err) = callback(&page, &entry.target()) {
                        throw(err);
                    }
                }
            },
        );

        let observer =
            IntersectionObserver::new(on_change.as_ref().unchecked_ref()).map_err(host_error)?;
        on_change.forget();

        observer.observe(node);
        self.observers.borrow_mut().push((node.clone(), observer));
        Ok(())
    }

    fn unobserve(&self, node: &Element) {
        self.observers.borrow_mut().retain(|(observed, observer)| {
            if observed == node {
                observer.unobserve(node);
                false
            } else {
                true
            }
        });
    }

    fn log(&self, message: &str, details: Option<&Value>) {
        let message = JsValue::from_str(message);
        match details.map(|d| js_sys::JSON::parse(&d.to_string())) {
            Some(Ok(details)) => console::log_2(&message, &details),
            _ => console::log_1(&message),
        }
    }

    fn alert(&self, message: &str) {
        gloo_dialogs::alert(message);
    }

    fn navigate(&self, href: &str) -> Result<()> {
        self.window.location().set_href(href).map_err(host_error)
    }
}
