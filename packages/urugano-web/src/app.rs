//! Page start-up

use tracing::debug;

use crate::components::{bind_listing_cards, highlight_navigation};
use crate::config::SiteConfig;
use crate::dom::Page;
use crate::error::Result;
use crate::pages::{bind_form, bind_search, FormKind};
use crate::routes::Route;

/// What [`initialize`] attached to the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    pub highlighted_links: usize,
    pub search: bool,
    pub form: Option<FormKind>,
    pub listing_cards: usize,
}

/// Wire the page for `route`. Call once, when the document is ready.
///
/// Each step is skipped when its elements are missing, so any page of the
/// site can be initialized.
pub fn initialize<P: Page>(page: &P, route: &Route, config: &SiteConfig) -> Result<Bindings> {
    let bindings = Bindings {
        highlighted_links: highlight_navigation(page, config)?,
        search: bind_search(page)?,
        form: bind_form(page, route)?,
        listing_cards: bind_listing_cards(page)?,
    };

    debug!(?route, ?bindings, "page initialized");
    Ok(bindings)
}

/// Greet the console.
pub fn welcome<P: Page>(page: &P, config: &SiteConfig) {
    page.log(&config.welcome_message(), None);
}

/// Document-ready entry point: resolve the route from the location, then
/// initialize and greet.
///
/// The greeting is logged even when initialization fails.
pub fn start<P: Page>(page: &P, config: &SiteConfig) -> Result<Bindings> {
    let route = Route::from_path(&page.pathname(), &config.home_page);
    let bindings = initialize(page, &route, config);
    welcome(page, config);
    bindings
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::Value;

    use super::*;
    use crate::dom::{EventKind, Listener, VisibilityCallback};
    use crate::error::PageError;

    /// Host whose document cannot be queried
    #[derive(Clone, Default)]
    struct DetachedPage {
        console: Rc<RefCell<Vec<String>>>,
    }

    impl Page for DetachedPage {
        type Node = usize;

        fn pathname(&self) -> String {
            "/index.html".to_string()
        }

        fn query(&self, _: &str) -> Result<Option<usize>> {
            Err(PageError::Host("document detached".to_string()))
        }

        fn query_all(&self, _: &str) -> Result<Vec<usize>> {
            Err(PageError::Host("document detached".to_string()))
        }

        fn query_within(&self, _: &usize, _: &str) -> Result<Option<usize>> {
            Ok(None)
        }

        fn closest(&self, _: &usize, _: &str) -> Result<Option<usize>> {
            Ok(None)
        }

        fn attribute(&self, _: &usize, _: &str) -> Option<String> {
            None
        }

        fn set_attribute(&self, _: &usize, _: &str, _: &str) -> Result<()> {
            Ok(())
        }

        fn value(&self, _: &usize) -> String {
            String::new()
        }

        fn text_content(&self, _: &usize) -> String {
            String::new()
        }

        fn set_style(&self, _: &usize, _: &str, _: &str) -> Result<()> {
            Ok(())
        }

        fn remove_class(&self, _: &usize, _: &str) -> Result<()> {
            Ok(())
        }

        fn toggle_class(&self, _: &usize, _: &str) -> Result<bool> {
            Ok(false)
        }

        fn scroll_into_view(&self, _: &usize, _: bool) {}

        fn listen(&self, _: &usize, _: EventKind, _: Listener<Self>) -> Result<()> {
            Ok(())
        }

        fn observe_visibility(&self, _: &usize, _: VisibilityCallback<Self>) -> Result<()> {
            Ok(())
        }

        fn unobserve(&self, _: &usize) {}

        fn log(&self, message: &str, _: Option<&Value>) {
            self.console.borrow_mut().push(message.to_string());
        }

        fn alert(&self, _: &str) {}

        fn navigate(&self, _: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn welcome_survives_failed_initialization() {
        let page = DetachedPage::default();

        let err = start(&page, &SiteConfig::default()).unwrap_err();

        assert!(matches!(err, PageError::Host(_)));
        assert_eq!(*page.console.borrow(), vec!["Welcome to Urugano Realty"]);
    }
}
