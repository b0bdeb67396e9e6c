//! Page start-up across the site's pages.

mod common;

use crate::common::{load, INDEX, LISTINGS, ROOMMATE_APPLY};
use urugano_web::dom::HtmlPage;
use urugano_web::{start, Bindings, FormKind, SiteConfig};

#[test]
fn home_page_bindings() {
    let (_, bindings) = load(INDEX, "/index.html");

    assert_eq!(
        bindings,
        Bindings {
            highlighted_links: 1,
            search: true,
            form: None,
            listing_cards: 2,
        }
    );
}

#[test]
fn application_page_bindings() {
    let (_, bindings) = load(ROOMMATE_APPLY, "/roomate-apply.html");

    assert_eq!(bindings.form, Some(FormKind::RoommateApplication));
    assert!(!bindings.search);
    assert_eq!(bindings.listing_cards, 0);
    // no nav link points at the application page
    assert_eq!(bindings.highlighted_links, 0);
}

#[test]
fn empty_page_initializes() {
    let page = HtmlPage::parse("<html><body></body></html>", "");

    let bindings = start(&page, &SiteConfig::default()).unwrap();

    assert_eq!(bindings, Bindings::default());
}

#[test]
fn welcome_is_logged_once() {
    let (page, _) = load(LISTINGS, "/listings.html");

    let welcomes: Vec<_> = page
        .console()
        .into_iter()
        .filter(|entry| entry.message == "Welcome to Urugano Realty")
        .collect();
    assert_eq!(welcomes.len(), 1);
    assert_eq!(welcomes[0].details, None);
}

#[test]
fn start_up_shows_nothing_to_visitor() {
    let (page, _) = load(INDEX, "/index.html");

    assert!(page.alerts().is_empty());
    assert!(page.navigations().is_empty());
}
