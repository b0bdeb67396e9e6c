//! Navigation highlighting, menu toggle and smooth scrolling.

mod common;

use crate::common::{load, INDEX, LISTINGS};
use urugano_web::dom::{HtmlPage, Page};
use urugano_web::{
    highlight_navigation, smooth_scroll, toggle_mobile_menu, PageError, SiteConfig,
};

fn link(page: &HtmlPage, href: &str) -> urugano_web::dom::HtmlNode {
    page.require(&format!("nav a[href=\"{href}\"]")).unwrap()
}

#[test]
fn current_page_link_is_highlighted() {
    let (page, bindings) = load(LISTINGS, "/site/listings.html");

    assert_eq!(bindings.highlighted_links, 1);
    assert_eq!(
        page.style(&link(&page, "listings.html"), "color").as_deref(),
        Some("#ff5a5f")
    );
    assert_eq!(page.style(&link(&page, "index.html"), "color"), None);
}

#[test]
fn empty_path_means_home_page() {
    let (page, bindings) = load(INDEX, "/");

    assert_eq!(bindings.highlighted_links, 1);
    assert_eq!(
        page.style(&link(&page, "index.html"), "color").as_deref(),
        Some("#ff5a5f")
    );
}

#[test]
fn trailing_slash_href_is_not_a_match() {
    let page = HtmlPage::parse(
        r#"<nav><a href="index.html">Home</a><a href="index.html/">Home again</a></nav>"#,
        "/site/index.html",
    );

    let highlighted = highlight_navigation(&page, &SiteConfig::default()).unwrap();

    assert_eq!(highlighted, 1);
    assert!(page.style(&link(&page, "index.html"), "color").is_some());
    assert!(page.style(&link(&page, "index.html/"), "color").is_none());
}

#[test]
fn links_outside_nav_are_ignored() {
    let page = HtmlPage::parse(
        r#"<nav></nav><footer><a href="index.html">Home</a></footer>"#,
        "/index.html",
    );

    assert_eq!(highlight_navigation(&page, &SiteConfig::default()).unwrap(), 0);
}

#[test]
fn accent_colour_comes_from_config() {
    let page = HtmlPage::parse(LISTINGS, "/listings.html");
    let config = SiteConfig {
        accent_color: "teal".to_string(),
        ..SiteConfig::default()
    };

    highlight_navigation(&page, &config).unwrap();

    assert_eq!(
        page.style(&link(&page, "listings.html"), "color").as_deref(),
        Some("teal")
    );
}

#[test]
fn mobile_menu_toggles() {
    let (page, _) = load(INDEX, "/index.html");
    let menu = page.require("nav ul").unwrap();

    assert!(toggle_mobile_menu(&page).unwrap());
    assert!(page.has_class(&menu, "mobile-menu-open"));

    assert!(!toggle_mobile_menu(&page).unwrap());
    assert!(!page.has_class(&menu, "mobile-menu-open"));
}

#[test]
fn mobile_menu_requires_nav_list() {
    let page = HtmlPage::parse("<main></main>", "/index.html");

    let err = toggle_mobile_menu(&page).unwrap_err();
    assert!(matches!(err, PageError::MissingElement { selector } if selector == "nav ul"));
}

#[test]
fn smooth_scroll_targets_element() {
    let (page, _) = load(LISTINGS, "/listings.html");
    let listings = page.require("#listings").unwrap();

    smooth_scroll(&page, "#listings").unwrap();

    assert_eq!(page.scrolled(), vec![(listings, true)]);
    assert!(smooth_scroll(&page, "#reviews").is_err());
}
