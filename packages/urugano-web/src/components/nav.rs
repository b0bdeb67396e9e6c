//! Site navigation

use crate::config::SiteConfig;
use crate::dom::Page;
use crate::error::Result;
use crate::routes::current_page;

const NAV_LINKS: &str = "nav a";
const NAV_MENU: &str = "nav ul";

/// Class that opens the collapsed menu on small screens
pub const MOBILE_MENU_OPEN: &str = "mobile-menu-open";

/// Colour every navigation link whose `href` is exactly the current page.
///
/// The comparison is a plain string match against the final path segment:
/// `index.html/` or `./index.html` do not count. Returns how many links were
/// highlighted.
pub fn highlight_navigation<P: Page>(page: &P, config: &SiteConfig) -> Result<usize> {
    let pathname = page.pathname();
    let current = current_page(&pathname, &config.home_page);

    let mut highlighted = 0;
    for link in page.query_all(NAV_LINKS)? {
        if page.attribute(&link, "href").as_deref() == Some(current) {
            page.set_style(&link, "color", &config.accent_color)?;
            highlighted += 1;
        }
    }
    Ok(highlighted)
}

/// Open or close the navigation menu, returning whether it is now open.
pub fn toggle_mobile_menu<P: Page>(page: &P) -> Result<bool> {
    let menu = page.require(NAV_MENU)?;
    page.toggle_class(&menu, MOBILE_MENU_OPEN)
}

/// Smoothly scroll the element matching `target` into view.
pub fn smooth_scroll<P: Page>(page: &P, target: &str) -> Result<()> {
    let node = page.require(target)?;
    page.scroll_into_view(&node, true);
    Ok(())
}
