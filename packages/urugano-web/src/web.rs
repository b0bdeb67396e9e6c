//! JavaScript entry points

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use crate::components;
use crate::config::SiteConfig;
use crate::dom::WebPage;
use crate::error::PageError;
use crate::{app, format};

fn to_js(err: PageError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn current_page() -> Result<WebPage, JsValue> {
    WebPage::current().map_err(to_js)
}

/// Initialize the page once its structure is ready.
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    let page = current_page()?;

    if page.document().ready_state() != "loading" {
        app::start(&page, &SiteConfig::default()).map_err(to_js)?;
        return Ok(());
    }

    let document = page.document().clone();
    EventListener::once(&document, "DOMContentLoaded", move |_| {
        if let Err(err) = app::start(&page, &SiteConfig::default()) {
            wasm_bindgen::throw_str(&err.to_string());
        }
    })
    .forget();

    Ok(())
}

#[wasm_bindgen(js_name = formatPrice)]
pub fn format_price(price: f64) -> String {
    format::format_price(price)
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email(email: &str) -> bool {
    format::validate_email(email)
}

#[wasm_bindgen(js_name = filterListings)]
pub fn filter_listings(search_term: &str) -> Result<usize, JsValue> {
    components::filter_listings(&current_page()?, search_term).map_err(to_js)
}

#[wasm_bindgen(js_name = bookProperty)]
pub fn book_property() -> Result<(), JsValue> {
    components::book_property(&current_page()?);
    Ok(())
}

#[wasm_bindgen(js_name = lazyLoadImages)]
pub fn lazy_load_images() -> Result<usize, JsValue> {
    components::lazy_load_images(&current_page()?).map_err(to_js)
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() -> Result<bool, JsValue> {
    components::toggle_mobile_menu(&current_page()?).map_err(to_js)
}

#[wasm_bindgen(js_name = smoothScroll)]
pub fn smooth_scroll(target: &str) -> Result<(), JsValue> {
    components::smooth_scroll(&current_page()?, target).map_err(to_js)
}
