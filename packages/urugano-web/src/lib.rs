//! Urugano Realty page controller
//!
//! Interactivity for the static Urugano Realty site: navigation highlighting,
//! the property search control, the login, signup and roommate application
//! forms, listing card effects, and a few helpers other scripts on the page
//! can reuse.
//!
//! Nothing here talks to a server. Searches and form submissions are
//! acknowledged with a blocking alert and a move to the next static page.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use urugano_web::{dom::HtmlPage, start, SiteConfig};
//!
//! let page = HtmlPage::parse(include_str!("login.html"), "/login.html");
//! let bindings = start(&page, &SiteConfig::default())?;
//!
//! page.fill("input[type=\"email\"]", "amani@example.rw")?;
//! page.fill("input[type=\"password\"]", "secret")?;
//! page.submit("form")?;
//! assert_eq!(page.last_navigation().as_deref(), Some("index.html"));
//! ```
//!
//! In the browser, build with `--features web`: the module initializes
//! itself once the document is ready and exports `formatPrice`,
//! `validateEmail`, `filterListings` and the other helpers to JavaScript.

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod pages;
pub mod routes;
pub mod types;

#[cfg(feature = "web")]
mod web;

pub use app::{initialize, start, welcome, Bindings};
pub use components::{
    book_property, filter_listings, highlight_navigation, lazy_load_images, smooth_scroll,
    toggle_mobile_menu,
};
pub use config::SiteConfig;
pub use error::{PageError, Result};
pub use format::{format_price, validate_email};
pub use pages::{handle_form, handle_search, FormKind};
pub use routes::Route;
pub use types::{SearchQuery, Submission};
