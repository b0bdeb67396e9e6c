//! Page elements shared across the site

mod lazy_image;
mod listing_card;
mod nav;

pub use lazy_image::*;
pub use listing_card::*;
pub use nav::*;
