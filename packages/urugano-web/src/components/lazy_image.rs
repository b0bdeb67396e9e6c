//! Deferred image loading

use std::rc::Rc;

use crate::dom::{Page, VisibilityCallback};
use crate::error::Result;

const DEFERRED_IMAGES: &str = "img[data-src]";
const DEFERRED_SOURCE: &str = "data-src";

/// Class carried by images that have not loaded yet
pub const LAZY_CLASS: &str = "lazy";

/// Load each `img[data-src]` the first time it scrolls into view.
///
/// Returns the number of images being watched.
pub fn lazy_load_images<P: Page>(page: &P) -> Result<usize> {
    let images = page.query_all(DEFERRED_IMAGES)?;
    let load: VisibilityCallback<P> = Rc::new(|page: &P, image: &P::Node| load_image(page, image));

    for image in &images {
        page.observe_visibility(image, load.clone())?;
    }

    Ok(images.len())
}

fn load_image<P: Page>(page: &P, image: &P::Node) -> Result<()> {
    if let Some(source) = page.attribute(image, DEFERRED_SOURCE) {
        page.set_attribute(image, "src", &source)?;
    }
    page.remove_class(image, LAZY_CLASS)?;
    page.unobserve(image);
    Ok(())
}
