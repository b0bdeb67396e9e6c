//! Property search control

use std::rc::Rc;

use tracing::info;

use crate::dom::{DomEvent, EventKind, Page};
use crate::error::{PageError, Result};
use crate::types::{SearchQuery, Submission};

pub const SEARCH_FORM: &str = ".search-form";

const SEARCH_BUTTON: &str = "button";

// Controls are found by position within the form
const LOCATION_INPUT: &str = "input[type=\"text\"]";
const CHECKIN_INPUT: &str = "input[type=\"date\"]:nth-of-type(1)";
const CHECKOUT_INPUT: &str = "input[type=\"date\"]:nth-of-type(2)";
const GUESTS_SELECT: &str = "select";

pub const MISSING_LOCATION_MESSAGE: &str = "Please enter a location to search.";

/// Attach the search handler to the search form's button.
///
/// Returns `false` without binding anything when the page has no search
/// form or the form has no button.
pub fn bind_search<P: Page>(page: &P) -> Result<bool> {
    let Some(form) = page.query(SEARCH_FORM)? else {
        return Ok(false);
    };
    let Some(button) = page.query_within(&form, SEARCH_BUTTON)? else {
        return Ok(false);
    };

    page.listen(
        &button,
        EventKind::Click,
        Rc::new(|page: &P, event: &DomEvent<P::Node>| {
            event.prevent_default();
            handle_search(page, event.target()).map(|_| ())
        }),
    )?;
    Ok(true)
}

/// Read the four search controls of `form`.
pub fn read_search_query<P: Page>(page: &P, form: &P::Node) -> Result<SearchQuery> {
    let field = |selector: &str| -> Result<String> {
        let control = page.require_within(form, selector)?;
        Ok(page.value(&control))
    };

    Ok(SearchQuery {
        location: field(LOCATION_INPUT)?,
        checkin: field(CHECKIN_INPUT)?,
        checkout: field(CHECKOUT_INPUT)?,
        guests: field(GUESTS_SELECT)?,
    })
}

/// Run a search started from `origin`, an element inside the search form.
///
/// A blank location is refused with an alert. Otherwise the visitor is told
/// what is being searched for and sent to the listings page.
pub fn handle_search<P: Page>(page: &P, origin: &P::Node) -> Result<Submission> {
    let form = page
        .closest(origin, SEARCH_FORM)?
        .ok_or_else(|| PageError::missing(SEARCH_FORM))?;
    let query = read_search_query(page, &form)?;

    if !query.has_location() {
        page.alert(MISSING_LOCATION_MESSAGE);
        return Ok(Submission::Rejected);
    }

    page.log("Search parameters:", Some(&serde_json::to_value(&query)?));
    page.alert(&format!(
        "Searching for properties in {} for {}",
        query.location, query.guests
    ));

    let href = query.results_href();
    page.navigate(&href)?;

    info!(location = %query.location, guests = %query.guests, "search submitted");
    Ok(Submission::Accepted { href })
}
