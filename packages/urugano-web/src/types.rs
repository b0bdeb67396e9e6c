//! Values passed between handlers and the page

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::routes::Route;

/// Characters escaped in a query value: everything except `A-Z a-z 0-9`
/// and `- _ . ! ~ * ' ( )`
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Search control contents, as typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub location: String,
    pub checkin: String,
    pub checkout: String,
    pub guests: String,
}

impl SearchQuery {
    /// A search needs a location with at least one non-whitespace character.
    ///
    /// A byte order mark counts as whitespace.
    pub fn has_location(&self) -> bool {
        !self
            .location
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .is_empty()
    }

    /// Results page URL carrying the query.
    ///
    /// Only `location` is percent-encoded; dates and guests are appended as
    /// typed.
    pub fn results_href(&self) -> String {
        format!(
            "{}?location={}&checkin={}&checkout={}&guests={}",
            Route::Listings.href(),
            utf8_percent_encode(&self.location, QUERY_VALUE),
            self.checkin,
            self.checkout,
            self.guests,
        )
    }
}

/// Outcome of a search or form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input accepted and the page navigated to `href`
    Accepted { href: String },
    /// Required input missing; the visitor was alerted
    Rejected,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}
