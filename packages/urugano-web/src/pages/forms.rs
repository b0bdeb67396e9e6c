//! Login, signup and roommate application forms
//!
//! The three forms differ only in their fields, messages and where they lead,
//! so one handler serves all of them, driven by [`FormKind`].

use std::rc::Rc;

use serde_json::{Map, Value};
use tracing::info;

use crate::dom::{DomEvent, EventKind, Page};
use crate::error::Result;
use crate::routes::Route;
use crate::types::Submission;

/// The page's form
const FORM: &str = "form";

pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields.";

/// A required form control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub selector: &'static str,
    /// Whether the value may appear in diagnostics
    pub logged: bool,
}

const NAME: Field = Field {
    name: "name",
    selector: "input[type=\"text\"]",
    logged: true,
};

const EMAIL: Field = Field {
    name: "email",
    selector: "input[type=\"email\"]",
    logged: true,
};

const PASSWORD: Field = Field {
    name: "password",
    selector: "input[type=\"password\"]",
    logged: false,
};

const MESSAGE: Field = Field {
    name: "message",
    selector: "textarea",
    logged: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
    RoommateApplication,
}

impl FormKind {
    /// The form handled on `route`, if any
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Login => Some(FormKind::Login),
            Route::Signup => Some(FormKind::Signup),
            Route::RoommateApply => Some(FormKind::RoommateApplication),
            _ => None,
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Login => &[EMAIL, PASSWORD],
            FormKind::Signup => &[NAME, EMAIL, PASSWORD],
            FormKind::RoommateApplication => &[NAME, EMAIL, MESSAGE],
        }
    }

    pub fn log_label(&self) -> &'static str {
        match self {
            FormKind::Login => "Login attempt:",
            FormKind::Signup => "Signup attempt:",
            FormKind::RoommateApplication => "Roommate application:",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Login => "Login successful! Redirecting to homepage...",
            FormKind::Signup => "Account created successfully! Redirecting to login...",
            FormKind::RoommateApplication => "Application sent successfully!",
        }
    }

    /// Page shown after a successful submission
    pub fn destination(&self) -> Route {
        match self {
            FormKind::Login => Route::Home,
            FormKind::Signup => Route::Login,
            FormKind::RoommateApplication => Route::Roommates,
        }
    }
}

/// Bind the page's form for `route`.
///
/// Only the first `form` on the page is bound. Returns the kind bound, or
/// `None` when the route has no form or the page has none.
pub fn bind_form<P: Page>(page: &P, route: &Route) -> Result<Option<FormKind>> {
    let Some(kind) = FormKind::for_route(route) else {
        return Ok(None);
    };
    let Some(form) = page.query(FORM)? else {
        return Ok(None);
    };

    page.listen(
        &form,
        EventKind::Submit,
        Rc::new(move |page: &P, event: &DomEvent<P::Node>| {
            event.prevent_default();
            handle_form(page, kind, event.target()).map(|_| ())
        }),
    )?;
    Ok(Some(kind))
}

/// Submit `form` as a `kind` form.
///
/// Every field must be non-empty; values are otherwise taken as typed.
pub fn handle_form<P: Page>(page: &P, kind: FormKind, form: &P::Node) -> Result<Submission> {
    let mut values = Vec::with_capacity(kind.fields().len());
    for field in kind.fields() {
        let control = page.require_within(form, field.selector)?;
        values.push((field, page.value(&control)));
    }

    if values.iter().any(|(_, value)| value.is_empty()) {
        page.alert(INCOMPLETE_MESSAGE);
        return Ok(Submission::Rejected);
    }

    let details: Map<String, Value> = values
        .iter()
        .filter(|(field, _)| field.logged)
        .map(|(field, value)| (field.name.to_string(), Value::String(value.clone())))
        .collect();

    page.log(kind.log_label(), Some(&Value::Object(details)));
    page.alert(kind.success_message());

    let href = kind.destination().href().to_string();
    page.navigate(&href)?;

    info!(form = ?kind, "form submitted");
    Ok(Submission::Accepted { href })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_logged() {
        for kind in [
            FormKind::Login,
            FormKind::Signup,
            FormKind::RoommateApplication,
        ] {
            assert!(kind
                .fields()
                .iter()
                .all(|field| field.name != "password" || !field.logged));
        }
    }

    #[test]
    fn routes_without_forms() {
        assert_eq!(FormKind::for_route(&Route::Home), None);
        assert_eq!(FormKind::for_route(&Route::Listings), None);
        assert_eq!(FormKind::for_route(&Route::Roommates), None);
    }

    #[test]
    fn field_sets() {
        let names = |kind: FormKind| -> Vec<&'static str> {
            kind.fields().iter().map(|f| f.name).collect()
        };
        assert_eq!(names(FormKind::Login), ["email", "password"]);
        assert_eq!(names(FormKind::Signup), ["name", "email", "password"]);
        assert_eq!(
            names(FormKind::RoommateApplication),
            ["name", "email", "message"]
        );
    }
}
