// Common test utilities

use test_context::TestContext;
use urugano_web::dom::HtmlPage;
use urugano_web::{start, Bindings, SiteConfig};

pub const INDEX: &str = include_str!("../fixtures/index.html");
pub const LISTINGS: &str = include_str!("../fixtures/listings.html");
pub const LOGIN: &str = include_str!("../fixtures/login.html");
pub const SIGNUP: &str = include_str!("../fixtures/signup.html");
pub const ROOMMATE_APPLY: &str = include_str!("../fixtures/roomate-apply.html");

/// Parse `markup` served at `pathname` and run start-up on it.
pub fn load(markup: &str, pathname: &str) -> (HtmlPage, Bindings) {
    let page = HtmlPage::parse(markup, pathname);
    let bindings = start(&page, &SiteConfig::default()).expect("page should initialize");
    (page, bindings)
}

pub struct LoginPage {
    pub page: HtmlPage,
}

impl TestContext for LoginPage {
    fn setup() -> Self {
        Self {
            page: load(LOGIN, "/login.html").0,
        }
    }
}

pub struct SignupPage {
    pub page: HtmlPage,
}

impl TestContext for SignupPage {
    fn setup() -> Self {
        Self {
            page: load(SIGNUP, "/signup.html").0,
        }
    }
}

pub struct RoommateApplyPage {
    pub page: HtmlPage,
}

impl TestContext for RoommateApplyPage {
    fn setup() -> Self {
        Self {
            page: load(ROOMMATE_APPLY, "/roomate-apply.html").0,
        }
    }
}
