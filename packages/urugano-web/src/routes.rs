//! Route table for the site's static pages

/// Static pages of the site, keyed by file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Listings,
    Login,
    Signup,
    RoommateApply,
    Roommates,
    /// Any page the controller has no special handling for
    Other(String),
}

impl Route {
    /// Resolve a route from a location pathname.
    ///
    /// Only the final path segment is considered; an empty segment falls back
    /// to `home_page`.
    pub fn from_path(pathname: &str, home_page: &str) -> Self {
        Self::from_file(current_page(pathname, home_page))
    }

    pub fn from_file(file: &str) -> Self {
        match file {
            "index.html" => Route::Home,
            "listings.html" => Route::Listings,
            "login.html" => Route::Login,
            "signup.html" => Route::Signup,
            "roomate-apply.html" => Route::RoommateApply,
            "roomates.html" => Route::Roommates,
            other => Route::Other(other.to_string()),
        }
    }

    /// Relative URL of the page
    pub fn href(&self) -> &str {
        match self {
            Route::Home => "index.html",
            Route::Listings => "listings.html",
            Route::Login => "login.html",
            Route::Signup => "signup.html",
            Route::RoommateApply => "roomate-apply.html",
            Route::Roommates => "roomates.html",
            Route::Other(file) => file,
        }
    }
}

/// Final segment of `pathname`, or `home_page` when that segment is empty.
pub fn current_page<'a>(pathname: &'a str, home_page: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => home_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_segment_picks_route() {
        assert_eq!(Route::from_path("/site/login.html", "index.html"), Route::Login);
        assert_eq!(
            Route::from_path("/roomate-apply.html", "index.html"),
            Route::RoommateApply
        );
    }

    #[test]
    fn empty_segment_is_home() {
        assert_eq!(Route::from_path("/", "index.html"), Route::Home);
        assert_eq!(Route::from_path("", "index.html"), Route::Home);
        assert_eq!(Route::from_path("/site/", "index.html"), Route::Home);
    }

    #[test]
    fn substring_does_not_match() {
        assert_eq!(
            Route::from_path("/login.html/about.html", "index.html"),
            Route::Other("about.html".to_string())
        );
        assert_eq!(
            Route::from_path("/old-login.html", "index.html"),
            Route::Other("old-login.html".to_string())
        );
    }

    #[test]
    fn href_round_trips_known_pages() {
        for route in [
            Route::Home,
            Route::Listings,
            Route::Login,
            Route::Signup,
            Route::RoommateApply,
            Route::Roommates,
        ] {
            assert_eq!(Route::from_file(route.href()), route);
        }
    }
}
