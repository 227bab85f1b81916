//! Page identity for the three static pages.
//!
//! DESIGN
//! ======
//! Every page loads the same bundle. The URL is inspected exactly once at
//! bootstrap ([`Page::from_path`]); after that the page travels as an enum so
//! nothing downstream compares file names.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// One of the demo site's pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    #[default]
    Home,
}

impl Page {
    /// Resolve a `location.pathname` to a page.
    ///
    /// Only the trailing segment matters. An empty segment (site root or a
    /// directory path) is the home page; a file name that is none of the
    /// three pages resolves to `None` and nothing is mounted.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let segment = path.rsplit('/').next().unwrap_or_default();
        if segment.contains("login.html") {
            Some(Self::Login)
        } else if segment.contains("signup.html") {
            Some(Self::Signup)
        } else if segment.is_empty() || segment.contains("index.html") {
            Some(Self::Home)
        } else {
            None
        }
    }

    /// Relative URL used when navigating to this page.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Login => "login.html",
            Self::Signup => "signup.html",
            Self::Home => "index.html",
        }
    }

    /// Document title for this page.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::Home => "Home",
        }
    }
}
