//! Page identifiers and the in-memory navigation state.
//!
//! The site keeps a single "current page" value; there is no history stack
//! and no URL synchronization. Unknown identifiers fall back to the home
//! page, matching the site's long-standing behavior; `navigate_strict` is
//! the tightened variant for callers that want unknown targets reported.

use serde::{Deserialize, Serialize};

/// All pages the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    About,
    Admissions,
    Academics,
    StudentLife,
    ParentPortal,
    CreditSystem,
    Contact,
}

impl Page {
    /// Every page, in header-navigation order.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::Admissions,
        Page::Academics,
        Page::StudentLife,
        Page::ParentPortal,
        Page::CreditSystem,
        Page::Contact,
    ];

    /// The identifier used by navigation controls.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Admissions => "admissions",
            Page::Academics => "academics",
            Page::StudentLife => "student-life",
            Page::ParentPortal => "parent-portal",
            Page::CreditSystem => "credit-system",
            Page::Contact => "contact",
        }
    }

    /// Label shown in navigation menus.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Admissions => "Admissions",
            Page::Academics => "Academics",
            Page::StudentLife => "Student Life",
            Page::ParentPortal => "Parent Portal",
            Page::CreditSystem => "Credit System",
            Page::Contact => "Contact",
        }
    }

    /// Strict parse: `None` for identifiers no page owns.
    pub fn parse(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }

    /// Lenient parse: unknown identifiers coerce to [`Page::Home`].
    pub fn parse_or_home(slug: &str) -> Page {
        Page::parse(slug).unwrap_or_default()
    }
}

/// Raised by [`NavigationState::navigate_strict`] for unknown targets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {0:?}")]
pub struct UnknownPage(pub String);

/// The single navigation value the application holds.
///
/// Navigation is synchronous and unconditional; there is no guard against
/// leaving a page with unsaved form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current: Page,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any string; unknown identifiers land on [`Page::Home`].
    pub fn navigate(&mut self, target: &str) {
        self.current = Page::parse_or_home(target);
    }

    /// Rejects unknown identifiers instead of falling back.
    pub fn navigate_strict(&mut self, target: &str) -> Result<(), UnknownPage> {
        match Page::parse(target) {
            Some(page) => {
                self.current = page;
                Ok(())
            }
            None => Err(UnknownPage(target.to_string())),
        }
    }

    pub fn go_to(&mut self, page: Page) {
        self.current = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::parse(page.slug()), Some(page));
        }
    }

    #[test]
    fn navigate_to_known_page() {
        let mut nav = NavigationState::new();
        nav.navigate("admissions");
        assert_eq!(nav.current, Page::Admissions);
    }

    #[test]
    fn unknown_target_falls_back_to_home() {
        let mut nav = NavigationState::new();
        nav.navigate("admissions");
        nav.navigate("not-a-real-page");
        assert_eq!(nav.current, Page::Home);
    }

    #[test]
    fn strict_navigation_reports_unknown_targets() {
        let mut nav = NavigationState::new();
        assert_eq!(
            nav.navigate_strict("not-a-real-page"),
            Err(UnknownPage("not-a-real-page".to_string()))
        );
        // The current page is untouched on failure.
        assert_eq!(nav.current, Page::Home);
        assert!(nav.navigate_strict("student-life").is_ok());
        assert_eq!(nav.current, Page::StudentLife);
    }

    #[test]
    fn default_page_is_home() {
        assert_eq!(NavigationState::new().current, Page::Home);
    }
}
