use contracts::navigation::Page;
use contracts::session::SessionState;
use leptos::prelude::*;

/// Application-wide view state: the page being shown and the mock portal
/// session. Provided once from `App` and reached through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
    pub session: RwSignal<SessionState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::Home),
            session: RwSignal::new(SessionState::new()),
        }
    }

    /// Navigation contract: any string is accepted, unknown identifiers
    /// land on the home page. The switch is synchronous and unconditional.
    pub fn navigate(&self, target: &str) {
        let page = Page::parse_or_home(target);
        log::debug!("navigate: '{}' -> '{}'", target, page.slug());
        self.current_page.set(page);
    }

    pub fn go_to(&self, page: Page) {
        self.current_page.set(page);
    }

    pub fn sign_in(&self, student_id: &str) {
        log::info!("portal session opened for {}", student_id);
        self.session.update(|session| session.sign_in(student_id));
    }

    pub fn sign_out(&self) {
        log::info!("portal session closed");
        self.session.update(|session| session.sign_out());
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(|session| session.signed_in)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to reach the global context from any component under `App`.
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
