//! The page-rendering switch: maps the current [`Page`] onto its component.

use crate::layout::global_context::use_app_context;
use crate::pages::about::AboutPage;
use crate::pages::academics::AcademicsPage;
use crate::pages::admissions::AdmissionsPage;
use crate::pages::contact::ContactPage;
use crate::pages::credit_system::CreditSystemPage;
use crate::pages::home::HomePage;
use crate::pages::parent_portal::ParentPortalPage;
use crate::pages::student_life::StudentLifePage;
use contracts::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || match ctx.current_page.get() {
            Page::Home => view! { <HomePage /> }.into_any(),
            Page::About => view! { <AboutPage /> }.into_any(),
            Page::Admissions => view! { <AdmissionsPage /> }.into_any(),
            Page::Academics => view! { <AcademicsPage /> }.into_any(),
            Page::StudentLife => view! { <StudentLifePage /> }.into_any(),
            Page::ParentPortal => view! { <ParentPortalPage /> }.into_any(),
            Page::CreditSystem => view! { <CreditSystemPage /> }.into_any(),
            Page::Contact => view! { <ContactPage /> }.into_any(),
        }}
    }
}
