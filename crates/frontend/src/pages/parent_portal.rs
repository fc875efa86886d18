//! Parent-portal page: marketing sections while signed out, the access
//! form on demand, and the dashboard once the session is open.

use crate::forms::ParentPortalForm;
use crate::layout::global_context::use_app_context;
use crate::pages::parent_dashboard::ParentDashboard;
use crate::shared::icons::icon;
use contracts::forms::ParentRegistration;
use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    benefits: [&'static str; 4],
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: "bar-chart",
        title: "Academic Progress",
        description: "Track your child's grades, assignments, and academic performance in real-time",
        benefits: [
            "Real-time grade updates",
            "Assignment tracking",
            "Progress reports",
            "Performance analytics",
        ],
    },
    Feature {
        icon: "calendar",
        title: "School Calendar",
        description: "Stay updated with school events, holidays, and important dates",
        benefits: [
            "Event notifications",
            "Assignment due dates",
            "Parent-teacher meetings",
            "School holidays",
        ],
    },
    Feature {
        icon: "message-circle",
        title: "Communication Hub",
        description: "Direct communication with teachers and school administration",
        benefits: [
            "Teacher messaging",
            "School announcements",
            "Emergency alerts",
            "Meeting requests",
        ],
    },
    Feature {
        icon: "bell",
        title: "Instant Notifications",
        description: "Receive important updates about your child's school activities",
        benefits: [
            "Attendance alerts",
            "Grade notifications",
            "Event reminders",
            "Emergency notices",
        ],
    },
];

static PORTAL_SECTIONS: [(&str, &str, &str); 4] = [
    (
        "user",
        "Student Profile",
        "View and update student information, contact details, and emergency contacts",
    ),
    ("book-open", "Academic Records", "Access transcripts, report cards, and academic history"),
    ("calendar", "Attendance Tracking", "Monitor daily attendance and absence records"),
    ("shield", "Fee Management", "View fee structure, payment history, and make online payments"),
];

static GETTING_STARTED: [(&str, &str); 3] = [
    (
        "Register Account",
        "Use your student ID and provided registration code to create your account.",
    ),
    (
        "Verify Identity",
        "Complete identity verification through email and phone number confirmation.",
    ),
    (
        "Access Portal",
        "Log in to your portal and explore all the available features and information.",
    ),
];

#[component]
pub fn ParentPortalPage() -> impl IntoView {
    let ctx = use_app_context();
    let (show_form, set_show_form) = signal(false);

    let on_sign_in = Callback::new(move |student_id: String| {
        ctx.sign_in(&student_id);
        set_show_form.set(false);
    });

    // Registration is accepted and logged; account provisioning happens
    // outside this site.
    let on_register = Callback::new(|registration: ParentRegistration| {
        if let Ok(json) = serde_json::to_string(&registration) {
            log::info!("parent portal registration: {}", json);
        }
    });

    view! {
        {move || if ctx.session.get().signed_in {
            view! { <ParentDashboard /> }.into_any()
        } else if show_form.get() {
            view! { <ParentPortalForm on_sign_in=on_sign_in on_register=on_register /> }.into_any()
        } else {
            view! { <PortalOverview on_access=Callback::new(move |_| set_show_form.set(true)) /> }.into_any()
        }}
    }
}

#[component]
fn PortalOverview(#[prop(into)] on_access: Callback<()>) -> impl IntoView {
    view! {
        <div class="page">
            <section class="page-hero">
                <div class="page-hero__badge">{icon("user")}</div>
                <h1 class="page-hero__title">"Parent Portal"</h1>
                <p class="page-hero__lead">
                    "Stay connected with your child's educational journey through our \
                     comprehensive parent portal."
                </p>
                <div class="page-hero__actions">
                    <button class="button button--primary" on:click=move |_| on_access.run(())>
                        "Access Portal"
                    </button>
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Portal Features"</h2>
                    <p class="section__lead">
                        "Our parent portal provides comprehensive access to your child's academic \
                         journey and school activities."
                    </p>
                </div>
                <div class="card-grid card-grid--two">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="card">
                            <div class="card__icon">{icon(feature.icon)}</div>
                            <h3 class="card__title">{feature.title}</h3>
                            <p class="card__text">{feature.description}</p>
                            <ul class="card__list">
                                {feature.benefits.iter().map(|benefit| view! {
                                    <li>{*benefit}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Portal Sections"</h2>
                    <p class="section__lead">
                        "Navigate through different sections to access specific information about \
                         your child's school experience."
                    </p>
                </div>
                <div class="card-grid card-grid--four">
                    {PORTAL_SECTIONS.iter().map(|(icon_name, title, description)| view! {
                        <div class="card card--centered">
                            <div class="card__icon">{icon(icon_name)}</div>
                            <h3 class="card__title">{*title}</h3>
                            <p class="card__text">{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <div class="page-hero__badge">{icon("settings")}</div>
                    <h2 class="section__title">"Getting Started"</h2>
                    <p class="section__lead">
                        "Setting up your parent portal account is simple and secure. Follow these \
                         easy steps to get started."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {GETTING_STARTED.iter().enumerate().map(|(index, (title, description))| view! {
                        <div class="card card--centered">
                            <div class="card__figure">{(index + 1).to_string()}</div>
                            <h3 class="card__title">{*title}</h3>
                            <p class="card__text">{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
                <div class="section__actions">
                    <button class="button button--primary" on:click=move |_| on_access.run(())>
                        "Create Account"
                    </button>
                    <button class="button button--outline" on:click=move |_| on_access.run(())>
                        "Login to Portal"
                    </button>
                </div>
            </section>
        </div>
    }
}
