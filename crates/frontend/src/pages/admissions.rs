//! Admissions page: application timeline, document checklist, scholarship
//! tiers, and the gated application form.

use crate::forms::AdmissionForm;
use crate::shared::icons::icon;
use contracts::data::admissions::{admission_steps, requirements, scholarships};
use contracts::forms::AdmissionApplication;
use leptos::prelude::*;

#[component]
pub fn AdmissionsPage() -> impl IntoView {
    let (show_form, set_show_form) = signal(false);

    // Submission side effect is injected here; transmission to an
    // admissions backend is out of scope for the site itself.
    let on_valid_submit = Callback::new(|application: AdmissionApplication| {
        if let Ok(json) = serde_json::to_string(&application) {
            log::info!("admission application submitted: {}", json);
        }
    });

    view! {
        {move || if show_form.get() {
            view! { <AdmissionForm on_valid_submit=on_valid_submit /> }.into_any()
        } else {
            view! { <AdmissionsOverview on_start=Callback::new(move |_| set_show_form.set(true)) /> }.into_any()
        }}
    }
}

#[component]
fn AdmissionsOverview(#[prop(into)] on_start: Callback<()>) -> impl IntoView {
    view! {
        <div class="page">
            <section class="page-hero">
                <div class="page-hero__badge">{icon("graduation-cap")}</div>
                <h1 class="page-hero__title">"Join PISES"</h1>
                <p class="page-hero__lead">
                    "Begin your journey of excellence with our revolutionary admission experience"
                </p>
                <div class="page-hero__actions">
                    <button class="button button--primary" on:click=move |_| on_start.run(())>
                        {icon("zap")}
                        "Start Application"
                    </button>
                    <button class="button button--outline">
                        {icon("globe")}
                        "Virtual Tour"
                    </button>
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Admission Process"</h2>
                    <p class="section__lead">"Four steps from application to decision."</p>
                </div>
                <div class="card-grid card-grid--four">
                    {admission_steps().iter().map(|step| view! {
                        <div class="card card--centered">
                            <div class="card__icon">{icon(step.icon)}</div>
                            <div class="card__tag">{step.timeline}</div>
                            <h3 class="card__title">{step.title}</h3>
                            <p class="card__text">{step.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Required Documents"</h2>
                    <p class="section__lead">"Have these ready before you apply."</p>
                </div>
                <ul class="checklist">
                    {requirements().iter().map(|requirement| view! {
                        <li class="checklist__item" class:done=requirement.completed>
                            {icon(if requirement.completed { "check-circle" } else { "file-text" })}
                            <span>{requirement.text}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Scholarships"</h2>
                    <p class="section__lead">
                        "Merit, need, and talent based support covering up to half of tuition."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {scholarships().iter().map(|scholarship| view! {
                        <div class="card card--centered">
                            <div class="card__icon">{icon(scholarship.icon)}</div>
                            <div class="card__figure">{format!("{}%", scholarship.coverage_percent)}</div>
                            <h3 class="card__title">{scholarship.title}</h3>
                            <p class="card__text">{scholarship.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
