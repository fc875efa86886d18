//! Credit-system page: earning categories, benefits, and the recognition
//! milestone ladder.

use crate::shared::icons::icon;
use contracts::data::credits::{credit_benefits, credit_categories, credit_milestones};
use leptos::prelude::*;

#[component]
pub fn CreditSystemPage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="page-hero">
                <div class="page-hero__badge">{icon("star")}</div>
                <h1 class="page-hero__title">"Credit System"</h1>
                <p class="page-hero__lead">
                    "Recognizing achievement across academics, service, leadership, and talent."
                </p>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"How to Earn Credits"</h2>
                    <p class="section__lead">"Four categories, each with its own point range."</p>
                </div>
                <div class="card-grid card-grid--four">
                    {credit_categories().iter().map(|category| view! {
                        <div class="card">
                            <div class="card__icon">{icon(category.icon)}</div>
                            <h3 class="card__title">{category.title}</h3>
                            <div class="card__tag">{category.points}</div>
                            <p class="card__text">{category.description}</p>
                            <ul class="card__list">
                                {category.activities.iter().map(|activity| view! {
                                    <li>{*activity}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Recognition Levels"</h2>
                    <p class="section__lead">"Milestones unlock as credits accumulate."</p>
                </div>
                <div class="milestone-ladder">
                    {credit_milestones().iter().map(|milestone| view! {
                        <div class="milestone-ladder__step">
                            <div class="milestone-ladder__credits">
                                {format!("{} credits", milestone.credits)}
                            </div>
                            <h3 class="milestone-ladder__title">{milestone.title}</h3>
                            <p class="milestone-ladder__text">{milestone.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Program Benefits"</h2>
                    <p class="section__lead">"Credits follow students beyond the classroom."</p>
                </div>
                <div class="card-grid card-grid--four">
                    {credit_benefits().iter().map(|benefit| view! {
                        <div class="card card--centered">
                            <div class="card__icon">{icon(benefit.icon)}</div>
                            <h3 class="card__title">{benefit.title}</h3>
                            <p class="card__text">{benefit.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
