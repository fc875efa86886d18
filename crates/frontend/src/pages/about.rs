//! About page: mission and vision, differentiators, core values, and the
//! school's history timeline.

use crate::shared::icons::icon;
use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: [&'static str; 3],
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: "globe",
        title: "Global Recognition",
        description: "Internationally accredited curriculum preparing students for worldwide opportunities.",
        details: [
            "Cambridge International Examinations",
            "Globally recognized qualifications",
            "University partnerships worldwide",
        ],
    },
    Feature {
        icon: "award",
        title: "Awards & Excellence",
        description: "Recognized for outstanding academic achievements and educational innovation.",
        details: [
            "Educational Excellence Awards",
            "Student Achievement Recognition",
            "Faculty Development Programs",
        ],
    },
    Feature {
        icon: "building",
        title: "Modern Facilities",
        description: "State-of-the-art infrastructure designed to enhance the learning experience.",
        details: [
            "Smart classrooms",
            "Science & Technology labs",
            "Sports & recreation facilities",
        ],
    },
];

static VALUES: [(&str, &str, &str); 3] = [
    ("target", "Excellence", "Striving for the highest standards in education and character development."),
    ("users", "Community", "Building strong relationships between students, families, and educators."),
    ("book-open", "Innovation", "Embracing modern teaching methods and educational technology."),
];

static TIMELINE: [(&str, &str, &str); 6] = [
    ("1998", "Foundation", "PISES was established with a vision to provide world-class education."),
    ("2005", "Cambridge Affiliation", "Became an official Cambridge International School."),
    ("2010", "Campus Expansion", "Opened our state-of-the-art secondary campus."),
    ("2015", "Technology Integration", "Launched our comprehensive digital learning program."),
    ("2020", "Online Learning Excellence", "Successfully transitioned to hybrid learning model."),
    ("2023", "Innovation Hub", "Opened our new STEM and Innovation Center."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="page-hero">
                <h1 class="page-hero__title">"About PISES"</h1>
                <p class="page-hero__lead">
                    "Pakistan International School (English Section) - Where Excellence Meets Innovation"
                </p>
            </section>

            <section class="section">
                <div class="card-grid card-grid--two">
                    <div class="card">
                        <h3 class="card__title">"Our Mission"</h3>
                        <p class="card__text">
                            "To provide world-class education that nurtures critical thinking, \
                             creativity, and character development. We are committed to preparing \
                             our students to become global citizens who contribute positively to \
                             society."
                        </p>
                    </div>
                    <div class="card">
                        <h3 class="card__title">"Our Vision"</h3>
                        <p class="card__text">
                            "To be the leading international school in Pakistan, recognized for \
                             academic excellence, innovative teaching, and developing students who \
                             are prepared to meet the challenges of the 21st century."
                        </p>
                    </div>
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"What Sets Us Apart"</h2>
                    <p class="section__lead">
                        "Discover the features that make PISES a leader in international education."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="card">
                            <div class="card__icon">{icon(feature.icon)}</div>
                            <h3 class="card__title">{feature.title}</h3>
                            <p class="card__text">{feature.description}</p>
                            <ul class="card__list">
                                {feature.details.iter().map(|detail| view! {
                                    <li>{*detail}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Our Core Values"</h2>
                    <p class="section__lead">"The principles that guide everything we do at PISES."</p>
                </div>
                <div class="card-grid card-grid--three">
                    {VALUES.iter().map(|(icon_name, title, description)| view! {
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
                    <h2 class="section__title">"Our Journey"</h2>
                    <p class="section__lead">"A timeline of milestones and achievements."</p>
                </div>
                <div class="timeline">
                    {TIMELINE.iter().map(|(year, title, description)| view! {
                        <div class="timeline__item">
                            <div class="timeline__year">{*year}</div>
                            <div class="timeline__body">
                                <h3 class="timeline__title">{*title}</h3>
                                <p class="timeline__text">{*description}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
