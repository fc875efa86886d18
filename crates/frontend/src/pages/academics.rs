//! Academics page: programmes and subject areas.

use crate::shared::icons::icon;
use leptos::prelude::*;

struct Program {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

static PROGRAMS: [Program; 3] = [
    Program {
        icon: "globe",
        title: "International Baccalaureate",
        description: "Comprehensive IB programme preparing students for global universities",
        features: [
            "Theory of Knowledge",
            "Extended Essay",
            "CAS Programme",
            "International Recognition",
        ],
    },
    Program {
        icon: "book-open",
        title: "Cambridge Curriculum",
        description: "World-class Cambridge International Education programme",
        features: [
            "IGCSE Programme",
            "A-Level Studies",
            "Global Recognition",
            "University Preparation",
        ],
    },
    Program {
        icon: "microscope",
        title: "STEM Excellence",
        description: "Science, Technology, Engineering, and Mathematics focus",
        features: ["Research Projects", "Lab Facilities", "Innovation Hub", "Robotics Club"],
    },
];

static SUBJECTS: [(&str, &str, &str); 6] = [
    ("calculator", "Mathematics", "Advanced mathematical concepts and applications"),
    ("microscope", "Sciences", "Physics, Chemistry, Biology with practical focus"),
    ("globe", "Languages", "English, Urdu, Arabic, and optional third languages"),
    ("book-open", "Humanities", "History, Geography, Islamic Studies, Social Sciences"),
    ("palette", "Arts", "Visual Arts, Drama, Creative Writing"),
    ("music", "Music", "Instrumental and vocal music programmes"),
];

#[component]
pub fn AcademicsPage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="page-hero">
                <div class="page-hero__badge">{icon("book-open")}</div>
                <h1 class="page-hero__title">"Academic Excellence"</h1>
                <p class="page-hero__lead">
                    "Discover our world-class curriculum designed to nurture critical thinking, \
                     creativity, and global citizenship."
                </p>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Our Academic Programs"</h2>
                    <p class="section__lead">
                        "Choose from our internationally recognized programmes that prepare \
                         students for success in higher education and beyond."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {PROGRAMS.iter().map(|program| view! {
                        <div class="card card--centered">
                            <div class="card__icon">{icon(program.icon)}</div>
                            <h3 class="card__title">{program.title}</h3>
                            <p class="card__text">{program.description}</p>
                            <ul class="card__list">
                                {program.features.iter().map(|feature| view! {
                                    <li>{*feature}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Subject Areas"</h2>
                    <p class="section__lead">
                        "A broad and balanced curriculum across every discipline."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {SUBJECTS.iter().map(|(icon_name, name, description)| view! {
                        <div class="card">
                            <div class="card__icon">{icon(icon_name)}</div>
                            <h3 class="card__title">{*name}</h3>
                            <p class="card__text">{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
