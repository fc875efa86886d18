//! Student-life page: activity groups and flagship school events.

use crate::shared::icons::icon;
use leptos::prelude::*;

struct Activity {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    items: &'static [&'static str],
}

static ACTIVITIES: [Activity; 6] = [
    Activity {
        icon: "trophy",
        title: "Sports & Athletics",
        description: "Competitive sports teams and recreational activities for all skill levels",
        items: &["Football", "Basketball", "Cricket", "Swimming", "Tennis", "Athletics"],
    },
    Activity {
        icon: "music",
        title: "Performing Arts",
        description: "Express creativity through music, drama, and performance",
        items: &["School Orchestra", "Drama Club", "Choir", "Dance Group", "Music Production"],
    },
    Activity {
        icon: "palette",
        title: "Visual Arts",
        description: "Explore artistic expression through various mediums",
        items: &["Art Club", "Photography", "Digital Design", "Sculpture", "Ceramics"],
    },
    Activity {
        icon: "zap",
        title: "STEM Clubs",
        description: "Innovation and technology-focused activities",
        items: &["Robotics Club", "Coding Club", "Science Olympiad", "Math Club", "Engineering"],
    },
    Activity {
        icon: "globe",
        title: "Cultural Activities",
        description: "Celebrate diversity and global awareness",
        items: &["Model UN", "Cultural Festival", "Language Clubs", "International Day"],
    },
    Activity {
        icon: "heart",
        title: "Community Service",
        description: "Make a positive impact in the community",
        items: &["Volunteer Programs", "Environmental Club", "Charity Drives", "Mentoring"],
    },
];

static EVENTS: [(&str, &str); 3] = [
    ("Annual Sports Day", "Competitive sports events bringing the entire school together"),
    ("Cultural Festival", "Celebrating our diverse heritage through art, music, and food"),
    ("Science Fair", "Student innovations and research projects on display"),
];

#[component]
pub fn StudentLifePage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="page-hero">
                <div class="page-hero__badge">{icon("users")}</div>
                <h1 class="page-hero__title">"Student Life"</h1>
                <p class="page-hero__lead">
                    "Beyond academics, we foster creativity, leadership, and lifelong friendships \
                     through a rich variety of activities."
                </p>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Activities & Clubs"</h2>
                    <p class="section__lead">
                        "Something for every interest, from the playing field to the maker lab."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {ACTIVITIES.iter().map(|activity| view! {
                        <div class="card">
                            <div class="card__icon">{icon(activity.icon)}</div>
                            <h3 class="card__title">{activity.title}</h3>
                            <p class="card__text">{activity.description}</p>
                            <ul class="card__list">
                                {activity.items.iter().map(|item| view! {
                                    <li>{*item}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"School Events"</h2>
                    <p class="section__lead">"Traditions the whole community looks forward to."</p>
                </div>
                <div class="card-grid card-grid--three">
                    {EVENTS.iter().map(|(title, description)| view! {
                        <div class="card card--centered">
                            <h3 class="card__title">{*title}</h3>
                            <p class="card__text">{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
