//! Home page: auto-advancing hero carousel, quick-access cards, and the
//! headline statistics row.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const SLIDE_INTERVAL_MS: u32 = 5_000;

struct Slide {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
}

static SLIDES: [Slide; 3] = [
    Slide {
        title: "Excellence in Education",
        subtitle: "Empowering minds, shaping futures at PISES",
        description: "Join our community of learners where academic excellence meets character development.",
    },
    Slide {
        title: "Global Perspectives",
        subtitle: "Preparing students for tomorrow's world",
        description: "Our international curriculum prepares students for success in a globalized world.",
    },
    Slide {
        title: "Innovation & Technology",
        subtitle: "Modern learning for the digital age",
        description: "State-of-the-art facilities and cutting-edge technology enhance every learning experience.",
    },
];

struct AccessCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    target: &'static str,
    features: [&'static str; 3],
}

static ACCESS_CARDS: [AccessCard; 3] = [
    AccessCard {
        icon: "graduation-cap",
        title: "Admissions",
        description: "Join the future of education with our streamlined admission process and scholarship opportunities.",
        target: "admissions",
        features: ["Smart Application", "AI Matching", "Virtual Tours"],
    },
    AccessCard {
        icon: "book-open",
        title: "Academics",
        description: "Experience cutting-edge curriculum powered by AI and designed for the digital age.",
        target: "academics",
        features: ["AI-Powered Learning", "Global Curriculum", "Expert Mentors"],
    },
    AccessCard {
        icon: "users",
        title: "Student Life",
        description: "Immerse yourself in a vibrant community with endless opportunities for growth and connection.",
        target: "student-life",
        features: ["Digital Clubs", "Virtual Events", "Global Network"],
    },
];

static STATS: [(&str, &str, &str); 4] = [
    ("award", "25+", "Years Excellence"),
    ("globe", "95%", "Success Rate"),
    ("users", "1000+", "Students"),
    ("cpu", "50+", "Tech Programs"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <HeroSection />
            <QuickAccessCards />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let ctx = use_app_context();
    let current_slide = RwSignal::new(0usize);

    // Auto-advance stops with the component.
    let cancelled = StoredValue::new(false);
    on_cleanup(move || cancelled.set_value(true));

    spawn_local(async move {
        loop {
            TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            if cancelled.try_get_value().unwrap_or(true) {
                break;
            }
            if current_slide
                .try_update(|slide| *slide = (*slide + 1) % SLIDES.len())
                .is_none()
            {
                break;
            }
        }
    });

    let next_slide = move |_| current_slide.update(|slide| *slide = (*slide + 1) % SLIDES.len());
    let prev_slide = move |_| {
        current_slide.update(|slide| *slide = (*slide + SLIDES.len() - 1) % SLIDES.len())
    };

    view! {
        <section class="hero">
            {SLIDES.iter().enumerate().map(|(index, slide)| {
                let is_current = move || current_slide.get() == index;
                view! {
                    <div class="hero__slide" class:active=is_current>
                        <div class="hero__content">
                            <h1 class="hero__title">{slide.title}</h1>
                            <h2 class="hero__subtitle">{slide.subtitle}</h2>
                            <p class="hero__description">{slide.description}</p>
                            <div class="hero__actions">
                                <button
                                    class="button button--primary"
                                    on:click=move |_| ctx.navigate("admissions")
                                >
                                    "Apply Now"
                                    {icon("arrow-right")}
                                </button>
                                <button
                                    class="button button--outline"
                                    on:click=move |_| ctx.navigate("parent-portal")
                                >
                                    "Parent Portal"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}

            <button class="hero__arrow hero__arrow--left" on:click=prev_slide>
                {icon("chevron-left")}
            </button>
            <button class="hero__arrow hero__arrow--right" on:click=next_slide>
                {icon("chevron-right")}
            </button>

            <div class="hero__indicators">
                {(0..SLIDES.len()).map(|index| {
                    let is_current = move || current_slide.get() == index;
                    view! {
                        <button
                            class="hero__indicator"
                            class:active=is_current
                            on:click=move |_| current_slide.set(index)
                        ></button>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn QuickAccessCards() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="quick-access">
            <div class="section__header">
                <h2 class="section__title">"Excellence Redefined"</h2>
                <p class="section__lead">"Your Digital Gateway"</p>
            </div>

            <div class="card-grid card-grid--three">
                {ACCESS_CARDS.iter().map(|card| {
                    let target = card.target;
                    view! {
                        <div class="card card--clickable" on:click=move |_| ctx.navigate(target)>
                            <div class="card__icon">{icon(card.icon)}</div>
                            <h3 class="card__title">{card.title}</h3>
                            <p class="card__text">{card.description}</p>
                            <ul class="card__list">
                                {card.features.iter().map(|feature| view! {
                                    <li>{*feature}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="stat-row">
                {STATS.iter().map(|(icon_name, number, label)| view! {
                    <div class="stat-row__item">
                        <div class="stat-row__icon">{icon(icon_name)}</div>
                        <div class="stat-row__number">{*number}</div>
                        <div class="stat-row__label">{*label}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
