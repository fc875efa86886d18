//! Site footer: brand block, quick links, services, contact details.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("About", "about"),
    ("Admissions", "admissions"),
    ("Academics", "academics"),
    ("Student Life", "student-life"),
];

const SERVICES: [(&str, &str); 4] = [
    ("Parent Portal", "parent-portal"),
    ("Credit System", "credit-system"),
    ("Contact", "contact"),
    ("Support", "contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();

    let link_list = move |links: [(&'static str, &'static str); 4]| {
        links
            .into_iter()
            .map(|(label, target)| {
                view! {
                    <li>
                        <button
                            class="footer__link"
                            on:click=move |_| ctx.navigate(target)
                        >
                            {label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__grid">
                    <div class="footer__brand">
                        <div class="footer__brand-row">
                            <div class="footer__logo">{icon("graduation-cap")}</div>
                            <div>
                                <h3 class="footer__title">"PISES"</h3>
                                <p class="footer__subtitle">"Pakistan International School"</p>
                            </div>
                        </div>
                        <p class="footer__blurb">
                            "Empowering minds and shaping futures through excellence in education. \
                             Join our community of learners where academic achievement meets \
                             character development."
                        </p>
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__heading">"Quick Links"</h4>
                        <ul class="footer__links">{link_list(QUICK_LINKS)}</ul>
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__heading">"Services"</h4>
                        <ul class="footer__links">{link_list(SERVICES)}</ul>

                        <div class="footer__contact">
                            <div class="footer__contact-row">
                                {icon("mail")}
                                <span>"info@pises.edu.pk"</span>
                            </div>
                            <div class="footer__contact-row">
                                {icon("phone")}
                                <span>"+92 300 1234567"</span>
                            </div>
                            <div class="footer__contact-row">
                                {icon("map-pin")}
                                <span>"Islamabad, Pakistan"</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>"© 2024 PISES. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
