//! Contact page: reach-us cards, department directory, and the inquiry form.

use crate::forms::ContactForm;
use crate::shared::icons::icon;
use contracts::forms::ContactInquiry;
use leptos::prelude::*;

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    details: &'static [&'static str],
}

static CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: "map-pin",
        title: "Address",
        details: &[
            "Pakistan International School of Excellence & Sciences",
            "Sector G-10/4, Islamabad",
            "Pakistan - 44000",
        ],
    },
    ContactInfo {
        icon: "phone",
        title: "Phone Numbers",
        details: &["+92 51 2345678", "+92 300 1234567", "+92 321 9876543"],
    },
    ContactInfo {
        icon: "mail",
        title: "Email Addresses",
        details: &["info@pises.edu.pk", "admissions@pises.edu.pk", "support@pises.edu.pk"],
    },
    ContactInfo {
        icon: "clock",
        title: "Office Hours",
        details: &[
            "Monday - Friday: 8:00 AM - 4:00 PM",
            "Saturday: 9:00 AM - 1:00 PM",
            "Sunday: Closed",
        ],
    },
];

struct Department {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    contact: &'static str,
    phone: &'static str,
}

static DEPARTMENTS: [Department; 4] = [
    Department {
        icon: "user",
        title: "Admissions Office",
        description: "Information about enrollment, applications, and school tours",
        contact: "admissions@pises.edu.pk",
        phone: "+92 51 2345679",
    },
    Department {
        icon: "message-circle",
        title: "Academic Affairs",
        description: "Questions about curriculum, academic programs, and student progress",
        contact: "academics@pises.edu.pk",
        phone: "+92 51 2345680",
    },
    Department {
        icon: "calendar",
        title: "Student Services",
        description: "Support for current students and extracurricular activities",
        contact: "students@pises.edu.pk",
        phone: "+92 51 2345681",
    },
    Department {
        icon: "send",
        title: "General Inquiries",
        description: "General questions and information requests",
        contact: "info@pises.edu.pk",
        phone: "+92 51 2345678",
    },
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let on_valid_submit = Callback::new(|inquiry: ContactInquiry| {
        if let Ok(json) = serde_json::to_string(&inquiry) {
            log::info!("contact inquiry submitted: {}", json);
        }
    });

    view! {
        <div class="page">
            <section class="page-hero">
                <div class="page-hero__badge">{icon("message-circle")}</div>
                <h1 class="page-hero__title">"Contact Us"</h1>
                <p class="page-hero__lead">
                    "We're here to help. Reach out to us for any questions, information, or \
                     support you need."
                </p>
            </section>

            <section class="section">
                <div class="card-grid card-grid--four">
                    {CONTACT_INFO.iter().map(|info| view! {
                        <div class="card card--centered">
                            <div class="card__icon">{icon(info.icon)}</div>
                            <h3 class="card__title">{info.title}</h3>
                            <ul class="card__list card__list--plain">
                                {info.details.iter().map(|detail| view! {
                                    <li>{*detail}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section section--muted">
                <div class="section__header">
                    <h2 class="section__title">"Departments"</h2>
                    <p class="section__lead">"Reach the right team directly."</p>
                </div>
                <div class="card-grid card-grid--four">
                    {DEPARTMENTS.iter().map(|department| view! {
                        <div class="card">
                            <div class="card__icon">{icon(department.icon)}</div>
                            <h3 class="card__title">{department.title}</h3>
                            <p class="card__text">{department.description}</p>
                            <p class="card__meta">{department.contact}</p>
                            <p class="card__meta">{department.phone}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Send us a Message"</h2>
                    <p class="section__lead">
                        "Have a specific question? Fill out the form below and we'll get back to \
                         you soon."
                    </p>
                </div>
                <div class="form-card form-card--wide">
                    <ContactForm on_valid_submit=on_valid_submit />
                </div>
            </section>
        </div>
    }
}
