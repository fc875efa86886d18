//! The contact-page inquiry form.

use super::field_error;
use super::fields::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use contracts::forms::contact::SUBJECT_OPTIONS;
use contracts::forms::ContactInquiry;
use leptos::prelude::*;

#[component]
pub fn ContactForm(#[prop(into)] on_valid_submit: Callback<ContactInquiry>) -> impl IntoView {
    let form = RwSignal::new(ContactInquiry::default());
    let errors = Memo::new(move |_| form.with(|draft| draft.field_errors()));
    let (show_errors, set_show_errors) = signal(false);
    let (sent, set_sent) = signal(false);

    let err = move |name: &'static str| field_error(errors, show_errors, name);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_show_errors.set(true);
        match form.get().validate() {
            Ok(inquiry) => {
                on_valid_submit.run(inquiry);
                set_sent.set(true);
                form.set(ContactInquiry::default());
                set_show_errors.set(false);
            }
            Err(field_errors) => {
                log::warn!("inquiry has {} invalid fields", field_errors.len());
            }
        }
    };

    let subject_options: Vec<(&'static str, &'static str)> =
        SUBJECT_OPTIONS.into_iter().map(|subject| (subject, subject)).collect();

    view! {
        <form class="form-card__body" on:submit=on_submit>
            <Show when=move || sent.get()>
                <div class="form-card__success">
                    "Thank you for reaching out. We'll get back to you soon."
                </div>
            </Show>

            <div class="form-grid form-grid--two">
                <TextField
                    label="Full Name"
                    placeholder="Enter your full name"
                    value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
                    error=err("fullName")
                />
                <TextField
                    label="Email Address"
                    input_type="email"
                    placeholder="Enter your email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    error=err("email")
                />
            </div>

            <div class="form-grid form-grid--two">
                <TextField
                    label="Phone Number"
                    input_type="tel"
                    placeholder="Enter your phone number"
                    value=Signal::derive(move || form.with(|f| f.phone.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                    error=err("phone")
                />
                <SelectField
                    label="Subject"
                    placeholder="Select a subject"
                    options=subject_options
                    value=Signal::derive(move || form.with(|f| f.subject.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.subject = v))
                    error=err("subject")
                />
            </div>

            <TextAreaField
                label="Message"
                placeholder="Enter your message here..."
                value=Signal::derive(move || form.with(|f| f.message.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.message = v))
                error=err("message")
            />

            <div class="form-card__actions">
                <button type="submit" class="button button--primary">
                    {icon("send")}
                    "Send Message"
                </button>
            </div>
        </form>
    }
}
