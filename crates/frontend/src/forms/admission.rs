//! The admission application form.

use super::field_error;
use super::fields::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use contracts::forms::admission::{GENDER_OPTIONS, GRADE_OPTIONS};
use contracts::forms::AdmissionApplication;
use leptos::prelude::*;

type Get = fn(&AdmissionApplication) -> &String;
type Set = fn(&mut AdmissionApplication, String);

#[component]
pub fn AdmissionForm(#[prop(into)] on_valid_submit: Callback<AdmissionApplication>) -> impl IntoView {
    let form = RwSignal::new(AdmissionApplication::default());
    let errors = Memo::new(move |_| form.with(|draft| draft.field_errors()));
    let (show_errors, set_show_errors) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let value = move |get: Get| Signal::derive(move || form.with(move |draft| get(draft).clone()));
    let setter = move |set: Set| {
        Callback::new(move |input: String| {
            form.update(|draft| set(draft, input));
            set_submitted.set(false);
        })
    };
    let err = move |name: &'static str| field_error(errors, show_errors, name);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_show_errors.set(true);
        match form.get().validate() {
            Ok(application) => {
                on_valid_submit.run(application);
                set_submitted.set(true);
            }
            Err(field_errors) => {
                log::warn!("admission application has {} invalid fields", field_errors.len());
            }
        }
    };

    view! {
        <div class="form-page">
            <div class="form-card form-card--wide">
                <div class="form-card__header">
                    <div class="form-card__badge">{icon("graduation-cap")}</div>
                    <h2 class="form-card__title">"Admission Application"</h2>
                    <p class="form-card__subtitle">"Join the PISES family - Start your application today"</p>
                </div>

                <Show when=move || submitted.get()>
                    <div class="form-card__success">
                        "Your application has been submitted. Our admissions team will contact you."
                    </div>
                </Show>

                <form class="form-card__body" on:submit=on_submit>
                    <div class="form-section">
                        <h3 class="form-section__title">{icon("user")} "Student Information"</h3>
                        <div class="form-grid form-grid--two">
                            <TextField
                                label="First Name *"
                                placeholder="Enter first name"
                                value=value(|f| &f.first_name)
                                on_input=setter(|f, v| f.first_name = v)
                                error=err("firstName")
                            />
                            <TextField
                                label="Last Name *"
                                placeholder="Enter last name"
                                value=value(|f| &f.last_name)
                                on_input=setter(|f, v| f.last_name = v)
                                error=err("lastName")
                            />
                        </div>
                        <div class="form-grid form-grid--three">
                            <TextField
                                label="Date of Birth *"
                                input_type="date"
                                icon_name="calendar"
                                value=value(|f| &f.date_of_birth)
                                on_input=setter(|f, v| f.date_of_birth = v)
                                error=err("dateOfBirth")
                            />
                            <SelectField
                                label="Gender *"
                                placeholder="Select Gender"
                                options=GENDER_OPTIONS.to_vec()
                                value=value(|f| &f.gender)
                                on_change=setter(|f, v| f.gender = v)
                                error=err("gender")
                            />
                            <TextField
                                label="Nationality *"
                                placeholder="Enter nationality"
                                value=value(|f| &f.nationality)
                                on_input=setter(|f, v| f.nationality = v)
                                error=err("nationality")
                            />
                        </div>
                    </div>

                    <div class="form-section">
                        <h3 class="form-section__title">{icon("mail")} "Contact Information"</h3>
                        <div class="form-grid form-grid--two">
                            <TextField
                                label="Email Address *"
                                input_type="email"
                                icon_name="mail"
                                placeholder="Enter email address"
                                value=value(|f| &f.email)
                                on_input=setter(|f, v| f.email = v)
                                error=err("email")
                            />
                            <TextField
                                label="Phone Number *"
                                input_type="tel"
                                icon_name="phone"
                                placeholder="Enter phone number"
                                value=value(|f| &f.phone)
                                on_input=setter(|f, v| f.phone = v)
                                error=err("phone")
                            />
                        </div>
                        <TextAreaField
                            label="Address *"
                            placeholder="Enter complete address"
                            value=value(|f| &f.address)
                            on_input=setter(|f, v| f.address = v)
                            error=err("address")
                        />
                        <div class="form-grid form-grid--two">
                            <TextField
                                label="City *"
                                placeholder="Enter city"
                                value=value(|f| &f.city)
                                on_input=setter(|f, v| f.city = v)
                                error=err("city")
                            />
                            <TextField
                                label="Country *"
                                placeholder="Enter country"
                                value=value(|f| &f.country)
                                on_input=setter(|f, v| f.country = v)
                                error=err("country")
                            />
                        </div>
                    </div>

                    <div class="form-section">
                        <h3 class="form-section__title">{icon("user")} "Parent/Guardian Information"</h3>
                        <div class="form-grid form-grid--two">
                            <TextField
                                label="Parent/Guardian Name *"
                                placeholder="Enter parent/guardian name"
                                value=value(|f| &f.parent_name)
                                on_input=setter(|f, v| f.parent_name = v)
                                error=err("parentName")
                            />
                            <TextField
                                label="Occupation *"
                                placeholder="Enter occupation"
                                value=value(|f| &f.parent_occupation)
                                on_input=setter(|f, v| f.parent_occupation = v)
                                error=err("parentOccupation")
                            />
                        </div>
                        <div class="form-grid form-grid--two">
                            <TextField
                                label="Parent Email *"
                                input_type="email"
                                icon_name="mail"
                                placeholder="Enter parent email"
                                value=value(|f| &f.parent_email)
                                on_input=setter(|f, v| f.parent_email = v)
                                error=err("parentEmail")
                            />
                            <TextField
                                label="Parent Phone *"
                                input_type="tel"
                                icon_name="phone"
                                placeholder="Enter parent phone"
                                value=value(|f| &f.parent_phone)
                                on_input=setter(|f, v| f.parent_phone = v)
                                error=err("parentPhone")
                            />
                        </div>
                    </div>

                    <div class="form-section">
                        <h3 class="form-section__title">{icon("graduation-cap")} "Academic Information"</h3>
                        <div class="form-grid form-grid--two">
                            <TextField
                                label="Previous School *"
                                placeholder="Enter previous school name"
                                value=value(|f| &f.previous_school)
                                on_input=setter(|f, v| f.previous_school = v)
                                error=err("previousSchool")
                            />
                            <SelectField
                                label="Grade Applying For *"
                                placeholder="Select Grade"
                                options=GRADE_OPTIONS.to_vec()
                                value=value(|f| &f.grade_applying)
                                on_change=setter(|f, v| f.grade_applying = v)
                                error=err("gradeApplying")
                            />
                        </div>
                        <TextField
                            label="Previous GPA/Grades (Optional)"
                            placeholder="Enter previous GPA or grade average"
                            value=value(|f| &f.previous_gpa)
                            on_input=setter(|f, v| f.previous_gpa = v)
                            error=err("previousGPA")
                        />
                    </div>

                    <div class="form-section">
                        <h3 class="form-section__title">{icon("file-text")} "Additional Information"</h3>
                        <TextAreaField
                            label="Extracurricular Activities (Optional)"
                            placeholder="List any sports, clubs, hobbies, or activities you participate in"
                            value=value(|f| &f.extracurricular)
                            on_input=setter(|f, v| f.extracurricular = v)
                            error=err("extracurricular")
                        />
                        <TextAreaField
                            label="Special Needs or Accommodations (Optional)"
                            placeholder="Please describe any special needs, learning accommodations, or medical conditions we should be aware of"
                            value=value(|f| &f.special_needs)
                            on_input=setter(|f, v| f.special_needs = v)
                            error=err("specialNeeds")
                        />
                        <TextAreaField
                            label="Why do you want to join PISES? *"
                            placeholder="Please tell us why you want to join PISES and what you hope to achieve here (minimum 50 characters)"
                            value=value(|f| &f.motivation)
                            on_input=setter(|f, v| f.motivation = v)
                            error=err("motivation")
                        />
                    </div>

                    <button type="submit" class="button button--primary button--full">
                        "Submit Application"
                    </button>
                </form>
            </div>
        </div>
    }
}
