//! Parent-portal access form: sign-in by default, with a registration mode
//! for creating a portal account.

use super::field_error;
use super::fields::{PasswordField, TextField};
use crate::shared::icons::icon;
use contracts::forms::{ParentRegistration, SignInCredentials};
use contracts::session::{attempt_sign_in, StaticCredentials};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormMode {
    SignIn,
    Register,
}

/// `on_sign_in` receives the student id of the accepted pair;
/// `on_register` receives the validated registration record.
#[component]
pub fn ParentPortalForm(
    #[prop(into)] on_sign_in: Callback<String>,
    #[prop(into)] on_register: Callback<ParentRegistration>,
) -> impl IntoView {
    let (mode, set_mode) = signal(FormMode::SignIn);

    view! {
        <div class="form-page form-page--centered">
            {move || match mode.get() {
                FormMode::SignIn => view! {
                    <SignInCard
                        on_sign_in=on_sign_in
                        on_switch=Callback::new(move |_| set_mode.set(FormMode::Register))
                    />
                }.into_any(),
                FormMode::Register => view! {
                    <RegisterCard
                        on_register=on_register
                        on_switch=Callback::new(move |_| set_mode.set(FormMode::SignIn))
                    />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SignInCard(
    #[prop(into)] on_sign_in: Callback<String>,
    #[prop(into)] on_switch: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(SignInCredentials::default());
    let errors = Memo::new(move |_| form.with(|draft| draft.field_errors()));
    let (show_errors, set_show_errors) = signal(false);
    let (sign_in_error, set_sign_in_error) = signal(Option::<String>::None);

    let err = move |name: &'static str| field_error(errors, show_errors, name);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_show_errors.set(true);
        set_sign_in_error.set(None);

        let draft = match form.get().validate() {
            Ok(draft) => draft,
            Err(_) => return,
        };

        // The portal ships with one demo pair; a real credential store
        // plugs in behind the same verifier interface.
        match attempt_sign_in(&StaticCredentials::demo(), &draft.student_id, &draft.password) {
            Ok(()) => {
                log::info!("sign in successful for {}", draft.student_id);
                on_sign_in.run(draft.student_id);
            }
            Err(error) => {
                log::warn!("sign in rejected");
                set_sign_in_error.set(Some(error.to_string()));
            }
        }
    };

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <div class="form-card__badge">{icon("user")}</div>
                <h2 class="form-card__title">"Sign In"</h2>
                <p class="form-card__subtitle">"Access your parent portal"</p>
            </div>

            <form class="form-card__body" on:submit=on_submit>
                <TextField
                    label="Student ID"
                    placeholder="22G149"
                    value=Signal::derive(move || form.with(|f| f.student_id.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.student_id = v))
                    error=err("studentId")
                />
                <PasswordField
                    label="Password"
                    placeholder="password123"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.password = v))
                    error=err("password")
                />

                <Show when=move || sign_in_error.get().is_some()>
                    <p class="form-card__error">
                        {move || sign_in_error.get().unwrap_or_default()}
                    </p>
                </Show>

                <button type="submit" class="button button--primary button--full">
                    "Sign In"
                </button>
            </form>

            <div class="form-card__footer">
                <p>
                    "Don't have an account? "
                    <button class="form-card__link" on:click=move |_| on_switch.run(())>
                        "Create Account"
                    </button>
                </p>
            </div>
        </div>
    }
}

#[component]
fn RegisterCard(
    #[prop(into)] on_register: Callback<ParentRegistration>,
    #[prop(into)] on_switch: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ParentRegistration::default());
    let errors = Memo::new(move |_| form.with(|draft| draft.field_errors()));
    let (show_errors, set_show_errors) = signal(false);

    let err = move |name: &'static str| field_error(errors, show_errors, name);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_show_errors.set(true);
        match form.get().validate() {
            Ok(registration) => on_register.run(registration),
            Err(field_errors) => {
                log::warn!("registration has {} invalid fields", field_errors.len());
            }
        }
    };

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <div class="form-card__badge">{icon("user")}</div>
                <h2 class="form-card__title">"Create Parent Account"</h2>
                <p class="form-card__subtitle">"Set up your parent portal access"</p>
            </div>

            <form class="form-card__body" on:submit=on_submit>
                <div class="form-grid form-grid--two">
                    <TextField
                        label="Student ID"
                        placeholder="Enter student ID"
                        value=Signal::derive(move || form.with(|f| f.student_id.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.student_id = v))
                        error=err("studentId")
                    />
                    <TextField
                        label="Registration Code"
                        icon_name="key"
                        placeholder="Enter code"
                        value=Signal::derive(move || form.with(|f| f.registration_code.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.registration_code = v))
                        error=err("registrationCode")
                    />
                </div>

                <TextField
                    label="Parent/Guardian Name"
                    icon_name="user"
                    placeholder="Enter your full name"
                    value=Signal::derive(move || form.with(|f| f.parent_name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.parent_name = v))
                    error=err("parentName")
                />

                <div class="form-grid form-grid--two">
                    <TextField
                        label="Email Address"
                        input_type="email"
                        icon_name="mail"
                        placeholder="Enter email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=err("email")
                    />
                    <TextField
                        label="Phone Number"
                        input_type="tel"
                        icon_name="phone"
                        placeholder="Enter phone"
                        value=Signal::derive(move || form.with(|f| f.phone.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                        error=err("phone")
                    />
                </div>

                <div class="form-grid form-grid--two">
                    <PasswordField
                        label="Password"
                        placeholder="Create password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        error=err("password")
                    />
                    <PasswordField
                        label="Confirm Password"
                        placeholder="Confirm password"
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.confirm_password = v))
                        error=err("confirmPassword")
                    />
                </div>

                <button type="submit" class="button button--primary button--full">
                    "Create Account"
                </button>
            </form>

            <div class="form-card__footer">
                <p>
                    "Already have an account? "
                    <button class="form-card__link" on:click=move |_| on_switch.run(())>
                        "Sign In"
                    </button>
                </p>
            </div>
        </div>
    }
}
