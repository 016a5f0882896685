//! Sign-in and sign-up pages.
//!
//! Both sit on the animated wave background. The mock backend accepts any
//! credentials; only the local form checks can fail.

use dioxus::prelude::*;
use leviathan_core::i18n::role_key;
use leviathan_core::{Role, SignInForm, SignUpForm};
use leviathan_ui::{use_toaster, Button, ButtonVariant, Input, OceanWave};

use crate::app::Route;
use crate::context::{use_app_state, use_translate};

#[component]
pub fn SignIn() -> Element {
    let t = use_translate();
    let state = use_app_state();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let mut form = use_signal(SignInForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = match form.read().validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                toaster.error(e.to_string());
                return;
            }
        };

        match state.session().sign_in_with_password(credentials) {
            Ok(response) => {
                toaster.success(format!("Welcome back, {}!", response.user.display_name()));
                navigator.push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::error!("Sign in failed: {}", e);
                toaster.error(format!("Sign in failed: {}", e));
            }
        }
    };

    let current = form();

    rsx! {
        main { class: "page auth-page wave-host",
            OceanWave { id: "signin-wave".to_string() }
            div { class: "card auth-card",
                h1 { class: "auth-title", {t("signIn")} }
                p { class: "muted", style: "text-align: center; margin-bottom: 1.5rem;",
                    "Demo mode: any email and password will work"
                }
                form { class: "stack", onsubmit: on_submit,
                    Input {
                        value: current.email.clone(),
                        oninput: move |v| form.write().email = v,
                        label: t("email").to_string(),
                        input_type: "email".to_string(),
                        placeholder: "you@example.org".to_string(),
                        required: true,
                    }
                    Input {
                        value: current.password.clone(),
                        oninput: move |v| form.write().password = v,
                        label: t("password").to_string(),
                        input_type: "password".to_string(),
                        required: true,
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        class: "btn-block".to_string(),
                        {t("signIn")}
                    }
                }
                p { class: "auth-footer",
                    "Don't have an account? "
                    Link { to: Route::SignUp {}, {t("signUp")} }
                }
            }
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    let t = use_translate();
    let state = use_app_state();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let mut form = use_signal(SignUpForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                toaster.error(e.to_string());
                return;
            }
        };

        match state.session().sign_up(request) {
            Ok(response) => {
                tracing::info!(role = %response.user.role, "Account created (demo mode)");
                toaster.success("Account created successfully!");
                navigator.push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::error!("Sign up failed: {}", e);
                toaster.error(format!("Sign up failed: {}", e));
            }
        }
    };

    let current = form();

    rsx! {
        main { class: "page auth-page wave-host",
            OceanWave { id: "signup-wave".to_string() }
            div { class: "card auth-card wide",
                h1 { class: "auth-title", {t("signUp")} }
                p { class: "muted", style: "text-align: center; margin-bottom: 1.5rem;",
                    "Join the Leviathan community"
                }
                form { class: "stack", onsubmit: on_submit,
                    div { class: "grid grid-2",
                        Input {
                            value: current.full_name.clone(),
                            oninput: move |v| form.write().full_name = v,
                            label: t("fullName").to_string(),
                        }
                        Input {
                            value: current.organization.clone(),
                            oninput: move |v| form.write().organization = v,
                            label: t("organization").to_string(),
                            hint: "optional".to_string(),
                        }
                    }
                    Input {
                        value: current.email.clone(),
                        oninput: move |v| form.write().email = v,
                        label: t("email").to_string(),
                        input_type: "email".to_string(),
                        required: true,
                    }
                    div { class: "grid grid-2",
                        Input {
                            value: current.password.clone(),
                            oninput: move |v| form.write().password = v,
                            label: t("password").to_string(),
                            input_type: "password".to_string(),
                            required: true,
                        }
                        Input {
                            value: current.confirm_password.clone(),
                            oninput: move |v| form.write().confirm_password = v,
                            label: t("confirmPassword").to_string(),
                            input_type: "password".to_string(),
                            required: true,
                        }
                    }

                    div {
                        span { class: "input-label", {t("selectRole")} }
                        div { class: "role-options",
                            for role in Role::ALL {
                                RoleOption {
                                    key: "{role}",
                                    role,
                                    selected: current.role == Some(role),
                                    on_pick: move |picked| form.write().role = Some(picked),
                                }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        class: "btn-block".to_string(),
                        {t("signUp")}
                    }
                }
                p { class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::SignIn {}, {t("signIn")} }
                }
            }
        }
    }
}

#[component]
fn RoleOption(role: Role, selected: bool, on_pick: EventHandler<Role>) -> Element {
    let t = use_translate();

    rsx! {
        button {
            r#type: "button",
            class: if selected { "role-option selected" } else { "role-option" },
            "aria-pressed": "{selected}",
            onclick: move |_| on_pick.call(role),
            div { class: "role-option-title", {t(role_key(role))} }
            div { class: "role-option-desc", "{role.description()}" }
        }
    }
}
