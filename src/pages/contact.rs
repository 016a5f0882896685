//! Contact page: message form with simulated submission, contact details
//! and FAQ.

use dioxus::prelude::*;
use leviathan_core::catalog::{CONTACT_INFO, FAQS};
use leviathan_core::forms::{submit_contact, CONTACT_SUBMIT_DELAY};
use leviathan_core::{ContactCategory, ContactForm};
use leviathan_ui::{use_toaster, Button, ButtonVariant, Input, Select, SelectOption, TextArea};

use crate::context::use_translate;

fn category_options() -> Vec<SelectOption> {
    ContactCategory::ALL
        .iter()
        .map(|c| SelectOption::new(c.as_str(), c.label()))
        .collect()
}

#[component]
pub fn Contact() -> Element {
    let t = use_translate();
    let toaster = use_toaster();
    let mut form = use_signal(ContactForm::default);
    let mut sending = use_signal(|| false);

    let on_submit = move |_| {
        let draft = form();
        if let Err(e) = draft.validate() {
            toaster.error(e.to_string());
            return;
        }

        sending.set(true);
        spawn(async move {
            match submit_contact(draft, CONTACT_SUBMIT_DELAY).await {
                Ok(sent) => {
                    toaster.success(format!("Thanks {}, your message has been sent. We'll get back to you soon.", sent.name));
                    form.set(ContactForm::default());
                }
                Err(e) => toaster.error(e.to_string()),
            }
            sending.set(false);
        });
    };

    let current = form();

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header",
                    h1 { class: "page-title", {t("contact")} }
                    p { class: "page-subtitle", "Questions, partnerships or press enquiries: we'd love to hear from you" }
                }

                div { class: "with-sidebar",
                    div { class: "card stack",
                        h3 { "Send us a message" }
                        div { class: "grid grid-2",
                            Input {
                                value: current.name.clone(),
                                oninput: move |v| form.write().name = v,
                                label: "Name".to_string(),
                                required: true,
                            }
                            Input {
                                value: current.email.clone(),
                                oninput: move |v| form.write().email = v,
                                label: t("email").to_string(),
                                input_type: "email".to_string(),
                                required: true,
                            }
                        }
                        div { class: "grid grid-2",
                            Input {
                                value: current.organization.clone(),
                                oninput: move |v| form.write().organization = v,
                                label: t("organization").to_string(),
                                hint: "optional".to_string(),
                            }
                            Select {
                                value: current.category.as_str().to_string(),
                                options: category_options(),
                                onchange: move |v: String| {
                                    if let Some(category) = ContactCategory::from_str_opt(&v) {
                                        form.write().category = category;
                                    }
                                },
                                label: "Category".to_string(),
                            }
                        }
                        Input {
                            value: current.subject.clone(),
                            oninput: move |v| form.write().subject = v,
                            label: "Subject".to_string(),
                        }
                        TextArea {
                            value: current.message.clone(),
                            oninput: move |v| form.write().message = v,
                            label: "Message".to_string(),
                            rows: 6,
                            required: true,
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            loading: sending(),
                            onclick: on_submit,
                            class: "btn-block".to_string(),
                            if sending() { "Sending..." } else { "Send Message" }
                        }
                    }

                    aside { class: "stack",
                        for info in CONTACT_INFO {
                            div { key: "{info.title}", class: "card",
                                h3 { "{info.title}" }
                                for line in info.details {
                                    p { key: "{line}", class: "muted", "{line}" }
                                }
                            }
                        }
                    }
                }

                h2 { class: "section-title", style: "margin-top: 2.5rem;", "Frequently Asked Questions" }
                div { class: "stack",
                    for faq in FAQS {
                        details { key: "{faq.question}", class: "faq-item card",
                            summary { strong { "{faq.question}" } }
                            p { style: "margin-top: 0.5rem;", "{faq.answer}" }
                        }
                    }
                }
            }
        }
    }
}
