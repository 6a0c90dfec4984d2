use dioxus::prelude::*;
use gloo_net::http::Request;
use serde::Serialize;

use crate::achievements::Achievements;
use crate::config::RuntimeConfig;
use crate::content::CONTACT_CHANNELS;

const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct TemplateParams {
    user_name: String,
    user_email: String,
    subject: String,
    message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelayPayload {
    service_id: String,
    template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    template_params: TemplateParams,
}

/// Builds the relay request, or a configuration error when either required
/// identifier is missing — in which case no network call is attempted.
fn build_payload(form: &ContactForm, config: &RuntimeConfig) -> Result<RelayPayload, String> {
    let (Some(service_id), Some(template_id)) = (
        config.emailjs_service_id.clone(),
        config.emailjs_template_id.clone(),
    ) else {
        return Err("Email service is not configured. Check the runtime configuration.".to_string());
    };

    Ok(RelayPayload {
        service_id,
        template_id,
        user_id: config.emailjs_public_key.clone(),
        template_params: TemplateParams {
            user_name: form.name.trim().to_string(),
            user_email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message.trim().to_string(),
        },
    })
}

async fn send_to_relay(payload: &RelayPayload) -> Result<(), String> {
    let body =
        serde_json::to_string(payload).map_err(|err| format!("payload encode failed: {err}"))?;
    let response = Request::post(RELAY_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|err| format!("request build failed: {err}"))?
        .send()
        .await
        .map_err(|err| format!("send failed: {err}"))?;
    if response.ok() {
        return Ok(());
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(message)
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<RuntimeConfig>();
    let achievements = use_context::<Achievements>();
    let mut form = use_signal(ContactForm::default);
    let loading = use_signal(|| false);
    let mut success = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit_disabled = loading()
        || form().name.trim().is_empty()
        || form().email.trim().is_empty()
        || form().message.trim().is_empty();

    rsx! {
        section { id: "contact", class: "section section-contact",
            div { class: "section-inner narrow",
                h2 { class: "section-heading centered", span { class: "section-icon", "✉️" } "Get In Touch" }
                div { class: "card contact-card",
                    if success() {
                        div { class: "contact-success",
                            p { class: "contact-success-title", "Message sent successfully!" }
                            p { class: "muted", "Thanks for reaching out — I'll get back to you soon." }
                            button {
                                r#type: "button",
                                class: "button ghost",
                                onclick: move |_| {
                                    success.set(false);
                                    error.set(None);
                                },
                                "Send another message"
                            }
                        }
                    } else {
                        form {
                            class: "contact-form",
                            onsubmit: move |event| {
                                event.prevent_default();
                                if submit_disabled {
                                    return;
                                }
                                let payload = match build_payload(&form(), &config) {
                                    Ok(payload) => payload,
                                    Err(message) => {
                                        error.set(Some(message));
                                        return;
                                    }
                                };
                                let mut loading = loading;
                                let mut success = success;
                                let mut error = error;
                                let mut form = form;
                                let mut achievements = achievements;
                                spawn(async move {
                                    loading.set(true);
                                    error.set(None);
                                    match send_to_relay(&payload).await {
                                        Ok(()) => {
                                            success.set(true);
                                            form.set(ContactForm::default());
                                            achievements.unlock("First Contact");
                                        }
                                        Err(message) => {
                                            error.set(Some(message));
                                        }
                                    }
                                    loading.set(false);
                                });
                            },
                            div { class: "field",
                                label { r#for: "contact-name", "Your Name" }
                                input {
                                    id: "contact-name",
                                    r#type: "text",
                                    name: "user_name",
                                    required: true,
                                    placeholder: "Enter your name",
                                    value: "{form().name}",
                                    disabled: loading(),
                                    oninput: move |event| {
                                        let mut next = form();
                                        next.name = event.value();
                                        form.set(next);
                                    },
                                }
                            }
                            div { class: "field",
                                label { r#for: "contact-email", "Your Email" }
                                input {
                                    id: "contact-email",
                                    r#type: "email",
                                    name: "user_email",
                                    required: true,
                                    placeholder: "Enter your email",
                                    value: "{form().email}",
                                    disabled: loading(),
                                    oninput: move |event| {
                                        let mut next = form();
                                        next.email = event.value();
                                        form.set(next);
                                    },
                                }
                            }
                            div { class: "field wide",
                                label { r#for: "contact-subject", "Subject" }
                                input {
                                    id: "contact-subject",
                                    r#type: "text",
                                    name: "subject",
                                    placeholder: "Enter subject",
                                    value: "{form().subject}",
                                    disabled: loading(),
                                    oninput: move |event| {
                                        let mut next = form();
                                        next.subject = event.value();
                                        form.set(next);
                                    },
                                }
                            }
                            div { class: "field wide",
                                label { r#for: "contact-message", "Message" }
                                textarea {
                                    id: "contact-message",
                                    name: "message",
                                    required: true,
                                    rows: "6",
                                    placeholder: "Enter your message",
                                    value: "{form().message}",
                                    disabled: loading(),
                                    oninput: move |event| {
                                        let mut next = form();
                                        next.message = event.value();
                                        form.set(next);
                                    },
                                }
                            }
                            if let Some(message) = error() {
                                div { class: "form-error wide", "{message}" }
                            }
                            button {
                                r#type: "submit",
                                class: "button primary wide magnetic",
                                disabled: submit_disabled,
                                if loading() { "Sending..." } else { "Send Message" }
                            }
                        }
                    }
                    div { class: "contact-channels",
                        for channel in CONTACT_CHANNELS.iter() {
                            if let Some(href) = channel.href {
                                a { class: "contact-channel", href: "{href}",
                                    span { class: "contact-channel-icon", "{channel.icon}" }
                                    div {
                                        p { class: "muted", "{channel.kind}" }
                                        p { class: "contact-channel-value", "{channel.value}" }
                                    }
                                }
                            } else {
                                div { class: "contact-channel",
                                    span { class: "contact-channel-icon", "{channel.icon}" }
                                    div {
                                        p { class: "muted", "{channel.kind}" }
                                        p { class: "contact-channel-value", "{channel.value}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "  Ada Lovelace ".into(),
            email: " ada@example.com ".into(),
            subject: "Hello".into(),
            message: "  Loved the site.  ".into(),
        }
    }

    #[test]
    fn missing_configuration_is_an_error_before_any_call() {
        let config = RuntimeConfig::default();
        let result = build_payload(&filled_form(), &config);
        assert!(result.unwrap_err().contains("not configured"));

        let half_configured = RuntimeConfig {
            emailjs_service_id: Some("service_x".into()),
            ..RuntimeConfig::default()
        };
        assert!(build_payload(&filled_form(), &half_configured).is_err());
    }

    #[test]
    fn payload_carries_identifiers_and_trimmed_fields() {
        let config = RuntimeConfig {
            emailjs_service_id: Some("service_x".into()),
            emailjs_template_id: Some("template_y".into()),
            emailjs_public_key: Some("public_z".into()),
        };
        let payload = build_payload(&filled_form(), &config).unwrap();
        assert_eq!(payload.service_id, "service_x");
        assert_eq!(payload.template_id, "template_y");
        assert_eq!(payload.user_id.as_deref(), Some("public_z"));
        assert_eq!(payload.template_params.user_name, "Ada Lovelace");
        assert_eq!(payload.template_params.user_email, "ada@example.com");
        assert_eq!(payload.template_params.message, "Loved the site.");
    }

    #[test]
    fn public_key_is_optional_in_the_wire_format() {
        let config = RuntimeConfig {
            emailjs_service_id: Some("service_x".into()),
            emailjs_template_id: Some("template_y".into()),
            emailjs_public_key: None,
        };
        let payload = build_payload(&filled_form(), &config).unwrap();
        let encoded = serde_json::to_string(&payload).unwrap();
        assert!(!encoded.contains("user_id"));
        assert!(encoded.contains("\"service_id\":\"service_x\""));
    }
}
