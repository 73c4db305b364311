use dioxus::prelude::*;

use crate::core::analytics::{self, CtaEvent};
use crate::core::content::{CONTACT_EMAIL, SERVICES};
use crate::core::lead::{LeadForm, LeadLabels};
use crate::core::links::mailto_href;
use crate::core::platform;
use crate::i18n::Lang;
use crate::t;

/// Quote request form. Submitting hands the lead to the visitor's mail client.
///
/// The service is held as an index into `SERVICES` so the selection survives a
/// language switch; it is resolved to a localised title at submit time.
#[component]
pub fn QuoteForm() -> Element {
    let lang = use_context::<Signal<Lang>>();
    let mut form = use_signal(LeadForm::default);
    let mut service_idx = use_signal(|| 0usize);

    let current = lang();
    let values = form.read().clone();
    let selected = service_idx();
    let services: Vec<(usize, String)> = SERVICES
        .iter()
        .enumerate()
        .map(|(i, s)| (i, s.title(current)))
        .collect();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let lang = lang();
        let lead = form.read().with_service(service_idx(), lang);
        let href = lead.mailto(&LeadLabels::for_lang(lang));
        analytics::track(CtaEvent::QuoteSubmit, "quote_form");
        tracing::info!("quote request handed off to mail client");
        platform::navigate(&href);
    };

    rsx! {
        form { class: "quote-form", onsubmit: on_submit,
            input {
                name: "name",
                class: "quote-form__field",
                required: true,
                autocomplete: "name",
                placeholder: t!(current, "form-name"),
                value: "{values.name}",
                oninput: move |e: FormEvent| form.write().name = e.value(),
            }
            input {
                name: "phone",
                r#type: "tel",
                class: "quote-form__field",
                required: true,
                autocomplete: "tel",
                placeholder: t!(current, "form-phone"),
                value: "{values.phone}",
                oninput: move |e: FormEvent| form.write().phone = e.value(),
            }
            input {
                name: "email",
                r#type: "email",
                class: "quote-form__field quote-form__field--wide",
                autocomplete: "email",
                placeholder: t!(current, "form-email"),
                value: "{values.email}",
                oninput: move |e: FormEvent| form.write().email = e.value(),
            }
            input {
                name: "city",
                class: "quote-form__field quote-form__field--wide",
                placeholder: t!(current, "form-city"),
                value: "{values.city}",
                oninput: move |e: FormEvent| form.write().city = e.value(),
            }
            select {
                name: "service",
                class: "quote-form__field quote-form__field--wide",
                aria_label: t!(current, "form-service"),
                value: "{selected}",
                onchange: move |e: FormEvent| {
                    if let Ok(idx) = e.value().parse::<usize>() {
                        service_idx.set(idx);
                    }
                },
                for (i, title) in services {
                    option { key: "{i}", value: "{i}", selected: i == selected, "{title}" }
                }
            }
            textarea {
                name: "message",
                class: "quote-form__field quote-form__field--wide",
                rows: "5",
                placeholder: t!(current, "form-message"),
                value: "{values.message}",
                oninput: move |e: FormEvent| form.write().message = e.value(),
            }
            div { class: "quote-form__actions",
                button { r#type: "submit", class: "button button--primary", {t!(current, "form-submit")} }
                a {
                    class: "quote-form__alt",
                    href: mailto_href(),
                    onclick: move |_| analytics::track(CtaEvent::Email, "quote_form"),
                    {format!("{} {CONTACT_EMAIL}", t!(current, "form-email-alt"))}
                }
            }
        }
    }
}
