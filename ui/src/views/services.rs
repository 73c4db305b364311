use dioxus::prelude::*;

use crate::components::{Icon, Section};
use crate::core::content::SERVICES;
use crate::i18n::Lang;
use crate::t;

#[component]
pub fn Services() -> Element {
    let lang = use_context::<Signal<Lang>>()();

    rsx! {
        Section {
            id: "services",
            title: t!(lang, "services-title"),
            subtitle: t!(lang, "services-subtitle"),
            div { class: "card-grid card-grid--three",
                for service in SERVICES.iter() {
                    div { key: "{service.title_key}", class: "card service-card",
                        div { class: "service-card__icon", Icon { kind: service.icon } }
                        h3 { class: "card__title", {service.title(lang)} }
                        p { class: "card__text", {service.description(lang)} }
                    }
                }
            }
        }
    }
}
