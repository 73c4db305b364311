use dioxus::prelude::*;

use crate::components::Section;
use crate::core::content::WHY_US_KEYS;
use crate::i18n::{tr, Lang};
use crate::t;

#[component]
pub fn WhyUs() -> Element {
    let lang = use_context::<Signal<Lang>>()();

    rsx! {
        Section {
            id: "why-us",
            title: t!(lang, "why-title"),
            subtitle: t!(lang, "why-subtitle"),
            div { class: "split",
                ul { class: "why-list",
                    for key in WHY_US_KEYS.iter() {
                        li { key: "{key}", class: "bullet", {tr(lang, key)} }
                    }
                }
                div { class: "card offer-card",
                    h3 { class: "card__title", {t!(lang, "why-offer-title")} }
                    p { class: "card__text", {t!(lang, "why-offer-body")} }
                    a { class: "button button--primary", href: "#quote", {t!(lang, "why-offer-cta")} }
                }
            }
        }
    }
}
