use dioxus::prelude::*;

use crate::components::PhoneLink;
use crate::core::content::{HERO_IMAGE, HERO_POINT_KEYS};
use crate::i18n::{tr, Lang};
use crate::t;

#[component]
pub fn Hero() -> Element {
    let lang = use_context::<Signal<Lang>>()();
    let points: Vec<String> = HERO_POINT_KEYS.iter().map(|k| tr(lang, k)).collect();

    rsx! {
        section { class: "hero",
            div { class: "hero__inner",
                div { class: "hero__copy",
                    span { class: "badge", {t!(lang, "hero-badge")} }
                    h1 { class: "hero__title", {t!(lang, "hero-title")} }
                    p { class: "hero__intro", {t!(lang, "hero-intro")} }
                    div { class: "hero__actions",
                        a { class: "button button--primary", href: "#quote", {t!(lang, "hero-cta")} }
                        PhoneLink { location: "hero" }
                    }
                    ul { class: "hero__points",
                        for point in points {
                            li { key: "{point}", class: "bullet", "{point}" }
                        }
                    }
                }
                div { class: "hero__media",
                    div { class: "hero__frame",
                        img { src: HERO_IMAGE, alt: t!(lang, "hero-image-alt"), "loading": "lazy" }
                    }
                    div { class: "hero__offer",
                        p { class: "hero__offer-label", {t!(lang, "hero-offer-label")} }
                        p { class: "hero__offer-value", {t!(lang, "hero-offer-value")} }
                        p { class: "hero__offer-detail", {t!(lang, "hero-offer-detail")} }
                    }
                }
            }
        }
    }
}
