use dioxus::prelude::*;

use crate::components::icon::ChatGlyph;
use crate::core::analytics::{self, CtaEvent};
use crate::core::config::SiteConfig;
use crate::core::links::whatsapp_href;
use crate::i18n::Lang;
use crate::t;

/// Fixed bottom-corner WhatsApp link.
#[component]
pub fn FloatingContact() -> Element {
    let config = use_context::<SiteConfig>();
    let lang = use_context::<Signal<Lang>>()();

    let href = whatsapp_href(&config.whatsapp_number, &t!(lang, "whatsapp-greeting"));
    let label = t!(lang, "whatsapp-label");

    rsx! {
        a {
            class: "floating-contact",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{label}",
            onclick: move |_| analytics::track(CtaEvent::WhatsApp, "floating"),
            ChatGlyph {}
            span { class: "floating-contact__label", "{label}" }
        }
    }
}
