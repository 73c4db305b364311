use dioxus::prelude::*;

use crate::components::icon::PhoneGlyph;
use crate::core::analytics::{self, CtaEvent};
use crate::core::config::SiteConfig;
use crate::core::links::tel_href;
use crate::i18n::Lang;
use crate::t;

/// `tel:` link to the effective business phone. `location` tags the click event.
#[component]
pub fn PhoneLink(#[props(into)] location: String, #[props(default, into)] class: String) -> Element {
    let config = use_context::<SiteConfig>();
    let lang = use_context::<Signal<Lang>>()();

    let href = tel_href(&config.phone_e164);
    let label = format!("{} {}", t!(lang, "phone-call"), config.phone_display);

    rsx! {
        a {
            class: "phone-link {class}",
            href: "{href}",
            onclick: move |_| analytics::track(CtaEvent::Call, &location),
            PhoneGlyph {}
            "{label}"
        }
    }
}
