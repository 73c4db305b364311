use dioxus::prelude::*;

use crate::components::icon::MailGlyph;
use crate::components::{PhoneLink, QuoteForm, Section};
use crate::core::analytics::{self, CtaEvent};
use crate::core::content::CONTACT_EMAIL;
use crate::core::links::mailto_href;
use crate::i18n::Lang;
use crate::t;

/// Quote form beside the direct-contact card.
#[component]
pub fn QuoteSection() -> Element {
    let lang = use_context::<Signal<Lang>>()();

    rsx! {
        Section {
            id: "quote",
            title: t!(lang, "quote-title"),
            subtitle: t!(lang, "quote-subtitle"),
            div { class: "split",
                div { class: "card", QuoteForm {} }
                div { class: "card contact-card",
                    h3 { class: "card__title", {t!(lang, "contact-title")} }
                    p { class: "card__text", {t!(lang, "contact-intro")} }
                    div { class: "contact-card__links",
                        PhoneLink { location: "contact_card" }
                        a {
                            class: "phone-link",
                            href: mailto_href(),
                            onclick: move |_| analytics::track(CtaEvent::Email, "contact_card"),
                            MailGlyph {}
                            "{CONTACT_EMAIL}"
                        }
                    }
                    div { class: "contact-card__meta",
                        p { {t!(lang, "contact-hours")} }
                        p { {t!(lang, "contact-manager")} }
                    }
                }
            }
        }
    }
}
