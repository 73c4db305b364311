use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::content::{BRAND_MARK, BUSINESS_NAME, CONTACT_EMAIL, SERVICES};
use crate::core::links::{mailto_href, tel_href};
use crate::i18n::Lang;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let lang = use_context::<Signal<Lang>>()();
    let year = time::OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    div { class: "navbar__brand",
                        span { class: "navbar__brand-mark", "{BRAND_MARK}" }
                        span { class: "navbar__brand-text",
                            span { class: "navbar__brand-tagline", {t!(lang, "brand-tagline")} }
                            span { class: "navbar__brand-name", "{BUSINESS_NAME}" }
                        }
                    }
                    p { class: "footer__about", {t!(lang, "footer-about")} }
                }
                div { class: "footer__column",
                    p { class: "footer__heading", {t!(lang, "footer-services")} }
                    ul {
                        for service in SERVICES.iter() {
                            li { key: "{service.title_key}", {service.title(lang)} }
                        }
                    }
                }
                div { class: "footer__column",
                    p { class: "footer__heading", {t!(lang, "footer-contact")} }
                    p {
                        {t!(lang, "footer-phone")}
                        ": "
                        a { href: tel_href(&config.phone_e164), "{config.phone_display}" }
                    }
                    p {
                        {t!(lang, "footer-email")}
                        ": "
                        a { href: mailto_href(), "{CONTACT_EMAIL}" }
                    }
                    p { class: "footer__license", {t!(lang, "footer-license")} }
                }
            }
            div { class: "footer__legal",
                "© {year} {BUSINESS_NAME}. "
                {t!(lang, "footer-rights")}
            }
        }
    }
}
