use dioxus::prelude::*;

use crate::components::PhoneLink;
use crate::core::content::{BRAND_MARK, BUSINESS_NAME};
use crate::core::platform;
use crate::i18n::Lang;
use crate::t;

// Header stylesheet (kept separate from the page theme)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Sticky page header: brand, in-page anchors, offer badge, phone link,
/// language toggle and the mobile menu.
///
/// Language and menu state are plain signals. The language signal comes from
/// the enclosing `LandingPage` context so every section re-renders with it;
/// the menu signal is local because nothing else cares whether it is open.
#[component]
pub fn SiteHeader() -> Element {
    let mut lang = use_context::<Signal<Lang>>();
    let mut menu_open = use_signal(|| false);
    let current = lang();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = current.tag(), menu_open = menu_open(), "SiteHeader render");

    let anchors = [
        ("#services", t!(current, "nav-services")),
        ("#projects", t!(current, "nav-projects")),
        ("#reviews", t!(current, "nav-reviews")),
        ("#service-area", t!(current, "nav-area")),
        ("#quote", t!(current, "nav-quote")),
    ];

    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };
    let menu_label = if menu_open() {
        t!(current, "nav-menu-close")
    } else {
        t!(current, "nav-menu-open")
    };
    let menu_glyph = if menu_open() { "✕" } else { "☰" };
    let tagline = t!(current, "brand-tagline");
    let offer = t!(current, "badge-offer");
    let lang_label = t!(current, "nav-language-label");
    let lang_toggle = t!(current, "nav-language-toggle");
    let next_code = current.toggled().code();

    let on_toggle_lang = move |_| {
        let next = lang().toggled();
        lang.set(next);
        platform::set_document_lang(next.tag());
        tracing::info!(lang = next.tag(), "language switched");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#top",
                    span { class: "navbar__brand-mark", "{BRAND_MARK}" }
                    span { class: "navbar__brand-text",
                        span { class: "navbar__brand-tagline", "{tagline}" }
                        span { class: "navbar__brand-name", "{BUSINESS_NAME}" }
                    }
                }

                nav { id: "site-nav", class: "{links_class}",
                    for (href, label) in anchors {
                        a {
                            key: "{href}",
                            class: "navbar__link",
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }

                div { class: "navbar__actions",
                    span { class: "badge badge--offer", "{offer}" }
                    PhoneLink { location: "header", class: "navbar__phone" }
                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        title: "{lang_label}",
                        aria_label: "{lang_label}: {lang_toggle}",
                        onclick: on_toggle_lang,
                        "{next_code}"
                    }
                    button {
                        r#type: "button",
                        class: "navbar__menu-toggle",
                        aria_controls: "site-nav",
                        aria_expanded: "{menu_open()}",
                        aria_label: "{menu_label}",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        "{menu_glyph}"
                    }
                }
            }
        }
    }
}
