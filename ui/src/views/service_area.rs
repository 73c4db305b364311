use dioxus::prelude::*;

use crate::components::Section;
use crate::core::content::MAP_EMBED_URL;
use crate::i18n::Lang;
use crate::t;

#[component]
pub fn ServiceArea() -> Element {
    let lang = use_context::<Signal<Lang>>()();

    rsx! {
        Section {
            id: "service-area",
            title: t!(lang, "area-title"),
            subtitle: t!(lang, "area-subtitle"),
            div { class: "map-frame",
                iframe {
                    title: t!(lang, "area-map-title"),
                    src: MAP_EMBED_URL,
                    width: "100%",
                    height: "420",
                    style: "border: 0",
                    "allowfullscreen": "true",
                    "loading": "lazy",
                    "referrerpolicy": "no-referrer-when-downgrade",
                }
            }
        }
    }
}
