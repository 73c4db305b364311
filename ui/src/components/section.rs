use dioxus::prelude::*;

/// Page section with the shared heading block.
#[component]
pub fn Section(
    #[props(into)] id: String,
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    children: Element,
) -> Element {
    rsx! {
        section { id: "{id}", class: "section",
            div { class: "section__inner",
                div { class: "section__heading",
                    h2 { class: "section__title", "{title}" }
                    p { class: "section__subtitle", "{subtitle}" }
                }
                {children}
            }
        }
    }
}
