use dioxus::prelude::*;

use crate::components::Section;
use crate::core::content::PROJECTS;
use crate::i18n::Lang;
use crate::t;

#[component]
pub fn Projects() -> Element {
    let lang = use_context::<Signal<Lang>>()();
    let cta = t!(lang, "project-cta");
    let portfolio = t!(lang, "project-portfolio");

    rsx! {
        Section {
            id: "projects",
            title: t!(lang, "projects-title"),
            subtitle: t!(lang, "projects-subtitle"),
            div { class: "card-grid card-grid--two",
                for project in PROJECTS.iter() {
                    article { key: "{project.image}", class: "card project-card",
                        div { class: "project-card__media",
                            img { src: project.image, alt: project.alt(lang), "loading": "lazy" }
                        }
                        div { class: "project-card__body",
                            h3 { class: "card__title", {project.title(lang)} }
                            ul { class: "project-card__features",
                                for feature in project.features(lang) {
                                    li { key: "{feature}", class: "bullet", "{feature}" }
                                }
                            }
                            div { class: "project-card__footer",
                                a { class: "button button--small", href: "#quote", "{cta}" }
                                span { class: "project-card__tag", "{portfolio}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
