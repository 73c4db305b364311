use dioxus::prelude::*;

use crate::components::Section;
use crate::core::reviews::{ReviewsState, Testimonial};
use crate::i18n::Lang;
use crate::t;

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Reviews section. Renders whatever state the page's one-shot read is in.
#[component]
pub fn Testimonials(state: ReviewsState) -> Element {
    let lang = use_context::<Signal<Lang>>()();
    let rating_label = t!(lang, "reviews-rating-label");

    let body = match &state {
        ReviewsState::Loading => rsx! {
            p { class: "reviews__loading", role: "status", {t!(lang, "reviews-loading")} }
        },
        ReviewsState::Loaded(set) => {
            let source = if set.is_live() {
                t!(lang, "reviews-source-live")
            } else {
                t!(lang, "reviews-source-fallback")
            };
            let list: Vec<Testimonial> = set.testimonials(lang);
            rsx! {
                p { class: "reviews__source", "{source}" }
                div { class: "card-grid card-grid--three",
                    for (i, review) in list.into_iter().enumerate() {
                        figure { key: "{i}", class: "card review-card",
                            div {
                                class: "review-card__stars",
                                aria_label: "{rating_label}: {review.rating}/5",
                                {stars(review.rating)}
                            }
                            blockquote { class: "card__text", "{review.text}" }
                            figcaption { class: "review-card__meta",
                                span { class: "review-card__author", "{review.author}" }
                                span { class: "review-card__when", "{review.relative_time}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Section {
            id: "reviews",
            title: t!(lang, "reviews-title"),
            subtitle: t!(lang, "reviews-subtitle"),
            {body}
        }
    }
}
