use dioxus::prelude::*;

use crate::components::{FloatingContact, SiteHeader};
use crate::core::analytics::{self, Analytics};
use crate::core::config::{PartialConfig, SiteConfig};
use crate::core::content::BUSINESS_NAME;
use crate::core::reviews::{self, PlacesClient, ReviewsState};
use crate::core::{platform, seo};
use crate::i18n::Lang;

use super::{Footer, Hero, Projects, QuoteSection, ServiceArea, Services, Testimonials, WhyUs};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The whole page.
///
/// `host` is the host-page record (read by the platform entry point) and
/// `overrides` are per-instance settings; both are merged over the compiled-in
/// defaults exactly once, on first render. The effective [`SiteConfig`] and
/// the language signal are provided as context to every section.
///
/// Side effects, each started once per instance:
/// - the reviews read (a resource; the section shows "loading" until it resolves)
/// - analytics installation, when a measurement id is configured
#[component]
pub fn LandingPage(
    #[props(default)] host: PartialConfig,
    #[props(default)] overrides: PartialConfig,
) -> Element {
    let config = use_hook(|| SiteConfig::resolve(&host, &overrides));
    use_context_provider(|| config.clone());

    let lang = use_signal(|| {
        let lang = Lang::detect();
        platform::set_document_lang(lang.tag());
        lang
    });
    use_context_provider(|| lang);

    let reviews_config = config.clone();
    let reviews = use_resource(move || {
        let config = reviews_config.clone();
        async move { reviews::load_reviews(&PlacesClient::default(), &config).await }
    });

    let analytics_config = config.clone();
    use_hook(move || {
        if let Some(tag) = Analytics::from_config(&analytics_config) {
            analytics::install(&tag);
        }
    });

    let structured = seo::structured_data(&config).to_string();
    let reviews_state = ReviewsState::from(reviews.cloned());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Title { "{BUSINESS_NAME}" }
        document::Script { r#type: "application/ld+json", "{structured}" }

        div { id: "top", class: "site",
            SiteHeader {}
            main { class: "site__main",
                Hero {}
                Services {}
                WhyUs {}
                Projects {}
                Testimonials { state: reviews_state }
                ServiceArea {}
                QuoteSection {}
            }
            Footer {}
            FloatingContact {}
        }
    }
}
