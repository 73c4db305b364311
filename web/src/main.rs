use dioxus::prelude::*;

use ui::core::platform;
use ui::LandingPage;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

/// Browser entry point. The host page may publish `window.LOAIZA5_CONFIG`
/// before the bundle loads; it is read once here and handed to the page.
#[component]
fn App() -> Element {
    let host = use_hook(platform::host_config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        LandingPage { host }
    }
}
