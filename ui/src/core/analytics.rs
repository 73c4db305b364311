//! Optional Google tag (gtag.js) integration.
//!
//! Only active when the effective config carries a real measurement id. On
//! install the loader and init snippet are injected into `<head>`; a single
//! `page_view` follows after [`PAGE_VIEW_DELAY_MS`]. Call-to-action clicks are
//! reported through [`track`].

use crate::core::config::SiteConfig;

pub const GTAG_LOADER: &str = "https://www.googletagmanager.com/gtag/js";
pub const PAGE_VIEW_DELAY_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analytics {
    measurement_id: String,
}

impl Analytics {
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        config.analytics_id.as_ref().map(|id| Self {
            measurement_id: id.clone(),
        })
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }

    pub fn loader_src(&self) -> String {
        format!("{GTAG_LOADER}?id={}", urlencoding::encode(&self.measurement_id))
    }

    /// Inline bootstrap. Page views are sent explicitly, hence `send_page_view: false`.
    pub fn init_snippet(&self) -> String {
        format!(
            "window.dataLayer = window.dataLayer || [];\n\
             function gtag(){{dataLayer.push(arguments);}}\n\
             gtag('js', new Date());\n\
             gtag('config', '{}', {{ send_page_view: false }});",
            self.measurement_id
        )
    }
}

/// Tracked call-to-action interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaEvent {
    Call,
    WhatsApp,
    Email,
    QuoteSubmit,
}

impl CtaEvent {
    pub fn name(self) -> &'static str {
        match self {
            CtaEvent::Call => "click_call",
            CtaEvent::WhatsApp => "click_whatsapp",
            CtaEvent::Email => "click_email",
            CtaEvent::QuoteSubmit => "submit_quote",
        }
    }
}

/// Event parameters as gtag expects them.
pub fn event_params(location: &str) -> serde_json::Value {
    serde_json::json!({ "event_category": "engagement", "location": location })
}

#[cfg(target_arch = "wasm32")]
pub fn install(analytics: &Analytics) {
    use crate::core::platform;

    if let Err(err) = platform::append_script(Some(&analytics.loader_src()), None)
        .and_then(|_| platform::append_script(None, Some(&analytics.init_snippet())))
    {
        tracing::warn!(?err, "analytics tag injection failed");
        return;
    }
    tracing::info!(id = analytics.measurement_id(), "analytics installed");

    platform::spawn_future(async move {
        gloo_timers::future::TimeoutFuture::new(PAGE_VIEW_DELAY_MS).await;
        emit("page_view", &serde_json::json!({ "page_path": current_path() }));
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install(analytics: &Analytics) {
    tracing::debug!(id = analytics.measurement_id(), "analytics install skipped outside a browser");
}

pub fn track(event: CtaEvent, location: &str) {
    emit(event.name(), &event_params(location));
}

#[cfg(target_arch = "wasm32")]
fn emit(name: &str, params: &serde_json::Value) {
    use wasm_bindgen::JsValue;

    let params = js_sys::JSON::parse(&params.to_string()).unwrap_or(JsValue::UNDEFINED);
    let sent = crate::core::platform::call_global(
        "gtag",
        &[JsValue::from_str("event"), JsValue::from_str(name), params],
    );
    if !sent {
        tracing::debug!(event = name, "gtag not present; event dropped");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(name: &str, params: &serde_json::Value) {
    tracing::debug!(event = name, %params, "analytics event");
}

#[cfg(target_arch = "wasm32")]
fn current_path() -> String {
    crate::core::platform::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{merge, PartialConfig, DEFAULTS};

    fn with_id(id: &str) -> SiteConfig {
        merge(
            &DEFAULTS,
            &PartialConfig {
                ga_measurement_id: Some(id.into()),
                ..Default::default()
            },
            &PartialConfig::default(),
        )
    }

    #[test]
    fn disabled_without_real_id() {
        assert!(Analytics::from_config(&SiteConfig::default()).is_none());
        assert!(Analytics::from_config(&with_id("G-XXXXXXXXXX")).is_none());
    }

    #[test]
    fn loader_and_snippet_carry_the_id() {
        let analytics = Analytics::from_config(&with_id("G-AB12CD34")).unwrap();
        assert_eq!(
            analytics.loader_src(),
            "https://www.googletagmanager.com/gtag/js?id=G-AB12CD34"
        );
        let snippet = analytics.init_snippet();
        assert!(snippet.contains("gtag('config', 'G-AB12CD34', { send_page_view: false });"));
        assert!(snippet.contains("function gtag(){dataLayer.push(arguments);}"));
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(CtaEvent::Call.name(), "click_call");
        assert_eq!(CtaEvent::QuoteSubmit.name(), "submit_quote");
        assert_eq!(event_params("header")["location"], "header");
    }
}
