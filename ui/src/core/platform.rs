//! Browser glue. Native builds (tests, tooling) get inert stand-ins so the
//! shared crate compiles and runs everywhere.

use super::config::PartialConfig;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::future::Future;

    use wasm_bindgen::{JsCast, JsValue};

    pub fn spawn_future<F>(future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    pub fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    /// JSON text of `window[name]`, if it is set to something serialisable.
    pub fn global_json(name: &str) -> Option<String> {
        let window = window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        js_sys::JSON::stringify(&value).ok().map(String::from)
    }

    pub fn navigate(href: &str) {
        let Some(window) = window() else { return };
        if let Err(err) = window.location().set_href(href) {
            tracing::warn!(?err, "navigation refused");
        }
    }

    pub fn set_document_lang(tag: &str) {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("lang", tag);
        }
    }

    /// Append a `<script>` to `<head>`: external when `src` is given, inline otherwise.
    pub fn append_script(src: Option<&str>, inline: Option<&str>) -> Result<(), JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let head = document.head().ok_or_else(|| JsValue::from_str("no <head>"))?;
        let script = document.create_element("script")?;
        if let Some(src) = src {
            script.set_attribute("src", src)?;
            script.set_attribute("async", "")?;
        }
        if let Some(code) = inline {
            script.set_text_content(Some(code));
        }
        head.append_child(&script)?;
        Ok(())
    }

    /// Call a global function with `args`, if the page defines it.
    pub fn call_global(name: &str, args: &[JsValue]) -> bool {
        let Some(window) = window() else { return false };
        let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) else {
            return false;
        };
        let Ok(func) = func.dyn_into::<js_sys::Function>() else {
            return false;
        };
        let args: js_sys::Array = args.iter().collect();
        func.apply(&JsValue::NULL, &args).is_ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::*;

/// Host-page configuration record, read once by the entry point.
#[cfg(target_arch = "wasm32")]
pub fn host_config() -> PartialConfig {
    match global_json(super::config::HOST_CONFIG_GLOBAL) {
        Some(raw) => PartialConfig::from_host_json(&raw),
        None => PartialConfig::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn host_config() -> PartialConfig {
    PartialConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(href: &str) {
    tracing::debug!(href, "navigation requested outside a browser");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_lang(_tag: &str) {}
