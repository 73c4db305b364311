//! Internationalization (i18n) support for `loaiza5-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/loaiza5-ui.ftl   (fallback/reference)
//!   es-ES/loaiza5-ui.ftl   (Spanish)
//! ```
//!
//! The page is bilingual and the language is per-instance UI state, so unlike
//! a single global loader we keep one loader per [`Lang`] and every lookup names
//! the language it wants:
//! ```ignore
//! use crate::i18n::Lang;
//! use crate::t;
//! let label = t!(Lang::Es, "nav-services");
//! ```
//!
//! Content tables store keys rather than literals; resolve those with [`tr`].
//!
//! NOTE: The hyphenated filename `loaiza5-ui.ftl` is canonical across all locales.
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(lang, "nav-services")
///     t!(Lang::En, "hero-title")
///
/// This expands to `fl!(loader(lang), ...)`, so keys are still checked
/// against the fallback FTL at compile time.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
pub const DOMAIN: &str = "loaiza5-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Languages the site ships copy for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Es];

    /// BCP 47 tag, also used for the document `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en-US",
            Lang::Es => "es-ES",
        }
    }

    pub fn identifier(self) -> LanguageIdentifier {
        match self {
            Lang::En => langid!("en-US"),
            Lang::Es => langid!("es-ES"),
        }
    }

    /// Short label for the toggle button.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Es => "ES",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }

    /// Map a requested language list to a supported language. Only the first
    /// entry counts: a browser asking for `en` then `es` gets English.
    pub fn from_requested(requested: &[LanguageIdentifier]) -> Self {
        match requested.first() {
            Some(id) if id.language.as_str() == "es" => Lang::Es,
            _ => Lang::En,
        }
    }

    /// Initial language from the browser (web) or OS (native) preferences.
    pub fn detect() -> Self {
        Self::from_requested(&requested_languages())
    }
}

static EN_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::En));
static ES_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::Es));

fn build_loader(lang: Lang) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Lang::En.identifier());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.identifier()]) {
        tracing::warn!(lang = lang.tag(), %err, "failed selecting language; continuing with fallback");
    }
    // Strings end up inside mailto/wa.me URIs; no bidi isolation marks.
    loader.set_use_isolating(false);
    loader
}

/// Loader for `lang`, consumed by `t!` and [`tr`].
pub fn loader(lang: Lang) -> &'static FluentLanguageLoader {
    match lang {
        Lang::En => &EN_LOADER,
        Lang::Es => &ES_LOADER,
    }
}

/// Runtime lookup for keys stored in content tables.
pub fn tr(lang: Lang, key: &str) -> String {
    loader(lang).get(key)
}

/// Whether `key` resolves in `lang` (fallback included).
pub fn has_key(lang: Lang, key: &str) -> bool {
    loader(lang).has(key)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
