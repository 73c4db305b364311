//! Locale parity for every language the site can switch to.
//!
//! The language list comes from `Lang::ALL`, so adding a variant without its
//! `i18n/<tag>/loaiza5-ui.ftl` (or with keys missing) fails here.

use std::collections::BTreeSet;
use std::path::PathBuf;

use ui::i18n::{available_languages, has_key, Lang, DOMAIN};

fn ftl_source(lang: Lang) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("i18n")
        .join(lang.tag())
        .join(format!("{DOMAIN}.ftl"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("no FTL for {} at {path:?}: {err}", lang.tag()))
}

/// Message ids in definition order. Attributes, terms and comments are skipped.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.', '-']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

#[test]
fn every_site_language_ships_a_complete_locale() {
    let fallback_src = ftl_source(Lang::default());
    let fallback: BTreeSet<&str> = message_ids(&fallback_src).into_iter().collect();
    assert!(!fallback.is_empty(), "fallback locale defines no messages");

    let mut failures = Vec::new();
    for lang in Lang::ALL {
        let src = ftl_source(lang);
        let ids = message_ids(&src);

        let mut seen = BTreeSet::new();
        let dups: Vec<_> = ids.iter().filter(|id| !seen.insert(**id)).collect();
        if !dups.is_empty() {
            failures.push(format!("{} defines twice: {dups:?}", lang.tag()));
        }

        let missing: Vec<_> = fallback.difference(&seen).collect();
        if !missing.is_empty() {
            failures.push(format!("{} is missing: {missing:?}", lang.tag()));
        }
        let extra: Vec<_> = seen.difference(&fallback).collect();
        if !extra.is_empty() {
            failures.push(format!("{} has keys unknown to the fallback: {extra:?}", lang.tag()));
        }

        let unresolved: Vec<_> = fallback.iter().filter(|id| !has_key(lang, id)).collect();
        if !unresolved.is_empty() {
            failures.push(format!("{} loader cannot resolve: {unresolved:?}", lang.tag()));
        }
    }

    assert!(failures.is_empty(), "locale parity failed:\n{}", failures.join("\n"));
}

#[test]
fn embedded_locales_match_site_languages() {
    let mut expected: Vec<String> = Lang::ALL.iter().map(|l| l.tag().to_string()).collect();
    expected.sort();
    assert_eq!(available_languages(), expected);
}
