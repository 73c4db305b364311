#![cfg(test)]
/*!
Theme selector lint for the web build.

Checks that the class names the landing page components emit are still
defined by the shared stylesheets under `ui/assets/`. A substring check is
enough to catch a renamed or dropped block before it ships unstyled.

When a component starts relying on a new class, add it to the matching list.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".site {",
    ".button {",
    ".button--primary",
    ".phone-link",
    ".badge--offer",
    ".section {",
    ".section__title",
    ".section__subtitle",
    ".hero__title",
    ".hero__actions",
    ".hero__offer",
    ".card {",
    ".card-grid--three",
    ".service-card__icon",
    ".why-list",
    ".project-card__media",
    ".project-card__features",
    ".review-card__stars",
    ".review-card__meta",
    ".reviews__source",
    ".map-frame",
    ".quote-form {",
    ".quote-form__field",
    ".quote-form__actions",
    ".contact-card__links",
    ".floating-contact",
    ".footer__inner",
    ".footer__legal",
    "@media (min-width: 768px)",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__brand",
    ".navbar__links",
    ".navbar__links--open",
    ".navbar__link",
    ".navbar__actions",
    ".navbar__locale",
    ".navbar__menu-toggle",
];

fn missing<'a>(css: &str, selectors: &'a [&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selectors in ui/assets/theme/main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_sheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, REQUIRED_NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selectors in ui/assets/styling/navbar.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars), \
         was the file truncated or moved?"
    );
}
