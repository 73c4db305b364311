//! Static page content. Copy lives in the Fluent tables; these records hold
//! the keys, asset paths and the fixed ordering.

use crate::i18n::{tr, Lang};

pub const BUSINESS_NAME: &str = "LOAIZA5 ALUMINUM LLC";
pub const CONTACT_EMAIL: &str = "Loaiza5Aluminun@gmail.com";
pub const AREA_SERVED: &str = "Tampa Bay, FL";
pub const SITE_URL: &str = "https://example.com/";
pub const HERO_IMAGE: &str = "/images/hero.jpg";
pub const BRAND_MARK: &str = "L5";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d56335.048441204226!2d-82.527!3d27.95!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x88c2c4c1b3bf3e9f%3A0x63a5c1b0c!2sTampa%2C%20FL!5e0!3m2!1sen!2sus!4v1700000000000";

/// Glyph shown on a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Pool,
    Wrench,
    Glass,
    Porch,
    Carport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub icon: IconKind,
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

impl ServiceOffering {
    pub fn title(&self, lang: Lang) -> String {
        tr(lang, self.title_key)
    }

    pub fn description(&self, lang: Lang) -> String {
        tr(lang, self.desc_key)
    }
}

pub static SERVICES: [ServiceOffering; 6] = [
    ServiceOffering {
        icon: IconKind::Pool,
        title_key: "service-pool-title",
        desc_key: "service-pool-desc",
    },
    ServiceOffering {
        icon: IconKind::Wrench,
        title_key: "service-repair-title",
        desc_key: "service-repair-desc",
    },
    ServiceOffering {
        icon: IconKind::Glass,
        title_key: "service-glass-title",
        desc_key: "service-glass-desc",
    },
    ServiceOffering {
        icon: IconKind::Porch,
        title_key: "service-lanai-title",
        desc_key: "service-lanai-desc",
    },
    ServiceOffering {
        icon: IconKind::Carport,
        title_key: "service-carport-title",
        desc_key: "service-carport-desc",
    },
    ServiceOffering {
        icon: IconKind::Porch,
        title_key: "service-porch-title",
        desc_key: "service-porch-desc",
    },
];

/// Gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub image: &'static str,
    pub title_key: &'static str,
    pub feature_keys: [&'static str; 3],
    pub alt_key: &'static str,
}

impl Project {
    pub fn title(&self, lang: Lang) -> String {
        tr(lang, self.title_key)
    }

    pub fn features(&self, lang: Lang) -> Vec<String> {
        self.feature_keys.iter().map(|k| tr(lang, k)).collect()
    }

    pub fn alt(&self, lang: Lang) -> String {
        tr(lang, self.alt_key)
    }
}

pub static PROJECTS: [Project; 4] = [
    Project {
        image: "/images/project1.jpg",
        title_key: "project-1-title",
        feature_keys: ["project-1-feature-1", "project-1-feature-2", "project-1-feature-3"],
        alt_key: "project-1-alt",
    },
    Project {
        image: "/images/project2.jpg",
        title_key: "project-2-title",
        feature_keys: ["project-2-feature-1", "project-2-feature-2", "project-2-feature-3"],
        alt_key: "project-2-alt",
    },
    Project {
        image: "/images/project3.jpg",
        title_key: "project-3-title",
        feature_keys: ["project-3-feature-1", "project-3-feature-2", "project-3-feature-3"],
        alt_key: "project-3-alt",
    },
    Project {
        image: "/images/project4.jpg",
        title_key: "project-4-title",
        feature_keys: ["project-4-feature-1", "project-4-feature-2", "project-4-feature-3"],
        alt_key: "project-4-alt",
    },
];

pub static WHY_US_KEYS: [&str; 6] = [
    "why-local",
    "why-quotes",
    "why-pro",
    "why-screens",
    "why-repair",
    "why-guarantee",
];

pub static HERO_POINT_KEYS: [&str; 4] = [
    "hero-point-response",
    "hero-point-materials",
    "hero-point-craft",
    "hero-point-inspection",
];

/// Compiled-in testimonial shown when live reviews are unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackTestimonial {
    pub author: &'static str,
    pub rating: u8,
    pub text_key: &'static str,
    pub when_key: &'static str,
}

pub static FALLBACK_TESTIMONIALS: [FallbackTestimonial; 3] = [
    FallbackTestimonial {
        author: "Maria G.",
        rating: 5,
        text_key: "review-1-text",
        when_key: "review-1-when",
    },
    FallbackTestimonial {
        author: "Robert T.",
        rating: 5,
        text_key: "review-2-text",
        when_key: "review-2-when",
    },
    FallbackTestimonial {
        author: "Ana L.",
        rating: 5,
        text_key: "review-3-text",
        when_key: "review-3-when",
    },
];

/// Every content key, for the locale coverage test.
pub fn all_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for s in &SERVICES {
        keys.extend([s.title_key, s.desc_key]);
    }
    for p in &PROJECTS {
        keys.push(p.title_key);
        keys.extend(p.feature_keys);
        keys.push(p.alt_key);
    }
    keys.extend(WHY_US_KEYS);
    keys.extend(HERO_POINT_KEYS);
    for t in &FALLBACK_TESTIMONIALS {
        keys.extend([t.text_key, t.when_key]);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::has_key;

    #[test]
    fn tables_have_fixed_lengths() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(PROJECTS.len(), 4);
        assert!(!FALLBACK_TESTIMONIALS.is_empty());
        assert!(!WHY_US_KEYS.is_empty());
    }

    #[test]
    fn images_are_local_assets() {
        assert!(HERO_IMAGE.starts_with("/images/"));
        for p in &PROJECTS {
            assert!(p.image.starts_with("/images/"), "{} outside /images/", p.image);
        }
    }

    #[test]
    fn contact_email_looks_like_an_address() {
        let (local, domain) = CONTACT_EMAIL.split_once('@').expect("missing @");
        assert!(!local.is_empty());
        assert!(domain.contains('.'));
    }

    #[test]
    fn fallback_ratings_are_in_range() {
        for t in &FALLBACK_TESTIMONIALS {
            assert!((1..=5).contains(&t.rating));
            assert!(!t.author.is_empty());
        }
    }

    #[test]
    fn every_content_key_resolves_in_every_language() {
        for lang in Lang::ALL {
            for key in all_keys() {
                assert!(has_key(lang, key), "{key} missing for {}", lang.tag());
            }
        }
    }

    #[test]
    fn content_is_localized() {
        assert_eq!(SERVICES[0].title(Lang::En), "Pool Cages & Rescreens");
        assert_ne!(SERVICES[0].title(Lang::Es), SERVICES[0].title(Lang::En));
        assert_eq!(PROJECTS[0].features(Lang::En).len(), 3);
    }
}
