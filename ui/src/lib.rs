//! Shared UI crate for the LOAIZA5 ALUMINUM site: configuration, content,
//! lead handoff, reviews and every page component. Platform crates only launch
//! [`views::LandingPage`].

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Sticky header with anchors, language toggle and mobile menu (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;

    pub mod icon;
    pub use icon::Icon;

    mod phone_link;
    pub use phone_link::PhoneLink;

    mod section;
    pub use section::Section;

    mod quote_form;
    pub use quote_form::QuoteForm;

    mod floating_contact;
    pub use floating_contact::FloatingContact;
}

pub use views::LandingPage;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
