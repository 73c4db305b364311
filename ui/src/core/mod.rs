//! Non-visual logic: configuration, content tables, lead handoff, reviews and
//! the browser integrations. Everything here is testable without a DOM.

pub mod analytics;
pub mod config;
pub mod content;
pub mod lead;
pub mod links;
pub mod platform;
pub mod reviews;
pub mod seo;
