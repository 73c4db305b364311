//! Page sections and the `LandingPage` entry component.

mod landing;
pub use landing::LandingPage;

mod footer;
mod hero;
mod projects;
mod quote;
mod service_area;
mod services;
mod testimonials;
mod why_us;

pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use quote::QuoteSection;
pub use service_area::ServiceArea;
pub use services::Services;
pub use testimonials::Testimonials;
pub use why_us::WhyUs;
