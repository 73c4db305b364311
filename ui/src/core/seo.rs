//! schema.org structured data for search engines.

use serde_json::{json, Value};

use crate::core::config::SiteConfig;
use crate::core::content::{AREA_SERVED, BUSINESS_NAME, CONTACT_EMAIL, SITE_URL};

pub fn structured_data(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "HomeAndConstructionBusiness",
        "name": BUSINESS_NAME,
        "telephone": config.phone_e164,
        "email": CONTACT_EMAIL,
        "areaServed": AREA_SERVED,
        "url": SITE_URL,
        "description": "Pool cages & rescreens, screen lanais, carports, glass & screen rooms, repairs & tear downs.",
        "offers": {
            "@type": "Offer",
            "name": "15% Off for New Customers",
            "price": 0,
            "priceCurrency": "USD"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{merge, PartialConfig, DEFAULTS};

    #[test]
    fn telephone_follows_effective_config() {
        let cfg = merge(
            &DEFAULTS,
            &PartialConfig::default(),
            &PartialConfig {
                business_phone_e164: Some("+10000000000".into()),
                ..Default::default()
            },
        );
        let data = structured_data(&cfg);
        assert_eq!(data["telephone"], "+10000000000");
        assert_eq!(data["@type"], "HomeAndConstructionBusiness");
        assert_eq!(data["offers"]["priceCurrency"], "USD");
    }
}
