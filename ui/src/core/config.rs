//! Site settings: compiled-in defaults, the optional host-page record and
//! per-instance overrides, merged once into a [`SiteConfig`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the optional global the host page may define before the bundle loads.
pub const HOST_CONFIG_GLOBAL: &str = "LOAIZA5_CONFIG";

/// One configuration source. Every field is optional; see [`merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialConfig {
    pub ga_measurement_id: Option<String>,
    pub business_phone_e164: Option<String>,
    pub business_phone_display: Option<String>,
    pub whatsapp_number: Option<String>,
    pub google_places_api_key: Option<String>,
    pub google_place_id: Option<String>,
}

impl PartialConfig {
    /// Lenient read of the host-page record.
    ///
    /// Anything that is not an object reads as empty. A recognised key whose
    /// value is not a non-blank string is dropped on its own; the rest of the
    /// record still applies. Unknown keys are ignored.
    pub fn from_host(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            if !value.is_null() {
                tracing::warn!("host config is not an object; ignoring it");
            }
            return Self::default();
        };
        let field = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            ga_measurement_id: field("gaMeasurementId"),
            business_phone_e164: field("businessPhoneE164"),
            business_phone_display: field("businessPhoneDisplay"),
            whatsapp_number: field("whatsappNumber"),
            google_places_api_key: field("googlePlacesApiKey"),
            google_place_id: field("googlePlaceId"),
        }
    }

    /// Parse a host record from JSON text; invalid JSON reads as empty.
    pub fn from_host_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_host(&value),
            Err(err) => {
                tracing::warn!(%err, "host config is not valid JSON; ignoring it");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Compiled-in settings. Required fields are not optional here, which is what
/// guarantees a usable phone and WhatsApp target after any merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteDefaults {
    pub ga_measurement_id: Option<&'static str>,
    pub business_phone_e164: &'static str,
    pub business_phone_display: &'static str,
    pub whatsapp_number: &'static str,
    pub google_places_api_key: Option<&'static str>,
    pub google_place_id: Option<&'static str>,
}

pub const DEFAULTS: SiteDefaults = SiteDefaults {
    ga_measurement_id: Some("G-XXXXXXXXXX"),
    business_phone_e164: "+18137846949",
    business_phone_display: "+1-813-784-6949",
    whatsapp_number: "18137846949",
    google_places_api_key: None,
    google_place_id: None,
};

/// Effective settings for one page instance. Immutable after [`merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub phone_e164: String,
    pub phone_display: String,
    pub whatsapp_number: String,
    /// `None` when analytics is not enabled.
    pub analytics_id: Option<String>,
    pub places_api_key: Option<String>,
    pub place_id: Option<String>,
}

impl SiteConfig {
    /// Merge `overrides` and `host` over [`DEFAULTS`].
    pub fn resolve(host: &PartialConfig, overrides: &PartialConfig) -> Self {
        let config = merge(&DEFAULTS, host, overrides);
        tracing::info!(
            analytics = config.analytics_id.is_some(),
            reviews = config.reviews_enabled(),
            "site config resolved"
        );
        config
    }

    pub fn reviews_enabled(&self) -> bool {
        self.places_api_key.is_some() && self.place_id.is_some()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        merge(&DEFAULTS, &PartialConfig::default(), &PartialConfig::default())
    }
}

/// Shallow, field-by-field merge. Precedence: `overrides` > `host` > `defaults`.
pub fn merge(defaults: &SiteDefaults, host: &PartialConfig, overrides: &PartialConfig) -> SiteConfig {
    let pick = |o: &Option<String>, h: &Option<String>| -> Option<String> {
        [o, h]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
    };
    let required = |o: &Option<String>, h: &Option<String>, d: &str| pick(o, h).unwrap_or_else(|| d.to_string());
    let optional = |o: &Option<String>, h: &Option<String>, d: Option<&str>| {
        pick(o, h)
            .or_else(|| d.map(str::to_string))
            .filter(|v| !is_placeholder(v))
    };

    SiteConfig {
        phone_e164: required(&overrides.business_phone_e164, &host.business_phone_e164, defaults.business_phone_e164),
        phone_display: required(
            &overrides.business_phone_display,
            &host.business_phone_display,
            defaults.business_phone_display,
        ),
        whatsapp_number: required(&overrides.whatsapp_number, &host.whatsapp_number, defaults.whatsapp_number),
        analytics_id: optional(&overrides.ga_measurement_id, &host.ga_measurement_id, defaults.ga_measurement_id)
            .filter(|id| is_valid_measurement_id(id)),
        places_api_key: optional(
            &overrides.google_places_api_key,
            &host.google_places_api_key,
            defaults.google_places_api_key,
        ),
        place_id: optional(&overrides.google_place_id, &host.google_place_id, defaults.google_place_id),
    }
}

/// Values shipped as "fill me in" markers rather than real settings.
pub fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.contains("XXXX") || v.to_ascii_uppercase().starts_with("YOUR_")
}

// Interpolated into an inline script, so keep it to the gtag id alphabet.
fn is_valid_measurement_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phone(v: &str) -> PartialConfig {
        PartialConfig {
            business_phone_e164: Some(v.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_alone_are_usable() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.phone_e164, DEFAULTS.business_phone_e164);
        assert_eq!(cfg.whatsapp_number, DEFAULTS.whatsapp_number);
        // Shipped analytics id is a placeholder.
        assert_eq!(cfg.analytics_id, None);
        assert!(!cfg.reviews_enabled());
    }

    #[test]
    fn default_phone_is_dialable() {
        let digits = DEFAULTS
            .business_phone_e164
            .strip_prefix('+')
            .expect("E.164 starts with +");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert!(DEFAULTS.whatsapp_number.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn override_phone_wins_over_host_and_default() {
        let cfg = merge(&DEFAULTS, &phone("+19999999999"), &phone("+10000000000"));
        assert_eq!(cfg.phone_e164, "+10000000000");

        let cfg = merge(&DEFAULTS, &PartialConfig::default(), &phone("+10000000000"));
        assert_eq!(cfg.phone_e164, "+10000000000");
    }

    #[test]
    fn host_wins_over_default() {
        let cfg = merge(&DEFAULTS, &phone("+19999999999"), &PartialConfig::default());
        assert_eq!(cfg.phone_e164, "+19999999999");
        assert_eq!(cfg.phone_display, DEFAULTS.business_phone_display);
    }

    #[test]
    fn blank_values_never_win() {
        let cfg = merge(&DEFAULTS, &phone("+19999999999"), &phone("   "));
        assert_eq!(cfg.phone_e164, "+19999999999");
        let cfg = merge(&DEFAULTS, &phone(""), &phone(""));
        assert_eq!(cfg.phone_e164, DEFAULTS.business_phone_e164);
    }

    #[test]
    fn required_fields_non_empty_for_every_source_combination() {
        let candidates = [None, Some(String::new()), Some("  ".to_string()), Some("+15550001111".to_string())];
        for o in &candidates {
            for h in &candidates {
                let overrides = PartialConfig {
                    business_phone_e164: o.clone(),
                    business_phone_display: o.clone(),
                    whatsapp_number: o.clone(),
                    ..Default::default()
                };
                let host = PartialConfig {
                    business_phone_e164: h.clone(),
                    business_phone_display: h.clone(),
                    whatsapp_number: h.clone(),
                    ..Default::default()
                };
                let cfg = merge(&DEFAULTS, &host, &overrides);
                assert!(!cfg.phone_e164.is_empty());
                assert!(!cfg.phone_display.is_empty());
                assert!(!cfg.whatsapp_number.is_empty());
            }
        }
    }

    #[test]
    fn host_record_reads_known_keys_and_ignores_the_rest() {
        let host = PartialConfig::from_host(&json!({
            "gaMeasurementId": "G-ABC123",
            "businessPhoneE164": "+18135550000",
            "googlePlacesApiKey": "key",
            "googlePlaceId": "place",
            "somethingElse": true,
        }));
        assert_eq!(host.ga_measurement_id.as_deref(), Some("G-ABC123"));
        assert_eq!(host.business_phone_e164.as_deref(), Some("+18135550000"));
        assert_eq!(host.whatsapp_number, None);

        let cfg = SiteConfig::resolve(&host, &PartialConfig::default());
        assert_eq!(cfg.analytics_id.as_deref(), Some("G-ABC123"));
        assert!(cfg.reviews_enabled());
    }

    #[test]
    fn malformed_host_record_reads_as_empty() {
        for value in [json!(null), json!([1, 2]), json!("G-ABC"), json!(42)] {
            assert!(PartialConfig::from_host(&value).is_empty());
        }
        assert!(PartialConfig::from_host_json("{not json").is_empty());

        // Wrong-typed fields drop individually.
        let host = PartialConfig::from_host(&json!({
            "businessPhoneE164": 8137846949u64,
            "whatsappNumber": "18135551234",
        }));
        assert_eq!(host.business_phone_e164, None);
        assert_eq!(host.whatsapp_number.as_deref(), Some("18135551234"));
    }

    #[test]
    fn placeholder_integrations_are_disabled() {
        let host = PartialConfig {
            ga_measurement_id: Some("G-XXXXXXX".into()),
            google_places_api_key: Some("YOUR_API_KEY".into()),
            google_place_id: Some("ChIJ123".into()),
            ..Default::default()
        };
        let cfg = merge(&DEFAULTS, &host, &PartialConfig::default());
        assert_eq!(cfg.analytics_id, None);
        assert_eq!(cfg.places_api_key, None);
        assert!(!cfg.reviews_enabled());
    }

    #[test]
    fn script_unsafe_measurement_id_is_rejected() {
        let cfg = merge(
            &DEFAULTS,
            &PartialConfig {
                ga_measurement_id: Some("G-1');alert(1)//".into()),
                ..Default::default()
            },
            &PartialConfig::default(),
        );
        assert_eq!(cfg.analytics_id, None);
    }

    #[test]
    fn override_record_deserializes_from_camel_case() {
        let overrides: PartialConfig =
            serde_json::from_value(json!({ "businessPhoneE164": "+10000000000" })).unwrap();
        assert_eq!(overrides, phone("+10000000000"));
    }
}
