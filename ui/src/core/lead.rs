//! Quote-request handoff: form values in, `mailto:` URI out.
//!
//! Nothing is sent anywhere by this module. The page navigates to the URI and
//! the visitor's mail client takes over.

use crate::core::content::{BUSINESS_NAME, CONTACT_EMAIL, SERVICES};
use crate::i18n::Lang;
use crate::t;

/// Current values of the quote form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub service: String,
    pub message: String,
}

/// Localised labels used to write the mail subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadLabels {
    pub subject: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub service: String,
    pub message: String,
    pub footer: String,
}

impl LeadLabels {
    pub fn for_lang(lang: Lang) -> Self {
        Self {
            subject: t!(lang, "lead-subject"),
            name: t!(lang, "lead-name"),
            phone: t!(lang, "lead-phone"),
            email: t!(lang, "lead-email"),
            city: t!(lang, "lead-city"),
            service: t!(lang, "lead-service"),
            message: t!(lang, "lead-message"),
            footer: t!(lang, "lead-footer"),
        }
    }
}

impl LeadForm {
    /// Copy of the form with `service` set to the localised title of
    /// `SERVICES[index]`. An out-of-range index picks the first service.
    pub fn with_service(&self, index: usize, lang: Lang) -> Self {
        let offering = SERVICES.get(index).unwrap_or(&SERVICES[0]);
        Self {
            service: offering.title(lang),
            ..self.clone()
        }
    }

    pub fn subject(&self, labels: &LeadLabels) -> String {
        format!("{BUSINESS_NAME} – {} {}", labels.subject, self.name.trim())
    }

    pub fn body(&self, labels: &LeadLabels) -> String {
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n\n{}:\n{}\n\n{}",
            labels.name,
            self.name.trim(),
            labels.phone,
            self.phone.trim(),
            labels.email,
            self.email.trim(),
            labels.city,
            self.city.trim(),
            labels.service,
            self.service,
            labels.message,
            self.message.trim(),
            labels.footer,
        )
    }

    /// `mailto:` target with percent-encoded subject and body.
    pub fn mailto(&self, labels: &LeadLabels) -> String {
        format!(
            "mailto:{CONTACT_EMAIL}?subject={}&body={}",
            urlencoding::encode(&self.subject(labels)),
            urlencoding::encode(&self.body(labels)),
        )
    }
}
