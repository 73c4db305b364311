//! Contact link builders shared by the header, contact card, footer and the
//! floating WhatsApp button.

use crate::core::content::CONTACT_EMAIL;

pub fn tel_href(phone_e164: &str) -> String {
    format!("tel:{phone_e164}")
}

pub fn mailto_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// `wa.me` click-to-chat link; wa.me wants the bare international number.
pub fn whatsapp_href(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if text.is_empty() {
        format!("https://wa.me/{digits}")
    } else {
        format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_keeps_e164() {
        assert_eq!(tel_href("+18137846949"), "tel:+18137846949");
    }

    #[test]
    fn whatsapp_strips_formatting() {
        assert_eq!(whatsapp_href("+1 (813) 784-6949", ""), "https://wa.me/18137846949");
        assert_eq!(
            whatsapp_href("18137846949", "Hi! A quote?"),
            "https://wa.me/18137846949?text=Hi%21%20A%20quote%3F"
        );
    }

    #[test]
    fn mailto_targets_business_inbox() {
        assert_eq!(mailto_href(), format!("mailto:{CONTACT_EMAIL}"));
    }
}
