//! Outbound links: WhatsApp deep links and external-link policy.

use crate::config::{WHATSAPP_BASE_URL, WHATSAPP_NUMBER};

/// `target` for links that leave the page.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// `rel` preventing the opened page from reaching `window.opener`.
pub const SAFE_REL: &str = "noopener noreferrer";

/// Whether a link leaves the page or navigates in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// `http://` or `https://` destination, opened in a new tab
    External,
    /// Anchor, relative path, `mailto:`... opened in place
    Internal,
}

impl LinkKind {
    pub fn classify(href: &str) -> Self {
        let lower = href.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }

    pub fn target(self) -> Option<&'static str> {
        match self {
            LinkKind::External => Some(NEW_CONTEXT_TARGET),
            LinkKind::Internal => None,
        }
    }

    pub fn rel(self) -> Option<&'static str> {
        match self {
            LinkKind::External => Some(SAFE_REL),
            LinkKind::Internal => None,
        }
    }
}

/// Build a WhatsApp deep link to the business number.
///
/// A non-empty `message` is percent-encoded into the `text` query parameter.
pub fn whatsapp_url(message: Option<&str>) -> String {
    let mut url = format!("{}{}", WHATSAPP_BASE_URL, WHATSAPP_NUMBER);
    if let Some(text) = message.filter(|t| !t.trim().is_empty()) {
        url.push_str("?text=");
        url.push_str(&urlencoding::encode(text));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_external() {
        assert_eq!(LinkKind::classify("https://wa.me/5493813594194"), LinkKind::External);
        assert_eq!(LinkKind::classify("http://example.com"), LinkKind::External);
        assert_eq!(LinkKind::classify("HTTPS://EXAMPLE.COM"), LinkKind::External);
    }

    #[test]
    fn test_classify_internal() {
        assert_eq!(LinkKind::classify("#nuestro-producto"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("mailto:a@b.c"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("/media/hero.png"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("httpfoo"), LinkKind::Internal);
    }

    #[test]
    fn test_external_links_are_isolated() {
        let kind = LinkKind::classify("https://instagram.com/camburpinton5");
        assert_eq!(kind.target(), Some("_blank"));
        assert_eq!(kind.rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn test_internal_links_have_no_target_or_rel() {
        let kind = LinkKind::classify("#menu");
        assert_eq!(kind.target(), None);
        assert_eq!(kind.rel(), None);
    }

    #[test]
    fn test_whatsapp_url_without_message() {
        assert_eq!(whatsapp_url(None), "https://wa.me/5493813594194");
        assert_eq!(whatsapp_url(Some("")), "https://wa.me/5493813594194");
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = whatsapp_url(Some("Hola 👋 ¿precio?"));
        assert_eq!(
            url,
            "https://wa.me/5493813594194?text=Hola%20%F0%9F%91%8B%20%C2%BFprecio%3F"
        );
    }
}
