//! Application configuration.
//!
//! Centralized configuration for the Cambur Pintón landing page.
//! Contact destinations are fixed; the deployment base path is read at
//! build time from `CAMBUR_BASE_PATH` so the site can be served from a
//! sub-path (e.g. `/cambur/` on GitHub Pages).

use std::fmt;

use crate::{AppError, AppResult};

/// Brand name.
pub const SITE_NAME: &str = "Cambur Pintón";

/// Document title.
pub const SITE_TITLE: &str = "Cambur Pintón – Comida artesanal saludable en Tucumán";

/// Meta description.
pub const SITE_DESCRIPTION: &str = "Arepas sin TACC al vacío, hamburguesas saludables para freezer y salsas caseras. Mirá el video y pedí por WhatsApp.";

/// OpenGraph description.
pub const OG_DESCRIPTION: &str = "Qué ofrecemos, cómo lo preparamos y cómo pedir. Video + pedido por WhatsApp.";

/// Twitter card description.
pub const TWITTER_DESCRIPTION: &str = "Video del producto + pedido por WhatsApp.";

/// WhatsApp contact number (international format, digits only).
///
/// Every call-to-action on the page points here.
pub const WHATSAPP_NUMBER: &str = "5493813594194";

/// WhatsApp deep link prefix.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Contact e-mail.
pub const CONTACT_EMAIL: &str = "cambur.pinton.mia@gmail.com";
pub const CONTACT_MAILTO: &str = "mailto:cambur.pinton.mia@gmail.com";

pub const INSTAGRAM_URL: &str = "https://instagram.com/camburpinton5";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=61579434990193";

/// Delivery hours.
pub const BUSINESS_HOURS: &str = "Lun–Sáb, 9:00–19:00";

/// Delivery zone.
pub const DELIVERY_ZONE: &str = "Tucumán";

/// Subdirectory of the base path holding images and video.
pub const MEDIA_DIR: &str = "media/";

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/";

/// Base path captured at build time.
pub const BASE_PATH_ENV: Option<&str> = option_env!("CAMBUR_BASE_PATH");

/// Poppins web font (400/600/800).
pub const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Poppins:wght@400;600;800&display=swap";

/// Font stack applied to the page root.
pub const FONT_STACK: &str =
    "Poppins, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif";

/// Theme tokens, mirrored in `tailwind.config.js`.
pub mod theme {
    pub const PRIMARY: &str = "#2e7d32";
    pub const ACCENT: &str = "#f59e0b";
    pub const ACCENT2: &str = "#fb923c";
    pub const INK: &str = "#0f172a";
    pub const PAPER: &str = "#fffefb";
    pub const SHADOW_SOFT: &str = "0 10px 30px rgba(0,0,0,.08)";
}

// =============================================================================
// Base path
// =============================================================================

/// Deployment prefix every media reference is resolved against.
///
/// Always ends with `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Validate and normalize a base path.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        if trimmed.contains(char::is_whitespace) || trimmed.contains(['?', '#']) {
            return Err(AppError::Config(format!(
                "base path {:?} must not contain whitespace, '?' or '#'",
                trimmed
            )));
        }

        let allowed = ["/", "./", "http://", "https://"];
        if !allowed.iter().any(|prefix| trimmed.starts_with(prefix)) {
            return Err(AppError::Config(format!(
                "base path {:?} must start with '/', './', 'http://' or 'https://'",
                trimmed
            )));
        }

        if trimmed.starts_with("//") {
            return Err(AppError::Config(format!(
                "base path {:?} must not be protocol-relative",
                trimmed
            )));
        }

        if let Some(rest) = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
        {
            let host = rest.split('/').next().unwrap_or_default();
            if host.is_empty() {
                return Err(AppError::Config(format!(
                    "base path {:?} has no host",
                    trimmed
                )));
            }
        }

        let mut path = trimmed.to_string();
        if !path.ends_with('/') {
            path.push('/');
        }
        Ok(Self(path))
    }

    pub fn root() -> Self {
        Self(DEFAULT_BASE_PATH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve a media filename: `base + "media/" + percentEncode(file)`.
    pub fn media(&self, file: &str) -> String {
        format!("{}{}{}", self.0, MEDIA_DIR, urlencoding::encode(file))
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Site configuration
// =============================================================================

/// Configuration injected at the composition root and passed down as a prop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    pub base_path: BasePath,
}

impl SiteConfig {
    pub fn new(base_path: BasePath) -> Self {
        Self { base_path }
    }

    /// Build from the value captured at compile time.
    ///
    /// An invalid value is logged and replaced by `/`.
    pub fn from_build_env() -> Self {
        Self::from_raw(BASE_PATH_ENV)
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match BasePath::parse(raw) {
            Ok(base_path) => {
                log::debug!("📁 Base path: {}", base_path);
                Self::new(base_path)
            }
            Err(e) => {
                log::warn!("⚠️  {}; falling back to '{}'", e, DEFAULT_BASE_PATH);
                Self::default()
            }
        }
    }

    /// Resolve a media filename against the configured base path.
    pub fn media(&self, file: &str) -> String {
        self.base_path.media(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_appends_trailing_slash() {
        assert_eq!(BasePath::parse("/cambur").unwrap().as_str(), "/cambur/");
        assert_eq!(BasePath::parse("/cambur/").unwrap().as_str(), "/cambur/");
    }

    #[test]
    fn test_parse_empty_is_root() {
        assert_eq!(BasePath::parse("").unwrap(), BasePath::root());
        assert_eq!(BasePath::parse("   ").unwrap().as_str(), "/");
    }

    #[test]
    fn test_parse_accepts_absolute_urls() {
        let base = BasePath::parse("https://cdn.example.com/site").unwrap();
        assert_eq!(base.as_str(), "https://cdn.example.com/site/");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(matches!(BasePath::parse("cambur/"), Err(AppError::Config(_))));
        assert!(matches!(BasePath::parse("/cam bur/"), Err(AppError::Config(_))));
        assert!(matches!(BasePath::parse("/cambur/?x=1"), Err(AppError::Config(_))));
        assert!(matches!(BasePath::parse("/cambur/#top"), Err(AppError::Config(_))));
        assert!(matches!(BasePath::parse("//cdn.example.com/"), Err(AppError::Config(_))));
        assert!(matches!(BasePath::parse("http://"), Err(AppError::Config(_))));
        assert!(matches!(BasePath::parse("https:///site"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_media_resolution_for_subpath() {
        let config = SiteConfig::new(BasePath::parse("/cambur/").unwrap());
        assert_eq!(config.media("logo-cambur.svg"), "/cambur/media/logo-cambur.svg");
        assert_eq!(
            config.media("NUESTRO PRODUCTO.mp4"),
            "/cambur/media/NUESTRO%20PRODUCTO.mp4"
        );
    }

    #[test]
    fn test_media_encodes_special_characters() {
        let base = BasePath::root();
        assert_eq!(base.media("a b.svg"), "/media/a%20b.svg");
        assert_eq!(base.media("piña&co.jpg"), "/media/pi%C3%B1a%26co.jpg");
    }

    #[test]
    fn test_theme_tokens_match_tailwind_config() {
        let tailwind = include_str!("../tailwind.config.js");
        for token in [
            theme::PRIMARY,
            theme::ACCENT,
            theme::ACCENT2,
            theme::INK,
            theme::PAPER,
            theme::SHADOW_SOFT,
        ] {
            assert!(tailwind.contains(token), "missing {}", token);
        }
    }

    #[test]
    fn test_mailto_matches_contact_email() {
        assert_eq!(CONTACT_MAILTO, format!("mailto:{}", CONTACT_EMAIL));
    }

    #[test]
    fn test_from_raw_falls_back_on_invalid() {
        assert_eq!(SiteConfig::from_raw(Some("nope")), SiteConfig::default());
        assert_eq!(SiteConfig::from_raw(None).base_path.as_str(), "/");
        assert_eq!(
            SiteConfig::from_raw(Some("/cambur")).base_path.as_str(),
            "/cambur/"
        );
    }
}
