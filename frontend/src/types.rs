//! Common types used across the landing page.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Navigation Types** - page sections and nav entries
//! - **Content Types** - products, benefits, testimonials
//! - **UI State** - mobile menu state machine
//! - **Error Types** - frontend error handling

use std::fmt;

// =============================================================================
// Navigation Types
// =============================================================================

/// A section of the landing page reachable through an in-page anchor.
///
/// Every `<section>` takes its `id` from [`Section::anchor`], so nav entries
/// built on this enum can never dangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Inicio,
    NuestroProducto,
    Menu,
    Beneficios,
    Testimonios,
    Contacto,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Inicio,
        Section::NuestroProducto,
        Section::Menu,
        Section::Beneficios,
        Section::Testimonios,
        Section::Contacto,
    ];

    /// Anchor identifier used as the section's `id` attribute.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::NuestroProducto => "nuestro-producto",
            Section::Menu => "menu",
            Section::Beneficios => "beneficios",
            Section::Testimonios => "testimonios",
            Section::Contacto => "contacto",
        }
    }

    /// In-page link to the section (`#anchor`).
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// A navigation bar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Target section
    pub section: Section,
    /// Visible label
    pub label: &'static str,
}

impl NavEntry {
    pub fn id(&self) -> &'static str {
        self.section.anchor()
    }

    pub fn href(&self) -> String {
        self.section.href()
    }
}

// =============================================================================
// Content Types
// =============================================================================

/// Price label shown when a product has no explicit price ("ask us").
pub const DEFAULT_PRICE: &str = "Consultar";

/// A product of the catalogue.
///
/// Static content authored with the page; never mutated at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRecord {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Free-form price, `None` means [`DEFAULT_PRICE`]
    pub price: Option<&'static str>,
    /// Image filename under the media directory
    pub image: &'static str,
    /// Available presentations, in display order
    pub variants: &'static [&'static str],
    /// Optional badge shown on the card corner
    pub tag: Option<&'static str>,
}

impl ProductRecord {
    /// Price text to display.
    pub fn price_label(&self) -> &'static str {
        price_label(self.price)
    }

    /// Pre-filled WhatsApp message for ordering this product.
    pub fn order_message(&self) -> String {
        format!("Hola Cambur Pintón 👋 Quiero pedir: {}. ¿Me pasás opciones y precio?", self.name)
    }
}

/// Resolve an optional price to its display text.
pub fn price_label<'a>(price: Option<&'a str>) -> &'a str {
    match price {
        Some(p) if !p.trim().is_empty() => p,
        _ => DEFAULT_PRICE,
    }
}

/// A benefit card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub body: &'static str,
}

/// A customer testimonial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    /// Quote, without surrounding quotation marks
    pub quote: &'static str,
    /// Author and neighbourhood
    pub author: &'static str,
}

/// Social network or contact channel shown in the contact section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// SVG path data for a 24x24 icon
    pub icon: &'static str,
}

// =============================================================================
// UI State
// =============================================================================

/// Visibility of the mobile navigation panel.
///
/// Starts `Closed`. The toggle button flips it; activating any nav entry
/// closes it. Nothing else changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// State after the menu button is activated.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after a nav entry is activated.
    pub fn after_navigation(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// None of these reach the visitor: callers log them and fall back to a
/// working default.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Invalid deployment configuration.
    Config(String),
    /// A browser API is missing or refused the call.
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_anchors_are_unique() {
        let anchors: HashSet<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_section_href() {
        assert_eq!(Section::NuestroProducto.href(), "#nuestro-producto");
        assert_eq!(Section::Inicio.href(), "#inicio");
    }

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_menu_toggle_opens_then_closes() {
        let state = MenuState::default().toggled();
        assert!(state.is_open());
        assert!(!state.toggled().is_open());
    }

    #[test]
    fn test_menu_navigation_closes() {
        assert_eq!(MenuState::Open.after_navigation(), MenuState::Closed);
        assert_eq!(MenuState::Closed.after_navigation(), MenuState::Closed);
    }

    #[test]
    fn test_price_label_defaults_to_consultar() {
        assert_eq!(price_label(None), "Consultar");
        assert_eq!(price_label(Some("  ")), "Consultar");
        assert_eq!(price_label(Some("$ 4.500")), "$ 4.500");
    }

    #[test]
    fn test_order_message_names_product() {
        let product = ProductRecord {
            id: "x",
            name: "Salsas caseras",
            description: "",
            price: None,
            image: "x.jpg",
            variants: &[],
            tag: None,
        };
        assert!(product.order_message().contains("Salsas caseras"));
        assert_eq!(product.price_label(), DEFAULT_PRICE);
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Config("bad base".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad base");
    }
}
