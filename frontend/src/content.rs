//! Static page content.
//!
//! The single source of truth for everything the page lists: navigation,
//! products, benefits, testimonials and the pre-filled WhatsApp messages.
//! Components render from these tables and never inline copies of them.

use crate::config::{CONTACT_MAILTO, FACEBOOK_URL, INSTAGRAM_URL};
use crate::types::{Benefit, NavEntry, ProductRecord, Section, SocialLink, Testimonial};

// =============================================================================
// Media
// =============================================================================

pub const LOGO_FILE: &str = "logo-cambur.svg";
pub const HERO_IMAGE: &str = "hero.png";
pub const VIDEO_FILE: &str = "NUESTRO PRODUCTO.mp4";
pub const VIDEO_POSTER: &str = "cocina-poster.jpg";

// =============================================================================
// Navigation
// =============================================================================

/// Navigation entries, in display order.
pub const NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry { section: Section::Inicio, label: "Inicio" },
    NavEntry { section: Section::NuestroProducto, label: "Video" },
    NavEntry { section: Section::Menu, label: "Menú" },
    NavEntry { section: Section::Beneficios, label: "Beneficios" },
    NavEntry { section: Section::Testimonios, label: "Testimonios" },
    NavEntry { section: Section::Contacto, label: "Contacto" },
];

/// Footer shortcuts.
pub const FOOTER_LINKS: [NavEntry; 3] = [
    NavEntry { section: Section::Menu, label: "Menú" },
    NavEntry { section: Section::Beneficios, label: "Beneficios" },
    NavEntry { section: Section::Contacto, label: "Contacto" },
];

// =============================================================================
// Products
// =============================================================================

/// The product catalogue. The menu grid is rendered from this list.
pub static PRODUCTS: [ProductRecord; 3] = [
    ProductRecord {
        id: "pack3",
        name: "Arepas tradicionales (sin TACC)",
        description: "Envasadas al vacío. Ideales para freezer; plancha o horno en minutos.",
        price: None,
        image: "pack3.jpeg",
        variants: &["Packx3", "Packx6", "Packx12"],
        tag: Some("Estrella"),
    },
    ProductRecord {
        id: "burguer",
        name: "Hamburguesas saludables (freezer)",
        description: "De pollo/res/mixtas. Textura casera, cocción rápida, sin colorantes.",
        price: None,
        image: "burger1.jpg",
        variants: &["Packx3", "Packx6", "Packx12"],
        tag: Some("Próximamente"),
    },
    ProductRecord {
        id: "salsas",
        name: "Salsas caseras",
        description: "Criolla, ajo, guasacaca. Ingredientes reales; perfectas para acompañar.",
        price: None,
        image: "salsa1.jpg",
        variants: &["Criolla", "Ajo", "Guasacaca"],
        tag: Some("Próximamente"),
    },
];

/// Badges under the product grid.
pub const CATALOGUE_BADGES: [&str; 3] = [
    "Pedidos al por mayor",
    "Opciones sin TACC",
    "Eventos y catering",
];

// =============================================================================
// Highlights
// =============================================================================

pub const HERO_HIGHLIGHTS: [&str; 4] = [
    "Arepas sin TACC",
    "Freezer-friendly",
    "Ingredientes reales",
    "Envíos en Tucumán",
];

pub const VIDEO_HIGHLIGHTS: [&str; 3] = [
    "Arepas al vacío (sin TACC), listas para freezer o plancha.",
    "Hamburguesas saludables congeladas, cocción rápida.",
    "Salsas caseras, ingredientes reales y sin colorantes.",
];

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        title: "Sin TACC (arepas)",
        body: "Una opción noble para celiacos o quienes evitan harinas con gluten.",
    },
    Benefit {
        title: "Freezer-friendly",
        body: "Batch cooking inteligente: resolvés comidas sin perder calidad.",
    },
    Benefit {
        title: "Ingredientes reales",
        body: "Cocina honesta: sin colorantes y con sabor de casa.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Las arepas al vacío me salvan el desayuno: 5 minutos y quedan perfectas.",
        author: "Lucía · San Miguel",
    },
    Testimonial {
        quote: "Las hamburguesas del freezer tienen textura casera, no parecen de fábrica.",
        author: "Agustín · Yerba Buena",
    },
    Testimonial {
        quote: "La guasacaca es un viaje. Se nota que usan ingredientes de verdad.",
        author: "Caro · Tafí Viejo",
    },
];

// =============================================================================
// Contact
// =============================================================================

/// Pre-filled WhatsApp messages, one per call site that needs context.
pub mod messages {
    /// Sent from the video section.
    pub const VIDEO: &str = "Hola Cambur Pintón 👋 Acabo de ver el video y quiero pedir arepas/hamburguesas/salsas. ¿Me pasás opciones y precio?";

    /// Sent from the contact card.
    pub const CONTACT: &str = "Hola Cambur Pintón 👋 Quiero hacer un pedido.";
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: INSTAGRAM_URL,
        icon: "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zm0 2a3 3 0 0 0-3 3v10a3 3 0 0 0 3 3h10a3 3 0 0 0 3-3V7a3 3 0 0 0-3-3H7zm5 3.5a5.5 5.5 0 1 1 0 11 5.5 5.5 0 0 1 0-11zm0 2a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7zM18 6.5a1 1 0 1 1 0 2 1 1 0 0 1 0-2z",
    },
    SocialLink {
        label: "Facebook",
        href: FACEBOOK_URL,
        icon: "M13 10h3.5l-.5 3H13v9h-3v-9H7v-3h3V8.5C10 6 11.5 4 15 4c1 0 2 .1 2 .1V7h-1.7C13.9 7 13 7.8 13 9.3V10z",
    },
    SocialLink {
        label: "Email",
        href: CONTACT_MAILTO,
        icon: "M3 5h18a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2zm0 2v.2l9 5.3 9-5.3V7H3zm18 10V9.3l-8.4 5a2 2 0 0 1-2.2 0L2 9.3V17h19z",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_section_has_exactly_one_nav_entry() {
        for section in Section::ALL {
            let count = NAV_ENTRIES.iter().filter(|e| e.section == section).count();
            assert_eq!(count, 1, "section {:?}", section);
        }
        assert_eq!(NAV_ENTRIES.len(), Section::ALL.len());
    }

    #[test]
    fn test_nav_ids_match_section_anchors() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        let ids: Vec<_> = NAV_ENTRIES.iter().map(|e| e.id()).collect();
        assert_eq!(
            ids,
            ["inicio", "nuestro-producto", "menu", "beneficios", "testimonios", "contacto"]
        );
        assert_eq!(ids, anchors);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn test_products_default_to_consultar() {
        assert!(PRODUCTS.iter().all(|p| p.price_label() == "Consultar"));
    }

    #[test]
    fn test_products_have_variants() {
        assert!(PRODUCTS.iter().all(|p| !p.variants.is_empty()));
    }

    #[test]
    fn test_social_links_include_mailto() {
        assert!(SOCIAL_LINKS.iter().any(|l| l.href.starts_with("mailto:")));
    }
}
