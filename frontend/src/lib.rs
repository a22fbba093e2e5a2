//! Cambur Pintón - Landing page (Rust/Leptos)
//!
//! A WebAssembly single-page site for a homemade healthy food brand:
//! product video, catalogue, benefits, testimonials and WhatsApp ordering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (SiteConfig resolved once, passed down as a prop)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Seo (title, social cards, font, JSON-LD)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Landing (owns MenuState)                                    │
//! │  ├── Header (nav, mobile menu)                               │
//! │  ├── Hero                         #inicio                    │
//! │  ├── VideoSection                 #nuestro-producto          │
//! │  ├── MenuSection (PRODUCTS)       #menu                      │
//! │  ├── Benefits                     #beneficios                │
//! │  ├── Testimonials                 #testimonios               │
//! │  ├── Contact                      #contacto                  │
//! │  ├── Footer                                                  │
//! │  └── FloatingCta                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Site constants, base path and theme tokens
//! - [`types`] - Common types (Section, ProductRecord, MenuState, AppError)
//! - [`content`] - Static page content
//! - [`components`] - UI components (Header, ProductCard, VideoSection, etc.)
//! - [`services`] - WhatsApp links and scroll reveal

use leptos::*;
use leptos_meta::provide_meta_context;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod content;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::{BasePath, SiteConfig};

// Types
pub use types::{
    // Navigation
    NavEntry, Section,
    // Content
    ProductRecord,
    // UI state
    MenuState,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    log::info!("🌐 Serving from base path {}", config.base_path);

    view! {
        <Seo config=config.clone()/>
        <Landing config=config/>
    }
}

/// Page root. Owns the only piece of UI state: the mobile menu.
#[component]
pub fn Landing(config: SiteConfig) -> impl IntoView {
    let (menu, set_menu) = create_signal(MenuState::default());

    view! {
        <div
            class="scroll-smooth bg-gradient-to-b from-emerald-50 via-lime-50 to-amber-50 text-stone-900"
            style=format!("font-family: {}", crate::config::FONT_STACK)
        >
            <Header config=config.clone() menu=menu set_menu=set_menu/>

            <main>
                <Hero config=config.clone()/>
                <VideoSection config=config.clone()/>
                <MenuSection/>
                <Benefits/>
                <Testimonials/>
                <Contact/>
            </main>

            <Footer config=config/>
            <FloatingCta/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    fn render_landing() -> String {
        render_html(|| {
            let config = SiteConfig::new(BasePath::parse("/cambur/").unwrap());
            view! { <Landing config=config/> }
        })
    }

    #[test]
    fn test_every_anchor_rendered_exactly_once() {
        let html = render_landing();
        for section in Section::ALL {
            let id = format!(r#"id="{}""#, section.anchor());
            assert_eq!(html.matches(&id).count(), 1, "section {:?}", section);
        }
    }

    #[test]
    fn test_mobile_menu_closed_on_first_render() {
        let html = render_landing();
        assert!(!html.contains("mobile-menu"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_media_resolved_against_base_path() {
        let html = render_landing();
        assert!(html.contains("/cambur/media/NUESTRO%20PRODUCTO.mp4"));
        assert!(html.contains("/cambur/media/logo-cambur.svg"));
    }
}
