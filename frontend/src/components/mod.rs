//! UI Components for the Cambur Pintón landing page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Building Blocks
//! - [`Logo`] - Brand image and name
//! - [`TagBadge`] - Pill label
//! - [`CtaButton`] - Call-to-action link with external-link isolation
//! - [`SectionTitle`] - Eyebrow, heading and subtitle
//! - [`ProductCard`] - One product with its WhatsApp order button
//!
//! # Page Sections
//! - [`Header`] - Navigation bar with mobile menu
//! - [`Hero`] - Headline and primary CTAs
//! - [`VideoSection`] - Product video and highlights
//! - [`MenuSection`] - Product grid
//! - [`Benefits`] - Benefit cards
//! - [`Testimonials`] - Customer quotes
//! - [`Contact`] - WhatsApp message and social links
//! - [`Footer`] - Page footer
//! - [`FloatingCta`] - Fixed WhatsApp button
//! - [`Seo`] - Document head metadata

mod logo;
mod tag_badge;
mod cta_button;
mod section_title;
mod product_card;
mod header;
mod hero;
mod video_section;
mod menu_section;
mod benefits;
mod testimonials;
mod contact;
mod footer;
mod floating_cta;
mod seo;

pub use logo::*;
pub use tag_badge::*;
pub use cta_button::*;
pub use section_title::*;
pub use product_card::*;
pub use header::*;
pub use hero::*;
pub use video_section::*;
pub use menu_section::*;
pub use benefits::*;
pub use testimonials::*;
pub use contact::*;
pub use footer::*;
pub use floating_cta::*;
pub use seo::*;

/// Render a view to HTML inside a throwaway reactive runtime.
#[cfg(test)]
pub(crate) fn render_html<F, N>(f: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: leptos::IntoView,
{
    let runtime = leptos::create_runtime();
    let html = leptos::ssr::render_to_string(f).to_string();
    runtime.dispose();
    html
}
