//! Product card for the menu grid.

use leptos::*;

use super::{CtaButton, TagBadge};
use crate::services::{whatsapp_url, Reveal, RevealOptions};
use crate::types::price_label;

/// One product: name, description, price, optional badge and an order CTA.
///
/// `price` falls back to "Consultar". `message` pre-fills the WhatsApp chat;
/// without it the CTA opens an empty conversation.
#[component]
pub fn ProductCard(
    #[prop(into)] name: String,
    #[prop(into)] desc: String,
    #[prop(optional, into)] price: Option<String>,
    /// Corner badge, omitted when `None`
    #[prop(optional_no_strip)]
    tag: Option<String>,
    /// Available presentations
    #[prop(optional)]
    variants: &'static [&'static str],
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    let price = price_label(price.as_deref()).to_string();
    let href = whatsapp_url(message.as_deref());

    view! {
        <Reveal
            options=RevealOptions::card()
            class="group relative rounded-3xl border border-stone-200/70 bg-white/90 p-5 shadow-[0_8px_40px_-12px_rgba(0,0,0,0.15)] backdrop-blur-sm"
        >
            {tag.map(|text| view! {
                <div class="absolute -top-3 -right-3">
                    <TagBadge>{text}</TagBadge>
                </div>
            })}
            <h3 class="text-xl font-bold tracking-tight">{name}</h3>
            <p class="mt-2 text-stone-600">{desc}</p>
            {(!variants.is_empty()).then(|| view! {
                <ul class="mt-3 flex flex-wrap gap-2 text-xs text-stone-500">
                    {variants
                        .iter()
                        .map(|variant| view! { <li class="rounded-lg bg-stone-100 px-2 py-1">{*variant}</li> })
                        .collect_view()}
                </ul>
            })}
            <div class="mt-4 flex items-center justify-between">
                <span class="text-lg font-extrabold text-stone-800">{price}</span>
                <CtaButton href=href class="!px-4 !py-2 text-sm" aria_label="Pedir por WhatsApp">
                    "Pedir por WhatsApp"
                </CtaButton>
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn test_card_without_tag_has_no_badge() {
        let html = render_html(|| view! { <ProductCard name="Arepas" desc="Al vacío"/> });
        assert_eq!(html.matches("tag-badge").count(), 0);
        assert!(html.contains("Consultar"));
    }

    #[test]
    fn test_card_with_tag_has_one_badge() {
        let html = render_html(|| view! {
            <ProductCard
                name="Arepas"
                desc="Al vacío"
                price="$ 4.500"
                tag=Some("Estrella".to_string())
            />
        });
        assert_eq!(html.matches("tag-badge").count(), 1);
        assert!(html.contains("Estrella"));
        assert!(html.contains("$ 4.500"));
        assert!(!html.contains("Consultar"));
    }

    #[test]
    fn test_card_lists_variants() {
        let html = render_html(|| view! {
            <ProductCard name="Salsas" desc="Caseras" variants=&["Criolla", "Ajo"]/>
        });
        assert!(html.contains("Criolla"));
        assert!(html.contains("Ajo"));
    }
}
