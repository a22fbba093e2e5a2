use leptos::*;

use crate::services::{whatsapp_url, LinkKind};

/// WhatsApp button pinned to the bottom-right corner at all scroll positions.
#[component]
pub fn FloatingCta() -> impl IntoView {
    let href = whatsapp_url(None);
    let kind = LinkKind::classify(&href);

    view! {
        <a
            href=href
            target=kind.target()
            rel=kind.rel()
            class="fixed bottom-5 right-5 z-[60] inline-flex h-12 w-12 items-center justify-center rounded-full bg-emerald-400 ring-8 ring-emerald-400/20 shadow-xl hover:scale-105 active:scale-95 transition"
            aria-label="Contactar por WhatsApp"
            title="WhatsApp"
        >
            "🟢"
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn test_floating_cta_opens_whatsapp_in_new_tab() {
        let html = render_html(|| view! { <FloatingCta/> });
        assert!(html.contains("https://wa.me/5493813594194"));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
