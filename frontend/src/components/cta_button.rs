//! Call-to-action link.

use leptos::*;

use crate::services::LinkKind;

const CTA_CLASS: &str = "inline-flex items-center justify-center rounded-2xl px-5 py-3 font-semibold shadow-sm ring-1 ring-emerald-300/60 bg-emerald-400/90 hover:bg-emerald-400 active:bg-emerald-500 text-stone-900 transition";

/// Styled anchor.
///
/// External destinations open in a new tab with `rel="noopener noreferrer"`;
/// anything else navigates in place.
#[component]
pub fn CtaButton(
    /// Destination
    #[prop(into)]
    href: String,
    /// Extra classes appended to the base style
    #[prop(optional, into)]
    class: String,
    #[prop(optional, into)]
    aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let kind = LinkKind::classify(&href);

    view! {
        <a
            href=href
            target=kind.target()
            rel=kind.rel()
            aria-label=aria_label
            class=format!("{} {}", CTA_CLASS, class)
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn test_external_cta_is_isolated() {
        let html = render_html(|| view! {
            <CtaButton href="https://wa.me/5493813594194">"Pedir"</CtaButton>
        });
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_internal_cta_navigates_in_place() {
        let html = render_html(|| view! { <CtaButton href="#menu">"Ver menú"</CtaButton> });
        assert!(html.contains(r##"href="#menu""##));
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }
}
