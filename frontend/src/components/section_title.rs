use leptos::*;

use super::TagBadge;

/// Section heading with optional eyebrow badge and subtitle.
///
/// Absent (or empty) eyebrow and subtitle are not rendered at all.
#[component]
pub fn SectionTitle(
    #[prop(optional, into)] eyebrow: Option<String>,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let eyebrow = eyebrow.filter(|text| !text.is_empty());
    let subtitle = subtitle.filter(|text| !text.is_empty());

    view! {
        <div class="max-w-2xl">
            {eyebrow.map(|text| view! {
                <div class="mb-3">
                    <TagBadge>{text}</TagBadge>
                </div>
            })}
            <h2 class="text-3xl md:text-4xl font-black tracking-tight leading-tight">
                {title}
            </h2>
            {subtitle.map(|text| view! {
                <p class="mt-3 text-base md:text-lg text-stone-600">{text}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn test_title_only_omits_eyebrow_and_subtitle() {
        let html = render_html(|| view! { <SectionTitle title="Menú"/> });
        assert!(html.contains("<h2"));
        assert!(!html.contains("tag-badge"));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn test_empty_eyebrow_is_omitted() {
        let html = render_html(|| view! { <SectionTitle eyebrow="" title="Menú" subtitle=""/> });
        assert!(!html.contains("tag-badge"));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn test_full_title_renders_all_parts() {
        let html = render_html(|| view! {
            <SectionTitle eyebrow="Lo nuestro" title="Menú" subtitle="Pedí por WhatsApp"/>
        });
        assert_eq!(html.matches("tag-badge").count(), 1);
        assert!(html.contains("Lo nuestro"));
        assert!(html.contains("Pedí por WhatsApp"));
    }
}
