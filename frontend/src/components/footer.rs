//! Footer component

use chrono::Datelike;
use leptos::*;

use super::Logo;
use crate::config::{SiteConfig, SITE_NAME};
use crate::content::FOOTER_LINKS;

/// Copyright notice for `year`.
pub fn copyright_line(year: i32) -> String {
    format!(
        "© {} {} · Hecho con cariño y cocina honesta @ YRVING VIERA",
        year, SITE_NAME
    )
}

#[component]
pub fn Footer(config: SiteConfig) -> impl IntoView {
    // Computed per render; the page is regenerated on every load.
    let year = chrono::Local::now().year();

    view! {
        <footer class="border-t border-stone-200/70 bg-white/70">
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-4 px-4 py-8 md:flex-row">
                <Logo config=config/>
                <p class="text-sm text-stone-600">{copyright_line(year)}</p>
                <div class="flex items-center gap-4 text-sm">
                    {FOOTER_LINKS
                        .iter()
                        .map(|entry| view! { <a href=entry.href() class="hover:underline">{entry.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        let line = copyright_line(2025);
        assert!(line.starts_with("© 2025 Cambur Pintón"));
    }
}
