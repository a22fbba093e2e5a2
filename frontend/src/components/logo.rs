use leptos::*;

use crate::config::{SiteConfig, SITE_NAME};
use crate::content::LOGO_FILE;
use crate::types::Section;

/// Brand image and name, linking back to the top of the page.
#[component]
pub fn Logo(config: SiteConfig) -> impl IntoView {
    view! {
        <a href=Section::Inicio.href() class="flex items-center gap-2 select-none">
            <img
                src=config.media(LOGO_FILE)
                alt=SITE_NAME
                class="h-14 w-auto"
                loading="eager"
                decoding="async"
            />
            <span class="font-extrabold tracking-tight text-xl md:text-2xl">{SITE_NAME}</span>
        </a>
    }
}
