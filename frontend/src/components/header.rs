use leptos::*;

use super::{CtaButton, Logo};
use crate::config::SiteConfig;
use crate::content::NAV_ENTRIES;
use crate::services::whatsapp_url;
use crate::types::MenuState;

/// Sticky navigation bar with a collapsible mobile panel.
///
/// The menu state is owned by the page root; this component only drives
/// its transitions.
#[component]
pub fn Header(
    config: SiteConfig,
    menu: ReadSignal<MenuState>,
    set_menu: WriteSignal<MenuState>,
) -> impl IntoView {
    let on_toggle = move |_| {
        set_menu.update(|state| *state = state.toggled());
        log::debug!("☰ Mobile menu {:?}", menu.get_untracked());
    };

    let on_navigate = move |_| {
        if menu.get_untracked().is_open() {
            set_menu.update(|state| *state = state.after_navigation());
            log::debug!("☰ Mobile menu closed after navigation");
        }
    };

    view! {
        <header class="sticky top-0 z-50 border-b border-stone-200/70 bg-white/70 backdrop-blur-md">
            <div class="mx-auto max-w-7xl px-4 py-3">
                <div class="flex items-center justify-between">
                    <Logo config=config/>
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_ENTRIES
                            .iter()
                            .map(|entry| view! {
                                <a href=entry.href() class="text-[0.95rem] font-medium text-stone-700 hover:text-stone-950">
                                    {entry.label}
                                </a>
                            })
                            .collect_view()}
                        <CtaButton href=whatsapp_url(None) aria_label="Hacer pedido por WhatsApp">
                            "Pedir ahora"
                        </CtaButton>
                    </nav>
                    <button
                        class="md:hidden inline-flex items-center justify-center rounded-xl border px-3 py-2 text-stone-700"
                        on:click=on_toggle
                        aria-label="Abrir menú"
                        aria-expanded=move || menu.get().is_open().to_string()
                    >
                        "☰"
                    </button>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div id="mobile-menu" class="md:hidden mt-3 grid gap-2">
                        {NAV_ENTRIES
                            .iter()
                            .map(|entry| view! {
                                <a
                                    href=entry.href()
                                    on:click=on_navigate
                                    class="rounded-xl px-3 py-2 bg-stone-100/80"
                                >
                                    {entry.label}
                                </a>
                            })
                            .collect_view()}
                        <CtaButton href=whatsapp_url(None) class="w-full" aria_label="Hacer pedido por WhatsApp">
                            "Pedir ahora"
                        </CtaButton>
                    </div>
                </Show>
            </div>
        </header>
    }
}
