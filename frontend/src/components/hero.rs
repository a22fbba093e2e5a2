//! Hero section component

use leptos::*;

use super::{CtaButton, TagBadge};
use crate::config::SiteConfig;
use crate::content::{HERO_HIGHLIGHTS, HERO_IMAGE};
use crate::services::{whatsapp_url, Reveal, RevealOptions};
use crate::types::Section;

#[component]
pub fn Hero(config: SiteConfig) -> impl IntoView {
    view! {
        <section id=Section::Inicio.anchor() class="relative overflow-hidden">
            <div aria-hidden="true" class="pointer-events-none absolute inset-0 -z-10">
                <div class="absolute -top-24 -left-24 h-72 w-72 rounded-full bg-gradient-to-br from-emerald-200 via-lime-200 to-amber-200 blur-3xl opacity-60"></div>
                <div class="absolute -bottom-24 -right-24 h-80 w-80 rounded-full bg-gradient-to-tr from-amber-200 via-emerald-100 to-lime-200 blur-3xl opacity-70"></div>
            </div>
            <div class="mx-auto grid max-w-7xl items-center gap-10 px-4 py-16 md:grid-cols-2 md:py-24">
                <Reveal options=RevealOptions::hero_copy()>
                    <TagBadge>"Comida artesanal saludable"</TagBadge>
                    <h1 class="mt-3 text-4xl md:text-6xl font-black tracking-tight leading-[1.05]">
                        "Sin vueltas: rico, real y práctico"
                    </h1>
                    <p class="mt-4 text-lg text-stone-700 md:max-w-[56ch]">
                        "Arepas al vacío (sin TACC), hamburguesas saludables para freezer y salsas caseras. "
                        "Hecho en casa, con ingredientes reales."
                    </p>
                    <div class="mt-6 flex flex-wrap items-center gap-3">
                        <CtaButton href=Section::NuestroProducto.href() aria_label="Ir a ver el video">
                            "Ver video"
                        </CtaButton>
                        <CtaButton
                            href=whatsapp_url(None)
                            class="!bg-stone-900 !text-white !ring-stone-300"
                            aria_label="Hacer pedido por WhatsApp"
                        >
                            "Hacer pedido por WhatsApp"
                        </CtaButton>
                    </div>
                    <ul class="mt-6 grid grid-cols-2 gap-3 text-sm text-stone-600">
                        {HERO_HIGHLIGHTS
                            .iter()
                            .map(|item| view! { <li class="flex items-center gap-2">"✅ " {*item}</li> })
                            .collect_view()}
                    </ul>
                </Reveal>

                <Reveal options=RevealOptions::hero_media() class="relative mx-auto w-full max-w-md">
                    <div class="aspect-[4/5] w-full rotate-[5deg] scale-105 overflow-hidden rounded-[2rem] border border-emerald-200 shadow-[0_30px_120px_-20px_rgba(0,0,0,0.25)]">
                        <img
                            src=config.media(HERO_IMAGE)
                            alt="Arepas y hamburguesas saludables, listas para calentar"
                            class="h-full w-full object-cover"
                            loading="eager"
                            decoding="async"
                            fetchpriority="high"
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
