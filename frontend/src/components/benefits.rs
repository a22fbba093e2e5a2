use leptos::*;

use super::SectionTitle;
use crate::content::BENEFITS;
use crate::services::{Reveal, RevealOptions};
use crate::types::Section;

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id=Section::Beneficios.anchor() class="mx-auto max-w-7xl px-4 py-16 md:py-24">
            <SectionTitle
                eyebrow="Beneficios reales"
                title="Por qué elegir comida artesanal saludable"
                subtitle="Más simple de lo que creés: mejor sabor, control de ingredientes y practicidad."
            />

            <div class="mt-10 grid gap-6 md:grid-cols-3">
                {BENEFITS
                    .iter()
                    .enumerate()
                    .map(|(i, benefit)| view! {
                        <Reveal
                            options=RevealOptions::staggered(i)
                            class="rounded-3xl border border-stone-200 bg-white p-6 shadow-[0_10px_40px_-20px_rgba(0,0,0,0.25)]"
                        >
                            <div class="text-3xl">"✨"</div>
                            <h3 class="mt-3 text-xl font-bold">{benefit.title}</h3>
                            <p class="mt-2 text-stone-600">{benefit.body}</p>
                        </Reveal>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
