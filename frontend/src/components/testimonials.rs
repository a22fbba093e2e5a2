use leptos::*;

use super::SectionTitle;
use crate::content::TESTIMONIALS;
use crate::services::{Reveal, RevealOptions};
use crate::types::Section;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id=Section::Testimonios.anchor() class="mx-auto max-w-7xl px-4 py-16 md:py-24">
            <SectionTitle
                eyebrow="La gente lo dice"
                title="Testimonios que importan"
                subtitle="Clientes que resuelven su semana con sabor y practicidad."
            />
            <div class="mt-10 grid gap-6 md:grid-cols-3">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(i, testimonial)| view! {
                        <Reveal options=RevealOptions::staggered(i)>
                            <blockquote class="h-full rounded-3xl border border-stone-200 bg-white p-6 text-stone-700 shadow-[0_10px_40px_-20px_rgba(0,0,0,0.25)]">
                                {format!("“{}”", testimonial.quote)}
                                <footer class="mt-3 text-sm text-stone-500">{testimonial.author}</footer>
                            </blockquote>
                        </Reveal>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
