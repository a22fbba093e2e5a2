//! Contact section: pre-filled WhatsApp message and social profiles.

use leptos::*;

use super::{CtaButton, SectionTitle};
use crate::config::{BUSINESS_HOURS, DELIVERY_ZONE};
use crate::content::{messages, SOCIAL_LINKS};
use crate::services::{whatsapp_url, LinkKind};
use crate::types::{Section, SocialLink};

const CARD_CLASS: &str = "rounded-3xl border border-stone-200 bg-white p-6 shadow-[0_10px_40px_-20px_rgba(0,0,0,0.25)]";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contacto.anchor() class="mx-auto max-w-7xl px-4 py-16 md:py-24">
            <SectionTitle
                eyebrow="Contacto y redes"
                title="Hablemos por WhatsApp"
                subtitle="Pedidos, dudas y combos para eventos."
            />

            <div class="mt-10 grid gap-8 md:grid-cols-2">
                <div class=CARD_CLASS>
                    <h3 class="text-lg font-bold">"Mensaje rápido"</h3>
                    <p class="mt-2 text-sm text-stone-600">"Se abrirá WhatsApp con un mensaje prellenado."</p>
                    <div class="mt-4">
                        <CtaButton href=whatsapp_url(Some(messages::CONTACT)) aria_label="Escribir por WhatsApp">
                            "Escribir por WhatsApp"
                        </CtaButton>
                    </div>
                    <div class="mt-6 text-sm text-stone-600">
                        <p>{format!("Horario: {}", BUSINESS_HOURS)}</p>
                        <p>{format!("Zona de reparto: {}", DELIVERY_ZONE)}</p>
                    </div>
                </div>

                <div class=CARD_CLASS>
                    <div class="space-y-4 md:space-y-6">
                        <h3 class="text-lg font-bold">"Seguinos"</h3>
                        <div class="flex items-center gap-5">
                            {SOCIAL_LINKS.iter().map(|link| view! { <SocialIcon link=*link/> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialIcon(link: SocialLink) -> impl IntoView {
    let kind = LinkKind::classify(link.href);

    view! {
        <a
            href=link.href
            target=kind.target()
            rel=kind.rel()
            aria-label=link.label
            class="inline-flex h-12 w-12 items-center justify-center rounded-full ring-1 ring-stone-200 hover:bg-stone-100 text-stone-900"
        >
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="h-7 w-7" fill="currentColor">
                <path d=link.icon/>
            </svg>
            <span class="sr-only">{link.label}</span>
        </a>
    }
}
