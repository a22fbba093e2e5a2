//! "Nuestro producto" section: product video beside highlights and a CTA.

use leptos::*;

use super::{CtaButton, SectionTitle};
use crate::config::{SiteConfig, BUSINESS_HOURS, DELIVERY_ZONE};
use crate::content::{messages, VIDEO_FILE, VIDEO_HIGHLIGHTS, VIDEO_POSTER};
use crate::services::whatsapp_url;
use crate::types::Section;

/// Two-column layout: player (no autoplay, poster, native controls) and
/// bullet list with a pre-filled WhatsApp CTA.
#[component]
pub fn VideoSection(config: SiteConfig) -> impl IntoView {
    let poster = config.media(VIDEO_POSTER);
    let source = config.media(VIDEO_FILE);

    view! {
        <section id=Section::NuestroProducto.anchor() class="mx-auto max-w-7xl px-4 py-16 md:py-24">
            <SectionTitle
                eyebrow="Nuestro Producto"
                title="Qué ofrecemos, cómo lo preparamos y cómo pedir"
                subtitle="Mirá el video y hacé tu pedido al instante por WhatsApp."
            />

            <div class="mt-8 grid gap-8 md:grid-cols-5">
                <div class="md:col-span-3">
                    <div class="mx-auto max-w-[480px] md:max-w-[520px]">
                        <div class="relative overflow-hidden rounded-3xl border border-stone-200 shadow-[0_10px_40px_-20px_rgba(0,0,0,0.25)]">
                            <video
                                class="w-full h-auto"
                                controls=true
                                preload="none"
                                playsinline=true
                                poster=poster
                                aria-label="Video: nuestra propuesta de comida artesanal saludable"
                            >
                                <source src=source type="video/mp4"/>
                                "Tu navegador no soporta video HTML5."
                            </video>
                        </div>
                        <p class="mt-3 text-sm text-stone-600">
                            {format!("Envíos {} · Zona: {}", BUSINESS_HOURS, DELIVERY_ZONE)}
                        </p>
                    </div>
                </div>

                <div class="md:col-span-2 self-center">
                    <ul class="space-y-3 text-stone-700">
                        {VIDEO_HIGHLIGHTS
                            .iter()
                            .map(|item| view! {
                                <li class="flex items-start gap-3"><span>"✅"</span> {*item}</li>
                            })
                            .collect_view()}
                    </ul>
                    <CtaButton
                        href=whatsapp_url(Some(messages::VIDEO))
                        class="mt-6"
                        aria_label="Enviar mensaje por WhatsApp tras ver el video"
                    >
                        "Quiero pedir ahora"
                    </CtaButton>
                </div>
            </div>
        </section>
    }
}
