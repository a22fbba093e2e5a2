//! Product grid, rendered from the catalogue.

use leptos::*;

use super::{ProductCard, SectionTitle, TagBadge};
use crate::content::{CATALOGUE_BADGES, PRODUCTS};
use crate::types::{ProductRecord, Section};

#[component]
pub fn MenuSection(
    /// Products to list, in display order
    #[prop(default = &PRODUCTS[..])]
    products: &'static [ProductRecord],
) -> impl IntoView {
    view! {
        <section id=Section::Menu.anchor() class="mx-auto max-w-7xl px-4 py-16 md:py-24">
            <SectionTitle
                eyebrow="Menú estrella"
                title="Primeras líneas de producto"
                subtitle="Podés combinarlas en pedidos semanales o para eventos."
            />

            <div class="mt-10 grid gap-6 md:grid-cols-3">
                {products
                    .iter()
                    .map(|product| view! {
                        <ProductCard
                            name=product.name
                            desc=product.description
                            price=product.price_label()
                            tag=product.tag.map(String::from)
                            variants=product.variants
                            message=product.order_message()
                        />
                    })
                    .collect_view()}
            </div>

            <div class="mt-8 flex flex-wrap items-center gap-3 text-sm text-stone-600">
                {CATALOGUE_BADGES
                    .iter()
                    .enumerate()
                    .map(|(i, badge)| view! {
                        {(i > 0).then(|| view! { <span>"·"</span> })}
                        <TagBadge>{*badge}</TagBadge>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
