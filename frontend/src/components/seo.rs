//! Document head: title, social cards, web font and structured data.

use leptos::*;
use leptos_meta::*;
use serde::Serialize;

use crate::config::{
    theme, SiteConfig, CONTACT_EMAIL, DELIVERY_ZONE, FACEBOOK_URL, FONT_STYLESHEET_URL,
    INSTAGRAM_URL, OG_DESCRIPTION, SITE_DESCRIPTION, SITE_NAME, SITE_TITLE, TWITTER_DESCRIPTION,
    WHATSAPP_NUMBER,
};
use crate::content::{PRODUCTS, VIDEO_POSTER};
use crate::types::ProductRecord;

/// schema.org opening hours for Mon–Sat 9:00–19:00.
const OPENING_HOURS: &str = "Mo-Sa 09:00-19:00";

// =============================================================================
// Structured data (JSON-LD)
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LocalBusiness {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    image: String,
    email: &'static str,
    telephone: String,
    area_served: &'static str,
    opening_hours: &'static str,
    same_as: [&'static str; 2],
    has_offer_catalog: OfferCatalog,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferCatalog {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    item_list_element: Vec<Offer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    item_offered: Product,
}

#[derive(Debug, Serialize)]
struct Product {
    #[serde(rename = "@type")]
    kind: &'static str,
    sku: &'static str,
    name: &'static str,
    description: &'static str,
    image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    model: Vec<&'static str>,
}

/// Build the `LocalBusiness` JSON-LD document for `products`.
pub fn structured_data(config: &SiteConfig, products: &[ProductRecord]) -> serde_json::Result<String> {
    let offers = products
        .iter()
        .map(|p| Offer {
            kind: "Offer",
            item_offered: Product {
                kind: "Product",
                sku: p.id,
                name: p.name,
                description: p.description,
                image: config.media(p.image),
                model: p.variants.to_vec(),
            },
        })
        .collect();

    let business = LocalBusiness {
        context: "https://schema.org",
        kind: "LocalBusiness",
        name: SITE_NAME,
        description: SITE_DESCRIPTION,
        image: config.media(VIDEO_POSTER),
        email: CONTACT_EMAIL,
        telephone: format!("+{}", WHATSAPP_NUMBER),
        area_served: DELIVERY_ZONE,
        opening_hours: OPENING_HOURS,
        same_as: [INSTAGRAM_URL, FACEBOOK_URL],
        has_offer_catalog: OfferCatalog {
            kind: "OfferCatalog",
            name: "Menú",
            item_list_element: offers,
        },
    };

    serde_json::to_string(&business)
}

// =============================================================================
// Component
// =============================================================================

#[component]
pub fn Seo(config: SiteConfig) -> impl IntoView {
    let og_image = config.media(VIDEO_POSTER);
    let json_ld = match structured_data(&config, &PRODUCTS) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("❌ Could not serialize structured data: {}", e);
            None
        }
    };

    view! {
        <Html lang="es"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Meta name="theme-color" content=theme::PRIMARY/>

        <Meta property="og:title" content=SITE_TITLE/>
        <Meta property="og:description" content=OG_DESCRIPTION/>
        <Meta property="og:image" content=og_image.clone()/>
        <Meta property="og:type" content="website"/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=SITE_TITLE/>
        <Meta name="twitter:description" content=TWITTER_DESCRIPTION/>
        <Meta name="twitter:image" content=og_image/>

        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Stylesheet href=FONT_STYLESHEET_URL/>

        {json_ld.map(|json| view! { <Script type_="application/ld+json">{json}</Script> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BasePath;

    #[test]
    fn test_structured_data_lists_every_product() {
        let config = SiteConfig::new(BasePath::parse("/cambur/").unwrap());
        let json = structured_data(&config, &PRODUCTS).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value["hasOfferCatalog"]["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), PRODUCTS.len());
        assert_eq!(items[0]["itemOffered"]["sku"], "pack3");
        assert_eq!(items[0]["itemOffered"]["image"], "/cambur/media/pack3.jpeg");
    }

    #[test]
    fn test_structured_data_business_fields() {
        let json = structured_data(&SiteConfig::default(), &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@type"], "LocalBusiness");
        assert_eq!(value["telephone"], "+5493813594194");
        assert_eq!(value["image"], "/media/cocina-poster.jpg");
        assert!(value["hasOfferCatalog"]["itemListElement"].as_array().unwrap().is_empty());
    }
}
