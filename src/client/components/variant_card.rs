use dioxus::prelude::*;

use crate::catalog::indexes::CatalogIndexes;
use crate::client::router::Route;
use crate::client::util::format::format_price;
use crate::model::catalog::ProductVariant;

/// A variant with its display fields already resolved against the indexes:
/// image and price fallbacks applied, parent product and model names looked
/// up. Shelves resolve once and hand plain data to the card.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantDisplay {
    pub variant_id: String,
    pub variant_name: String,
    pub product_id: String,
    pub product_name: Option<String>,
    pub model_name: Option<String>,
    pub image: Option<String>,
    pub price: f64,
}

impl VariantDisplay {
    pub fn resolve(indexes: &CatalogIndexes, variant: &ProductVariant) -> Self {
        let product = indexes.product_of_variant(variant);

        Self {
            variant_id: variant.id.clone(),
            variant_name: variant.name.clone(),
            product_id: product
                .map(|p| p.id.clone())
                .unwrap_or_else(|| variant.product_id.clone()),
            product_name: product.map(|p| p.name.clone()),
            model_name: indexes.model_of_variant(variant).map(|m| m.name.clone()),
            image: indexes.display_image(variant).map(str::to_string),
            price: indexes.display_price(variant),
        }
    }
}

#[component]
pub fn VariantCard(display: VariantDisplay) -> Element {
    rsx!(
        Link {
            to: Route::ProductDetail { id: display.product_id.clone() },
            class: "snap-start shrink-0 w-64 rounded-2xl border border-gray-200 bg-white overflow-hidden hover:shadow-lg transition-shadow",
            div { class: "h-36 bg-gray-50 p-4",
                if let Some(image) = display.image.as_ref() {
                    img {
                        src: "{image}",
                        alt: "{display.variant_name}",
                        class: "w-full h-full object-contain"
                    }
                } else {
                    div { class: "h-full w-full grid place-items-center text-gray-400",
                        "No image"
                    }
                }
            }
            div { class: "p-4",
                if let Some(product_name) = display.product_name.as_ref() {
                    div { class: "text-xs text-gray-500 truncate", "{product_name}" }
                }
                div { class: "font-semibold text-gray-900 truncate",
                    {display.model_name.clone().unwrap_or_else(|| display.variant_name.clone())}
                }
                div { class: "mt-2 font-bold text-indigo-600",
                    {format_price(display.price)}
                }
            }
        }
    )
}
