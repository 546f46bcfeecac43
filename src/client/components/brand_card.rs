use dioxus::prelude::*;

use crate::client::router::Route;
use crate::model::catalog::Brand;

#[component]
pub fn BrandCard(brand: Brand) -> Element {
    rsx!(
        Link {
            to: Route::BrandDetail { id: brand.id.clone() },
            class: "block bg-white/70 backdrop-blur rounded-2xl border border-gray-200 p-4 hover:shadow-lg transition-shadow",
            div { class: "flex items-center gap-4",
                div { class: "w-16 h-16 rounded-lg bg-gray-50 border border-gray-200 overflow-hidden grid place-items-center flex-shrink-0",
                    if let Some(image) = brand.image.as_ref() {
                        img {
                            src: "{image}",
                            alt: "{brand.name}",
                            class: "w-full h-full object-contain p-1"
                        }
                    } else {
                        span { class: "text-lg text-gray-500",
                            {brand.name.chars().next().unwrap_or('?').to_string()}
                        }
                    }
                }
                h3 { class: "text-lg font-semibold text-gray-900 truncate",
                    "{brand.name}"
                }
            }
        }
    )
}
