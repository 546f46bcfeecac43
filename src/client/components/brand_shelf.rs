use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowRight;
use dioxus_free_icons::Icon;

use crate::client::components::variant_card::{VariantCard, VariantDisplay};
use crate::client::router::Route;
use crate::model::catalog::Brand;

/// One landing-page shelf: a brand header followed by a scrolling row of
/// that brand's variants, pre-resolved for display.
#[component]
pub fn BrandShelf(brand: Brand, variants: Vec<VariantDisplay>) -> Element {
    rsx!(
        div {
            div { class: "flex items-center justify-between mb-3",
                div { class: "flex items-center gap-3",
                    div { class: "h-10 w-10 rounded-xl bg-white border border-gray-200 overflow-hidden grid place-items-center",
                        if let Some(image) = brand.image.as_ref() {
                            img {
                                src: "{image}",
                                alt: "{brand.name}",
                                class: "object-contain w-full h-full"
                            }
                        } else {
                            span { class: "text-sm text-gray-500",
                                {brand.name.chars().next().unwrap_or('?').to_string()}
                            }
                        }
                    }
                    h3 { class: "text-xl font-bold text-gray-900", "{brand.name}" }
                }
                Link {
                    to: Route::BrandDetail { id: brand.id.clone() },
                    class: "text-sm text-gray-700 hover:text-gray-900 inline-flex items-center gap-1",
                    "View brand "
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaArrowRight
                    }
                }
            }
            div { class: "flex gap-4 overflow-x-auto snap-x snap-mandatory pr-2",
                for display in variants {
                    VariantCard { key: "{display.variant_id}", display: display.clone() }
                }
            }
        }
    )
}
