use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowLeft, FaBoxOpen, FaCalendar, FaCartShopping, FaCircleCheck, FaCircleXmark,
    FaLayerGroup,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::catalog::joins::variants_of_product;
use crate::catalog::price_range;
use crate::client::components::{ErrorMessage, HeaderSkeleton, InfoPill, Page};
use crate::client::router::Route;
use crate::client::store::PageState;
use crate::client::util::format::{format_date, format_price};
use crate::model::catalog::{Product, ProductVariant};

#[component]
pub fn ProductDetail(id: ReadSignal<String>) -> Element {
    let mut state = use_signal(|| PageState::<(Product, Vec<ProductVariant>)>::Idle);
    let mut reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use crate::client::util::fetch::{fetch_product, fetch_product_variants, FetchError};

        let future = use_resource(move || {
            reload.read();
            let id = id();
            async move {
                let (product, variants) =
                    futures::join!(fetch_product(&id), fetch_product_variants());
                Ok::<_, FetchError>((product?, variants?))
            }
        });
        let next = PageState::from_result(future.read_unchecked().as_ref());
        if *state.peek() != next {
            state.set(next);
        }
    }

    rsx!(
        Title { "Product | MOBILINX" }
        Meta {
            name: "description",
            content: "Product details and purchasable variants."
        }
        Page {
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "mb-8",
                    Link {
                        to: Route::Home {},
                        class: "inline-flex items-center gap-2 text-sm font-medium text-gray-700 bg-white/70 backdrop-blur border border-gray-200 rounded-full px-4 py-2 hover:bg-white hover:shadow-sm transition-all",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaArrowLeft
                        }
                        "Back to home"
                    }
                }

                {match &*state.read() {
                    PageState::Idle | PageState::Loading => rsx!(
                        div { class: "mb-12 md:mb-16", HeaderSkeleton {} }
                    ),
                    PageState::Error(error) => {
                        if error.retryable() {
                            rsx!(
                                ErrorMessage {
                                    message: error.message(),
                                    on_retry: move |_| reload += 1
                                }
                            )
                        } else {
                            rsx!( ErrorMessage { message: error.message() } )
                        }
                    }
                    PageState::Success((product, all_variants)) => {
                        let variants: Vec<ProductVariant> = variants_of_product(all_variants, &product.id)
                            .into_iter()
                            .cloned()
                            .collect();
                        let total_stock: i64 = variants.iter().map(|v| v.stock.max(0)).sum();
                        let range = price_range(&variants);

                        let price_label = match range {
                            Some(range) if variants.len() > 1 && range.min != range.max => {
                                format!("{} - {}", format_price(range.min), format_price(range.max))
                            }
                            _ => format_price(
                                variants
                                    .first()
                                    .map(|variant| variant.price)
                                    .unwrap_or(product.price),
                            ),
                        };

                        rsx!(
                            div { class: "mb-12 md:mb-16",
                                div { class: "flex flex-col lg:flex-row gap-8",
                                    if let Some(image) = product.image.as_ref() {
                                        div { class: "w-full lg:w-96 h-96 bg-white/60 border border-gray-200 p-4 rounded-2xl flex-shrink-0",
                                            img {
                                                src: "{image}",
                                                alt: "{product.name}",
                                                class: "w-full h-full object-contain"
                                            }
                                        }
                                    }
                                    div { class: "flex-1",
                                        h1 { class: "text-4xl md:text-5xl font-extrabold tracking-tight",
                                            span { class: "bg-gradient-to-r from-indigo-600 to-fuchsia-500 bg-clip-text text-transparent",
                                                "{product.name}"
                                            }
                                        }
                                        p { class: "text-gray-500 mt-2", "SKU: {product.sku}" }

                                        div { class: "my-6",
                                            p { class: "text-sm text-gray-600", "Price Range" }
                                            p { class: "text-4xl font-bold text-indigo-600", "{price_label}" }
                                        }

                                        div { class: "flex flex-wrap gap-3 text-sm",
                                            if total_stock > 0 {
                                                InfoPill { text: format!("{total_stock} Total in stock"), class: "text-green-700",
                                                    Icon { width: 16, height: 16, icon: FaCircleCheck }
                                                }
                                            } else {
                                                InfoPill { text: "Out of stock", class: "text-red-700",
                                                    Icon { width: 16, height: 16, icon: FaCircleXmark }
                                                }
                                            }
                                            InfoPill { text: format!("{} Variants", variants.len()),
                                                Icon { width: 16, height: 16, icon: FaLayerGroup }
                                            }
                                            InfoPill { text: format!("Created: {}", format_date(&product.created_at)),
                                                Icon { width: 16, height: 16, icon: FaCalendar }
                                            }
                                        }
                                    }
                                }
                            }

                            h2 { class: "text-3xl font-bold text-gray-900 mb-6",
                                "Available Variants"
                            }

                            if variants.is_empty() {
                                div { class: "text-center text-gray-500 py-16 flex flex-col items-center",
                                    Icon {
                                        width: 48,
                                        height: 48,
                                        icon: FaBoxOpen
                                    }
                                    p { class: "text-xl font-semibold text-gray-700 mt-4", "No Variants Available" }
                                    p { "There are no specific variants listed for this product." }
                                }
                            } else {
                                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                                    for variant in variants {
                                        PurchasableVariantCard { key: "{variant.id}", variant: variant.clone() }
                                    }
                                }
                            }
                        )
                    }
                }}
            }
        }
    )
}

#[component]
fn PurchasableVariantCard(variant: ProductVariant) -> Element {
    let in_stock = variant.stock > 0;
    let variant_name = variant.name.clone();

    rsx!(
        div { class: "bg-white/70 backdrop-blur rounded-2xl border border-gray-200 overflow-hidden h-full flex flex-col",
            div { class: "h-48 bg-gray-50 p-4 flex-shrink-0",
                if let Some(image) = variant.image.as_ref() {
                    img {
                        src: "{image}",
                        alt: "{variant.name}",
                        class: "w-full h-full object-contain"
                    }
                } else {
                    div { class: "w-full h-full grid place-content-center text-gray-400",
                        "No Image"
                    }
                }
            }
            div { class: "p-4 flex flex-col flex-grow",
                h3 { class: "text-lg font-semibold text-gray-900", "{variant.name}" }
                p { class: "text-sm text-gray-500 mt-1", "SKU: {variant.id}" }

                div { class: "flex-grow" }

                div { class: "mt-4 flex justify-between items-center",
                    p { class: "text-2xl font-bold text-indigo-600",
                        {format_price(variant.price)}
                    }
                    if in_stock {
                        span { class: "px-2.5 py-0.5 rounded-full text-xs font-semibold bg-gray-900 text-white",
                            "{variant.stock} in stock"
                        }
                    } else {
                        span { class: "px-2.5 py-0.5 rounded-full text-xs font-semibold bg-gray-100 text-gray-600",
                            "Out of stock"
                        }
                    }
                }

                // Decorative: there is no cart backend.
                button {
                    class: "mt-4 w-full bg-gray-900 hover:bg-black disabled:bg-gray-400 text-white px-4 py-2.5 rounded-lg flex items-center justify-center gap-2 font-semibold transition-colors",
                    disabled: !in_stock,
                    onclick: move |_| {
                        tracing::info!("Added {} to cart (demo)", variant_name);
                    },
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaCartShopping
                    }
                    "Add to Cart"
                }
            }
        }
    )
}
