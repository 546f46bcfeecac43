use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowLeft, FaBagShopping, FaCalendar, FaHashtag, FaLayerGroup, FaTag,
};
use dioxus_free_icons::Icon;

use crate::client::components::{
    CardGridSkeleton, ErrorMessage, HeaderSkeleton, InfoPill, Page,
};
use crate::client::router::Route;
use crate::client::store::PageState;
use crate::client::util::format::{format_date, format_price};
use crate::model::catalog::{Model, ProductVariant};

#[component]
pub fn ModelDetail(id: ReadSignal<String>) -> Element {
    let mut state = use_signal(|| PageState::<(Model, Vec<ProductVariant>)>::Idle);
    let mut reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use crate::client::util::fetch::{fetch_single_model, fetch_variants_by_model, FetchError};

        let future = use_resource(move || {
            reload.read();
            let id = id();
            async move {
                let (model, variants) =
                    futures::join!(fetch_single_model(&id), fetch_variants_by_model(&id));
                Ok::<_, FetchError>((model?, variants?))
            }
        });
        let next = PageState::from_result(future.read_unchecked().as_ref());
        if *state.peek() != next {
            state.set(next);
        }
    }

    rsx!(
        Title { "Model | MOBILINX" }
        Meta {
            name: "description",
            content: "Model details and available variants."
        }
        Page {
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                {match &*state.read() {
                    PageState::Idle | PageState::Loading => rsx!(
                        div { class: "mb-12 md:mb-16", HeaderSkeleton {} }
                        CardGridSkeleton {}
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
                    PageState::Success((model, variants)) => {
                        // Nested embeds are resolved with explicit presence
                        // checks at every hop.
                        let series_name = model
                            .series
                            .as_ref()
                            .map(|series| series.name.clone())
                            .unwrap_or_else(|| "Unknown Series".to_string());
                        let brand_name = model
                            .series
                            .as_ref()
                            .and_then(|series| series.brand.as_ref())
                            .map(|brand| brand.name.clone())
                            .unwrap_or_else(|| "Unknown Brand".to_string());

                        rsx!(
                            div { class: "mb-8",
                                Link {
                                    to: Route::SeriesDetail { id: model.series_id.clone() },
                                    class: "inline-flex items-center gap-2 text-sm font-medium text-gray-700 bg-white/70 backdrop-blur border border-gray-200 rounded-full px-4 py-2 hover:bg-white hover:shadow-sm transition-all",
                                    Icon {
                                        width: 16,
                                        height: 16,
                                        icon: FaArrowLeft
                                    }
                                    "Back to {series_name}"
                                }
                            }

                            div { class: "mb-12 md:mb-16",
                                div { class: "flex flex-col md:flex-row items-start gap-8",
                                    if let Some(image) = model.image.as_ref() {
                                        div { class: "w-full md:w-64 h-64 bg-white/60 border border-gray-200 p-4 rounded-2xl flex-shrink-0",
                                            img {
                                                src: "{image}",
                                                alt: "{model.name}",
                                                class: "w-full h-full object-contain"
                                            }
                                        }
                                    }
                                    div { class: "flex-1",
                                        p { class: "text-indigo-600 font-semibold", "Model" }
                                        h1 { class: "text-4xl md:text-5xl font-extrabold tracking-tight my-2",
                                            span { class: "bg-gradient-to-r from-indigo-600 to-fuchsia-500 bg-clip-text text-transparent",
                                                "{model.name}"
                                            }
                                        }
                                        div { class: "mt-4 flex flex-wrap gap-3 text-sm",
                                            InfoPill { text: format!("{} Variants", variants.len()),
                                                Icon { width: 16, height: 16, icon: FaBagShopping }
                                            }
                                            InfoPill { text: series_name.clone(),
                                                Icon { width: 16, height: 16, icon: FaLayerGroup }
                                            }
                                            InfoPill { text: brand_name,
                                                Icon { width: 16, height: 16, icon: FaHashtag }
                                            }
                                            InfoPill { text: format!("Created: {}", format_date(&model.created_at)),
                                                Icon { width: 16, height: 16, icon: FaCalendar }
                                            }
                                        }
                                    }
                                }
                            }

                            h2 { class: "text-3xl font-bold text-gray-900 mb-6",
                                "Available Products"
                            }

                            if variants.is_empty() {
                                div { class: "text-center text-gray-500 py-16 flex flex-col items-center",
                                    Icon {
                                        width: 48,
                                        height: 48,
                                        icon: FaBagShopping
                                    }
                                    p { class: "text-xl font-semibold text-gray-700 mt-4", "No Variants Available" }
                                    p { "Check back later for products based on this model." }
                                }
                            } else {
                                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                                    for variant in variants.clone() {
                                        Link {
                                            key: "{variant.id}",
                                            to: Route::ProductDetail { id: variant.product_id.clone() },
                                            class: "block bg-white/70 backdrop-blur rounded-2xl border border-gray-200 overflow-hidden h-full hover:shadow-lg transition-shadow",
                                            div { class: "h-48 bg-gray-50 p-4",
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
                                            div { class: "p-4",
                                                h3 { class: "text-lg font-semibold text-gray-900 truncate",
                                                    "{variant.name}"
                                                }
                                                div { class: "mt-2 text-sm text-gray-600 flex items-center gap-2",
                                                    Icon {
                                                        width: 16,
                                                        height: 16,
                                                        icon: FaTag
                                                    }
                                                    span { "SKU: {variant.id}" }
                                                }
                                                div { class: "mt-4",
                                                    p { class: "text-xl font-bold text-indigo-600",
                                                        {format_price(variant.price)}
                                                    }
                                                }
                                            }
                                        }
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
