use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaWandMagicSparkles};
use dioxus_free_icons::Icon;

use crate::catalog::{search, CatalogIndexes, CatalogSnapshot};
use crate::client::components::{
    BrandShelf, ErrorMessage, Page, ResultPill, ResultTarget, SectionHeader, SeriesCarousel,
    ShelfSkeleton, VariantDisplay,
};
use crate::client::store::PageState;
use crate::model::catalog::Brand;

/// Variants shown per brand shelf.
const SHELF_LIMIT: usize = 8;
/// Series shown in the landing carousel.
const CAROUSEL_LIMIT: usize = 16;

#[component]
pub fn Home() -> Element {
    let mut state = use_signal(|| PageState::<CatalogSnapshot>::Idle);
    let mut reload = use_signal(|| 0u32);
    let mut query = use_signal(String::new);
    let mut search_open = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        use crate::client::util::fetch::load_catalog;

        let future = use_resource(move || {
            reload.read();
            async move { load_catalog().await }
        });
        let next = PageState::from_result(future.read_unchecked().as_ref());
        if *state.peek() != next {
            state.set(next);
        }
    }

    let snapshot = match &*state.read() {
        PageState::Success(snapshot) => snapshot.clone(),
        _ => CatalogSnapshot::default(),
    };

    // Recomputed on every keystroke from the current snapshot.
    let results = search(&snapshot, &query.read());

    let series_preview: Vec<_> = snapshot.series.iter().take(CAROUSEL_LIMIT).cloned().collect();

    let indexes = CatalogIndexes::build(&snapshot);
    let shelves: Vec<(Brand, Vec<VariantDisplay>)> = snapshot
        .brands
        .iter()
        .filter_map(|brand| {
            let variants = indexes.variants_of_brand(&brand.id, Some(SHELF_LIMIT));
            if variants.is_empty() {
                return None;
            }
            let displays = variants
                .iter()
                .map(|variant| VariantDisplay::resolve(&indexes, variant))
                .collect();
            Some((brand.clone(), displays))
        })
        .collect();

    rsx!(
        Title { "MOBILINX" }
        Meta {
            name: "description",
            content: "Browse phone brands, series, models, and variants."
        }
        Page {
            section { class: "relative overflow-hidden",
                div { class: "max-w-7xl mx-auto px-6 pt-16 pb-10 text-center",
                    div { class: "inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/60 backdrop-blur text-gray-800 shadow-sm mb-4",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaWandMagicSparkles
                        }
                        span { class: "text-sm font-medium", "Discover phones, parts & more" }
                    }
                    h1 { class: "text-4xl md:text-6xl font-extrabold tracking-tight text-gray-900",
                        "Find the "
                        span { class: "bg-gradient-to-r from-indigo-600 to-fuchsia-500 bg-clip-text text-transparent",
                            "right model"
                        }
                        " fast"
                    }
                    p { class: "mt-4 text-lg text-gray-600 max-w-2xl mx-auto",
                        "Browse by series and explore popular variants from each brand."
                    }
                    div { class: "mt-8 max-w-xl mx-auto",
                        div { class: "flex items-center gap-2 rounded-2xl border border-gray-200 bg-white/70 backdrop-blur p-2 shadow-sm focus-within:ring-2 focus-within:ring-indigo-500 transition-shadow",
                            Icon {
                                width: 20,
                                height: 20,
                                icon: FaMagnifyingGlass
                            }
                            input {
                                class: "flex-1 bg-transparent outline-none py-2 text-gray-900",
                                placeholder: "Search brands, series, models, or SKUs...",
                                value: "{query}",
                                oninput: move |event| {
                                    query.set(event.value());
                                    search_open.set(true);
                                }
                            }
                        }
                    }
                }

                if search_open() {
                    if let Some(results) = results.as_ref() {
                        div { class: "max-w-3xl mx-auto px-6",
                            div { class: "bg-white/80 backdrop-blur border border-gray-200 rounded-2xl p-4 shadow-lg",
                                div { class: "flex justify-between items-center mb-2",
                                    h4 { class: "font-semibold text-gray-800", "Quick results" }
                                    button {
                                        class: "text-sm text-gray-500 hover:text-gray-700",
                                        onclick: move |_| search_open.set(false),
                                        "Close"
                                    }
                                }
                                div { class: "grid grid-cols-2 gap-3 text-sm",
                                    ResultPill {
                                        label: "Brands",
                                        target: ResultTarget::Brand,
                                        items: results.brands.iter().map(|b| (b.id.clone(), b.name.clone())).collect::<Vec<_>>()
                                    }
                                    ResultPill {
                                        label: "Series",
                                        target: ResultTarget::Series,
                                        items: results.series.iter().map(|s| (s.id.clone(), s.name.clone())).collect::<Vec<_>>()
                                    }
                                    ResultPill {
                                        label: "Models",
                                        target: ResultTarget::Model,
                                        items: results.models.iter().map(|m| (m.id.clone(), m.name.clone())).collect::<Vec<_>>()
                                    }
                                    ResultPill {
                                        label: "Products",
                                        target: ResultTarget::Product,
                                        items: results.products.iter().map(|p| (p.id.clone(), p.name.clone())).collect::<Vec<_>>()
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "max-w-7xl mx-auto px-6 mt-8 md:mt-12",
                SectionHeader {
                    title: "Shop by Series",
                    subtitle: "Popular lineups across brands"
                }
                SeriesCarousel { items: series_preview }
            }

            section { class: "max-w-7xl mx-auto px-6 mt-10 md:mt-16 pb-16",
                SectionHeader {
                    title: "Trending by Brand",
                    subtitle: "Handpicked variants from each brand"
                }

                {match &*state.read() {
                    PageState::Idle | PageState::Loading => rsx!( ShelfSkeleton {} ),
                    PageState::Error(error) => rsx!(
                        ErrorMessage {
                            message: error.message(),
                            on_retry: move |_| reload += 1
                        }
                    ),
                    PageState::Success(_) if shelves.is_empty() => rsx!(
                        div { class: "mt-6 text-center text-gray-600", "No brands found." }
                    ),
                    PageState::Success(_) => rsx!(
                        div { class: "space-y-12",
                            for (brand, variants) in shelves.clone() {
                                BrandShelf { key: "{brand.id}", brand: brand.clone(), variants }
                            }
                        }
                    ),
                }}
            }
        }
    )
}
