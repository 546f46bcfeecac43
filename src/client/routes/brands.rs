use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaMagnifyingGlass};
use dioxus_free_icons::Icon;

use crate::catalog::contains_ignore_case;
use crate::client::components::{BrandCard, CardGridSkeleton, ErrorMessage, Page};
use crate::client::store::PageState;
use crate::model::catalog::Brand;

#[component]
pub fn Brands() -> Element {
    let mut state = use_signal(|| PageState::<Vec<Brand>>::Idle);
    let mut reload = use_signal(|| 0u32);
    let mut query = use_signal(String::new);

    #[cfg(feature = "web")]
    {
        use crate::client::util::fetch::fetch_brands;

        let future = use_resource(move || {
            reload.read();
            async move { fetch_brands().await }
        });
        let next = PageState::from_result(future.read_unchecked().as_ref());
        if *state.peek() != next {
            state.set(next);
        }
    }

    rsx!(
        Title { "Brands | MOBILINX" }
        Meta {
            name: "description",
            content: "All brands in the catalog."
        }
        Page {
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "text-center mb-10",
                    h1 { class: "text-4xl md:text-5xl font-extrabold tracking-tight text-gray-900",
                        "Explore Our "
                        span { class: "bg-gradient-to-r from-indigo-600 to-fuchsia-500 bg-clip-text text-transparent",
                            "Trusted Brands"
                        }
                    }
                    p { class: "mt-3 text-lg text-gray-600 max-w-2xl mx-auto",
                        "Discover all the top-tier brands we partner with."
                    }
                    div { class: "mt-8 max-w-lg mx-auto",
                        div { class: "relative",
                            div { class: "pointer-events-none absolute inset-y-0 left-0 flex items-center pl-4",
                                Icon {
                                    width: 20,
                                    height: 20,
                                    icon: FaMagnifyingGlass
                                }
                            }
                            input {
                                r#type: "search",
                                class: "block w-full rounded-full border-0 bg-white/70 py-3 pl-12 pr-5 text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 focus:ring-2 focus:ring-inset focus:ring-indigo-600 sm:text-sm backdrop-blur",
                                placeholder: "Search by brand name...",
                                value: "{query}",
                                oninput: move |event| query.set(event.value())
                            }
                        }
                    }
                }

                {match &*state.read() {
                    PageState::Idle | PageState::Loading => rsx!( CardGridSkeleton { count: 8 } ),
                    PageState::Error(error) => rsx!(
                        ErrorMessage {
                            message: error.message(),
                            on_retry: move |_| reload += 1
                        }
                    ),
                    PageState::Success(brands) => {
                        let needle = query.read().trim().to_string();
                        let filtered: Vec<Brand> = brands
                            .iter()
                            .filter(|brand| contains_ignore_case(&brand.name, &needle))
                            .cloned()
                            .collect();

                        if filtered.is_empty() {
                            rsx!(
                                div { class: "text-center text-gray-500 mt-16 flex flex-col items-center",
                                    Icon {
                                        width: 48,
                                        height: 48,
                                        icon: FaBoxOpen
                                    }
                                    p { class: "text-xl font-semibold text-gray-700 mt-4", "No Brands Found" }
                                    p { "Your search for \"{needle}\" did not match any of our brands." }
                                }
                            )
                        } else {
                            rsx!(
                                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                                    for brand in filtered {
                                        BrandCard { key: "{brand.id}", brand: brand.clone() }
                                    }
                                }
                            )
                        }
                    }
                }}
            }
        }
    )
}
