use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowLeft, FaBoxOpen, FaCalendar, FaHashtag, FaLayerGroup, FaMagnifyingGlass,
};
use dioxus_free_icons::Icon;

use crate::catalog::contains_ignore_case;
use crate::client::components::{
    CardGridSkeleton, ErrorMessage, HeaderSkeleton, InfoPill, Page,
};
use crate::client::router::Route;
use crate::client::store::PageState;
use crate::client::util::format::format_date;
use crate::model::catalog::{Model, Series};

#[component]
pub fn SeriesDetail(id: ReadSignal<String>) -> Element {
    let mut state = use_signal(|| PageState::<(Series, Vec<Model>)>::Idle);
    let mut reload = use_signal(|| 0u32);
    let mut query = use_signal(String::new);

    #[cfg(feature = "web")]
    {
        use crate::client::util::fetch::{fetch_models_by_series, fetch_single_series, FetchError};

        let future = use_resource(move || {
            reload.read();
            let id = id();
            async move {
                let (series, models) =
                    futures::join!(fetch_single_series(&id), fetch_models_by_series(&id));
                Ok::<_, FetchError>((series?, models?))
            }
        });
        let next = PageState::from_result(future.read_unchecked().as_ref());
        if *state.peek() != next {
            state.set(next);
        }
    }

    rsx!(
        Title { "Series | MOBILINX" }
        Meta {
            name: "description",
            content: "Series details and models."
        }
        Page {
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "mb-8",
                    Link {
                        to: Route::SeriesList {},
                        class: "inline-flex items-center gap-2 text-sm font-medium text-gray-700 bg-white/70 backdrop-blur border border-gray-200 rounded-full px-4 py-2 hover:bg-white hover:shadow-sm transition-all",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaArrowLeft
                        }
                        "Back to All Series"
                    }
                }

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
                    PageState::Success((series, models)) => {
                        // Embeds are never assumed present.
                        let brand_name = series
                            .brand
                            .as_ref()
                            .map(|brand| brand.name.clone())
                            .unwrap_or_else(|| "Unknown Brand".to_string());

                        let needle = query.read().trim().to_string();
                        let filtered: Vec<Model> = models
                            .iter()
                            .filter(|model| contains_ignore_case(&model.name, &needle))
                            .cloned()
                            .collect();

                        rsx!(
                            div { class: "mb-12 md:mb-16",
                                div { class: "flex flex-col md:flex-row items-start gap-8",
                                    if let Some(image) = series.image.as_ref() {
                                        div { class: "w-full md:w-64 h-64 bg-white/60 border border-gray-200 p-4 rounded-2xl flex-shrink-0",
                                            img {
                                                src: "{image}",
                                                alt: "{series.name}",
                                                class: "w-full h-full object-contain"
                                            }
                                        }
                                    }
                                    div { class: "flex-1",
                                        p { class: "text-indigo-600 font-semibold", "Series" }
                                        h1 { class: "text-4xl md:text-5xl font-extrabold tracking-tight my-2",
                                            span { class: "bg-gradient-to-r from-indigo-600 to-fuchsia-500 bg-clip-text text-transparent",
                                                "{series.name}"
                                            }
                                        }
                                        div { class: "mt-4 flex flex-wrap gap-3 text-sm",
                                            InfoPill { text: format!("{} Models", models.len()),
                                                Icon { width: 16, height: 16, icon: FaLayerGroup }
                                            }
                                            InfoPill { text: brand_name,
                                                Icon { width: 16, height: 16, icon: FaHashtag }
                                            }
                                            InfoPill { text: format!("Created: {}", format_date(&series.created_at)),
                                                Icon { width: 16, height: 16, icon: FaCalendar }
                                            }
                                        }
                                    }
                                }
                            }

                            div { class: "flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-6",
                                h2 { class: "text-3xl font-bold text-gray-900",
                                    "Models in this Series"
                                }
                                div { class: "relative w-full sm:w-64",
                                    div { class: "pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3",
                                        Icon {
                                            width: 20,
                                            height: 20,
                                            icon: FaMagnifyingGlass
                                        }
                                    }
                                    input {
                                        r#type: "search",
                                        class: "block w-full rounded-full border-0 bg-white/70 py-2.5 pl-10 pr-3 text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 focus:ring-2 focus:ring-inset focus:ring-indigo-600 sm:text-sm",
                                        placeholder: "Search models...",
                                        value: "{query}",
                                        oninput: move |event| query.set(event.value())
                                    }
                                }
                            }

                            if filtered.is_empty() {
                                div { class: "text-center text-gray-500 py-16 flex flex-col items-center",
                                    Icon {
                                        width: 48,
                                        height: 48,
                                        icon: FaBoxOpen
                                    }
                                    p { class: "text-xl font-semibold text-gray-700 mt-4", "No Models Found" }
                                    if needle.is_empty() {
                                        p { "There are no models listed for this series yet." }
                                    } else {
                                        p { "Your search for \"{needle}\" did not match any models." }
                                    }
                                }
                            } else {
                                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                                    for model in filtered {
                                        Link {
                                            key: "{model.id}",
                                            to: Route::ModelDetail { id: model.id.clone() },
                                            class: "block bg-white/70 backdrop-blur rounded-2xl border border-gray-200 overflow-hidden h-full hover:shadow-lg transition-shadow",
                                            div { class: "h-48 bg-gray-50 p-4",
                                                if let Some(image) = model.image.as_ref() {
                                                    img {
                                                        src: "{image}",
                                                        alt: "{model.name}",
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
                                                    "{model.name}"
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
