use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaBoxOpen, FaCalendar, FaLayerGroup};
use dioxus_free_icons::Icon;

use crate::client::components::{
    CardGridSkeleton, ErrorMessage, HeaderSkeleton, InfoPill, Page, SeriesCard,
};
use crate::client::router::Route;
use crate::client::store::PageState;
use crate::client::util::format::format_date;
use crate::model::catalog::{Brand, Series};

#[component]
pub fn BrandDetail(id: ReadSignal<String>) -> Element {
    let mut state = use_signal(|| PageState::<(Brand, Vec<Series>)>::Idle);
    let mut reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        use crate::client::util::fetch::{fetch_brand, fetch_series_by_brand, FetchError};

        let future = use_resource(move || {
            reload.read();
            let id = id();
            async move {
                let (brand, series) =
                    futures::join!(fetch_brand(&id), fetch_series_by_brand(&id));
                Ok::<_, FetchError>((brand?, series?))
            }
        });
        let next = PageState::from_result(future.read_unchecked().as_ref());
        if *state.peek() != next {
            state.set(next);
        }
    }

    rsx!(
        Title { "Brand | MOBILINX" }
        Meta {
            name: "description",
            content: "Brand details and series."
        }
        Page {
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "mb-8",
                    Link {
                        to: Route::Brands {},
                        class: "inline-flex items-center gap-2 text-sm font-medium text-gray-700 bg-white/70 backdrop-blur border border-gray-200 rounded-full px-4 py-2 hover:bg-white hover:shadow-sm transition-all",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaArrowLeft
                        }
                        "Back to All Brands"
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
                    PageState::Success((brand, series)) => rsx!(
                        div { class: "mb-12 md:mb-16",
                            div { class: "flex flex-col md:flex-row items-start gap-8",
                                if let Some(image) = brand.image.as_ref() {
                                    div { class: "w-full md:w-64 h-64 bg-white/60 border border-gray-200 p-4 rounded-2xl flex-shrink-0",
                                        img {
                                            src: "{image}",
                                            alt: "{brand.name}",
                                            class: "w-full h-full object-contain"
                                        }
                                    }
                                }
                                div { class: "flex-1",
                                    p { class: "text-indigo-600 font-semibold", "Brand" }
                                    h1 { class: "text-4xl md:text-5xl font-extrabold tracking-tight my-2",
                                        span { class: "bg-gradient-to-r from-indigo-600 to-fuchsia-500 bg-clip-text text-transparent",
                                            "{brand.name}"
                                        }
                                    }
                                    div { class: "mt-4 flex flex-wrap gap-3 text-sm",
                                        InfoPill { text: format!("{} Series", series.len()),
                                            Icon { width: 16, height: 16, icon: FaLayerGroup }
                                        }
                                        InfoPill { text: format!("Established: {}", format_date(&brand.created_at)),
                                            Icon { width: 16, height: 16, icon: FaCalendar }
                                        }
                                    }
                                }
                            }
                        }

                        h2 { class: "text-3xl font-bold text-gray-900 mb-6",
                            "Series by {brand.name}"
                        }

                        if series.is_empty() {
                            div { class: "text-center text-gray-500 py-16 flex flex-col items-center",
                                Icon {
                                    width: 48,
                                    height: 48,
                                    icon: FaBoxOpen
                                }
                                p { class: "text-xl font-semibold text-gray-700 mt-4", "No Series Found" }
                                p { "There are no product series listed for this brand yet." }
                            }
                        } else {
                            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                                for series_item in series.clone() {
                                    SeriesCard { key: "{series_item.id}", series: series_item.clone() }
                                }
                            }
                        }
                    ),
                }}
            }
        }
    )
}
