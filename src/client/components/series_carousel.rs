use dioxus::prelude::*;

use crate::client::router::Route;
use crate::model::catalog::Series;

/// Horizontally scrolling strip of series cards for the landing page.
#[component]
pub fn SeriesCarousel(items: Vec<Series>) -> Element {
    if items.is_empty() {
        return rsx!(
            div { class: "text-sm text-gray-500", "No series to show." }
        );
    }

    rsx!(
        div { class: "flex gap-4 overflow-x-auto snap-x snap-mandatory pr-2",
            for series in items {
                Link {
                    key: "{series.id}",
                    to: Route::SeriesDetail { id: series.id.clone() },
                    class: "snap-start shrink-0 w-56 rounded-2xl border border-gray-200 bg-white overflow-hidden hover:shadow-lg transition-shadow",
                    div { class: "h-32 bg-gray-50 p-4",
                        if let Some(image) = series.image.as_ref() {
                            img {
                                src: "{image}",
                                alt: "{series.name}",
                                class: "w-full h-full object-contain"
                            }
                        } else {
                            div { class: "h-full w-full grid place-items-center text-gray-400",
                                "No image"
                            }
                        }
                    }
                    div { class: "p-4",
                        div { class: "text-sm text-gray-500", "Series" }
                        div { class: "font-semibold text-gray-900 truncate", "{series.name}" }
                    }
                }
            }
        }
    )
}
