use dioxus::prelude::*;

use crate::client::router::Route;
use crate::model::catalog::Series;

#[component]
pub fn SeriesCard(series: Series) -> Element {
    rsx!(
        Link {
            to: Route::SeriesDetail { id: series.id.clone() },
            class: "block bg-white/70 backdrop-blur rounded-2xl border border-gray-200 overflow-hidden h-full hover:shadow-lg transition-shadow",
            div { class: "h-40 bg-gray-50 p-4",
                if let Some(image) = series.image.as_ref() {
                    img {
                        src: "{image}",
                        alt: "{series.name}",
                        class: "w-full h-full object-contain"
                    }
                } else {
                    div { class: "w-full h-full grid place-items-center text-gray-400",
                        "No image"
                    }
                }
            }
            div { class: "p-4",
                div { class: "text-sm text-gray-500", "Series" }
                div { class: "font-semibold text-gray-900 truncate", "{series.name}" }
            }
        }
    )
}
