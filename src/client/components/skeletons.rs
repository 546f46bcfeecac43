use dioxus::prelude::*;

/// Placeholder rows shown while the landing-page shelves load.
#[component]
pub fn ShelfSkeleton() -> Element {
    rsx!(
        div { class: "space-y-10 animate-pulse",
            for _ in 0..2 {
                div {
                    div { class: "h-6 w-52 bg-gray-200 rounded mb-4" }
                    div { class: "flex gap-4 overflow-hidden",
                        for _ in 0..4 {
                            div { class: "w-64 h-52 bg-gray-100 rounded-2xl border border-gray-200" }
                        }
                    }
                }
            }
        }
    )
}

/// Placeholder grid for card listings (brands, series, models, variants).
#[component]
pub fn CardGridSkeleton(count: Option<usize>) -> Element {
    let count = count.unwrap_or(4);

    rsx!(
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
            for _ in 0..count {
                div { class: "bg-white/60 rounded-2xl p-4 animate-pulse",
                    div { class: "h-40 bg-gray-200/80 rounded-lg mb-4" }
                    div { class: "h-5 bg-gray-200/80 rounded w-5/6" }
                }
            }
        }
    )
}

/// Placeholder for a detail-page header while the entity loads.
#[component]
pub fn HeaderSkeleton() -> Element {
    rsx!(
        div { class: "flex flex-col md:flex-row items-start gap-8 animate-pulse",
            div { class: "w-full md:w-64 h-64 bg-gray-200/80 rounded-2xl flex-shrink-0" }
            div { class: "flex-1 mt-4 md:mt-0",
                div { class: "h-12 bg-gray-200/80 rounded-lg w-3/4 mb-6" }
                div { class: "flex flex-wrap gap-3",
                    div { class: "h-8 bg-gray-200/80 rounded-full w-36" }
                    div { class: "h-8 bg-gray-200/80 rounded-full w-44" }
                }
            }
        }
    )
}
