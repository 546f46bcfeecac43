use dioxus::prelude::*;

use crate::client::router::Route;

/// Which detail page a search-result pill links to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResultTarget {
    Brand,
    Series,
    Model,
    Product,
}

impl ResultTarget {
    fn route(self, id: String) -> Route {
        match self {
            Self::Brand => Route::BrandDetail { id },
            Self::Series => Route::SeriesDetail { id },
            Self::Model => Route::ModelDetail { id },
            Self::Product => Route::ProductDetail { id },
        }
    }
}

/// One labelled group of quick-search results, each entry a link to its
/// detail page. Shows at most six entries.
#[component]
pub fn ResultPill(label: &'static str, target: ResultTarget, items: Vec<(String, String)>) -> Element {
    if items.is_empty() {
        return rsx!(
            div { class: "bg-white/60 rounded-xl border border-gray-200 p-3",
                div { class: "text-xs text-gray-500 mb-1", "{label}" }
                div { class: "text-sm text-gray-400", "No results" }
            }
        );
    }

    rsx!(
        div { class: "bg-white/60 rounded-xl border border-gray-200 p-3",
            div { class: "text-xs text-gray-500 mb-1", "{label}" }
            div { class: "flex flex-wrap gap-2",
                for (id, name) in items.into_iter().take(6) {
                    Link {
                        key: "{id}",
                        to: target.route(id.clone()),
                        class: "px-2.5 py-1 rounded-lg bg-gray-900/5 text-gray-800 border border-gray-200 hover:bg-gray-900/10 transition-colors",
                        "{name}"
                    }
                }
            }
        }
    )
}
