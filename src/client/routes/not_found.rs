use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 text-center",
                p { class: "text-6xl font-extrabold text-gray-300", "404" }
                p { class: "text-xl font-semibold text-gray-700", "This page does not exist." }
                Link {
                    to: Route::Home {},
                    class: "px-4 py-2 rounded-full bg-gray-900 hover:bg-black text-white font-medium transition-colors",
                    "Back to home"
                }
            }
        }
    )
}
