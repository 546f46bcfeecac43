use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleXmark;
use dioxus_free_icons::Icon;

/// Full-width failure notice with an optional retry action. Pages omit the
/// handler for terminal conditions like "not found", where retrying would
/// only refetch the same absence.
#[component]
pub fn ErrorMessage(message: String, on_retry: Option<EventHandler<MouseEvent>>) -> Element {
    rsx!(
        div { class: "min-h-[50vh] flex flex-col items-center justify-center text-center gap-4",
            Icon {
                width: 48,
                height: 48,
                icon: FaCircleXmark
            }
            p { class: "text-xl font-semibold text-gray-700",
                "{message}"
            }
            if let Some(on_retry) = on_retry {
                button {
                    class: "px-4 py-2 rounded-full bg-gray-900 hover:bg-black text-white font-medium transition-colors",
                    onclick: move |event| on_retry.call(event),
                    "Try Again"
                }
            }
        }
    )
}
