use dioxus::prelude::*;

/// Rounded metadata chip used in detail-page headers. The icon goes in as
/// children so each page picks its own.
#[component]
pub fn InfoPill(text: String, class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class {
        class
    } else {
        "text-gray-800"
    };

    rsx!(
        div {
            class: "flex items-center gap-2 px-3 py-1.5 bg-white/70 backdrop-blur border border-gray-200 rounded-full {class}",
            {children}
            span { class: "font-medium", "{text}" }
        }
    )
}
