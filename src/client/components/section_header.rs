use dioxus::prelude::*;

#[component]
pub fn SectionHeader(title: &'static str, subtitle: Option<&'static str>) -> Element {
    rsx!(
        div { class: "mb-5 md:mb-6",
            h2 { class: "text-2xl md:text-3xl font-bold text-gray-900",
                "{title}"
            }
            if let Some(subtitle) = subtitle {
                p { class: "text-gray-600 mt-1",
                    "{subtitle}"
                }
            }
        }
    )
}
