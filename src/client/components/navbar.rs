use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "sticky top-0 z-50 bg-white/80 backdrop-blur-lg border-b border-gray-200",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex justify-between items-center",
                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold bg-gradient-to-r from-indigo-600 to-fuchsia-500 bg-clip-text text-transparent",
                    "MOBILINX"
                }
                ul { class: "flex items-center gap-6",
                    li {
                        Link {
                            to: Route::Brands {},
                            class: "text-gray-600 hover:text-gray-900 transition-colors",
                            "Brands"
                        }
                    }
                    li {
                        Link {
                            to: Route::SeriesList {},
                            class: "text-gray-600 hover:text-gray-900 transition-colors",
                            "Series"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
