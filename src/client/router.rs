use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        BrandDetail, Brands, Home, ModelDetail, NotFound, ProductDetail, SeriesDetail, SeriesList,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/brands")]
    Brands {},

    #[route("/brands/:id")]
    BrandDetail { id: String },

    #[route("/series")]
    SeriesList {},

    #[route("/series/:id")]
    SeriesDetail { id: String },

    #[route("/models/:id")]
    ModelDetail { id: String },

    #[route("/products/:id")]
    ProductDetail { id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
