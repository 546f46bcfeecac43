#![allow(non_snake_case)]

mod catalog;
mod client;
mod model;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    dioxus::launch(client::App);
}
