//! Mobilinx catalog core.
//!
//! The library target carries the pure, renderer-independent pieces of the
//! application: the wire-format data model and the in-memory catalog engine
//! (indexes, joins, price derivation, and text search). The Dioxus client in
//! the binary target builds its pages on top of these modules.

pub mod catalog;
pub mod model;
