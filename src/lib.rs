//! showcase - prerender project cards and active navigation into HTML pages.
//!
//! A page is parsed into an owned document tree, its navigation links are
//! matched against the page path, and every `[data-projects]` container is
//! filled with cards built from a JSON projects document. The pure pieces
//! (record normalization, narrowing, card projection, path matching) work
//! without any document.

pub mod config;
pub mod dom;
pub mod http_client;
pub mod hydrate;
pub mod loader;
pub mod models;
pub mod nav;
pub mod page;
pub mod render;
pub mod view;
