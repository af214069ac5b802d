//! Personal portfolio viewer.
//!
//! This crate provides a Dioxus desktop application that renders a
//! single-window portfolio: hero, filterable project gallery,
//! about/contact, and a detail overlay for the active project.

use std::sync::OnceLock;

use folio_core::Catalog;

pub mod components;
pub mod state;
pub mod theme;

/// Catalog installed by `main` before the app launches.
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Installs the catalog. Call once from `main`, before launch.
pub fn set_catalog(catalog: Catalog) {
    CATALOG.set(catalog).ok();
}

/// The catalog installed at startup.
pub fn catalog() -> &'static Catalog {
    CATALOG.get().expect("catalog installed before launch")
}
