//! Core data model and filtering for the folio portfolio viewer.
//!
//! This crate holds everything that is independent of the UI: the project
//! record types, the catalog parsed once at startup, and the pure filter
//! that the gallery renders from.

pub mod catalog;
pub mod filter;
pub mod record;

pub use catalog::{Catalog, CatalogError};
pub use filter::filter_projects;
pub use record::{
    CategoryFilter, IconKind, ProjectKind, ProjectLink, ProjectRecord, SocialLink,
};
