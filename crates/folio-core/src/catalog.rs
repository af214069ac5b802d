//! The static project catalog, parsed once at startup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::record::{ProjectRecord, SocialLink};

/// Errors raised while loading the embedded catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project id: {0}")]
    DuplicateId(String),
}

/// The portfolio catalog: an ordered, read-only list of projects plus the
/// social links shown in the hero and contact blocks. Constructed once at
/// startup and never mutated.
#[derive(Clone, Debug, Deserialize)]
pub struct Catalog {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Catalog {
    /// Parses a catalog from JSON, checking the unique-id invariant.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for project in &catalog.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// Looks up a project by id.
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Number of projects in the catalog.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether the catalog holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
