//! Reference catalogs
//!
//! Companies and worlds are loaded once at startup and shared read-only by
//! every request. Catalogs keep insertion order so that unfiltered listings
//! match the order of the source file.

use indexmap::IndexMap;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Company, TransportMode, World};

/// A record addressable by an external string id
pub trait CatalogEntry: Clone {
    fn catalog_id(&self) -> &str;
}

impl CatalogEntry for Company {
    fn catalog_id(&self) -> &str {
        &self.id
    }
}

impl CatalogEntry for World {
    fn catalog_id(&self) -> &str {
        &self.id
    }
}

/// Immutable, insertion-ordered id → record map
#[derive(Debug, Clone)]
pub struct ReferenceCatalog<T> {
    entries: Arc<IndexMap<String, T>>,
}

impl<T: CatalogEntry> ReferenceCatalog<T> {
    /// Build a catalog, rejecting empty and duplicate ids
    pub fn from_entries(entries: Vec<T>) -> CatalogResult<Self> {
        let mut map = IndexMap::with_capacity(entries.len());

        for (position, entry) in entries.into_iter().enumerate() {
            let id = entry.catalog_id().to_string();
            if id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if map.insert(id.clone(), entry).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }

        Ok(Self {
            entries: Arc::new(map),
        })
    }

    /// Exact-match lookup
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// All records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for ReferenceCatalog<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(IndexMap::new()),
        }
    }
}

/// World catalog
pub type WorldCatalog = ReferenceCatalog<World>;

/// Company catalog with a secondary index by transport mode
#[derive(Debug, Clone, Default)]
pub struct CompanyCatalog {
    companies: ReferenceCatalog<Company>,
    by_mode: Arc<IndexMap<TransportMode, Vec<Company>>>,
}

impl CompanyCatalog {
    pub fn from_entries(entries: Vec<Company>) -> CatalogResult<Self> {
        let companies = ReferenceCatalog::from_entries(entries)?;

        let mut by_mode: IndexMap<TransportMode, Vec<Company>> = TransportMode::ALL
            .into_iter()
            .map(|mode| (mode, Vec::new()))
            .collect();

        for company in companies.iter() {
            if let Some(mode) = company.mode {
                by_mode.entry(mode).or_default().push(company.clone());
            }
        }

        Ok(Self {
            companies,
            by_mode: Arc::new(by_mode),
        })
    }

    pub fn get(&self, id: &str) -> Option<&Company> {
        self.companies.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    /// Companies operating the given mode, in insertion order
    pub fn with_mode(&self, mode: TransportMode) -> &[Company] {
        self.by_mode.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Both reference catalogs, as consumed by the warp query validator
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub companies: CompanyCatalog,
    pub worlds: WorldCatalog,
}

impl ReferenceData {
    pub fn new(companies: CompanyCatalog, worlds: WorldCatalog) -> Self {
        Self { companies, worlds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, mode: Option<TransportMode>) -> Company {
        Company {
            id: id.to_string(),
            name: id.to_uppercase(),
            pattern: format!("{}%", id.to_uppercase()),
            mode,
        }
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = CompanyCatalog::from_entries(vec![
            company("zeta", None),
            company("alpha", Some(TransportMode::Bus)),
            company("mid", Some(TransportMode::Air)),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_catalog_exact_lookup() {
        let worlds = WorldCatalog::from_entries(vec![World {
            id: "new".to_string(),
            uuid: "253ced62-9637-4f7b-a32d-4e3e8e767bd1".to_string(),
        }])
        .unwrap();

        assert!(worlds.get("new").is_some());
        assert!(worlds.get("New").is_none());
        assert!(worlds.get("ne").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicates_and_empty_ids() {
        let duplicate = ReferenceCatalog::from_entries(vec![
            company("mrt", None),
            company("mrt", None),
        ]);
        assert!(matches!(duplicate, Err(CatalogError::DuplicateId(id)) if id == "mrt"));

        let empty = ReferenceCatalog::from_entries(vec![company("", None)]);
        assert!(matches!(empty, Err(CatalogError::EmptyId(0))));
    }

    #[test]
    fn test_mode_index() {
        let catalog = CompanyCatalog::from_entries(vec![
            company("a", Some(TransportMode::Bus)),
            company("b", Some(TransportMode::WarpRail)),
            company("c", Some(TransportMode::Bus)),
            company("d", None),
        ])
        .unwrap();

        let buses: Vec<&str> = catalog
            .with_mode(TransportMode::Bus)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(buses, vec!["a", "c"]);
        assert!(catalog.with_mode(TransportMode::Sea).is_empty());
        assert_eq!(catalog.len(), 4);
    }
}
