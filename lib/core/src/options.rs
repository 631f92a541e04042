use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use crate::Record;

/// Distinct values offered by the specialty and area selectors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub specialties: Vec<String>,
    pub areas: Vec<String>,
}

impl FilterOptions {
    /// Deduplicated non-empty values in first-seen order
    pub fn from_records(records: &[Record]) -> Self {
        let mut seen_specialties = AHashSet::new();
        let mut seen_areas = AHashSet::new();
        let mut options = Self::default();

        for record in records {
            if !record.specialty.is_empty() && seen_specialties.insert(record.specialty.as_str()) {
                options.specialties.push(record.specialty.clone());
            }
            if !record.area.is_empty() && seen_areas.insert(record.area.as_str()) {
                options.areas.push(record.area.clone());
            }
        }

        options
    }

    pub fn is_empty(&self) -> bool {
        self.specialties.is_empty() && self.areas.is_empty()
    }
}
