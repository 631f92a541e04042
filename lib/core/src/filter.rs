// Record filtering for the list view
use serde::{Deserialize, Serialize};
use crate::Record;

pub trait Filter {
    fn matches(&self, record: &Record) -> bool;

    /// Matching records in input order
    fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Criteria entered in the search form. Unset or empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub name_query: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub min_rating: f64,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    #[must_use]
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Rating threshold from free-form user input; empty, unparseable or NaN input means 0
    pub fn parse_min_rating(input: &str) -> f64 {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0)
    }

    fn category_matches(filter: &Option<String>, value: &str) -> bool {
        match filter.as_deref() {
            None | Some("") => true,
            Some(wanted) => wanted == value,
        }
    }
}

impl Filter for FilterCriteria {
    fn matches(&self, record: &Record) -> bool {
        let name_match = record
            .name
            .to_lowercase()
            .contains(&self.name_query.to_lowercase());
        name_match
            && Self::category_matches(&self.specialty, &record.specialty)
            && Self::category_matches(&self.area, &record.area)
            && record.review_score >= self.min_rating
    }
}
