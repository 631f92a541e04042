//! # DocList Core
//!
//! Core library for the DocList doctor directory.
//!
//! This crate provides the record model and the list-view logic:
//!
//! - [`Record`] - A doctor profile as served by `/api/doctors`
//! - [`FilterCriteria`] - Name/specialty/area/rating search form
//! - [`sort_by_surname`] - Locale-style ordering by last name
//! - [`FilterOptions`] - Distinct specialties and areas for the selectors
//!
//! ## Example
//!
//! ```rust
//! use doclist_core::{Filter, FilterCriteria, Record, sorted_by_surname};
//!
//! let records = vec![
//!     Record::new(1u64, "John Zeta", "Cardiology", "North", 4.2),
//!     Record::new(2u64, "Ann Young", "Cardiology", "South", 4.6),
//!     Record::new(3u64, "Eve Adams", "Neurology", "North", 4.9),
//! ];
//!
//! let criteria = FilterCriteria::new().with_specialty("Cardiology");
//! let listed = sorted_by_surname(criteria.apply(&records));
//! assert_eq!(listed[0].name, "Ann Young");
//! ```

pub mod record;
pub mod error;
pub mod filter;
pub mod sort;
pub mod options;

pub use record::{check_unique_ids, find, Contact, Education, Record, RecordId};
pub use error::{Error, Result};
pub use filter::{Filter, FilterCriteria};
pub use sort::{collation_key, sort_by_surname, sorted_by_surname};
pub use options::FilterOptions;
