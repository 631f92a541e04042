//! # DocList
//!
//! A doctor directory: a small server that publishes the record set, and a
//! browsing client that filters it, sorts it by surname and recommends
//! similar doctors.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! doclist serve --data-file data/doctors.json --static-dir static --http-port 5000
//! ```
//!
//! ### As a Client
//!
//! ```bash
//! doclist browse --url http://localhost:5000 --specialty Cardiology --min-rating 4 --show 12
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use doclist::prelude::*;
//!
//! let anchor = Record::new(1u64, "Ann Young", "Cardiology", "North", 4.0);
//! let records = vec![
//!     anchor.clone(),
//!     Record::new(2u64, "Bo Lind", "Cardiology", "North", 4.2),
//!     Record::new(3u64, "Cy Moss", "Cardiology", "South", 4.1),
//! ];
//!
//! let store = DataStore::with_records(records);
//! let similar = rank(&store.snapshot(), &anchor);
//! assert_eq!(similar.len(), 2);
//! assert_eq!(similar[0].name, "Bo Lind");
//! ```
//!
//! ## Crate Structure
//!
//! - `doclist-core` - Record model, filtering, surname ordering
//! - `doclist-similarity` - Similar-doctor ranking
//! - `doclist-storage` - Snapshot store and data sources
//! - `doclist-browser` - Event/command session and presenters
//! - `doclist-api` - REST API

// Re-export core types
pub use doclist_core::{
    Record, RecordId, Contact, Education,
    Filter, FilterCriteria, FilterOptions,
    sort_by_surname, sorted_by_surname,
    Error, Result,
};

// Re-export ranking
pub use doclist_similarity::{rank, Ranker, RankedRecord, SimilarityKey, DEFAULT_SIMILAR_LIMIT};

// Re-export storage
pub use doclist_storage::{DataStore, DataSource, FetchError, FileSource, HttpSource, StaticSource};

// Re-export browser
pub use doclist_browser::{Command, Controller, Event, Presenter, Session, TextPresenter};

// Re-export API
pub use doclist_api::{RestApi, ServerConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Record, RecordId,
        Filter, FilterCriteria, FilterOptions,
        sorted_by_surname,
        rank, Ranker,
        DataStore, DataSource, FileSource, HttpSource,
        Controller, Event, Presenter, TextPresenter,
        RestApi, ServerConfig,
    };
}
