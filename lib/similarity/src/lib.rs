//! # DocList Similarity
//!
//! Recommends doctors related to the one currently being viewed.
//!
//! ## Ranking
//!
//! ```text
//! records ──> candidates ──> stable sort ──> first 10
//!             (same specialty,  (same area first,
//!              other id)         closest rating)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use doclist_core::Record;
//! use doclist_similarity::rank;
//!
//! let anchor = Record::new(1u64, "Ann Young", "Cardiology", "North", 4.0);
//! let records = vec![
//!     anchor.clone(),
//!     Record::new(2u64, "Bo Lind", "Cardiology", "North", 4.2),
//!     Record::new(3u64, "Cy Moss", "Cardiology", "South", 4.1),
//!     Record::new(4u64, "Di Ng", "Neurology", "North", 4.0),
//! ];
//!
//! let similar = rank(&records, &anchor);
//! let names: Vec<_> = similar.iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, ["Bo Lind", "Cy Moss"]);
//! ```

pub mod rank;

pub use rank::{rank, RankedRecord, Ranker, SimilarityKey, DEFAULT_SIMILAR_LIMIT};
