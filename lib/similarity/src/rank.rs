//! Similar-doctor ranking
//!
//! Candidates share the anchor's specialty and are ordered by a composite
//! key: area match first, rating proximity second. The area tier is
//! impermeable - a same-area candidate with a large rating gap still beats
//! a different-area candidate with an identical rating.

use doclist_core::Record;
use serde::Serialize;
use std::cmp::Ordering;

/// Number of similar records shown in the detail view
pub const DEFAULT_SIMILAR_LIMIT: usize = 10;

/// Sort key of a candidate relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityKey {
    /// Candidate is in the anchor's area
    pub same_area: bool,
    /// Absolute rating difference to the anchor
    pub rating_distance: f64,
}

impl SimilarityKey {
    pub fn between(anchor: &Record, candidate: &Record) -> Self {
        Self {
            same_area: candidate.area == anchor.area,
            rating_distance: (candidate.review_score - anchor.review_score).abs(),
        }
    }

    /// Ranking order: same area before different area, then closer rating first.
    ///
    /// NaN distances sort after every finite distance.
    pub fn compare(&self, other: &Self) -> Ordering {
        other
            .same_area
            .cmp(&self.same_area)
            .then_with(|| self.rating_distance.total_cmp(&other.rating_distance))
    }
}

/// A ranked candidate with the key that placed it
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecord {
    pub record: Record,
    #[serde(flatten)]
    pub key: SimilarityKey,
}

/// Ranks records by similarity to an anchor record
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self { limit: DEFAULT_SIMILAR_LIMIT }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Same specialty, different id
    #[inline]
    pub fn is_candidate(anchor: &Record, record: &Record) -> bool {
        record.specialty == anchor.specialty && record.id != anchor.id
    }

    /// Rank candidates and keep their sort keys.
    ///
    /// The anchor does not need to be part of `records`. Equal keys keep
    /// their relative input order.
    pub fn rank_scored(&self, records: &[Record], anchor: &Record) -> Vec<RankedRecord> {
        let mut ranked: Vec<RankedRecord> = records
            .iter()
            .filter(|r| Self::is_candidate(anchor, r))
            .map(|r| RankedRecord {
                key: SimilarityKey::between(anchor, r),
                record: r.clone(),
            })
            .collect();

        // stable: ties keep input order
        ranked.sort_by(|a, b| a.key.compare(&b.key));
        ranked.truncate(self.limit);
        ranked
    }

    /// Rank candidates, returning only the records
    pub fn rank(&self, records: &[Record], anchor: &Record) -> Vec<Record> {
        self.rank_scored(records, anchor)
            .into_iter()
            .map(|r| r.record)
            .collect()
    }
}

/// Up to [`DEFAULT_SIMILAR_LIMIT`] records most similar to `anchor`
pub fn rank(records: &[Record], anchor: &Record) -> Vec<Record> {
    Ranker::new().rank(records, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doclist_core::RecordId;

    fn doc(id: u64, specialty: &str, area: &str, rating: f64) -> Record {
        Record::new(id, format!("Doctor {}", id), specialty, area, rating)
    }

    fn ids(records: &[Record]) -> Vec<u64> {
        records
            .iter()
            .map(|r| match r.id {
                RecordId::Integer(i) => i,
                RecordId::String(_) => panic!("unexpected string id"),
                RecordId::Number(_) => panic!("unexpected non-integer id"),
            })
            .collect()
    }

    #[test]
    fn test_area_match_beats_rating_proximity() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        let records = vec![
            anchor.clone(),
            doc(2, "Cardiology", "North", 4.2),
            doc(3, "Cardiology", "South", 4.1),
            doc(4, "Neurology", "North", 4.0),
        ];
        assert_eq!(ids(&rank(&records, &anchor)), vec![2, 3]);
    }

    #[test]
    fn test_rating_proximity_within_tier() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        let records = vec![
            doc(2, "Cardiology", "North", 2.0),
            doc(3, "Cardiology", "North", 4.5),
            doc(4, "Cardiology", "North", 3.9),
            doc(5, "Cardiology", "East", 4.0),
            doc(6, "Cardiology", "West", 1.0),
            doc(7, "Cardiology", "East", 4.7),
        ];
        assert_eq!(ids(&rank(&records, &anchor)), vec![4, 3, 2, 5, 7, 6]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        let records = vec![
            doc(9, "Cardiology", "South", 4.5),
            doc(3, "Cardiology", "South", 3.5),
            doc(7, "Cardiology", "South", 4.5),
        ];
        assert_eq!(ids(&rank(&records, &anchor)), vec![9, 3, 7]);
    }

    #[test]
    fn test_truncates_to_ten() {
        let anchor = doc(0, "Cardiology", "North", 3.0);
        let records: Vec<Record> = (1..=25)
            .map(|i| doc(i, "Cardiology", if i % 2 == 0 { "North" } else { "South" }, 3.0))
            .collect();

        let ranked = rank(&records, &anchor);
        assert_eq!(ranked.len(), DEFAULT_SIMILAR_LIMIT);
        assert!(ranked.iter().all(|r| r.area == "North"));
    }

    #[test]
    fn test_custom_limit() {
        let anchor = doc(0, "Cardiology", "North", 3.0);
        let records: Vec<Record> = (1..=5).map(|i| doc(i, "Cardiology", "North", 3.0)).collect();
        assert_eq!(Ranker::with_limit(2).rank(&records, &anchor).len(), 2);
        assert!(Ranker::with_limit(0).rank(&records, &anchor).is_empty());
    }

    #[test]
    fn test_no_candidates() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        assert!(rank(&[], &anchor).is_empty());
        assert!(rank(&[anchor.clone()], &anchor).is_empty());
        assert!(rank(&[doc(2, "Neurology", "North", 4.0)], &anchor).is_empty());
    }

    #[test]
    fn test_anchor_outside_record_set() {
        let anchor = doc(100, "Cardiology", "North", 4.0);
        let records = vec![doc(1, "Cardiology", "South", 4.0), doc(2, "Cardiology", "North", 1.0)];
        assert_eq!(ids(&rank(&records, &anchor)), vec![2, 1]);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        let records = vec![doc(3, "Cardiology", "South", 1.0), doc(2, "Cardiology", "North", 4.0)];
        let before = records.clone();
        let _ = rank(&records, &anchor);
        assert_eq!(records, before);
    }

    #[test]
    fn test_nan_distance_sorts_last_in_tier() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        let records = vec![doc(2, "Cardiology", "North", f64::NAN), doc(3, "Cardiology", "North", 0.0)];
        assert_eq!(ids(&rank(&records, &anchor)), vec![3, 2]);
    }

    #[test]
    fn test_rank_scored_keys() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        let records = vec![doc(2, "Cardiology", "South", 3.5)];
        let ranked = Ranker::new().rank_scored(&records, &anchor);
        assert_eq!(ranked.len(), 1);
        assert!(!ranked[0].key.same_area);
        assert!((ranked[0].key.rating_distance - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ranked_record_json_shape() {
        let anchor = doc(1, "Cardiology", "North", 4.0);
        let ranked = Ranker::new().rank_scored(&[doc(2, "Cardiology", "North", 4.0)], &anchor);
        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(value["sameArea"], true);
        assert_eq!(value["ratingDistance"], 0.0);
        assert_eq!(value["record"]["id"], 2);
    }

    #[test]
    fn test_key_compare() {
        let near_other = SimilarityKey { same_area: false, rating_distance: 0.0 };
        let far_same = SimilarityKey { same_area: true, rating_distance: 3.0 };
        assert_eq!(far_same.compare(&near_other), Ordering::Less);
        assert_eq!(near_other.compare(&far_same), Ordering::Greater);
    }
}
