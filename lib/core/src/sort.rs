//! Surname ordering for the list view.
//!
//! Comparison approximates a locale-aware collation: names are first compared
//! on an accent-stripped, case-folded key so that "Ávila" sorts next to
//! "Avila" and "de Wit" next to "De Wit". Only when the folded keys are equal
//! do the raw strings decide, which keeps the order total.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use crate::Record;

/// Accent-stripped, lowercased collation key
pub fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Stable sort by surname (last token of the name)
pub fn sort_by_surname(records: &mut [Record]) {
    records.sort_by_cached_key(|r| {
        let surname = r.surname();
        (collation_key(surname), surname.to_string())
    });
}

/// Owned, surname-sorted copy of the given records
pub fn sorted_by_surname<'a, I>(records: I) -> Vec<Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut owned: Vec<Record> = records.into_iter().cloned().collect();
    sort_by_surname(&mut owned);
    owned
}
