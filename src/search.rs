//! Search filtering.
//!
//! A record matches the search text when any of its fields does:
//! string fields by case-insensitive substring containment, numeric fields
//! by literal containment within their decimal rendering. An empty search
//! matches everything. Filtering is stable.

use crate::record::{Field, Record, Value};

/// Returns the records that match `text`, in their original order.
///
/// ```rust
/// use bubbletea_datatable::record::Record;
/// use bubbletea_datatable::search::search;
///
/// let cars = vec![
///     Record::new("Honda", "Civic", 22000.0),
///     Record::new("Ford", "Focus", 18500.0),
/// ];
/// assert_eq!(search("hon", &cars).len(), 1);
/// assert_eq!(search("185", &cars)[0].make, "Ford");
/// assert_eq!(search("", &cars).len(), 2);
/// ```
pub fn search<'a>(text: &str, records: &'a [Record]) -> Vec<&'a Record> {
    if text.is_empty() {
        return records.iter().collect();
    }
    let needle = Needle::new(text);
    records.iter().filter(|r| needle.matches(r)).collect()
}

/// Dataset indices of the records that match `text`.
pub(crate) fn matching_indices(text: &str, records: &[Record]) -> Vec<usize> {
    if text.is_empty() {
        return (0..records.len()).collect();
    }
    let needle = Needle::new(text);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| needle.matches(r))
        .map(|(index, _)| index)
        .collect()
}

/// Reports whether a single record matches `text`.
pub fn matches(record: &Record, text: &str) -> bool {
    text.is_empty() || Needle::new(text).matches(record)
}

/// The search text, lower-cased once per search rather than once per record.
struct Needle<'t> {
    raw: &'t str,
    folded: String,
}

impl<'t> Needle<'t> {
    fn new(raw: &'t str) -> Self {
        Self {
            raw,
            folded: raw.to_lowercase(),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        Field::ALL
            .into_iter()
            .any(|field| match field.value(record) {
                Value::Text(s) => s.to_lowercase().contains(&self.folded),
                Value::Number(n) => n.to_string().contains(self.raw),
            })
    }
}
