//! Column sorting.
//!
//! Sorting is stable, and ties keep the order earlier sorts left them in.
//! Rather than re-sorting a previously sorted sequence in place, a
//! [`SortOrder`] remembers the keys that were active before the current one
//! and uses them, newest first, as tie breakers. Applying it to the filtered
//! records in dataset order gives the same result as sorting successively,
//! which lets the view be derived from scratch after every change.

use crate::record::{Field, Record, Value};
use std::cmp::Ordering;
use std::fmt;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header marker for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        })
    }
}

/// A field paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// The field being sorted on.
    pub field: Field,
    /// The direction of the sort.
    pub direction: SortDirection,
}

impl SortKey {
    /// Compares two records on this key.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.direction
            .apply(compare_values(self.field.value(a), self.field.value(b)))
    }
}

/// The active sort key plus the keys that preceded it.
///
/// ```rust
/// use bubbletea_datatable::record::Field;
/// use bubbletea_datatable::sort::{SortDirection, SortOrder};
///
/// let order = SortOrder::default().toggled(Field::Price);
/// assert_eq!(order.active().unwrap().direction, SortDirection::Ascending);
///
/// let order = order.toggled(Field::Price);
/// assert_eq!(order.active().unwrap().direction, SortDirection::Descending);
///
/// let order = order.toggled(Field::Make);
/// assert_eq!(order.active().unwrap().field, Field::Make);
/// assert_eq!(order.active().unwrap().direction, SortDirection::Ascending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    // Most recent last; at most one entry per field.
    keys: Vec<SortKey>,
}

impl SortOrder {
    /// The key currently sorted on, if any.
    pub fn active(&self) -> Option<SortKey> {
        self.keys.last().copied()
    }

    /// Returns true if no sort has been requested.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the order that results from clicking `field`'s column.
    ///
    /// The active field flips direction; any other field becomes the active
    /// one, ascending.
    pub fn toggled(&self, field: Field) -> Self {
        let mut keys = self.keys.clone();
        match keys.last_mut() {
            Some(active) if active.field == field => {
                active.direction = active.direction.toggled();
            }
            _ => {
                keys.retain(|key| key.field != field);
                keys.push(SortKey {
                    field,
                    direction: SortDirection::Ascending,
                });
            }
        }
        Self { keys }
    }

    /// Compares two records, falling back to earlier keys on ties.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.keys
            .iter()
            .rev()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Returns `records` reordered by `order`. The input is left untouched.
///
/// ```rust
/// use bubbletea_datatable::record::{Field, Record};
/// use bubbletea_datatable::sort::{sort, SortOrder};
///
/// let cars = vec![
///     Record::new("Toyota", "Camry", 26500.0),
///     Record::new("Honda", "Civic", 22000.0),
/// ];
/// let refs: Vec<&Record> = cars.iter().collect();
/// let sorted = sort(&refs, &SortOrder::default().toggled(Field::Price));
/// assert_eq!(sorted[0].model, "Civic");
/// assert_eq!(refs[0].model, "Camry");
/// ```
pub fn sort<'a>(records: &[&'a Record], order: &SortOrder) -> Vec<&'a Record> {
    let mut sorted = records.to_vec();
    if !order.is_empty() {
        // slice::sort_by is stable
        sorted.sort_by(|a, b| order.compare(a, b));
    }
    sorted
}

/// Sorts dataset indices in place by `order`.
pub(crate) fn sort_indices(indices: &mut [usize], records: &[Record], order: &SortOrder) {
    if order.is_empty() {
        return;
    }
    indices.sort_by(|&a, &b| order.compare(&records[a], &records[b]));
}

/// Ascending comparison of two field values.
///
/// Strings use [`locale_cmp`], numbers compare numerically. Values of
/// different kinds, and NaN, compare equal.
pub fn compare_values(a: Value<'_>, b: Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => locale_cmp(a, b),
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Dictionary-style string comparison.
///
/// Letters compare case-insensitively first. When two strings differ only
/// in case, lower case sorts before upper case at the first difference.
///
/// There is no collation table: after case folding, characters compare by
/// code point, so accented letters sort after every unaccented ASCII letter
/// (`"Škoda"` comes after `"Toyota"`).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cars() -> Vec<Record> {
        vec![
            Record::new("Toyota", "Camry", 26500.0),
            Record::new("honda", "Accord", 27000.0),
            Record::new("Ford", "Focus", 18500.0),
            Record::new("Honda", "Civic", 22000.0),
            Record::new("Ford", "Fiesta", 22000.0),
        ]
    }

    fn models<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.model.as_str()).collect()
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("honda", "Honda"), Ordering::Less);
        assert_eq!(locale_cmp("Honda", "Honda"), Ordering::Equal);
        assert_eq!(locale_cmp("Ford", "Fo"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_accents_by_code_point() {
        assert_eq!(locale_cmp("Škoda", "Toyota"), Ordering::Greater);
        assert_eq!(locale_cmp("Citroën", "Citroez"), Ordering::Greater);
        assert_eq!(locale_cmp("škoda", "Škoda"), Ordering::Less);
    }

    #[test]
    fn test_mismatched_values_are_neutral() {
        assert_eq!(
            compare_values(Value::Text("a"), Value::Number(1.0)),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(Value::Number(f64::NAN), Value::Number(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let data = cars();
        let refs: Vec<&Record> = data.iter().collect();
        let order = SortOrder::default().toggled(Field::Price);
        let sorted = sort(&refs, &order);
        // Civic and Fiesta tie at 22000 and keep their input order
        assert_eq!(
            models(&sorted),
            vec!["Focus", "Civic", "Fiesta", "Camry", "Accord"]
        );
    }

    #[test]
    fn test_toggle_reverses_without_ties() {
        let data: Vec<Record> = cars().into_iter().take(4).collect();
        let refs: Vec<&Record> = data.iter().collect();

        let ascending = SortOrder::default().toggled(Field::Price);
        let descending = ascending.toggled(Field::Price);

        let first = sort(&refs, &ascending);
        let mut second = sort(&refs, &descending);
        second.reverse();
        assert_eq!(first, second);
    }

    #[test]
    fn test_string_sort_uses_locale_order() {
        let data = cars();
        let refs: Vec<&Record> = data.iter().collect();
        let sorted = sort(&refs, &SortOrder::default().toggled(Field::Make));
        let makes: Vec<&str> = sorted.iter().map(|r| r.make.as_str()).collect();
        assert_eq!(makes, vec!["Ford", "Ford", "honda", "Honda", "Toyota"]);
    }

    #[test]
    fn test_ties_keep_previous_sort_order() {
        let data = cars();
        let refs: Vec<&Record> = data.iter().collect();

        // Sort by model first, then by price: the 22000 tie must follow the
        // model order (Civic before Fiesta), just as a second stable sort over
        // the model-sorted sequence would leave it.
        let by_model = SortOrder::default().toggled(Field::Model);
        let then_price = by_model.toggled(Field::Price);
        let sorted = sort(&refs, &then_price);
        assert_eq!(
            models(&sorted),
            vec!["Focus", "Civic", "Fiesta", "Camry", "Accord"]
        );

        // Same again with model descending
        let by_model_desc = by_model.toggled(Field::Model);
        let then_price = by_model_desc.toggled(Field::Price);
        let sorted = sort(&refs, &then_price);
        assert_eq!(
            models(&sorted),
            vec!["Focus", "Fiesta", "Civic", "Camry", "Accord"]
        );
    }

    #[test]
    fn test_reselecting_old_field_starts_ascending() {
        let order = SortOrder::default()
            .toggled(Field::Price)
            .toggled(Field::Price)
            .toggled(Field::Make)
            .toggled(Field::Price);
        assert_eq!(
            order.active(),
            Some(SortKey {
                field: Field::Price,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn test_sort_indices_matches_sort() {
        let data = cars();
        let order = SortOrder::default().toggled(Field::Make);
        let mut indices: Vec<usize> = (0..data.len()).collect();
        sort_indices(&mut indices, &data, &order);
        assert_eq!(indices, vec![2, 4, 1, 3, 0]);
    }

    #[test]
    fn test_empty_order_keeps_input() {
        let data = cars();
        let refs: Vec<&Record> = data.iter().collect();
        assert_eq!(sort(&refs, &SortOrder::default()), refs);
    }
}
