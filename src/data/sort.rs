use std::cmp::Ordering;

use super::model::{Row, SENTINEL};

// ---------------------------------------------------------------------------
// Sort key: which column, which way
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        SortKey {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Key after a click on `field`'s header: the same field flips direction,
    /// a different field starts ascending.
    pub fn after_click(current: Option<&SortKey>, field: &str) -> SortKey {
        match current {
            Some(key) if key.field == field => SortKey {
                field: key.field.clone(),
                direction: key.direction.flipped(),
            },
            _ => SortKey::ascending(field),
        }
    }
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

/// Sentinel-mapped value: absent measurements sort as zero.
fn normalized<'a>(row: &'a Row, field: &str) -> &'a str {
    match row.value_or_sentinel(field) {
        SENTINEL => "0",
        v => v,
    }
}

fn as_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// How a column is compared for one sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Numeric,
    Lexical,
}

impl Comparison {
    /// Numeric only when every value being sorted parses as a number, so a
    /// single pass never mixes numeric and lexical ordering.
    pub fn for_column<'a>(mut values: impl Iterator<Item = &'a str>) -> Self {
        if values.all(|v| as_number(v).is_some()) {
            Comparison::Numeric
        } else {
            Comparison::Lexical
        }
    }

    pub fn compare(self, a: &str, b: &str) -> Ordering {
        if self == Comparison::Numeric {
            if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
                return x.total_cmp(&y);
            }
        }
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}

/// Stable in-place sort of row indices. `None` keeps the current order.
pub fn sort_indices(rows: &[Row], indices: &mut [usize], key: Option<&SortKey>) {
    let Some(key) = key else {
        return;
    };
    let field = key.field.as_str();
    let comparison = Comparison::for_column(indices.iter().map(|&i| normalized(&rows[i], field)));
    indices.sort_by(|&i, &j| {
        let ord = comparison.compare(normalized(&rows[i], field), normalized(&rows[j], field));
        match key.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(field: &str, values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                Row::from_pairs([
                    (field.to_string(), v.to_string()),
                    ("id".to_string(), i.to_string()),
                ])
            })
            .collect()
    }

    fn sorted_ids(rows: &[Row], key: &SortKey) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..rows.len()).collect();
        sort_indices(rows, &mut idx, Some(key));
        idx
    }

    #[test]
    fn clicking_same_field_toggles_direction() {
        let first = SortKey::after_click(None, "degree");
        assert_eq!(first.direction, SortDirection::Ascending);
        let second = SortKey::after_click(Some(&first), "degree");
        assert_eq!(second.direction, SortDirection::Descending);
        let third = SortKey::after_click(Some(&second), "degree");
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn clicking_new_field_resets_to_ascending() {
        let key = SortKey {
            field: "degree".into(),
            direction: SortDirection::Descending,
        };
        let next = SortKey::after_click(Some(&key), "university");
        assert_eq!(next, SortKey::ascending("university"));
    }

    #[test]
    fn numbers_compare_numerically() {
        let r = rows("basic_monthly_mean", &["3500", "900", "10000"]);
        let key = SortKey::ascending("basic_monthly_mean");
        assert_eq!(sorted_ids(&r, &key), vec![1, 0, 2]);
    }

    #[test]
    fn sentinel_is_minimum_ascending_and_maximum_descending() {
        let r = rows("employment_rate_overall", &["88.5", "na", "97.1"]);
        let mut key = SortKey::ascending("employment_rate_overall");
        assert_eq!(sorted_ids(&r, &key), vec![1, 0, 2]);
        key.direction = SortDirection::Descending;
        assert_eq!(sorted_ids(&r, &key), vec![2, 0, 1]);
    }

    #[test]
    fn sort_is_stable_for_equal_values() {
        let r = rows("employment_rate_overall", &["90", "na", "90", "na"]);
        let key = SortKey::ascending("employment_rate_overall");
        assert_eq!(sorted_ids(&r, &key), vec![1, 3, 0, 2]);
        let key = SortKey {
            field: "employment_rate_overall".into(),
            direction: SortDirection::Descending,
        };
        assert_eq!(sorted_ids(&r, &key), vec![0, 2, 1, 3]);
    }

    #[test]
    fn text_compares_lexically_ignoring_case_first() {
        let r = rows("degree", &["law", "Business", "accountancy"]);
        let key = SortKey::ascending("degree");
        assert_eq!(sorted_ids(&r, &key), vec![2, 1, 0]);
    }

    #[test]
    fn field_missing_on_both_rows_is_equal() {
        let r = rows("degree", &["b", "a"]);
        let key = SortKey::ascending("gross_monthly_mean");
        assert_eq!(sorted_ids(&r, &key), vec![0, 1]);
    }

    #[test]
    fn mixed_column_sorts_lexically_throughout() {
        let r = rows("gross_monthly_mean", &["9", "10", "1a"]);
        let key = SortKey::ascending("gross_monthly_mean");
        assert_eq!(sorted_ids(&r, &key), vec![1, 2, 0]);
    }

    #[test]
    fn column_is_numeric_only_when_every_value_parses() {
        assert_eq!(
            Comparison::for_column(["12", "0", " 3.5 "].into_iter()),
            Comparison::Numeric
        );
        assert_eq!(
            Comparison::for_column(["12", "Law"].into_iter()),
            Comparison::Lexical
        );
    }

    #[test]
    fn no_key_keeps_order() {
        let r = rows("degree", &["b", "a"]);
        let mut idx = vec![0, 1];
        sort_indices(&r, &mut idx, None);
        assert_eq!(idx, vec![0, 1]);
    }
}
