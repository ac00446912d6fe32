use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Field names and the absent-value sentinel
// ---------------------------------------------------------------------------

/// Literal token the survey uses for "no measurement".
pub const SENTINEL: &str = "na";

pub const FIELD_YEAR: &str = "year";
pub const FIELD_UNIVERSITY: &str = "university";
pub const FIELD_DEGREE: &str = "degree";
pub const FIELD_EMPLOYMENT_RATE_OVERALL: &str = "employment_rate_overall";
pub const FIELD_EMPLOYMENT_RATE_FT_PERM: &str = "employment_rate_ft_perm";
pub const FIELD_BASIC_MONTHLY_MEAN: &str = "basic_monthly_mean";
pub const FIELD_BASIC_MONTHLY_MEDIAN: &str = "basic_monthly_median";
pub const FIELD_GROSS_MONTHLY_MEAN: &str = "gross_monthly_mean";
pub const FIELD_GROSS_MONTHLY_MEDIAN: &str = "gross_monthly_median";
pub const FIELD_GROSS_MTHLY_25_PERCENTILE: &str = "gross_mthly_25_percentile";
pub const FIELD_GROSS_MTHLY_75_PERCENTILE: &str = "gross_mthly_75_percentile";

// ---------------------------------------------------------------------------
// Row – one survey record
// ---------------------------------------------------------------------------

/// One record of the survey (one degree programme in one year).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Field name → raw string value, exactly as read from the source.
    pub fields: BTreeMap<String, String>,
}

impl Row {
    /// Build a row from `(field, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Row {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of a field, `None` when the record did not carry it.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of a field with missing or empty cells folded into [`SENTINEL`].
    pub fn value_or_sentinel(&self, field: &str) -> &str {
        match self.get(field) {
            Some(v) if !v.trim().is_empty() => v,
            _ => SENTINEL,
        }
    }

    /// The `year` field as an integer, if it parses.
    pub fn year(&self) -> Option<i32> {
        self.get(FIELD_YEAR)?.trim().parse().ok()
    }

    pub fn university(&self) -> Option<&str> {
        self.get(FIELD_UNIVERSITY)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded survey
// ---------------------------------------------------------------------------

/// The full survey as loaded at session start. Never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Header names in source order; the export writes fields in this order.
    pub headers: Vec<String>,
    /// Rows in source order (ascending by year per the publisher).
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { headers, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_fields_read_as_sentinel() {
        let row = Row::from_pairs([("year", "2021"), ("basic_monthly_mean", " ")]);
        assert_eq!(row.value_or_sentinel("basic_monthly_mean"), SENTINEL);
        assert_eq!(row.value_or_sentinel("gross_monthly_mean"), SENTINEL);
        assert_eq!(row.value_or_sentinel("year"), "2021");
    }

    #[test]
    fn year_parses_with_surrounding_whitespace() {
        let row = Row::from_pairs([("year", " 2019 ")]);
        assert_eq!(row.year(), Some(2019));
        assert_eq!(Row::from_pairs([("year", "twenty")]).year(), None);
        assert_eq!(Row::default().year(), None);
    }
}
