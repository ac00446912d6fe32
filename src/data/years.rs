use super::model::Dataset;

// ---------------------------------------------------------------------------
// Year span: first and last year of the loaded survey
// ---------------------------------------------------------------------------

/// Years covered by the dataset, read from its first and last rows.
///
/// Rows are assumed to be ordered ascending by year with no gaps; the span is
/// not re-validated against the rows in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub first: i32,
    pub last: i32,
}

impl YearSpan {
    /// `None` for an empty dataset or when either endpoint year is unreadable.
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        let first = dataset.rows.first()?.year()?;
        let last = dataset.rows.last()?.year()?;
        Some(YearSpan { first, last })
    }

    /// Number of tabs. Reversed endpoints give 0.
    pub fn count(&self) -> usize {
        usize::try_from(i64::from(self.last) - i64::from(self.first) + 1).unwrap_or(0)
    }

    /// Tabs run most-recent-first: tab 0 is the last year.
    pub fn year_for_tab(&self, index: usize) -> Option<i32> {
        if index >= self.count() {
            return None;
        }
        i32::try_from(index).ok().map(|i| self.last - i)
    }

    /// Inverse of [`YearSpan::year_for_tab`].
    pub fn tab_for_year(&self, year: i32) -> Option<usize> {
        if !self.contains(year) {
            return None;
        }
        usize::try_from(self.last - year).ok()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.first <= year && year <= self.last
    }

    /// All years in tab order.
    pub fn tab_years(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.count()).filter_map(|i| self.year_for_tab(i))
    }
}

/// Number of years spanned by the dataset: `last.year - first.year + 1`.
pub fn count_years(dataset: &Dataset) -> usize {
    YearSpan::from_dataset(dataset).map_or(0, |span| span.count())
}
