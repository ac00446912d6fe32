use super::model::Row;

/// A projected row as shown in a year tab.
#[derive(Debug, Clone, Copy)]
pub struct YearRow<'a> {
    /// 1-based position within the year.
    pub display_index: usize,
    pub row: &'a Row,
}

/// Rows of `year`, keeping projection order, numbered from 1.
pub fn rows_for_year<'a>(projection: &[&'a Row], year: i32) -> Vec<YearRow<'a>> {
    projection
        .iter()
        .copied()
        .filter(|row| row.year() == Some(year))
        .enumerate()
        .map(|(i, row)| YearRow {
            display_index: i + 1,
            row,
        })
        .collect()
}
