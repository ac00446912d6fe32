use std::collections::BTreeSet;

use super::model::{Dataset, Row, FIELD_EMPLOYMENT_RATE_OVERALL, SENTINEL};
use super::sort::{sort_indices, SortKey};

// ---------------------------------------------------------------------------
// Filter mode
// ---------------------------------------------------------------------------

/// Which filter currently drives the projection.
///
/// `ByCompleteness` does not restart from the full dataset: it narrows the
/// institution view, so rows hidden by institution stay hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    ByInstitution,
    ByCompleteness,
}

impl FilterMode {
    pub fn from_hide_incomplete(hide: bool) -> Self {
        if hide {
            FilterMode::ByCompleteness
        } else {
            FilterMode::ByInstitution
        }
    }

    pub fn hides_incomplete(self) -> bool {
        self == FilterMode::ByCompleteness
    }
}

/// Everything the projection depends on besides the dataset.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInput<'a> {
    pub institutions: &'a BTreeSet<String>,
    pub mode: FilterMode,
    pub sort: Option<&'a SortKey>,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

pub fn in_institutions(row: &Row, institutions: &BTreeSet<String>) -> bool {
    row.university().is_some_and(|u| institutions.contains(u))
}

/// Rows whose overall employment rate is not the literal sentinel. Blank or
/// missing rates are kept.
pub fn is_complete(row: &Row) -> bool {
    row.get(FIELD_EMPLOYMENT_RATE_OVERALL) != Some(SENTINEL)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Indices of the rows passing the active filter, ordered by the sort key.
///
/// Always starts from source order, so rows that tie on the sort key keep
/// their dataset order rather than the order of the previous view.
pub fn projected_indices(dataset: &Dataset, input: ProjectionInput<'_>) -> Vec<usize> {
    let mut indices: Vec<usize> = dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| in_institutions(row, input.institutions))
        .filter(|(_, row)| !input.mode.hides_incomplete() || is_complete(row))
        .map(|(i, _)| i)
        .collect();

    sort_indices(&dataset.rows, &mut indices, input.sort);
    indices
}
