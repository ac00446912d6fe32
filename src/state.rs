use std::collections::BTreeSet;

use crate::color::InstitutionColors;
use crate::data::export::{to_csv_bytes, ExportError};
use crate::data::filter::{projected_indices, FilterMode, ProjectionInput};
use crate::data::institution::all_institutions;
use crate::data::loader::LoadError;
use crate::data::model::{Dataset, Row};
use crate::data::sort::SortKey;
use crate::data::view::{rows_for_year, YearRow};
use crate::data::years::YearSpan;

// ---------------------------------------------------------------------------
// Selection state: one immutable value per UI event
// ---------------------------------------------------------------------------

/// User actions that change what the table shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The dataset arrived; carries its year span.
    DatasetLoaded(Option<YearSpan>),
    SelectTab(usize),
    SetInstitutions(BTreeSet<String>),
    ToggleInstitution(String),
    SetHideIncomplete(bool),
    /// Header click on a column.
    SortBy(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// Year range captured at load; tab indices resolve against it.
    pub years: Option<YearSpan>,
    pub active_year: Option<i32>,
    pub institutions: BTreeSet<String>,
    pub filter_mode: FilterMode,
    pub sort: Option<SortKey>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            years: None,
            active_year: None,
            institutions: all_institutions(),
            filter_mode: FilterMode::ByInstitution,
            sort: None,
        }
    }
}

impl SelectionState {
    /// The state after `event`.
    pub fn update(&self, event: SelectionEvent) -> Self {
        let mut next = self.clone();
        match event {
            SelectionEvent::DatasetLoaded(years) => {
                next.years = years;
                next.active_year = years.map(|span| span.last);
            }
            SelectionEvent::SelectTab(index) => {
                // Out-of-range tabs leave the active year alone.
                if let Some(year) = self.years.and_then(|span| span.year_for_tab(index)) {
                    next.active_year = Some(year);
                }
            }
            SelectionEvent::SetInstitutions(institutions) => {
                next.institutions = institutions;
            }
            SelectionEvent::ToggleInstitution(name) => {
                if !next.institutions.remove(&name) {
                    next.institutions.insert(name);
                }
            }
            SelectionEvent::SetHideIncomplete(hide) => {
                next.filter_mode = FilterMode::from_hide_incomplete(hide);
            }
            SelectionEvent::SortBy(field) => {
                next.sort = Some(SortKey::after_click(self.sort.as_ref(), &field));
            }
        }
        next
    }

    pub fn projection_input(&self) -> ProjectionInput<'_> {
        ProjectionInput {
            institutions: &self.institutions,
            mode: self.filter_mode,
            sort: self.sort.as_ref(),
        }
    }

    pub fn hide_incomplete(&self) -> bool {
        self.filter_mode.hides_incomplete()
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.years?.tab_for_year(self.active_year?)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the loader reports back).
    pub dataset: Option<Dataset>,

    pub selection: SelectionState,

    /// Indices of rows in the current projection, in display order (cached).
    pub visible_indices: Vec<usize>,

    pub institution_colors: InstitutionColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the initial load is still in flight.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: SelectionState::default(),
            visible_indices: Vec::new(),
            institution_colors: InstitutionColors::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest the loaded dataset and point the tabs at its latest year.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let years = YearSpan::from_dataset(&dataset);
        if years.is_none() && !dataset.is_empty() {
            log::warn!("Could not read the year range from the first and last rows");
        }
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.dispatch(SelectionEvent::DatasetLoaded(years));
    }

    /// The table stays empty; the reason goes to the status line.
    pub fn set_load_error(&mut self, err: &LoadError) {
        log::error!("Failed to load survey data: {err}");
        self.status_message = Some(format!("Error: {err}"));
        self.loading = false;
    }

    /// Apply a user action and recompute the projection.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        log::debug!("{event:?}");
        self.selection = self.selection.update(event);
        self.refilter();
    }

    /// Recompute `visible_indices` from the dataset and the selection.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => projected_indices(ds, self.selection.projection_input()),
            None => Vec::new(),
        };
    }

    /// Rows of the projection in display order, across all years.
    pub fn projection(&self) -> Vec<&Row> {
        match &self.dataset {
            Some(ds) => self.visible_indices.iter().map(|&i| &ds.rows[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Rows shown in the active year's tab.
    pub fn active_rows(&self) -> Vec<YearRow<'_>> {
        match self.selection.active_year {
            Some(year) => rows_for_year(&self.projection(), year),
            None => Vec::new(),
        }
    }

    /// The projection as currently displayed, written as CSV. Empty before
    /// anything is loaded.
    pub fn export_csv(&self) -> Result<Vec<u8>, ExportError> {
        match &self.dataset {
            Some(ds) => to_csv_bytes(&ds.headers, &self.projection()),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_str;
    use crate::data::sort::SortDirection;

    const NUS: &str = "National University of Singapore";
    const NTU: &str = "Nanyang Technological University";

    fn loaded(csv: &str) -> AppState {
        let mut state = AppState::default();
        state.set_dataset(parse_str(csv).unwrap());
        state
    }

    fn scenario() -> AppState {
        loaded(&format!(
            "year,university,degree,employment_rate_overall\n\
             2021,{NUS},CS,90\n\
             2021,{NTU},EE,na\n"
        ))
    }

    fn degrees(state: &AppState) -> Vec<String> {
        state
            .projection()
            .iter()
            .map(|r| r.get("degree").unwrap_or_default().to_string())
            .collect()
    }

    fn multi_year() -> AppState {
        loaded(&format!(
            "year,university,degree,employment_rate_overall\n\
             2018,{NUS},A,80\n\
             2019,{NTU},B,na\n\
             2020,{NUS},C,85\n\
             2021,{NTU},D,90\n\
             2022,{NUS},E,na\n\
             2022,{NTU},F,95\n"
        ))
    }

    #[test]
    fn default_selection_shows_all_rows_in_source_order() {
        let state = scenario();
        assert_eq!(degrees(&state), vec!["CS", "EE"]);
        assert_eq!(state.selection.active_year, Some(2021));
    }

    #[test]
    fn hide_incomplete_narrows_to_complete_rows() {
        let mut state = scenario();
        state.dispatch(SelectionEvent::SetHideIncomplete(true));
        assert_eq!(degrees(&state), vec!["CS"]);
        state.dispatch(SelectionEvent::SetHideIncomplete(false));
        assert_eq!(degrees(&state), vec!["CS", "EE"]);
    }

    #[test]
    fn sentinel_sorts_before_numbers() {
        let mut state = scenario();
        state.dispatch(SelectionEvent::SortBy("employment_rate_overall".into()));
        assert_eq!(degrees(&state), vec!["EE", "CS"]);
        state.dispatch(SelectionEvent::SortBy("employment_rate_overall".into()));
        assert_eq!(degrees(&state), vec!["CS", "EE"]);
        assert_eq!(
            state.selection.sort.as_ref().map(|k| k.direction),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn hide_incomplete_keeps_institution_exclusions() {
        let mut state = multi_year();
        state.dispatch(SelectionEvent::ToggleInstitution(NTU.into()));
        assert_eq!(degrees(&state), vec!["A", "C", "E"]);
        state.dispatch(SelectionEvent::SetHideIncomplete(true));
        assert_eq!(degrees(&state), vec!["A", "C"]);

        // Changing institutions while hiding keeps narrowing.
        state.dispatch(SelectionEvent::ToggleInstitution(NTU.into()));
        assert_eq!(degrees(&state), vec!["A", "C", "D", "F"]);
    }

    #[test]
    fn tabs_resolve_against_the_last_year() {
        let mut state = multi_year();
        assert_eq!(state.selection.years.map(|s| s.count()), Some(5));
        assert_eq!(state.selection.active_tab(), Some(0));

        state.dispatch(SelectionEvent::SelectTab(2));
        assert_eq!(state.selection.active_year, Some(2020));
        let rows = state.active_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_index, 1);
        assert_eq!(rows[0].row.get("degree"), Some("C"));

        state.dispatch(SelectionEvent::SelectTab(9));
        assert_eq!(state.selection.active_year, Some(2020));
    }

    #[test]
    fn active_rows_follow_sort_order() {
        let mut state = multi_year();
        state.dispatch(SelectionEvent::SortBy("degree".into()));
        state.dispatch(SelectionEvent::SortBy("degree".into()));
        let rows: Vec<_> = state
            .active_rows()
            .iter()
            .map(|r| (r.display_index, r.row.get("degree").unwrap_or_default()))
            .collect();
        assert_eq!(rows, vec![(1, "F"), (2, "E")]);
    }

    #[test]
    fn export_covers_every_year_in_view_order() {
        let mut state = multi_year();
        state.dispatch(SelectionEvent::SetHideIncomplete(true));
        state.dispatch(SelectionEvent::SortBy("employment_rate_overall".into()));
        state.dispatch(SelectionEvent::SortBy("employment_rate_overall".into()));

        let bytes = state.export_csv().unwrap();
        let back = parse_str(std::str::from_utf8(&bytes).unwrap()).unwrap();
        let exported: Vec<&str> = back
            .rows
            .iter()
            .map(|r| r.get("degree").unwrap_or_default())
            .collect();
        assert_eq!(exported, vec!["F", "D", "C", "A"]);
    }

    #[test]
    fn export_matches_the_displayed_rows() {
        let mut state = multi_year();
        state.dispatch(SelectionEvent::SortBy("degree".into()));

        // A selection change that has not been applied yet must not leak
        // into the export.
        state.selection = state
            .selection
            .update(SelectionEvent::SetHideIncomplete(true));

        let bytes = state.export_csv().unwrap();
        let back = parse_str(std::str::from_utf8(&bytes).unwrap()).unwrap();
        let exported: Vec<String> = back
            .rows
            .iter()
            .map(|r| r.get("degree").unwrap_or_default().to_string())
            .collect();
        assert_eq!(exported, degrees(&state));
        assert_eq!(exported, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn nothing_is_shown_before_load() {
        let mut state = AppState::default();
        state.dispatch(SelectionEvent::SelectTab(0));
        assert!(state.active_rows().is_empty());
        assert_eq!(state.selection.active_year, None);
        assert!(state.export_csv().unwrap().is_empty());
    }

    #[test]
    fn load_error_leaves_table_empty() {
        let mut state = AppState {
            loading: true,
            ..AppState::default()
        };
        state.set_load_error(&LoadError::MalformedSource("missing header row".into()));
        assert!(!state.loading);
        assert!(state.projection().is_empty());
        assert!(state.status_message.is_some());
    }
}
