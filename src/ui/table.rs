use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::institution::acronym;
use crate::data::model::*;
use crate::data::sort::{SortDirection, SortKey};
use crate::state::{AppState, SelectionEvent};

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// A sortable table column: source field and header label.
pub struct ColumnSpec {
    pub field: &'static str,
    pub label: &'static str,
}

pub const COLUMNS: [ColumnSpec; 10] = [
    ColumnSpec { field: FIELD_UNIVERSITY, label: "University" },
    ColumnSpec { field: FIELD_DEGREE, label: "Degree" },
    ColumnSpec { field: FIELD_EMPLOYMENT_RATE_OVERALL, label: "Overall ER (%)" },
    ColumnSpec { field: FIELD_EMPLOYMENT_RATE_FT_PERM, label: "FT Perm. ER (%)" },
    ColumnSpec { field: FIELD_BASIC_MONTHLY_MEAN, label: "BMS - Mean (S$)" },
    ColumnSpec { field: FIELD_BASIC_MONTHLY_MEDIAN, label: "BMS - Median (S$)" },
    ColumnSpec { field: FIELD_GROSS_MONTHLY_MEAN, label: "GMS - Mean (S$)" },
    ColumnSpec { field: FIELD_GROSS_MONTHLY_MEDIAN, label: "GMS - Median (S$)" },
    ColumnSpec { field: FIELD_GROSS_MTHLY_25_PERCENTILE, label: "GMS - 25th Pct. (S$)" },
    ColumnSpec { field: FIELD_GROSS_MTHLY_75_PERCENTILE, label: "GMS - 75th Pct. (S$)" },
];

fn sort_indicator(field: &str, sort: Option<&SortKey>) -> &'static str {
    match sort {
        Some(key) if key.field == field => match key.direction {
            SortDirection::Ascending => " ⬆",
            SortDirection::Descending => " ⬇",
        },
        _ => "",
    }
}

/// Header cell that doubles as a sort trigger. Returns `true` when clicked.
fn sort_header(ui: &mut Ui, column: &ColumnSpec, sort: Option<&SortKey>) -> bool {
    let text = format!("{}{}", column.label, sort_indicator(column.field, sort));
    ui.add(egui::Button::new(RichText::new(text).strong()).frame(false))
        .on_hover_text("Click to sort, click again to reverse")
        .clicked()
}

// ---------------------------------------------------------------------------
// Survey table (central panel)
// ---------------------------------------------------------------------------

/// Render the active year's rows of the projection.
pub fn survey_table(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.spinner();
            } else {
                ui.weak("No survey data loaded.");
            }
        });
        return;
    }

    let mut clicked: Option<&'static str> = None;
    {
        let rows = state.active_rows();
        let colors = &state.institution_colors;
        let sort = state.selection.sort.as_ref();
        let row_height = ui.text_style_height(&egui::TextStyle::Body) + 12.0;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto().at_least(36.0))
            .column(Column::auto().at_least(64.0))
            .column(Column::initial(300.0).at_least(120.0).clip(true));
        for _ in 2..COLUMNS.len() {
            table = table.column(Column::auto().at_least(90.0));
        }

        table
            .header(26.0, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("No.");
                });
                for column in &COLUMNS {
                    header.col(|ui: &mut Ui| {
                        if sort_header(ui, column, sort) {
                            clicked = Some(column.field);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, rows.len(), |mut table_row| {
                    let item = &rows[table_row.index()];
                    let row = item.row;

                    table_row.col(|ui: &mut Ui| {
                        ui.label(item.display_index.to_string());
                    });
                    table_row.col(|ui: &mut Ui| {
                        let university = row.university().unwrap_or_default();
                        let text = RichText::new(acronym(university).unwrap_or_default())
                            .strong()
                            .color(colors.color_for(university));
                        ui.label(text).on_hover_text(university);
                    });
                    table_row.col(|ui: &mut Ui| {
                        let degree = row.get(FIELD_DEGREE).unwrap_or_default();
                        ui.add(egui::Label::new(degree).truncate())
                            .on_hover_text(degree);
                    });
                    for column in &COLUMNS[2..] {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(row.get(column.field).unwrap_or_default());
                        });
                    }
                });
            });
    }

    if let Some(field) = clicked {
        state.dispatch(SelectionEvent::SortBy(field.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_measurement_column_is_sortable_once() {
        let fields: std::collections::BTreeSet<_> = COLUMNS.iter().map(|c| c.field).collect();
        assert_eq!(fields.len(), COLUMNS.len());
        assert!(!fields.contains(FIELD_YEAR));
    }

    #[test]
    fn indicator_only_on_the_sorted_column() {
        let key = SortKey::ascending(FIELD_DEGREE);
        assert_eq!(sort_indicator(FIELD_DEGREE, Some(&key)), " ⬆");
        assert_eq!(sort_indicator(FIELD_UNIVERSITY, Some(&key)), "");
        let key = SortKey {
            field: FIELD_DEGREE.into(),
            direction: SortDirection::Descending,
        };
        assert_eq!(sort_indicator(FIELD_DEGREE, Some(&key)), " ⬇");
        assert_eq!(sort_indicator(FIELD_DEGREE, None), "");
    }
}
