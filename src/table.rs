//! Renders a page of records as a text table.
//!
//! The table only draws what it is given; filtering, sorting and paging
//! happen upstream. It keeps track of the selected row within the page.

use crate::record::{Field, Record, Value};
use crate::sort::SortKey;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// A table column bound to a record field.
#[derive(Debug, Clone)]
pub struct Column {
    /// The field shown in this column.
    pub field: Field,
    /// Header text.
    pub title: String,
    /// Fixed width. When unset the column fits its widest cell.
    pub width: Option<usize>,
}

impl Column {
    /// A column for `field` titled with the field's default title.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            title: field.title().to_string(),
            width: None,
        }
    }

    /// Sets the header text (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets a fixed width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// Table renderer with a row cursor.
#[derive(Debug, Clone)]
pub struct Model {
    columns: Vec<Column>,
    selected: usize,
    /// Style applied to the header line.
    pub header_style: Style,
    /// Style applied to the selected row.
    pub selected_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Field::ALL.into_iter().map(Column::new).collect())
    }
}

impl Model {
    /// Creates a table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            selected: 0,
            header_style: Style::new().bold(true),
            selected_style: Style::new().reverse(true),
        }
    }

    /// The columns, in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Index of the selected row within the page.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the cursor back to the first row.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    /// Selects the next row, wrapping to the top.
    pub fn select_next(&mut self, rows: usize) {
        if rows > 0 {
            self.selected = (self.selected + 1) % rows;
        }
    }

    /// Selects the previous row, wrapping to the bottom.
    pub fn select_prev(&mut self, rows: usize) {
        if rows > 0 {
            self.selected = if self.selected == 0 {
                rows - 1
            } else {
                (self.selected - 1).min(rows - 1)
            };
        }
    }

    /// Renders the header and `rows`, marking the sorted column.
    pub fn view(&self, rows: &[&Record], sort: Option<SortKey>) -> String {
        let titles: Vec<String> = self
            .columns
            .iter()
            .map(|column| match sort {
                Some(key) if key.field == column.field => {
                    format!("{} {}", column.title, key.direction.indicator())
                }
                _ => column.title.clone(),
            })
            .collect();

        let cells: Vec<Vec<(String, bool)>> = rows
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| {
                        let value = column.field.value(record);
                        (value.to_string(), matches!(value, Value::Number(_)))
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                column.width.unwrap_or_else(|| {
                    cells
                        .iter()
                        .map(|row| row[i].0.width())
                        .chain(std::iter::once(titles[i].width()))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect();

        let mut output = String::new();

        // Header
        let header = titles
            .iter()
            .zip(&widths)
            .map(|(title, &width)| pad_right(title, width))
            .collect::<Vec<_>>()
            .join(" | ");
        output.push_str("  ");
        output.push_str(&self.header_style.clone().inline(true).render(&header));
        output.push('\n');

        // Separator
        output.push_str("  ");
        output.push_str(
            &widths
                .iter()
                .map(|&width| "-".repeat(width))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        output.push('\n');

        // Rows
        for (row_index, row) in cells.iter().enumerate() {
            let line = row
                .iter()
                .zip(&widths)
                .map(|((text, numeric), &width)| {
                    if *numeric {
                        pad_left(text, width)
                    } else {
                        pad_right(text, width)
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");

            if row_index == self.selected {
                output.push_str("> ");
                output.push_str(&self.selected_style.clone().inline(true).render(&line));
            } else {
                output.push_str("  ");
                output.push_str(&line);
            }
            output.push('\n');
        }

        output
    }
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}
