//! Table capability used by the augmenter, and its adapter over a page snapshot.

use crate::models::page::{Cell, Row, Table};

/// Attribute carried by every cell this tool appends to a data row.
pub const ANNOTATION_ATTR: &str = "data-rworkhours";

/// What part of a cell receives new content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent<'a> {
    /// Replace the whole cell body
    Whole(&'a str),
    /// Replace only the inner label element, keeping the cell chrome
    Label(&'a str),
}

/// Everything an annotation pass needs from a rendered table.
///
/// Out-of-range indices are silently ignored by writers and yield `None` or
/// `false` from readers: a half-rendered table must never abort a pass.
pub trait TableView {
    fn row_count(&self) -> usize;
    fn cell_count(&self, row: usize) -> usize;
    fn cell_text(&self, row: usize, cell: usize) -> Option<String>;
    /// True when the cell was appended by a previous annotation pass
    fn is_annotation(&self, row: usize, cell: usize) -> bool;
    /// Append a copy of the row's first cell holding `content`
    fn append_annotation(&mut self, row: usize, content: CellContent<'_>);
    fn replace_annotation(&mut self, row: usize, cell: usize, content: CellContent<'_>);
    fn remove_row(&mut self, row: usize);
    /// Append a row made of one cell spanning `colspan` columns
    fn append_summary_row(&mut self, text: &str, colspan: u32);
}

/// Adapter exposing a snapshot `Table` through `TableView`.
pub struct HostTable<'a> {
    table: &'a mut Table,
    tracking_attribute: &'a str,
}

impl<'a> HostTable<'a> {
    pub fn new(table: &'a mut Table, tracking_attribute: &'a str) -> Self {
        Self {
            table,
            tracking_attribute,
        }
    }

    fn cell(&self, row: usize, cell: usize) -> Option<&Cell> {
        self.table.rows.get(row)?.cells.get(cell)
    }
}

fn write_content(cell: &mut Cell, content: CellContent<'_>) {
    match content {
        CellContent::Whole(text) => {
            cell.text = text.to_string();
            cell.label = None;
        }
        CellContent::Label(text) => match cell.label.as_mut() {
            Some(label) => *label = text.to_string(),
            // no label element to scope to: fall back to the whole cell
            None => cell.text = text.to_string(),
        },
    }
}

impl TableView for HostTable<'_> {
    fn row_count(&self) -> usize {
        self.table.rows.len()
    }

    fn cell_count(&self, row: usize) -> usize {
        self.table.rows.get(row).map(|r| r.cells.len()).unwrap_or(0)
    }

    fn cell_text(&self, row: usize, cell: usize) -> Option<String> {
        self.cell(row, cell).map(Cell::text_content)
    }

    fn is_annotation(&self, row: usize, cell: usize) -> bool {
        self.cell(row, cell)
            .map(|c| c.attributes.contains_key(ANNOTATION_ATTR))
            .unwrap_or(false)
    }

    fn append_annotation(&mut self, row: usize, content: CellContent<'_>) {
        let Some(r) = self.table.rows.get_mut(row) else {
            return;
        };
        let Some(first) = r.cells.first() else {
            return;
        };

        let mut cloned = first.clone();
        cloned.attributes.remove(self.tracking_attribute);
        cloned
            .attributes
            .insert(ANNOTATION_ATTR.to_string(), String::new());
        write_content(&mut cloned, content);
        r.cells.push(cloned);
    }

    fn replace_annotation(&mut self, row: usize, cell: usize, content: CellContent<'_>) {
        if let Some(c) = self
            .table
            .rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(cell))
        {
            write_content(c, content);
        }
    }

    fn remove_row(&mut self, row: usize) {
        if row < self.table.rows.len() {
            self.table.rows.remove(row);
        }
    }

    fn append_summary_row(&mut self, text: &str, colspan: u32) {
        let cell = Cell {
            text: text.to_string(),
            colspan: Some(colspan),
            ..Cell::default()
        };
        self.table.rows.push(Row { cells: vec![cell] });
    }
}
