//! Change records between two page snapshots, shaped like the host's
//! mutation notifications.

use crate::models::page::{Cell, Page, Row, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Nodes added or removed (tables, rows, cells)
    ChildList,
    Attributes,
    CharacterData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub kind: MutationKind,
    /// Index of the table the change happened in, `None` for page-level changes
    pub table: Option<usize>,
}

impl Mutation {
    pub fn new(kind: MutationKind, table: Option<usize>) -> Self {
        Self { kind, table }
    }

    pub fn child_list() -> Self {
        Self::new(MutationKind::ChildList, None)
    }

    pub fn is_structural(&self) -> bool {
        self.kind == MutationKind::ChildList
    }
}

fn cells_differ(a: &Cell, b: &Cell) -> (bool, bool) {
    let text = a.text != b.text || a.label != b.label;
    let attrs = a.attributes != b.attributes || a.colspan != b.colspan;
    (text, attrs)
}

fn row_structure_differs(a: &Row, b: &Row) -> bool {
    a.cells.len() != b.cells.len()
        || a.cells
            .iter()
            .zip(&b.cells)
            .any(|(ca, cb)| ca.label.is_some() != cb.label.is_some())
}

/// A label element appearing or vanishing is a node change too.
fn rows_structure_differ(a: &[Row], b: &[Row]) -> bool {
    a.len() != b.len() || a.iter().zip(b).any(|(ra, rb)| row_structure_differs(ra, rb))
}

fn diff_table(idx: usize, before: &Table, after: &Table, out: &mut Vec<Mutation>) {
    if before.container != after.container || rows_structure_differ(&before.rows, &after.rows) {
        out.push(Mutation::new(MutationKind::ChildList, Some(idx)));
        return;
    }

    let (mut text, mut attrs) = (false, false);
    for (ra, rb) in before.rows.iter().zip(&after.rows) {
        for (ca, cb) in ra.cells.iter().zip(&rb.cells) {
            let (t, a) = cells_differ(ca, cb);
            text |= t;
            attrs |= a;
        }
    }
    if text {
        out.push(Mutation::new(MutationKind::CharacterData, Some(idx)));
    }
    if attrs {
        out.push(Mutation::new(MutationKind::Attributes, Some(idx)));
    }
}

/// Mutations that turn `before` into `after`; empty when nothing changed.
pub fn diff_pages(before: &Page, after: &Page) -> Vec<Mutation> {
    let mut out = Vec::new();

    if before.tables.len() != after.tables.len() {
        out.push(Mutation::child_list());
    }
    for (idx, (tb, ta)) in before.tables.iter().zip(&after.tables).enumerate() {
        diff_table(idx, tb, ta, &mut out);
    }

    out
}
