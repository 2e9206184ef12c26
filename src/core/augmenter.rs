//! One annotation pass over the header and data tables.
//!
//! A pass is safe to repeat: the header label is added once, a row's own
//! annotation cell is rewritten instead of duplicated, and the trailing
//! summary row of the previous pass is dropped before a new one is added.

use crate::config::Config;
use crate::core::view::{CellContent, TableView};
use crate::utils::time::{duration_label, format_duration, parse_clock_time};
use tracing::debug;

/// Outcome of a pass that actually touched the data table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub rows_annotated: usize,
    pub rows_skipped: usize,
    pub stale_summary_removed: bool,
    pub header_labelled: bool,
    pub total_minutes: i64,
    pub average_minutes: i64,
}

pub fn summary_message(average: i64) -> String {
    format!("您的平均工時只有 {}。請多加努力。", format_duration(average))
}

pub struct TableAugmenter<'a> {
    cfg: &'a Config,
}

impl<'a> TableAugmenter<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Net minutes for one row; 0 when either time is missing.
    pub fn compute_row_duration<T: TableView + ?Sized>(&self, table: &T, row: usize) -> i64 {
        let time_at = |cell: usize| {
            table
                .cell_text(row, cell)
                .and_then(|text| parse_clock_time(&text))
        };

        match (time_at(self.cfg.check_in_cell), time_at(self.cfg.check_out_cell)) {
            (Some(check_in), Some(check_out)) => check_out
                .saturating_sub(check_in)
                .saturating_sub(self.cfg.break_minutes),
            _ => 0,
        }
    }

    pub fn annotate_row<T: TableView + ?Sized>(&self, table: &mut T, row: usize, duration: i64) {
        let label = duration_label(duration);
        let cells = table.cell_count(row);

        if cells > 0 && table.is_annotation(row, cells - 1) {
            table.replace_annotation(row, cells - 1, CellContent::Whole(&label));
        } else {
            table.append_annotation(row, CellContent::Whole(&label));
        }
    }

    pub fn is_header_labelled<T: TableView + ?Sized>(&self, header: &T) -> bool {
        let rows = header.row_count();
        if rows == 0 {
            return false;
        }
        let cells = header.cell_count(rows - 1);
        if cells == 0 {
            return false;
        }
        header
            .cell_text(rows - 1, cells - 1)
            .map(|text| text.contains(&self.cfg.header_label))
            .unwrap_or(false)
    }

    /// Returns true when the label was added by this call.
    pub fn annotate_header_once<T: TableView + ?Sized>(&self, header: &mut T) -> bool {
        if self.is_header_labelled(&*header) || header.row_count() == 0 {
            return false;
        }
        header.append_annotation(0, CellContent::Label(&self.cfg.header_label));
        true
    }

    /// `None` when the data table has no rows and nothing was touched.
    pub fn run_annotation_pass<H, D>(&self, header: &mut H, data: &mut D) -> Option<PassReport>
    where
        H: TableView + ?Sized,
        D: TableView + ?Sized,
    {
        if data.row_count() == 0 {
            return None;
        }

        let mut report = PassReport::default();

        let last = data.row_count() - 1;
        if data.cell_count(last) == 1 {
            data.remove_row(last);
            report.stale_summary_removed = true;
        }

        for row in 0..data.row_count() {
            if data.cell_count(row) < self.cfg.min_row_cells {
                report.rows_skipped += 1;
                continue;
            }
            let duration = self.compute_row_duration(&*data, row);
            report.total_minutes = report.total_minutes.saturating_add(duration);
            self.annotate_row(&mut *data, row, duration);
            report.rows_annotated += 1;
        }

        report.header_labelled = self.annotate_header_once(&mut *header);

        // every remaining row counts in the divisor, short ones included
        let rows = data.row_count();
        if rows > 0 {
            report.average_minutes = report.total_minutes.div_euclid(rows as i64);
            data.append_summary_row(
                &summary_message(report.average_minutes),
                self.cfg.summary_colspan,
            );
        }

        debug!(
            annotated = report.rows_annotated,
            skipped = report.rows_skipped,
            average = report.average_minutes,
            "annotation pass done"
        );
        Some(report)
    }
}
