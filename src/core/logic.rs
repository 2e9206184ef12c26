use crate::config::Config;
use crate::core::augmenter::{PassReport, TableAugmenter};
use crate::core::view::HostTable;
use crate::models::page::Page;

pub struct Core;

impl Core {
    /// Locate the header and data tables and run one pass over them.
    /// `None` when the tables are missing or the data table is empty.
    pub fn annotate_page(page: &mut Page, cfg: &Config) -> Option<PassReport> {
        let (header, data) = page.grid_tables_mut(&cfg.grid_class)?;
        let mut header = HostTable::new(header, &cfg.tracking_attribute);
        let mut data = HostTable::new(data, &cfg.tracking_attribute);

        TableAugmenter::new(cfg).run_annotation_pass(&mut header, &mut data)
    }
}
