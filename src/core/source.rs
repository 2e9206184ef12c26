//! File-backed host page: the snapshot file written by the browser side.

use crate::config::Config;
use crate::core::augmenter::PassReport;
use crate::core::driver::AnnotationTarget;
use crate::core::logic::Core;
use crate::core::mutation::{Mutation, diff_pages};
use crate::errors::AppResult;
use crate::models::page::Page;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, trace};

/// Annotation target re-reading the snapshot on every call.
pub struct PageFile {
    path: PathBuf,
    cfg: Config,
}

impl PageFile {
    pub fn new(path: impl Into<PathBuf>, cfg: Config) -> Self {
        Self {
            path: path.into(),
            cfg,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnnotationTarget for PageFile {
    fn is_ready(&mut self) -> AppResult<bool> {
        let page = Page::load(&self.path)?;
        Ok(page.is_ready(&self.cfg.grid_class))
    }

    fn annotate(&mut self) -> AppResult<Option<PassReport>> {
        let mut page = Page::load(&self.path)?;
        let report = Core::annotate_page(&mut page, &self.cfg);
        if report.is_some() {
            page.save(&self.path)?;
        }
        Ok(report)
    }
}

/// Poll `path` every `every` and send the mutations between consecutive
/// snapshots. Unreadable or half-written snapshots are skipped until the
/// next tick. Returns when the receiving side is gone.
pub async fn poll_page(path: PathBuf, every: Duration, tx: mpsc::Sender<Vec<Mutation>>) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last_raw: Option<String> = None;
    let mut last_page = Page::default();

    loop {
        ticker.tick().await;
        if tx.is_closed() {
            break;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                trace!("snapshot not readable yet: {}", e);
                continue;
            }
        };
        if last_raw.as_deref() == Some(raw.as_str()) {
            continue;
        }

        let page = match Page::from_json(&raw) {
            Ok(page) => page,
            Err(e) => {
                debug!("skipping incomplete snapshot: {}", e);
                continue;
            }
        };

        let batch = diff_pages(&last_page, &page);
        last_raw = Some(raw);
        last_page = page;

        if batch.is_empty() {
            continue;
        }
        trace!(mutations = batch.len(), "snapshot changed");
        if tx.send(batch).await.is_err() {
            break;
        }
    }
}
