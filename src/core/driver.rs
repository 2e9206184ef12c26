//! Cooperative event loop around `RenderWatcher`.
//!
//! One `select!` loop: either a batch of mutations arrives, or the single
//! pending deadline of the watcher fires. The sleep is rebuilt on every
//! iteration, so re-arming replaces the pending wake-up instead of stacking
//! another timer.

use crate::core::augmenter::PassReport;
use crate::core::mutation::Mutation;
use crate::core::watcher::RenderWatcher;
use crate::errors::AppResult;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

/// Whatever the watcher annotates. Implementations must re-read the live
/// tables on every call and never cache them across passes.
pub trait AnnotationTarget {
    /// Readiness predicate: both tables exist and the data table has rows
    fn is_ready(&mut self) -> AppResult<bool>;
    /// Run one annotation pass; `None` when there was nothing to annotate
    fn annotate(&mut self) -> AppResult<Option<PassReport>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchStats {
    pub batches: usize,
    pub ignored: usize,
    pub scheduled: usize,
    pub passes: usize,
}

fn now() -> std::time::Instant {
    Instant::now().into_std()
}

fn run_pass<T, F>(target: &mut T, stats: &mut WatchStats, on_pass: &mut F)
where
    T: AnnotationTarget + ?Sized,
    F: FnMut(&PassReport),
{
    stats.passes += 1;
    match target.annotate() {
        Ok(Some(report)) => {
            info!(
                rows = report.rows_annotated,
                average = report.average_minutes,
                "table annotated"
            );
            on_pass(&report);
        }
        Ok(None) => debug!("nothing to annotate"),
        // a failed pass is retried on the next render
        Err(e) => warn!("annotation pass failed: {}", e),
    }
}

/// Drive `watcher` until the mutation channel closes and every pending
/// timer has fired. `on_pass` is called after each successful pass.
pub async fn drive<T, F>(
    mut watcher: RenderWatcher,
    target: &mut T,
    mut mutations: mpsc::Receiver<Vec<Mutation>>,
    mut on_pass: F,
) -> WatchStats
where
    T: AnnotationTarget + ?Sized,
    F: FnMut(&PassReport),
{
    let mut stats = WatchStats::default();
    let mut open = true;

    loop {
        let deadline = watcher.next_deadline();
        if !open && deadline.is_none() {
            break;
        }
        let wake = async move {
            match deadline {
                Some(at) => sleep_until(Instant::from_std(at)).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            batch = mutations.recv(), if open => {
                let Some(batch) = batch else {
                    debug!("mutation source closed");
                    open = false;
                    continue;
                };
                stats.batches += 1;

                if watcher.advance(now()) {
                    run_pass(target, &mut stats, &mut on_pass);
                }

                let armed = watcher.observe(&batch, now(), || {
                    target.is_ready().unwrap_or_else(|e| {
                        warn!("readiness check failed: {}", e);
                        false
                    })
                });
                if armed {
                    stats.scheduled += 1;
                } else {
                    stats.ignored += 1;
                }
            }
            _ = wake => {
                if watcher.advance(now()) {
                    run_pass(target, &mut stats, &mut on_pass);
                }
            }
        }
    }

    stats
}
