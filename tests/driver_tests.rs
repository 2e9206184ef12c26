mod common;

use common::{GRID, attendance_page, data_table, two_day_page, write_page};
use rworkhours::config::Config;
use rworkhours::core::augmenter::PassReport;
use rworkhours::core::driver::{AnnotationTarget, drive};
use rworkhours::core::logic::Core;
use rworkhours::core::mutation::{Mutation, MutationKind};
use rworkhours::core::source::{PageFile, poll_page};
use rworkhours::core::watcher::RenderWatcher;
use rworkhours::errors::AppResult;
use rworkhours::models::page::Page;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// In-memory host page counting how often it was annotated
struct MemoryPage {
    page: Page,
    cfg: Config,
    passes: usize,
}

impl MemoryPage {
    fn new(page: Page) -> Self {
        Self {
            page,
            cfg: Config::default(),
            passes: 0,
        }
    }
}

impl AnnotationTarget for MemoryPage {
    fn is_ready(&mut self) -> AppResult<bool> {
        Ok(self.page.is_ready(&self.cfg.grid_class))
    }

    fn annotate(&mut self) -> AppResult<Option<PassReport>> {
        self.passes += 1;
        Ok(Core::annotate_page(&mut self.page, &self.cfg))
    }
}

fn structural() -> Vec<Mutation> {
    vec![Mutation::child_list()]
}

#[tokio::test(start_paused = true)]
async fn test_burst_runs_one_pass() {
    let (tx, rx) = mpsc::channel(16);
    for _ in 0..5 {
        tx.send(structural()).await.unwrap();
    }
    drop(tx);

    let mut target = MemoryPage::new(two_day_page());
    let mut reports = Vec::new();
    let stats = drive(RenderWatcher::default(), &mut target, rx, |r| {
        reports.push(r.clone())
    })
    .await;

    assert_eq!(stats.batches, 5);
    assert_eq!(stats.scheduled, 1);
    assert_eq!(stats.ignored, 4);
    assert_eq!(stats.passes, 1);
    assert_eq!(target.passes, 1);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].average_minutes, 300);

    let data = data_table(&target.page);
    assert_eq!(data.rows.len(), 3);
    assert!(data.rows[..2].iter().all(|r| r.cells.len() == 6));
}

#[tokio::test(start_paused = true)]
async fn test_pass_waits_for_settle_delay() {
    let (tx, rx) = mpsc::channel(16);
    let mut target = MemoryPage::new(two_day_page());
    let start = tokio::time::Instant::now();
    let mut ran_at = None;

    let producer = async move {
        tx.send(structural()).await.unwrap();
    };
    let driver = drive(RenderWatcher::default(), &mut target, rx, |_| {
        ran_at = Some(tokio::time::Instant::now())
    });
    let (stats, _) = tokio::join!(driver, producer);

    assert_eq!(stats.passes, 1);
    let elapsed = ran_at.expect("pass ran") - start;
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_millis(301));
}

#[tokio::test(start_paused = true)]
async fn test_own_writes_ignored_then_next_render_detected() {
    let (tx, rx) = mpsc::channel(16);
    let mut target = MemoryPage::new(two_day_page());

    let producer = async move {
        tx.send(structural()).await.unwrap();
        // echo of the pass's own writes
        sleep(Duration::from_millis(400)).await;
        tx.send(structural()).await.unwrap();
        // host re-renders well after the cooldown
        sleep(Duration::from_millis(2000)).await;
        tx.send(structural()).await.unwrap();
    };
    let driver = drive(RenderWatcher::default(), &mut target, rx, |_| {});
    let (stats, _) = tokio::join!(driver, producer);

    assert_eq!(stats.batches, 3);
    assert_eq!(stats.scheduled, 2);
    assert_eq!(stats.ignored, 1);
    assert_eq!(stats.passes, 2);

    let data = data_table(&target.page);
    assert_eq!(data.rows.len(), 3);
    assert_eq!(data.rows[0].cells.len(), 6);
    assert_eq!(data.rows.iter().filter(|r| r.cells.len() == 1).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_render_after_long_idle_still_debounced() {
    let (tx, rx) = mpsc::channel(16);
    let mut target = MemoryPage::new(two_day_page());
    let mut ran_at = None;

    let producer = async move {
        sleep(Duration::from_secs(2 * 3600)).await;
        tx.send(structural()).await.unwrap();
    };
    let driver = drive(RenderWatcher::default(), &mut target, rx, |_| {
        ran_at = Some(tokio::time::Instant::now())
    });
    let start = tokio::time::Instant::now();
    let (stats, _) = tokio::join!(driver, producer);

    assert_eq!(stats.batches, 1);
    assert_eq!(stats.passes, 1);
    let elapsed = ran_at.expect("pass ran") - start;
    assert!(elapsed >= Duration::from_secs(2 * 3600) + Duration::from_millis(300));
    assert!(elapsed < Duration::from_secs(2 * 3600) + Duration::from_millis(301));
}

#[tokio::test(start_paused = true)]
async fn test_unready_table_never_annotated() {
    let (tx, rx) = mpsc::channel(16);
    for _ in 0..3 {
        tx.send(structural()).await.unwrap();
    }
    drop(tx);

    let mut target = MemoryPage::new(attendance_page(&[("2026-10-01", "08:00", "17:00")]));
    let stats = drive(RenderWatcher::default(), &mut target, rx, |_| {}).await;

    assert_eq!(stats.scheduled, 0);
    assert_eq!(stats.passes, 0);
    assert_eq!(target.passes, 0);
}

#[tokio::test(start_paused = true)]
async fn test_attribute_changes_never_schedule() {
    let (tx, rx) = mpsc::channel(16);
    tx.send(vec![Mutation::new(MutationKind::Attributes, Some(2))])
        .await
        .unwrap();
    drop(tx);

    let mut target = MemoryPage::new(two_day_page());
    let stats = drive(RenderWatcher::default(), &mut target, rx, |_| {}).await;
    assert_eq!(stats.passes, 0);
}

#[tokio::test(start_paused = true)]
async fn test_page_file_target_annotates_on_disk() {
    let path = write_page("driver_page_file", &two_day_page());
    let mut target = PageFile::new(path.clone(), Config::default());

    assert!(target.is_ready().unwrap());
    let report = target.annotate().unwrap().expect("pass ran");
    assert_eq!(report.rows_annotated, 2);

    let page = Page::load(&path).unwrap();
    assert_eq!(data_table(&page).rows.len(), 3);
    assert!(data_table(&page).rows[2].cells[0].text.contains("5:00"));

    target.annotate().unwrap();
    assert_eq!(Page::load(&path).unwrap(), page);
}

#[tokio::test(start_paused = true)]
async fn test_poller_reports_snapshot_changes() {
    let page = two_day_page();
    let path = write_page("driver_poller", &page);
    let (tx, mut rx) = mpsc::channel(16);
    let poller = tokio::spawn(poll_page(path.clone(), Duration::from_millis(100), tx));

    let first = rx.recv().await.expect("initial snapshot");
    assert_eq!(first, vec![Mutation::child_list()]);

    let mut edited = page.clone();
    edited.tables[2].rows[1].cells[3].text = "18:00".to_string();
    edited.save(&path).unwrap();
    let second = rx.recv().await.expect("edited snapshot");
    assert_eq!(
        second,
        vec![Mutation::new(MutationKind::CharacterData, Some(2))]
    );

    let mut grown = edited.clone();
    grown.tables[2].rows.push(common::data_row("2026-10-03", "08:30", "18:30"));
    grown.save(&path).unwrap();
    let third = rx.recv().await.expect("grown snapshot");
    assert!(third[0].is_structural());
    assert!(grown.is_ready(GRID));

    drop(rx);
    poller.await.unwrap();
}
