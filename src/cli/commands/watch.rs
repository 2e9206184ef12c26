use crate::cli::commands::annotate::print_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::driver::{WatchStats, drive};
use crate::core::source::{PageFile, poll_page};
use crate::core::watcher::{RenderWatcher, Timings};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Handle the `watch` command: runs until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { page, poll_ms } = cmd {
        let path = expand_tilde(page);
        let every = poll_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| cfg.poll_interval());
        if every.is_zero() {
            return Err(AppError::Config("poll interval must be greater than 0".into()));
        }

        // single-threaded on purpose: passes and polling never overlap
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Watch(e.to_string()))?;

        info(format!(
            "Watching {} every {} ms (Ctrl-C to stop)",
            path.display(),
            every.as_millis()
        ));

        let stats = runtime.block_on(watch(path.clone(), every, cfg.clone()))?;

        success(format!(
            "Stopped: {} change batch(es), {} pass(es) scheduled, {} run.",
            stats.batches, stats.scheduled, stats.passes
        ));
    }

    Ok(())
}

/// Poll the snapshot and drive the watcher; after Ctrl-C the poller is
/// stopped and the driver finishes whatever pass is still armed.
async fn watch(path: PathBuf, every: Duration, cfg: Config) -> AppResult<WatchStats> {
    let (tx, rx) = mpsc::channel(64);
    let poller = tokio::spawn(poll_page(path.clone(), every, tx));

    let watcher = RenderWatcher::new(Timings::from_config(&cfg));
    let mut target = PageFile::new(path, cfg);

    let driver = drive(watcher, &mut target, rx, |report| {
        success(format!("{} table annotated", Local::now().format("%H:%M:%S")));
        print_report(report);
    });
    tokio::pin!(driver);

    tokio::select! {
        stats = &mut driver => {
            poller.abort();
            return Ok(stats);
        }
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(|e| AppError::Watch(e.to_string()))?;
        }
    }

    // dropping the poller closes the channel, which lets the driver return
    poller.abort();
    Ok(driver.await)
}
