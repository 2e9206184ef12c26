use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::augmenter::PassReport;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::page::Page;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::{ensure_writable, expand_tilde};
use crate::utils::time::format_duration;

/// Handle the `annotate` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Annotate { page, out, force } = cmd {
        let src = expand_tilde(page);
        let mut snapshot = Page::load(&src)?;

        if snapshot.grid_tables(&cfg.grid_class).is_none() {
            return Err(AppError::TablesNotFound(src.display().to_string()));
        }

        let Some(report) = Core::annotate_page(&mut snapshot, cfg) else {
            warning("The data table is empty: nothing to annotate.");
            return Ok(());
        };

        let dest = match out {
            Some(o) => {
                let dest = expand_tilde(o);
                ensure_writable(&dest, *force)?;
                dest
            }
            None => src,
        };
        snapshot.save(&dest)?;

        print_report(&report);
        success(format!("Annotated snapshot written to {}", dest.display()));
    }

    Ok(())
}

pub fn print_report(report: &PassReport) {
    info(format!(
        "Rows annotated: {} | skipped: {} | total: {} | average: {}",
        report.rows_annotated,
        report.rows_skipped,
        format_duration(report.total_minutes),
        format_duration(report.average_minutes),
    ));
    if report.stale_summary_removed {
        info("Previous summary row replaced.");
    }
    if report.header_labelled {
        info("Header label added.");
    }
}
