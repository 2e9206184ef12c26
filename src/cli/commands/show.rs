use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ANNOTATION_ATTR;
use crate::errors::{AppError, AppResult};
use crate::models::page::{Page, Table as PageTable};
use crate::ui::messages::header;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use ansi_term::{Colour, Style};

/// Handle the `show` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { page } = cmd {
        let path = expand_tilde(page);
        let snapshot = Page::load(&path)?;

        let (head, data) = snapshot
            .grid_tables(&cfg.grid_class)
            .ok_or_else(|| AppError::TablesNotFound(path.display().to_string()))?;

        let table = build_table(head, data);
        let annotated = annotation_columns(data);

        header(path.display());
        print!(
            "{}",
            table.render_styled(|col, text| style_for(col, text, &annotated))
        );
    }

    Ok(())
}

/// Flatten the header and data tables; one-cell rows become footer lines.
pub fn build_table(head: &PageTable, data: &PageTable) -> Table {
    let headers = head
        .rows
        .first()
        .map(|r| r.cells.iter().map(|c| c.text_content()).collect())
        .unwrap_or_default();

    let mut table = Table::new(headers);
    for row in &data.rows {
        match row.cells.as_slice() {
            [only] => table.add_footer(only.text_content()),
            cells => table.add_row(cells.iter().map(|c| c.text_content()).collect()),
        }
    }
    table
}

fn annotation_columns(data: &PageTable) -> Vec<usize> {
    let mut cols: Vec<usize> = data
        .rows
        .iter()
        .flat_map(|r| {
            r.cells
                .iter()
                .enumerate()
                .filter(|(_, c)| c.attributes.contains_key(ANNOTATION_ATTR))
                .map(|(i, _)| i)
        })
        .collect();
    cols.sort_unstable();
    cols.dedup();
    cols
}

fn style_for(col: usize, text: &str, annotated: &[usize]) -> Option<Style> {
    if !annotated.contains(&col) || text.is_empty() {
        return None;
    }
    if text.starts_with("N/A") {
        Some(Colour::Red.bold())
    } else {
        Some(Colour::Green.normal())
    }
}
