#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworkhours::models::page::{Cell, Page, Row, Table};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const GRID: &str = "ta_grid_table";
pub const SUMMARY_5H: &str = "您的平均工時只有 5:00。請多加努力。";

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Unique path inside the system temp dir; any previous file is removed
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

fn tracked(cell: Cell, id: &str) -> Cell {
    cell.with_attribute("data-reactid", id)
}

/// Header table as the host renders it: label spans inside styled cells
pub fn header_table() -> Table {
    let cells = ["日期", "上班", "狀態", "下班", "備註"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut cell = tracked(Cell::labelled(*label), &format!(".0.h.{i}"));
            cell.attributes
                .insert("class".to_string(), "ta_grid_head".to_string());
            cell
        })
        .collect();
    Table::in_container(GRID, vec![Row { cells }])
}

pub fn data_row(date: &str, check_in: &str, check_out: &str) -> Row {
    let cells = [date, check_in, "正常", check_out, ""]
        .iter()
        .enumerate()
        .map(|(i, t)| tracked(Cell::text(*t), &format!(".0.{date}.{i}")))
        .collect();
    Row { cells }
}

pub fn attendance_page(rows: &[(&str, &str, &str)]) -> Page {
    let data = rows
        .iter()
        .map(|(d, i, o)| data_row(d, i, o))
        .collect();
    Page {
        tables: vec![
            Table::in_container("toolbar", vec![Row::from_texts(&["查詢"])]),
            header_table(),
            Table::in_container(GRID, data),
        ],
    }
}

/// Two-row page: 8:00 and 2:00 worked, 5:00 on average
pub fn two_day_page() -> Page {
    attendance_page(&[
        ("2026-10-01", "08:00", "17:00"),
        ("2026-10-02", "09:00", "12:00"),
    ])
}

pub fn write_page(name: &str, page: &Page) -> PathBuf {
    let path = temp_path(name, "json");
    page.save(&path).expect("write page");
    path
}

pub fn data_table(page: &Page) -> &Table {
    page.grid_tables(GRID).expect("grid tables").1
}

pub fn header_of(page: &Page) -> &Table {
    page.grid_tables(GRID).expect("grid tables").0
}
