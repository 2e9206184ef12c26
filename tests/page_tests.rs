mod common;

use common::{GRID, attendance_page, temp_path, two_day_page};
use rworkhours::core::mutation::{Mutation, MutationKind, diff_pages};
use rworkhours::core::view::{CellContent, HostTable, TableView};
use rworkhours::models::page::{Cell, Page, Row, Table};

#[test]
fn test_grid_tables_skip_foreign_tables() {
    let page = two_day_page();
    let (header, data) = page.grid_tables(GRID).expect("two grid tables");
    assert_eq!(header.rows[0].cells[0].text_content(), "日期");
    assert_eq!(data.rows.len(), 2);
    assert!(page.grid_tables("other_grid").is_none());
}

#[test]
fn test_readiness_needs_more_than_one_row() {
    assert!(two_day_page().is_ready(GRID));
    assert!(!attendance_page(&[("2026-10-01", "08:00", "17:00")]).is_ready(GRID));
    assert!(!attendance_page(&[]).is_ready(GRID));
    assert!(!Page::default().is_ready(GRID));
}

#[test]
fn test_snapshot_json_round_trip_on_disk() {
    let path = temp_path("page_round_trip", "json");
    let page = two_day_page();
    page.save(&path).unwrap();

    let loaded = Page::load(&path).unwrap();
    assert_eq!(loaded, page);
}

#[test]
fn test_snapshot_defaults_for_missing_fields() {
    let page = Page::from_json(
        r#"{"tables":[{"container":"ta_grid_table","rows":[{"cells":[{"text":"a"},{}]}]}]}"#,
    )
    .unwrap();
    let cell = &page.tables[0].rows[0].cells[1];
    assert_eq!(cell, &Cell::default());
    assert!(Page::from_json("{\"tables\": [").is_err());
}

#[test]
fn test_text_content_joins_text_and_label() {
    let mut cell = Cell::labelled("上班");
    cell.text = "▲ ".to_string();
    assert_eq!(cell.text_content(), "▲ 上班");
}

#[test]
fn test_host_table_ignores_out_of_range() {
    let mut table = Table::in_container(GRID, vec![Row::from_texts(&["a", "b"])]);
    let mut view = HostTable::new(&mut table, "data-reactid");

    assert_eq!(view.cell_text(3, 0), None);
    assert_eq!(view.cell_count(3), 0);
    assert!(!view.is_annotation(0, 9));
    view.append_annotation(5, CellContent::Whole("x"));
    view.replace_annotation(0, 9, CellContent::Whole("x"));
    view.remove_row(7);
    assert_eq!(view.row_count(), 1);
    assert_eq!(view.cell_count(0), 2);
}

#[test]
fn test_label_content_falls_back_to_text_without_label() {
    let mut table = Table::in_container(GRID, vec![Row::from_texts(&["日期"])]);
    let mut view = HostTable::new(&mut table, "data-reactid");
    view.append_annotation(0, CellContent::Label("當日工時"));

    let added = &table.rows[0].cells[1];
    assert_eq!(added.text, "當日工時");
    assert_eq!(added.label, None);
}

#[test]
fn test_diff_identical_pages_is_empty() {
    assert!(diff_pages(&two_day_page(), &two_day_page()).is_empty());
}

#[test]
fn test_diff_row_added_is_structural() {
    let before = attendance_page(&[("2026-10-01", "08:00", "17:00")]);
    let after = two_day_page();

    let muts = diff_pages(&before, &after);
    assert_eq!(muts, vec![Mutation::new(MutationKind::ChildList, Some(2))]);
    assert!(muts[0].is_structural());
}

#[test]
fn test_diff_from_blank_page() {
    let muts = diff_pages(&Page::default(), &two_day_page());
    assert_eq!(muts, vec![Mutation::child_list()]);
}

#[test]
fn test_diff_text_and_attribute_changes() {
    let before = two_day_page();
    let mut after = before.clone();
    after.tables[2].rows[0].cells[3].text = "18:00".to_string();
    after.tables[1].rows[0].cells[0]
        .attributes
        .insert("class".to_string(), "sorted".to_string());

    let muts = diff_pages(&before, &after);
    assert_eq!(
        muts,
        vec![
            Mutation::new(MutationKind::Attributes, Some(1)),
            Mutation::new(MutationKind::CharacterData, Some(2)),
        ]
    );
    assert!(muts.iter().all(|m| !m.is_structural()));
}
