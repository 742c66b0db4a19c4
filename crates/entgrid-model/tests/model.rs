//! Integration tests for the project model.

use entgrid_model::{CellValue, Project, Row};

fn project_with_rows(columns: &[&str], rows: &[&[&str]]) -> Project {
    let mut project = Project::with_columns(columns.iter().copied()).unwrap();
    for values in rows {
        let mut row = Row::new();
        for (offset, value) in values.iter().enumerate() {
            let cell_index = project
                .columns()
                .by_name(columns[offset])
                .unwrap()
                .cell_index();
            row.set_cell(cell_index, (*value).into());
        }
        project.push_row(row);
    }
    project
}

#[test]
fn with_columns_assigns_positions_and_cell_indexes_in_order() {
    let project = Project::with_columns(["first", "second", "third"]).unwrap();
    assert_eq!(
        project.columns().names().collect::<Vec<_>>(),
        vec!["first", "second", "third"]
    );
    assert_eq!(project.columns().by_name("first").unwrap().cell_index(), 0);
    assert_eq!(project.columns().by_name("third").unwrap().cell_index(), 2);
    assert_eq!(project.columns().position_of("second"), Some(2));
}

#[test]
fn insert_and_remove_rows_are_positional() {
    let mut project = project_with_rows(&["src"], &[&["a"], &["c"]]);
    let mut row = Row::new();
    row.set_cell(0, "b".into());
    project.insert_row(1, row).unwrap();

    assert_eq!(project.row_count(), 3);
    assert_eq!(project.cell(1, 0).as_text(), Some("b"));

    let removed = project.remove_row(1).unwrap();
    assert_eq!(removed.cell(0).as_text(), Some("b"));
    assert_eq!(project.row_count(), 2);
    assert_eq!(project.cell(1, 0).as_text(), Some("c"));
}

#[test]
fn out_of_range_row_operations_fail() {
    let mut project = project_with_rows(&["src"], &[&["a"]]);
    assert!(project.insert_row(5, Row::new()).is_err());
    assert!(project.remove_row(1).is_err());
    assert!(project.set_cell(3, 0, "x".into()).is_err());
}

#[test]
fn update_bumps_the_revision_but_not_identity() {
    let mut project = project_with_rows(&["src"], &[&["a"]]);
    let snapshot = project.clone();
    project.update();
    assert_eq!(project.revision(), 1);
    assert_eq!(project, snapshot);
}

#[test]
fn cell_reads_outside_any_row_are_missing() {
    let project = project_with_rows(&["src"], &[&["a"]]);
    assert!(project.cell(9, 0).is_missing());
    assert!(project.cell(0, 9).is_missing());
}

#[test]
fn project_serializes() {
    let project = project_with_rows(&["src"], &[&["a"]]);
    let json = serde_json::to_string(&project).expect("serialize project");
    let round: Project = serde_json::from_str(&json).expect("deserialize project");
    assert_eq!(round, project);
}

#[test]
fn cell_value_display_renders_missing_as_empty() {
    assert_eq!(CellValue::Text("x".to_string()).to_string(), "x");
    assert_eq!(CellValue::Missing.to_string(), "");
}
