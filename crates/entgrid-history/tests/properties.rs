//! Property tests for the mutation invariants.

use proptest::prelude::*;

use entgrid_history::{ExtractionResult, TableMutation, derived_column_name};
use entgrid_model::{Column, ColumnModel, Project, Row};

fn build_project(column_count: usize, rows: &[Vec<String>]) -> Project {
    let names: Vec<String> = (1..=column_count).map(|i| format!("c{i}")).collect();
    let mut project = Project::with_columns(names).unwrap();
    for cells in rows {
        let mut row = Row::new();
        for (index, value) in cells.iter().enumerate() {
            row.set_cell(index, value.as_str().into());
        }
        project.push_row(row);
    }
    project
}

/// A project shape plus one extraction bag per row: the column count, the
/// 1-based source column position, and per-row cell values and bag entries.
fn scenario() -> impl Strategy<Value = (usize, usize, Vec<(Vec<String>, Vec<Option<String>>)>)> {
    (1..4usize).prop_flat_map(|column_count| {
        let row = prop::collection::vec("[a-z]{0,5}", column_count);
        let bag = prop::collection::vec(prop::option::of("[a-z]{0,5}"), 0..4);
        (
            Just(column_count),
            1..=column_count,
            prop::collection::vec((row, bag), 0..8),
        )
    })
}

proptest! {
    #[test]
    fn apply_then_revert_is_identity(
        (column_count, position, rows_and_bags) in scenario(),
    ) {
        let rows: Vec<Vec<String>> =
            rows_and_bags.iter().map(|(row, _)| row.clone()).collect();
        let bags: Vec<ExtractionResult> = rows_and_bags
            .iter()
            .map(|(_, bag)| ExtractionResult::from_values(bag.clone()))
            .collect();

        let mut project = build_project(column_count, &rows);
        let before = project.clone();
        let mut mutation = TableMutation::new(position, "ne", "", bags);

        mutation.apply(&mut project).unwrap();
        mutation.revert(&mut project).unwrap();

        prop_assert_eq!(project, before);
        prop_assert_eq!(mutation.added_rows().len(), 0);
    }

    #[test]
    fn apply_accounts_for_every_row_and_column(
        (column_count, position, rows_and_bags) in scenario(),
    ) {
        let rows: Vec<Vec<String>> =
            rows_and_bags.iter().map(|(row, _)| row.clone()).collect();
        let bags: Vec<ExtractionResult> = rows_and_bags
            .iter()
            .map(|(_, bag)| ExtractionResult::from_values(bag.clone()))
            .collect();

        let mut project = build_project(column_count, &rows);
        let before = project.clone();
        let mut mutation = TableMutation::new(position, "ne", "", bags);

        mutation.apply(&mut project).unwrap();

        let surplus: usize = rows_and_bags
            .iter()
            .map(|(_, bag)| bag.len().saturating_sub(1))
            .sum();
        prop_assert_eq!(project.row_count(), before.row_count() + surplus);
        prop_assert_eq!(mutation.added_rows().len(), surplus);
        prop_assert_eq!(project.columns().len(), before.columns().len() + 1);

        // Recorded indices are ascending and each names a blank-source row.
        let recorded = mutation.added_rows();
        prop_assert!(recorded.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(recorded.iter().all(|&row| row < project.row_count()));

        // Pre-existing columns survive with their names in order.
        let names: Vec<&str> = project.columns().names().collect();
        let mut survivors = names.clone();
        survivors.remove(position - 1);
        prop_assert_eq!(survivors, before.columns().names().collect::<Vec<_>>());
    }

    #[test]
    fn save_load_is_lossless(
        (_, position, rows_and_bags) in scenario(),
    ) {
        let bags: Vec<ExtractionResult> = rows_and_bags
            .iter()
            .map(|(_, bag)| ExtractionResult::from_values(bag.clone()))
            .collect();
        let mutation = TableMutation::new(position, "ne", "it", bags);

        let mut buffer = Vec::new();
        mutation.save(&mut buffer).unwrap();
        let loaded = TableMutation::load(std::io::Cursor::new(&buffer)).unwrap();

        prop_assert_eq!(loaded, mutation);
    }

    #[test]
    fn derived_names_never_collide(
        names in prop::collection::btree_set("[a-z_]{1,12}", 1..6),
        country in prop::option::of("[a-z]{2}"),
    ) {
        let mut model = ColumnModel::new();
        for (index, name) in names.iter().enumerate() {
            model.insert(index + 1, Column::new(name.clone(), index)).unwrap();
        }
        let source = names.iter().next().unwrap();

        let name =
            derived_column_name(&model, "ne", country.as_deref().unwrap_or(""), source).unwrap();
        prop_assert!(model.by_name(&name).is_none());

        // Determinism: the same inputs yield the same name.
        let again =
            derived_column_name(&model, "ne", country.as_deref().unwrap_or(""), source).unwrap();
        prop_assert_eq!(name, again);
    }
}
