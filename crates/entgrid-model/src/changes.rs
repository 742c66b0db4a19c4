//! Structural column changes.
//!
//! These helpers perform the two column-level edits reversible mutations are
//! built from. Both mutate the project in place and leave row identity
//! untouched: an addition seeds the new slot to absent in every existing
//! row, and a removal scrubs the slot back to absent so no orphaned values
//! survive at a dead cell index.

use crate::error::Result;
use crate::{CellValue, Column, Project};

/// Insert a named column at a 1-based position.
#[derive(Debug, Clone)]
pub struct ColumnAddition {
    name: String,
    position: usize,
}

impl ColumnAddition {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// Apply the addition, returning the freshly allocated cell index.
    ///
    /// Columns previously at `position..` shift right by one. Every existing
    /// row gets an absent cell in the new slot.
    pub fn apply(&self, project: &mut Project) -> Result<usize> {
        let cell_index = project.columns().allocate_cell_index();
        project
            .columns_mut()
            .insert(self.position, Column::new(self.name.clone(), cell_index))?;
        for index in 0..project.row_count() {
            if let Some(row) = project.row_mut(index) {
                row.set_cell(cell_index, CellValue::Missing);
            }
        }
        Ok(cell_index)
    }
}

/// Remove the column at a 1-based position.
#[derive(Debug, Clone)]
pub struct ColumnRemoval {
    position: usize,
}

impl ColumnRemoval {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    /// Apply the removal, returning the removed column.
    pub fn apply(&self, project: &mut Project) -> Result<Column> {
        let column = project.columns_mut().remove(self.position)?;
        for index in 0..project.row_count() {
            if let Some(row) = project.row_mut(index) {
                row.clear_cell(column.cell_index());
            }
        }
        Ok(column)
    }
}
