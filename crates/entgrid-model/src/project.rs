//! The project aggregate.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::{CellValue, Column, ColumnModel, Row};

/// An ordered sequence of rows plus the column model that addresses them.
///
/// The project is an externally owned aggregate: callers that mutate it take
/// `&mut Project` for the whole operation, which is the exclusive-access
/// regime reversible mutations rely on. After a batch of structural edits,
/// callers signal completion with [`Project::update`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    columns: ColumnModel,
    rows: Vec<Row>,
    #[serde(skip)]
    revision: u64,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// A project with one column per name, cell indexes assigned in order,
    /// and no rows.
    pub fn with_columns<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut project = Self::new();
        for name in names {
            let cell_index = project.columns.allocate_cell_index();
            let position = project.columns.len() + 1;
            project
                .columns
                .insert(position, Column::new(name, cell_index))?;
        }
        Ok(project)
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnModel {
        &mut self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Insert `row` at the positional `index`, shifting later rows down.
    pub fn insert_row(&mut self, index: usize, row: Row) -> Result<()> {
        if index > self.rows.len() {
            return Err(ModelError::RowIndexOutOfRange {
                index,
                count: self.rows.len(),
            });
        }
        self.rows.insert(index, row);
        Ok(())
    }

    /// Remove and return the row at the positional `index`.
    pub fn remove_row(&mut self, index: usize) -> Result<Row> {
        if index >= self.rows.len() {
            return Err(ModelError::RowIndexOutOfRange {
                index,
                count: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    /// Read the cell at `(row_index, cell_index)`.
    pub fn cell(&self, row_index: usize, cell_index: usize) -> &CellValue {
        static MISSING: CellValue = CellValue::Missing;
        self.rows
            .get(row_index)
            .map(|row| row.cell(cell_index))
            .unwrap_or(&MISSING)
    }

    /// Store `value` at `(row_index, cell_index)`.
    pub fn set_cell(&mut self, row_index: usize, cell_index: usize, value: CellValue) -> Result<()> {
        let count = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(ModelError::RowIndexOutOfRange {
                index: row_index,
                count,
            })?;
        row.set_cell(cell_index, value);
        Ok(())
    }

    /// Signal that the model has changed.
    pub fn update(&mut self) {
        self.revision += 1;
    }

    /// Monotonic change counter, bumped by [`Project::update`].
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Projects are equal when their columns and rows are; the revision counter
/// is not part of project identity.
impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows
    }
}

impl Eq for Project {}
