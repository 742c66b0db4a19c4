//! The reversible extraction mutation.

use std::io::{BufRead, Write};

use tracing::debug;

use entgrid_journal::{MutationRecord, ObjectRecord, read_record, write_record};
use entgrid_model::{ColumnAddition, ColumnRemoval, ModelError, Project, Row};

use crate::error::{MutationError, Result};
use crate::extraction::ExtractionResult;
use crate::naming::derived_column_name;

/// A single undo/redo unit that materialises extraction results into a
/// project.
///
/// Applying the mutation inserts a derived column and, for every source row
/// whose bag holds more than one value, enough blank rows directly below it
/// to hold the surplus. Reverting removes exactly those rows and the derived
/// column, restoring the pre-apply project. Saving emits one journal record;
/// loading reconstructs the mutation, including the applied-state row list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMutation {
    /// 1-based position at which the derived column is inserted. Before
    /// apply, the same position addresses the source column whose name seeds
    /// the derived name; afterwards the source column sits one position to
    /// the right.
    column: usize,
    operation: String,
    country: String,
    objects: Vec<ExtractionResult>,
    /// Positional indices of the rows apply inserted, ascending, in the
    /// coordinate system of the post-apply table. Empty until apply.
    added_rows: Vec<usize>,
}

impl TableMutation {
    /// Create a mutation from one extraction bag per source row.
    ///
    /// `objects` must hold exactly one entry per project row, in row order,
    /// as of the moment the extraction pass ran; apply refuses the mutation
    /// if the project's row count has drifted since.
    pub fn new(
        column: usize,
        operation: impl Into<String>,
        country: impl Into<String>,
        objects: Vec<ExtractionResult>,
    ) -> Self {
        Self {
            column,
            operation: operation.into(),
            country: country.into(),
            objects,
            added_rows: Vec::new(),
        }
    }

    /// 1-based position of the derived column.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn objects(&self) -> &[ExtractionResult] {
        &self.objects
    }

    /// Positional indices of the rows the last apply inserted.
    pub fn added_rows(&self) -> &[usize] {
        &self.added_rows
    }

    /// True when the mutation has been applied and not reverted. A loaded
    /// mutation with recorded rows is in this state and must be reverted
    /// before it can be applied again.
    pub fn is_applied(&self) -> bool {
        !self.added_rows.is_empty()
    }

    /// Apply the mutation to `project`.
    ///
    /// The caller holds the project exclusively for the whole call; the
    /// mutation runs to completion without suspension points. All
    /// validation happens before the first visible edit, so a failed apply
    /// leaves the project untouched.
    pub fn apply(&mut self, project: &mut Project) -> Result<()> {
        if self.objects.len() != project.row_count() {
            return Err(MutationError::RowCountMismatch {
                expected: self.objects.len(),
                actual: project.row_count(),
            });
        }
        let source_name =
            project
                .columns()
                .name_at(self.column)
                .ok_or(ModelError::ColumnPositionOutOfRange {
                    position: self.column,
                    count: project.columns().len(),
                })?;
        let name = derived_column_name(
            project.columns(),
            &self.operation,
            &self.country,
            source_name,
        )?;

        debug!(
            column = self.column,
            name = %name,
            rows = project.row_count(),
            "applying extraction mutation"
        );

        let cell_index = ColumnAddition::new(name, self.column).apply(project)?;
        self.insert_values(project, cell_index)?;
        project.update();

        debug!(
            cell_index,
            added_rows = self.added_rows.len(),
            "extraction mutation applied"
        );
        Ok(())
    }

    /// Walk the source rows, inserting surplus rows and filling the derived
    /// slot.
    ///
    /// `row_number` tracks the row receiving the current bag's first value.
    /// A bag of size `m` occupies rows `row_number..row_number + max(1, m)`:
    /// the surplus `m - 1` rows are inserted blank directly below the source
    /// row and recorded, then every bag entry lands in its own row at the
    /// derived column's slot.
    fn insert_values(&mut self, project: &mut Project, cell_index: usize) -> Result<()> {
        self.added_rows.clear();
        let mut row_number = 0;
        for bag in &self.objects {
            let span = bag.len().max(1);
            for offset in 1..span {
                let inserted_at = row_number + offset;
                project.insert_row(inserted_at, Row::blank(cell_index + 1))?;
                self.added_rows.push(inserted_at);
            }
            for offset in 0..bag.len() {
                project.set_cell(row_number + offset, cell_index, bag.cell_at(offset))?;
            }
            row_number += span;
        }
        Ok(())
    }

    /// Reverse a previous apply on `project`.
    ///
    /// Recorded rows are removed highest-first — each removal shifts the
    /// indices above it, so the reverse walk keeps the remaining recorded
    /// indices valid — then the derived column is dropped. A recorded index
    /// outside the current row range means the journal and the project have
    /// diverged, and the revert fails before touching anything else.
    pub fn revert(&mut self, project: &mut Project) -> Result<()> {
        debug!(
            column = self.column,
            rows_to_remove = self.added_rows.len(),
            "reverting extraction mutation"
        );

        for &row in self.added_rows.iter().rev() {
            if row >= project.row_count() {
                return Err(MutationError::RowOutOfRange {
                    row,
                    row_count: project.row_count(),
                });
            }
            project.remove_row(row)?;
        }
        self.added_rows.clear();
        ColumnRemoval::new(self.column).apply(project)?;
        project.update();
        Ok(())
    }

    /// Write the mutation as a single journal record, without framing.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        write_record(writer, &self.to_record())?;
        Ok(())
    }

    /// Read one journal record and reconstruct the mutation.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::from_record(read_record(reader)?))
    }

    pub fn to_record(&self) -> MutationRecord {
        MutationRecord {
            column: self.column,
            operation: self.operation.clone(),
            country: self.country.clone(),
            objects: self.objects.iter().map(ObjectRecord::from).collect(),
            added_rows: self.added_rows.clone(),
        }
    }

    pub fn from_record(record: MutationRecord) -> Self {
        Self {
            column: record.column,
            operation: record.operation,
            country: record.country,
            objects: record
                .objects
                .into_iter()
                .map(ExtractionResult::from)
                .collect(),
            added_rows: record.added_rows,
        }
    }
}
