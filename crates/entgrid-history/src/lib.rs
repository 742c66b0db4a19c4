//! Reversible extraction mutations over a table project.
//!
//! This crate turns the result of an entity-extraction pass into a single
//! undo/redo unit against a project from `entgrid-model`:
//!
//! - a derived column is inserted next to the source column, with a
//!   collision-free name synthesised from the extractor identifier, the
//!   optional locale tag, and the source column name;
//! - source rows whose extraction bag holds more than one value expand the
//!   table with blank rows inserted in place;
//! - the whole unit reverses exactly, and round-trips through the
//!   line-oriented journal from `entgrid-journal` so it can be replayed
//!   after a restart.
//!
//! The extraction pass itself is an external collaborator: it hands this
//! crate one [`ExtractionResult`] per source row, in row order, before the
//! [`TableMutation`] is constructed.
//!
//! # Example
//!
//! ```
//! use entgrid_history::{ExtractionResult, TableMutation};
//! use entgrid_model::{Project, Row};
//!
//! let mut project = Project::with_columns(["src"]).unwrap();
//! let mut row = Row::new();
//! row.set_cell(0, "some text about Turin".into());
//! project.push_row(row);
//!
//! let mut bag = ExtractionResult::new();
//! bag.push("Turin");
//!
//! let mut mutation = TableMutation::new(1, "ne", "", vec![bag]);
//! mutation.apply(&mut project).unwrap();
//! assert_eq!(
//!     project.columns().names().collect::<Vec<_>>(),
//!     vec!["ne_src", "src"]
//! );
//!
//! mutation.revert(&mut project).unwrap();
//! assert_eq!(project.columns().names().collect::<Vec<_>>(), vec!["src"]);
//! ```

pub mod error;
pub mod extraction;
pub mod mutation;
pub mod naming;

pub use error::{MutationError, Result};
pub use extraction::ExtractionResult;
pub use mutation::TableMutation;
pub use naming::{MAX_RENAME_ATTEMPTS, derived_column_name};
