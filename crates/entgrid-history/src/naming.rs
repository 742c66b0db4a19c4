//! Derived-column name synthesis.

use entgrid_model::ColumnModel;

use crate::error::{MutationError, Result};

/// Upper bound on `_new` collision suffixes before naming gives up.
pub const MAX_RENAME_ATTEMPTS: usize = 64;

/// Compute a collision-free name for the derived column.
///
/// The base name is `operation_source`, or `operation_country_source` when a
/// country tag is present. While the candidate collides with an existing
/// column, the literal suffix `_new` is appended — appended, not
/// incremented, so successive collisions produce `..._new`, `..._new_new`,
/// and so on. No other normalisation is applied, and the result is
/// deterministic for a given column set.
pub fn derived_column_name(
    columns: &ColumnModel,
    operation: &str,
    country: &str,
    source_name: &str,
) -> Result<String> {
    let mut name = if country.is_empty() {
        format!("{operation}_{source_name}")
    } else {
        format!("{operation}_{country}_{source_name}")
    };

    let mut attempts = 0;
    while columns.by_name(&name).is_some() {
        if attempts >= MAX_RENAME_ATTEMPTS {
            return Err(MutationError::NameExhausted { name, attempts });
        }
        name.push_str("_new");
        attempts += 1;
    }
    Ok(name)
}
