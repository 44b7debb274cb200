//! Grid layout: widgets are staged into columns, columns are sealed into rows, rows stack
//! into the grid body.

mod buffer;
mod column;
mod grid;
mod row;

pub use buffer::WidgetBuffer;
pub use column::Column;
pub use grid::Grid;
pub use row::Row;

use crate::error::{DashError, Result};

/// Width of a full row in layout units.
pub const MAX_ROW_SIZE: u32 = 12;

/// Check that `cols` fit in one row. Column sizes are unchecked, so the total saturates at
/// `u32::MAX` rather than wrapping back under the budget.
pub fn validate_row_size(cols: &[Column]) -> Result<()> {
    let total = cols
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.span()));
    if total > MAX_ROW_SIZE {
        return Err(DashError::RowOverflow { total });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/mod.rs"]
mod tests;
