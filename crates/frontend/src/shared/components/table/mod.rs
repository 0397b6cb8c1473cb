pub mod cell_format;
pub mod column;
pub mod data_table;
pub mod number_format;
pub mod row_actions;
pub mod sortable_header_cell;

pub use cell_format::{render_cell, CellContent, FormatPolicy, FormatRule};
pub use column::{CellRenderer, ColumnDef, ColumnKind, ColumnSpec, ColumnSpecError};
pub use data_table::DataTable;
pub use number_format::*;
pub use row_actions::{RowAction, RowActions};
pub use sortable_header_cell::SortableHeaderCell;
