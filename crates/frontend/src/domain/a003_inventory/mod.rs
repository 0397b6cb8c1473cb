pub mod columns;
pub mod ui;
