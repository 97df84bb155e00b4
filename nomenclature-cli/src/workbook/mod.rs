//! Spreadsheet input: string grids, workbook sources and the reference table

pub mod grid;
pub mod reference;
pub mod source;

pub use grid::Grid;
pub use reference::ReferenceTable;
pub use source::{TAG_SUMMARY_PATTERN, WorkbookSource, XlsxWorkbook, find_tag_summary_sheet};
