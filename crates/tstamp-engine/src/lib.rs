// Engine module - pure record processing (export serialization, table view)
// This layer sits between the record types and the runtime/CLI layers

pub mod error;
pub mod export;
pub mod table;
pub mod xml;

pub use error::{Error, Result};
pub use export::{ExportFormat, render};
pub use table::{
    PageRequest, PageView, RecordFilter, SortColumn, SortOrder, TimestampTable, natural_cmp,
};
