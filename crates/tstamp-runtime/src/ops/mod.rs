pub mod export;

pub use export::{EMPTY_SELECTION_MESSAGE, EMPTY_SELECTION_TITLE, ExportOutcome, ExportService};
