//! Export serializers for selected timestamp records.
//!
//! Every format produces the complete payload in memory. Line endings are
//! injected by the caller so the serializers stay platform independent.

mod csv;
mod json;
mod rdf;

pub use self::csv::generate_csv;
pub use self::json::generate_json;
pub use self::rdf::{
    NAMESPACES, RDF_NAMESPACE, file_resource_id, generate_rdf, rdf_document, sanitize_verify_date,
    timestamp_id,
};

use std::fmt;
use std::str::FromStr;
use tstamp_types::{FieldSpec, FileRecord, LineEnding};

/// Content type handed to download sinks.
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Base name of every downloaded export file.
pub const DEFAULT_BASE_NAME: &str = "timestamp_errors";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    JsonLd,
    RdfXml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::JsonLd => "json",
            ExportFormat::RdfXml => "rdf",
        }
    }

    /// Download file name for this format, e.g. `timestamp_errors.rdf`.
    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}.{}", base_name, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "json-ld" => Ok(ExportFormat::JsonLd),
            "rdf-xml" => Ok(ExportFormat::RdfXml),
            _ => Err(crate::Error::InvalidInput(format!(
                "Unknown export format: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::JsonLd => write!(f, "json-ld"),
            ExportFormat::RdfXml => write!(f, "rdf-xml"),
        }
    }
}

/// Render `records` in `format`.
///
/// RDF output ignores `fields`: its structure is fixed.
pub fn render(
    format: ExportFormat,
    records: &[&FileRecord],
    fields: &FieldSpec,
    line_ending: LineEnding,
) -> crate::Result<String> {
    match format {
        ExportFormat::Csv => generate_csv(records, fields, line_ending),
        ExportFormat::JsonLd => generate_json(records, fields, line_ending),
        ExportFormat::RdfXml => Ok(generate_rdf(records, line_ending)),
    }
}
