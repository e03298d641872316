use clap::ValueEnum;
use std::fmt;
use tstamp_engine::{ExportFormat, SortColumn};
use tstamp_types::LineEnding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum FormatArg {
    Csv,
    JsonLd,
    RdfXml,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::JsonLd => ExportFormat::JsonLd,
            FormatArg::RdfXml => ExportFormat::RdfXml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SortArg {
    Provider,
    FilePath,
    VerifyUserNameId,
    VerifyDate,
    VerifyResultTitle,
}

impl From<SortArg> for SortColumn {
    fn from(column: SortArg) -> Self {
        match column {
            SortArg::Provider => SortColumn::Provider,
            SortArg::FilePath => SortColumn::FilePath,
            SortArg::VerifyUserNameId => SortColumn::VerifyUserNameId,
            SortArg::VerifyDate => SortColumn::VerifyDate,
            SortArg::VerifyResultTitle => SortColumn::VerifyResultTitle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LineEndingArg {
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(line_ending: LineEndingArg) -> Self {
        match line_ending {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}
