#[cfg(test)]
#[macro_use]
extern crate static_assertions;

pub mod category;
pub mod error;
pub mod figure;
pub mod records;
pub mod report;
pub mod settings;
pub mod tracing;

pub use category::{CategoryView, Series};
pub use figure::Figure;
pub use records::{parse_measure, Measure, Record, Table};
pub use report::{run, ReportSummary};
pub use settings::Settings;

pub type ReportResult<T> = Result<T, error::ReportError>;
