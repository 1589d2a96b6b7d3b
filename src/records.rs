use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ReportError;

/// Best-effort numeric cell read from the results file.
///
/// Cells that do not parse as a number are kept as `Missing` so the row survives and the plot
/// shows a gap at that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Value(f64),
    Missing,
}

impl Measure {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Value(value)
        }
    }
}

impl From<Option<f64>> for Measure {
    fn from(value: Option<f64>) -> Self {
        value.map(Self::from).unwrap_or(Self::Missing)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::Missing => write!(f, "NaN"),
        }
    }
}

/// Parses a cell as a number, falling back to `Measure::Missing` rather than failing.
pub fn parse_measure(rep: &str) -> Measure {
    rep.trim().parse::<f64>().ok().into()
}

/// One row of benchmark results.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub test_type: String,
    pub threads: Measure,
    pub time: Measure,
}

impl Record {
    pub fn new(test_type: impl Into<String>, threads: impl Into<Measure>, time: impl Into<Measure>) -> Self {
        Self {
            test_type: test_type.into(),
            threads: threads.into(),
            time: time.into(),
        }
    }

    fn from_csv(record: &csv::StringRecord) -> Self {
        let test_type = record.get(0).unwrap_or_default();
        let threads = record.get(1).map(parse_measure).unwrap_or(Measure::Missing);
        let time = record.get(2).map(parse_measure).unwrap_or(Measure::Missing);
        Self { test_type: test_type.to_string(), threads, time }
    }
}

/// Benchmark results loaded wholesale, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Loads the headerless `test_type,threads,time` results file at `path`.
    #[tracing::instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|source| ReportError::InputMissing { path: path.to_path_buf(), source })?;
        let table = Self::from_reader(file)?;
        tracing::info!(
            ?path,
            nr_records=%table.len(),
            nr_missing_cells=%table.nr_missing_cells(),
            "loaded benchmark results."
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = vec![];
        for result in reader.records() {
            let record = result.map_err(ReportError::Csv)?;
            if 3 < record.len() {
                tracing::debug!(?record, "ignoring fields beyond the third.");
            }
            records.push(Record::from_csv(&record));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn nr_missing_cells(&self) -> usize {
        self.records
            .iter()
            .map(|r| usize::from(r.threads.is_missing()) + usize::from(r.time.is_missing()))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
