use itertools::Itertools;

use crate::records::{Measure, Record, Table};

/// Records whose `test_type` contains a substring pattern.
///
/// Views borrow from the `Table` and are independent of each other; a record may be matched by
/// any number of views.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView<'t> {
    pattern: String,
    records: Vec<&'t Record>,
}

impl<'t> CategoryView<'t> {
    #[tracing::instrument(level = "debug", skip(table), fields(nr_table_records=%table.len()))]
    pub fn matching(table: &'t Table, pattern: &str) -> Self {
        let records: Vec<_> = table.iter().filter(|r| r.test_type.contains(pattern)).collect();
        tracing::debug!(nr_matched=%records.len(), "categorized benchmark results.");
        Self { pattern: pattern.to_string(), records }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn records(&self) -> &[&'t Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct labels in the order they are first seen.
    pub fn labels(&self) -> Vec<&'t str> {
        self.records.iter().map(|r| r.test_type.as_str()).unique().collect()
    }

    /// Rows sharing exactly `label`, in their original relative order.
    pub fn series_for(&self, label: &str) -> Series {
        let points = self
            .records
            .iter()
            .filter(|r| r.test_type == label)
            .map(|r| (r.threads, r.time))
            .collect();

        Series { label: label.to_string(), points }
    }

    /// One series per distinct label.
    pub fn series(&self) -> Vec<Series> {
        self.labels().into_iter().map(|label| self.series_for(label)).collect()
    }
}

/// The `(threads, time)` points of a single benchmark variant, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(Measure, Measure)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(Measure, Measure)>) -> Self {
        Self { label: label.into(), points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
