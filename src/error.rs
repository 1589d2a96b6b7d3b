use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Set of errors occurring while producing the benchmark report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The results file could not be opened or read.
    #[error("could not read benchmark results from {path:?}: {source}")]
    InputMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in the results file could not be decoded at all.
    #[error("Could not properly load CSV results: {0}")]
    Csv(#[source] csv::Error),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// One or more charts failed to render; the remaining charts were still attempted.
    #[error("failed to render chart(s): {0}")]
    Charts(ChartFailures),
}

/// A chart that could not be written, together with why.
#[derive(Debug)]
pub struct ChartFailure {
    pub output: PathBuf,
    pub error: FigureError,
}

impl fmt::Display for ChartFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.output, self.error)
    }
}

#[derive(Debug)]
pub struct ChartFailures(pub Vec<ChartFailure>);

impl ChartFailures {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartFailure> {
        self.0.iter()
    }
}

impl fmt::Display for ChartFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if 0 < i {
                write!(f, "; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

/// Set of errors occurring while drawing or writing a figure.
#[derive(Debug, Error)]
pub enum FigureError {
    /// Error raised by the drawing backend, including failure to encode or write the image.
    #[error("failed to draw figure: {0}")]
    Draw(String),

    #[error("{0}")]
    IO(#[from] std::io::Error),
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for FigureError
where
    E: std::error::Error + Send + Sync,
{
    fn from(that: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(that.to_string())
    }
}

/// Error variants related to configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// Error in configuration settings.
    #[error(transparent)]
    Configuration(#[from] config::ConfigError),

    /// Error in bootstrapping execution from configuration.
    #[error("error during system bootstrap: {message}: {setting}")]
    Bootstrap { message: String, setting: String },
}
