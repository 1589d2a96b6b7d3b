use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::category::Series;
use crate::error::FigureError;
use crate::records::Measure;

pub const DEFAULT_X_DESC: &str = "Threads";
pub const DEFAULT_Y_DESC: &str = "Time (ms)";

/// Figure size in inches.
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (10.0, 6.0);
pub const DEFAULT_DPI: u32 = 100;

/// Qualitative color cycle assigned to lines in plotting order.
pub const LINE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

const LOG_BASE: f64 = 2.0;
const Y_MARGIN: f64 = 0.05;

/// One plotted series, broken into segments wherever a point cannot be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: String,
    pub segments: Vec<Vec<(f64, f64)>>,
}

impl Line {
    pub fn from_series(series: &Series) -> Self {
        let mut segments = vec![];
        let mut current = vec![];
        for (threads, time) in series.points.iter() {
            match drawable_point(*threads, *time) {
                Some(pt) => current.push(pt),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => (),
            }
        }

        if !current.is_empty() {
            segments.push(current);
        }

        Self { label: series.label.clone(), segments }
    }

    pub fn points(&self) -> impl Iterator<Item = &(f64, f64)> + '_ {
        self.segments.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A point is drawable on the log2 x-axis only if both coordinates are present and finite and
/// the thread count is positive.
fn drawable_point(threads: Measure, time: Measure) -> Option<(f64, f64)> {
    let x = threads.value().filter(|x| x.is_finite() && 0.0 < *x)?;
    let y = time.value().filter(|y| y.is_finite())?;
    Some((x, y))
}

/// A line chart of time against thread count, built up explicitly by `plot` calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    x_desc: String,
    y_desc: String,
    size: (f64, f64),
    dpi: u32,
    lines: Vec<Line>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_desc: DEFAULT_X_DESC.to_string(),
            y_desc: DEFAULT_Y_DESC.to_string(),
            size: DEFAULT_FIGURE_SIZE,
            dpi: DEFAULT_DPI,
            lines: vec![],
        }
    }

    pub fn with_dpi(self, dpi: u32) -> Self {
        Self { dpi, ..self }
    }

    /// Adds one line for `series`, using its points in row order.
    pub fn plot(mut self, series: &Series) -> Self {
        let line = Line::from_series(series);
        tracing::trace!(label=%line.label, nr_segments=%line.segments.len(), "plotted series.");
        self.lines.push(line);
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn x_desc(&self) -> &str {
        self.x_desc.as_str()
    }

    pub fn y_desc(&self) -> &str {
        self.y_desc.as_str()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((self.size.0 * dpi).round() as u32, (self.size.1 * dpi).round() as u32)
    }

    /// Thread-count axis bounds, padded by a quarter power of two on each side.
    pub fn x_range(&self) -> (f64, f64) {
        let pad = LOG_BASE.powf(0.25);
        match self.bounds(|(x, _)| *x) {
            Some((lo, hi)) => (lo / pad, hi * pad),
            None => (1.0, LOG_BASE),
        }
    }

    /// Time axis bounds, anchored at zero unless times go negative.
    pub fn y_range(&self) -> (f64, f64) {
        match self.bounds(|(_, y)| *y) {
            Some((lo, hi)) => {
                let lo = lo.min(0.0);
                let span = if lo < hi { hi - lo } else { 1.0 };
                let pad = span * Y_MARGIN;
                let lo = if lo < 0.0 { lo - pad } else { lo };
                (lo, hi + pad)
            },
            None => (0.0, 1.0),
        }
    }

    fn bounds<F>(&self, coord: F) -> Option<(f64, f64)>
    where
        F: Fn(&(f64, f64)) -> f64,
    {
        self.lines
            .iter()
            .flat_map(|line| line.points())
            .map(coord)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Writes the figure as a PNG, replacing any existing file at `path`.
    #[tracing::instrument(level = "debug", skip(self), fields(title=%self.title))]
    pub fn save(&self, path: &Path) -> Result<(), FigureError> {
        let root = BitMapBackend::new(path, self.pixel_size()).into_drawing_area();
        self.draw_on(&root)
    }

    /// Renders the figure into an in-memory RGB buffer.
    pub fn render_to_buffer(&self) -> Result<Vec<u8>, FigureError> {
        let (width, height) = self.pixel_size();
        let mut buffer = vec![0_u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw_on(&root)?;
        }
        Ok(buffer)
    }

    pub fn draw_on<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
        root.fill(&WHITE)?;

        let (x_lo, x_hi) = self.x_range();
        let (y_lo, y_hi) = self.y_range();
        let mut chart = ChartBuilder::on(root)
            .caption(self.title.as_str(), ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((x_lo..x_hi).log_scale().base(LOG_BASE), y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .x_label_formatter(&|x: &f64| format_tick(*x))
            .draw()?;

        for (idx, line) in self.lines.iter().enumerate() {
            let style = LINE_COLORS[idx % LINE_COLORS.len()].stroke_width(2);

            // the first segment carries the legend entry, even when the line has nothing to draw
            let mut segments = line.segments.iter();
            let first: &[(f64, f64)] = segments.next().map(|s| s.as_slice()).unwrap_or(&[]);
            chart
                .draw_series(LineSeries::new(first.iter().copied(), style))?
                .label(line.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

            for segment in segments {
                chart.draw_series(LineSeries::new(segment.iter().copied(), style))?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
