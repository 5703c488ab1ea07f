use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// Column summary
// ---------------------------------------------------------------------------

/// Descriptive statistics for one table column.
///
/// Built immediately before display and discarded afterwards. When the
/// column holds any non-numeric cell, `mean` and `stddev` degrade to `0`
/// rather than failing the session; `count`, `min` and `max` stay valid
/// (extrema fall back to the total [`CellValue`] order).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Number of non-null cells.
    pub count: usize,
    /// Arithmetic mean, rounded to 4 decimals; `0` for non-numeric columns.
    pub mean: f64,
    /// Sample standard deviation, rounded to 4 decimals; `0` for
    /// non-numeric or single-value columns.
    pub stddev: f64,
    pub min: CellValue,
    pub max: CellValue,
    /// False when mean/stddev were degraded because the column is not
    /// purely numeric.
    pub numeric: bool,
}

/// Compute the summary for one column.
pub fn summarize(cells: &[CellValue]) -> ColumnSummary {
    let present: Vec<&CellValue> = cells.iter().filter(|c| !c.is_null()).collect();
    let count = present.len();
    let min = present.iter().min().map(|c| (*c).clone()).unwrap_or(CellValue::Null);
    let max = present.iter().max().map(|c| (*c).clone()).unwrap_or(CellValue::Null);

    let values: Vec<f64> = present.iter().filter_map(|c| c.as_f64()).collect();
    let numeric = count > 0 && values.len() == count;

    let (mean, stddev) = if numeric {
        (round4(mean(&values)), round4(sample_stddev(&values)))
    } else {
        (0.0, 0.0)
    };

    ColumnSummary {
        count,
        mean,
        stddev,
        min,
        max,
        numeric,
    }
}

/// The numeric cells of a column, nulls and text skipped.
pub fn numeric_values(cells: &[CellValue]) -> Vec<f64> {
    cells.iter().filter_map(|c| c.as_f64()).collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n−1) standard deviation; `0` for fewer than two values.
fn sample_stddev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (n - 1) as f64).sqrt()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// Rule used to pick the number of histogram bins.
///
/// The interactive flow always uses [`BinStrategy::Auto`]; the named rules
/// stay callable as overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinStrategy {
    /// `max(Sturges, Freedman–Diaconis)`, Sturges alone when the IQR is zero.
    Auto,
    /// An explicit bin count (clamped to at least one).
    Fixed(usize),
    /// `ceil(log2(n) + 1)`
    Sturges,
    /// `ceil(sqrt(n))`
    SquareRoot,
    /// `ceil(2·IQR / n^(1/3))`
    FreedmanDiaconis,
}

/// Number of bins the strategy yields for the given values. Always ≥ 1.
pub fn bin_count(values: &[f64], strategy: BinStrategy) -> usize {
    let n = values.len();
    if n == 0 {
        return 1;
    }
    let count = match strategy {
        BinStrategy::Auto => match freedman_diaconis(values) {
            Some(fd) => sturges(n).max(fd),
            None => sturges(n),
        },
        BinStrategy::Fixed(k) => k,
        BinStrategy::Sturges => sturges(n),
        BinStrategy::SquareRoot => (n as f64).sqrt().ceil() as usize,
        BinStrategy::FreedmanDiaconis => {
            freedman_diaconis(values).unwrap_or_else(|| sturges(n))
        }
    };
    count.max(1)
}

fn sturges(n: usize) -> usize {
    ((n as f64).log2() + 1.0).ceil() as usize
}

/// `None` when the interquartile range is zero, which would degenerate the
/// rule to an empty histogram.
fn freedman_diaconis(values: &[f64]) -> Option<usize> {
    let n = values.len();
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let iqr = percentile(&sorted, 75.0) - percentile(&sorted, 25.0);
    if iqr <= 0.0 {
        return None;
    }
    Some((2.0 * iqr / (n as f64).cbrt()).ceil() as usize)
}

/// Linear-interpolation percentile over pre-sorted values.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// One equal-width bin: `[start, start + width)`, last bin closed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub count: usize,
}

/// An equal-width frequency histogram over a column's numeric values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Center of the bin at `index`, for bar placement.
    pub fn center(&self, index: usize) -> f64 {
        self.bins[index].start + self.bin_width / 2.0
    }
}

/// Bin the values with the chosen strategy; `None` when there is nothing
/// to bin. A single-valued column collapses to one unit-width bin.
pub fn histogram(values: &[f64], strategy: BinStrategy) -> Option<Histogram> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (count, width) = if max > min {
        let count = bin_count(values, strategy);
        (count, (max - min) / count as f64)
    } else {
        (1, 1.0)
    };

    let mut counts = vec![0usize; count];
    for &v in values {
        let mut idx = ((v - min) / width) as usize;
        if idx >= count {
            idx = count - 1;
        }
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| HistogramBin {
            start: min + i as f64 * width,
            count: c,
        })
        .collect();

    Some(Histogram {
        bin_width: width,
        bins,
    })
}
