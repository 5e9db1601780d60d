// ---------------------------------------------------------------------------
// Record – one line of the progress log
// ---------------------------------------------------------------------------

/// The simulation state sampled at one instant.
///
/// Scalars are `i128` so that every unsigned 64-bit counter the simulator
/// writes fits, along with negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Sample timestamp, an opaque ordinal chosen by the simulator.
    pub time: i128,
    pub points: i128,
    /// Upper bound on `points` at this instant.
    pub point_cap: i128,
    pub points_per_second: i128,
    /// Per-component values; same length for every record of a dataset.
    pub vector: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded log
// ---------------------------------------------------------------------------

/// All records of one log file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Vector length shared by every record (0 for an empty dataset).
    pub fn component_count(&self) -> usize {
        self.records.first().map_or(0, |r| r.vector.len())
    }
}

// ---------------------------------------------------------------------------
// SeriesColumns – column-oriented view used by the charts
// ---------------------------------------------------------------------------

/// Column-oriented copy of a [`Dataset`].
///
/// All scalar columns have one entry per record. `vector_matrix` is
/// component-major: `vector_matrix[i][t]` is component `i` of record `t`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesColumns {
    pub time: Vec<i128>,
    pub points: Vec<i128>,
    pub point_caps: Vec<i128>,
    pub ppss: Vec<i128>,
    pub vector_matrix: Vec<Vec<f64>>,
}

impl SeriesColumns {
    /// Transpose the dataset into columns.
    ///
    /// The loader guarantees equal vector lengths, so the matrix is
    /// rectangular.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let n = dataset.len();
        let mut cols = SeriesColumns {
            time: Vec::with_capacity(n),
            points: Vec::with_capacity(n),
            point_caps: Vec::with_capacity(n),
            ppss: Vec::with_capacity(n),
            vector_matrix: vec![Vec::with_capacity(n); dataset.component_count()],
        };

        for rec in &dataset.records {
            cols.time.push(rec.time);
            cols.points.push(rec.points);
            cols.point_caps.push(rec.point_cap);
            cols.ppss.push(rec.points_per_second);
            for (row, &value) in cols.vector_matrix.iter_mut().zip(&rec.vector) {
                row.push(value);
            }
        }
        cols
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.vector_matrix.len()
    }

    /// Pair an integer series with the time axis as plot points.
    pub fn xy(&self, ys: &[i128]) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(ys)
            .map(|(&t, &y)| [t as f64, y as f64])
            .collect()
    }

    /// Plot points for vector component `index`.
    pub fn component_xy(&self, index: usize) -> Vec<[f64; 2]> {
        match self.vector_matrix.get(index) {
            Some(row) => self
                .time
                .iter()
                .zip(row)
                .map(|(&t, &y)| [t as f64, y])
                .collect(),
            None => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SeriesSummary – min / max / last of one series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub last: f64,
}

impl SeriesSummary {
    /// `None` for an empty series.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, v| {
            Some(match acc {
                None => SeriesSummary {
                    min: v,
                    max: v,
                    last: v,
                },
                Some(s) => SeriesSummary {
                    min: s.min.min(v),
                    max: s.max.max(v),
                    last: v,
                },
            })
        })
    }
}

/// Summary rows (label, summary) for every series, in chart order.
pub fn summarize(cols: &SeriesColumns) -> Vec<(String, SeriesSummary)> {
    let scalars: [(&str, &[i128]); 3] = [
        ("points", cols.points.as_slice()),
        ("pps", cols.ppss.as_slice()),
        ("point cap", cols.point_caps.as_slice()),
    ];

    let mut rows: Vec<(String, SeriesSummary)> = scalars
        .iter()
        .filter_map(|(label, ys)| {
            SeriesSummary::of(ys.iter().map(|&y| y as f64)).map(|s| (label.to_string(), s))
        })
        .collect();

    for (i, row) in cols.vector_matrix.iter().enumerate() {
        if let Some(s) = SeriesSummary::of(row.iter().copied()) {
            rows.push((component_label(i), s));
        }
    }
    rows
}

/// Legend name of vector component `index`.
pub fn component_label(index: usize) -> String {
    format!("vec[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(time: i128, vector: Vec<f64>) -> Record {
        Record {
            time,
            points: time * 10,
            point_cap: 500,
            points_per_second: time + 1,
            vector,
        }
    }

    #[test]
    fn test_columns_align_with_records() {
        let ds = Dataset {
            records: vec![
                rec(0, vec![1.0, 2.0, 3.0]),
                rec(1, vec![4.0, 5.0, 6.0]),
            ],
        };
        let cols = SeriesColumns::from_dataset(&ds);

        assert_eq!(cols.time, vec![0, 1]);
        assert_eq!(cols.points, vec![0, 10]);
        assert_eq!(cols.point_caps, vec![500, 500]);
        assert_eq!(cols.ppss, vec![1, 2]);
        assert_eq!(cols.component_count(), 3);
        for (i, row) in cols.vector_matrix.iter().enumerate() {
            assert_eq!(row.len(), ds.len());
            for (t, &value) in row.iter().enumerate() {
                assert_eq!(value, ds.records[t].vector[i]);
            }
        }
    }

    #[test]
    fn test_empty_dataset_gives_empty_columns() {
        let cols = SeriesColumns::from_dataset(&Dataset::default());
        assert!(cols.is_empty());
        assert!(cols.points.is_empty());
        assert!(cols.point_caps.is_empty());
        assert!(cols.ppss.is_empty());
        assert_eq!(cols.component_count(), 0);
        assert!(summarize(&cols).is_empty());
    }

    #[test]
    fn test_plot_points() {
        let ds = Dataset {
            records: vec![rec(2, vec![0.5]), rec(4, vec![1.5])],
        };
        let cols = SeriesColumns::from_dataset(&ds);
        assert_eq!(cols.xy(&cols.points), vec![[2.0, 20.0], [4.0, 40.0]]);
        assert_eq!(cols.component_xy(0), vec![[2.0, 0.5], [4.0, 1.5]]);
        assert!(cols.component_xy(1).is_empty());
    }

    #[test]
    fn test_summary() {
        let s = SeriesSummary::of([3.0, -1.0, 7.0, 2.0]).unwrap();
        assert_eq!(
            s,
            SeriesSummary {
                min: -1.0,
                max: 7.0,
                last: 2.0
            }
        );
        assert!(SeriesSummary::of(std::iter::empty()).is_none());
    }

    #[test]
    fn test_summarize_labels() {
        let ds = Dataset {
            records: vec![rec(0, vec![1.0, 2.0])],
        };
        let labels: Vec<String> = summarize(&SeriesColumns::from_dataset(&ds))
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["points", "pps", "point cap", "vec[0]", "vec[1]"]);
    }
}
