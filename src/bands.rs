use std::ops::Range;

/// A half open range of rows `[start, end)` owned by one worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowBand {
    pub start: usize,
    pub end: usize,
}

impl RowBand {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `height` rows into `workers` bands of `height / workers` rows each.
/// The last band takes the remainder.
///
/// With more workers than rows every band but the last is empty.
pub fn row_bands(height: usize, workers: usize) -> Vec<RowBand> {
    let workers = workers.max(1);
    let band = height / workers;
    (0..workers)
        .map(|i| RowBand {
            start: i * band,
            end: if i == workers - 1 {
                height
            } else {
                (i + 1) * band
            },
        })
        .collect()
}
