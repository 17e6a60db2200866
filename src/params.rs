use std::num::NonZeroUsize;

/// How hard to blur, and with how many threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BlurParameters {
    /// Half width of the averaging square, not counting the center. `0` is a copy.
    pub radius: u32,
    /// Worker count. `None` uses the host's available parallelism.
    pub workers: Option<NonZeroUsize>,
}

impl BlurParameters {
    /// Build from signed inputs, as they usually arrive from a slider or text box.
    ///
    /// A negative `radius` becomes `0`; a `workers` of zero or less means "pick for me".
    pub fn new(radius: i64, workers: i64) -> Self {
        Self {
            radius: u32::try_from(radius.max(0)).unwrap_or(u32::MAX),
            workers: usize::try_from(workers).ok().and_then(NonZeroUsize::new),
        }
    }

    pub fn with_radius(radius: u32) -> Self {
        Self {
            radius,
            workers: None,
        }
    }

    #[must_use]
    pub fn workers(self, workers: usize) -> Self {
        Self {
            workers: NonZeroUsize::new(workers),
            ..self
        }
    }

    /// The number of bands the image will be split into.
    pub fn resolved_workers(&self) -> usize {
        self.workers
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }
}
