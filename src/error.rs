use std::fmt::{Debug, Display, Formatter};

/// Everything that can go wrong while blurring.
pub enum BlurError {
    /// A row is shorter than `width * 3` bytes.
    StrideTooSmall { width: usize, stride: usize },
    /// The byte buffer does not hold exactly `stride * height` bytes.
    BufferLength { expected: usize, found: usize },
    /// Image dimensions don't fit in a `usize` (or a `u32`, for fimg).
    Overflow,
    /// A zero sized image was handed to something that can't represent it.
    Empty,
    /// The output buffer could not be allocated.
    OutOfMemory { bytes: usize },
    /// The OS refused to start the worker for a band.
    Spawn { band: usize },
    /// A worker panicked before finishing its band.
    WorkerPanicked { band: usize },
}

impl Debug for BlurError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrideTooSmall { width, stride } => write!(
                f,
                "stride of {stride} bytes cannot hold a row of {width} rgb pixels"
            ),
            Self::BufferLength { expected, found } => write!(
                f,
                "buffer holds {found} bytes, expected stride * height = {expected}"
            ),
            Self::Overflow => write!(f, "image dimensions overflow"),
            Self::Empty => write!(f, "image has no pixels"),
            Self::OutOfMemory { bytes } => {
                write!(f, "could not allocate {bytes} bytes for the output image")
            }
            Self::Spawn { band } => write!(f, "could not start worker for band {band}"),
            Self::WorkerPanicked { band } => write!(f, "worker for band {band} panicked"),
        }
    }
}

impl Display for BlurError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BlurError {}
