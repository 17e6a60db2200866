#![doc = include_str!("../README.md")]
mod bands;
mod buffer;
mod error;
mod neighborhood;
mod parallel;
mod params;

pub use bands::{row_bands, RowBand};
pub use buffer::{PixelBuffer, CHANNELS};
pub use error::BlurError;
pub use neighborhood::{neighborhood_sum, NeighborhoodSum};
pub use parallel::blur;
pub use params::BlurParameters;

use fimg::Image;

/// Blur a image.
///
/// Copies `image` into a [`PixelBuffer`], [`blur`]s it, and hands back a fresh image.
pub fn blur_image<T: AsRef<[u8]>>(
    image: &Image<T, 3>,
    params: BlurParameters,
) -> Result<Image<Vec<u8>, 3>, BlurError> {
    let src = PixelBuffer::try_from(image)?;
    blur(&src, params)?.into_image()
}
