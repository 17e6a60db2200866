use crate::BlurError;
use fimg::Image;

/// Bytes per pixel. Buffers are always three channel.
pub const CHANNELS: usize = 3;

/// An owned, row-major, three channel image buffer.
///
/// Rows are `stride` bytes apart; any bytes past `width * 3` in a row are padding
/// and are never read by the filter.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    stride: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap `bytes` as a `width` x `height` image with rows `stride` bytes apart.
    ///
    /// # Errors
    ///
    /// if `stride < width * 3`, or `bytes.len() != stride * height`.
    pub fn new(
        width: usize,
        height: usize,
        stride: usize,
        bytes: Vec<u8>,
    ) -> Result<Self, BlurError> {
        let row = width.checked_mul(CHANNELS).ok_or(BlurError::Overflow)?;
        if stride < row {
            return Err(BlurError::StrideTooSmall { width, stride });
        }
        let expected = stride.checked_mul(height).ok_or(BlurError::Overflow)?;
        if bytes.len() != expected {
            return Err(BlurError::BufferLength {
                expected,
                found: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            bytes,
        })
    }

    /// Wrap `bytes` with no row padding.
    pub fn packed(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self, BlurError> {
        let stride = width.checked_mul(CHANNELS).ok_or(BlurError::Overflow)?;
        Self::new(width, height, stride, bytes)
    }

    /// A packed image where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Result<Self, BlurError> {
        let pixels = width.checked_mul(height).ok_or(BlurError::Overflow)?;
        let bytes = color.repeat(pixels);
        Self::packed(width, height, bytes)
    }

    /// Allocate a zeroed buffer with the same width, height and stride as `other`.
    pub fn zeroed_like(other: &Self) -> Result<Self, BlurError> {
        let len = other.bytes.len();
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| BlurError::OutOfMemory { bytes: len })?;
        bytes.resize(len, 0);
        Ok(Self { bytes, ..*other })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The pixel bytes of row `y`, without padding.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let at = y * self.stride;
        self.bytes.get(at..at + self.width * CHANNELS)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width {
            return None;
        }
        let at = x * CHANNELS;
        self.row(y)?.get(at..at + CHANNELS)?.try_into().ok()
    }

    /// Convert into a [`fimg`] image, dropping any row padding.
    ///
    /// # Errors
    ///
    /// fimg images can't be empty, and their sides are `u32`.
    pub fn into_image(self) -> Result<Image<Vec<u8>, 3>, BlurError> {
        if self.width == 0 || self.height == 0 {
            return Err(BlurError::Empty);
        }
        let width = u32::try_from(self.width).map_err(|_| BlurError::Overflow)?;
        let height = u32::try_from(self.height).map_err(|_| BlurError::Overflow)?;
        let row = self.width * CHANNELS;
        let bytes = if self.stride == row {
            self.bytes
        } else {
            self.bytes
                .chunks_exact(self.stride)
                .flat_map(|r| &r[..row])
                .copied()
                .collect()
        };
        Ok(Image::build(width, height).buf(bytes))
    }
}

impl<T: AsRef<[u8]>> TryFrom<&Image<T, 3>> for PixelBuffer {
    type Error = BlurError;

    fn try_from(image: &Image<T, 3>) -> Result<Self, Self::Error> {
        Self::packed(
            image.width() as usize,
            image.height() as usize,
            image.buffer().as_ref().to_vec(),
        )
    }
}
