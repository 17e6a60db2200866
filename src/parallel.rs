use std::thread::{Builder, ScopedJoinHandle};

use log::trace;

use crate::bands::{row_bands, RowBand};
use crate::buffer::{PixelBuffer, CHANNELS};
use crate::neighborhood::neighborhood_sum;
use crate::{BlurError, BlurParameters};

/// Box blur `src` into a new buffer of the same geometry.
///
/// Rows are split into [`row_bands`], one scoped thread per band. Every output pixel is the
/// truncated mean of its [`neighborhood_sum`], so the result is the same for any worker count.
///
/// # Errors
///
/// if the output can't be allocated, a worker can't be started, or a worker panics.
/// No partial output escapes.
pub fn blur(src: &PixelBuffer, params: BlurParameters) -> Result<PixelBuffer, BlurError> {
    // bands past the last row would be empty anyway
    let workers = params.resolved_workers().min(src.height().max(1));
    let radius = params.radius;
    let mut out = PixelBuffer::zeroed_like(src)?;
    let bands = row_bands(src.height(), workers);
    trace!(
        "box blur {}x{} r={radius} over {workers} bands",
        src.width(),
        src.height()
    );
    run_bands(src, &mut out, &bands, |x, y| {
        neighborhood_sum(src, x, y, radius).average()
    })?;
    Ok(out)
}

/// Fill `out` band by band, calling `pixel(x, y)` for each output pixel.
///
/// Each band gets an exclusive `&mut` slice of its rows; `src` is only ever shared.
pub(crate) fn run_bands<F>(
    src: &PixelBuffer,
    out: &mut PixelBuffer,
    bands: &[RowBand],
    pixel: F,
) -> Result<(), BlurError>
where
    F: Fn(usize, usize) -> [u8; CHANNELS] + Sync,
{
    let (width, stride) = (src.width(), src.stride());
    if width == 0 {
        return Ok(());
    }
    let pixel = &pixel;
    let mut rest = out.bytes_mut();
    std::thread::scope(move |s| {
        let mut handles = Vec::with_capacity(bands.len());
        for (i, &band) in bands.iter().enumerate() {
            let (mine, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * stride);
            rest = tail;
            if band.is_empty() {
                continue;
            }
            let spawned = Builder::new()
                .name(format!("bandblur-{i}"))
                .spawn_scoped(s, move || {
                    for (row, y) in mine.chunks_exact_mut(stride).zip(band.rows()) {
                        for (x, px) in row[..width * CHANNELS]
                            .chunks_exact_mut(CHANNELS)
                            .enumerate()
                        {
                            px.copy_from_slice(&pixel(x, y));
                        }
                    }
                });
            match spawned {
                Ok(handle) => handles.push((i, handle)),
                Err(e) => {
                    trace!("could not spawn worker {i}: {e}");
                    join_all(handles)?;
                    return Err(BlurError::Spawn { band: i });
                }
            }
        }
        trace!("waiting on {} workers", handles.len());
        join_all(handles)
    })
}

/// Join every worker before reporting the first band that panicked.
fn join_all(handles: Vec<(usize, ScopedJoinHandle<'_, ()>)>) -> Result<(), BlurError> {
    let mut failed = None;
    for (band, handle) in handles {
        if handle.join().is_err() {
            failed = failed.or(Some(band));
        }
    }
    match failed {
        Some(band) => Err(BlurError::WorkerPanicked { band }),
        None => Ok(()),
    }
}
