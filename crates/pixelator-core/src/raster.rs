//! Raster - the normalized pixel buffer
//!
//! A `Raster` is a read-only, 8-bit-per-channel RGB image with a known
//! row stride. It is the only pixel representation the rest of the
//! system sees: decoders normalize whatever they load (palette images,
//! BGR-ordered bitmaps, images with alpha) into this layout exactly
//! once, so no consumer ever re-derives channel order.
//!
//! # Sample layout
//!
//! - Three samples per pixel, in R, G, B order
//! - Row `y` starts at byte offset `y * stride`
//! - `stride >= 3 * width`; trailing bytes in a row are padding
//!
//! # Access
//!
//! [`Raster::sample`] is range-checked and returns `None` out of
//! bounds. Tight loops should use [`Raster::row_rgb`], which hands out
//! a plain sample slice for one row segment and lets the optimizer see
//! the iteration bounds, instead of per-pixel coordinate arithmetic.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Samples per pixel in a [`Raster`]
pub const SAMPLES_PER_PIXEL: usize = 3;

/// A normalized RGB8 image buffer
#[derive(Debug, Clone)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row
    stride: usize,
    /// Sample data, `stride * height` bytes
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster from raw RGB8 sample data.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `stride` - Bytes per row (must be >= `3 * width`)
    /// * `data` - Sample bytes, exactly `stride * height` long
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension,
    /// [`Error::InvalidStride`] if a row cannot hold its samples, and
    /// [`Error::BufferSize`] if the buffer length is inconsistent.
    pub fn from_raw(width: u32, height: u32, stride: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if stride < width as usize * SAMPLES_PER_PIXEL {
            return Err(Error::InvalidStride { stride, width });
        }
        if data.len() != stride * height as usize {
            return Err(Error::BufferSize {
                len: data.len(),
                stride,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Create a raster by evaluating a function at every pixel.
    ///
    /// Rows are packed with no padding (`stride == 3 * width`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let stride = width as usize * SAMPLES_PER_PIXEL;
        let mut data = Vec::with_capacity(stride * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).channels());
            }
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the color at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y as usize * self.stride + x as usize * SAMPLES_PER_PIXEL;
        Some(Rgb::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
        ))
    }

    /// Get the color at (x, y), failing on out-of-bounds coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn try_sample(&self, x: u32, y: u32) -> Result<Rgb> {
        self.sample(x, y).ok_or(Error::OutOfBounds { x, y })
    }

    /// Get the samples of `width` pixels of row `y` starting at `x`.
    ///
    /// The returned slice is `3 * width` bytes of interleaved R, G, B
    /// samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x + width > self.width()`.
    #[inline]
    pub fn row_rgb(&self, y: u32, x: u32, width: u32) -> &[u8] {
        assert!(
            y < self.height && x + width <= self.width,
            "row segment out of bounds: y={} x={} width={}",
            y,
            x,
            width
        );
        let start = y as usize * self.stride + x as usize * SAMPLES_PER_PIXEL;
        &self.data[start..start + width as usize * SAMPLES_PER_PIXEL]
    }
}
