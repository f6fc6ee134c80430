use ndarray::{Array3, ArrayView3};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame buffer has {actual} bytes, expected {expected} ({width}x{height}x{channels})")]
    BufferSize {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
        channels: u8,
    },
}

/// A single video frame: pixel data laid out as (height, width, channels).
///
/// The track manager treats pixels as opaque and only hands the frame on to
/// detectors and single-object trackers.
#[derive(Clone, Debug)]
pub struct Frame {
    pixels: Array3<u8>,
    index: usize,
}

impl Frame {
    pub fn from_array(pixels: Array3<u8>, index: usize) -> Self {
        Self { pixels, index }
    }

    /// Wrap a row-major interleaved buffer.
    pub fn from_raw(
        data: Vec<u8>,
        width: u32,
        height: u32,
        channels: u8,
        index: usize,
    ) -> Result<Self, FrameError> {
        let expected = (width as usize) * (height as usize) * (channels as usize);
        let actual = data.len();
        let pixels = Array3::from_shape_vec(
            (height as usize, width as usize, channels as usize),
            data,
        )
        .map_err(|_| FrameError::BufferSize {
            expected,
            actual,
            width,
            height,
            channels,
        })?;
        Ok(Self { pixels, index })
    }

    /// An all-black frame.
    pub fn blank(width: u32, height: u32, channels: u8, index: usize) -> Self {
        Self {
            pixels: Array3::zeros((height as usize, width as usize, channels as usize)),
            index,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    pub fn channels(&self) -> u8 {
        self.pixels.dim().2 as u8
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }
}
