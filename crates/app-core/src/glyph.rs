//! Glyph point-cloud extraction.
//!
//! The frontend renders a string to the canvas and reads the pixels back;
//! the scan over that RGBA buffer lives here so it stays host-testable.
//! Re-sampling identical text at identical surface size is pixel-stable on
//! one platform but not bit-exact across font stacks, so consumers should
//! tolerate count/shape variation rather than exact coordinates.

use glam::Vec2;
use thiserror::Error;

use crate::constants::{ALPHA_THRESHOLD, GLYPH_FONT_FRACTION, SAMPLE_GAP};

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("rgba buffer length {actual} does not match {width}x{height} surface ({expected} expected)")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("sample gap must be non-zero")]
    ZeroGap,
}

/// Sampling tuning: stride trades shape fidelity for point-cloud size, the
/// alpha threshold excludes anti-aliased glyph edges, and the font fraction
/// keeps glyph density roughly constant across viewport sizes.
#[derive(Clone, Copy, Debug)]
pub struct SampleParams {
    pub gap: u32,
    pub alpha_threshold: u8,
    pub font_fraction: f32,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            gap: SAMPLE_GAP,
            alpha_threshold: ALPHA_THRESHOLD,
            font_fraction: GLYPH_FONT_FRACTION,
        }
    }
}

/// Proportional font size for a given surface width.
#[inline]
pub fn font_px(surface_width: f32, params: &SampleParams) -> f32 {
    surface_width * params.font_fraction
}

/// Scan an RGBA buffer on a fixed stride and collect the coordinates of
/// pixels whose alpha channel exceeds the threshold.
pub fn scan_rgba(
    rgba: &[u8],
    width: u32,
    height: u32,
    params: &SampleParams,
) -> Result<Vec<Vec2>, GlyphError> {
    if params.gap == 0 {
        return Err(GlyphError::ZeroGap);
    }
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(GlyphError::BufferSize {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    let mut coordinates = Vec::new();
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let alpha = rgba[(y as usize * width as usize + x as usize) * 4 + 3];
            if alpha > params.alpha_threshold {
                coordinates.push(Vec2::new(x as f32, y as f32));
            }
            x += params.gap;
        }
        y += params.gap;
    }
    Ok(coordinates)
}
