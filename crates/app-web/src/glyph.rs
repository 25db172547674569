use app_core::{font_px, scan_rgba, SampleParams};
use glam::Vec2;
use web_sys as web;

use crate::constants::{GLYPH_FILL, GLYPH_FONT_FAMILY};

/// Render `text` centered on the surface, scan the alpha channel into a
/// point cloud, then clear the surface again. The draw is a probe, not a
/// persistent render; the canvas is left visually clear.
///
/// Empty text yields an empty cloud without touching the surface. A failed
/// readback is a hard error: the sampler cannot degrade silently.
pub fn sample_text(
    ctx: &web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
    text: &str,
    params: &SampleParams,
) -> anyhow::Result<Vec<Vec2>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    ctx.set_fill_style_str(GLYPH_FILL);
    ctx.set_font(&format!(
        "bold {:.0}px {}",
        font_px(width as f32, params),
        GLYPH_FONT_FAMILY
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, width as f64 / 2.0, height as f64 / 2.0)
        .map_err(|e| anyhow::anyhow!(format!("fill_text: {:?}", e)))?;

    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!(format!("get_image_data: {:?}", e)))?;
    let rgba = image.data();
    let coordinates = scan_rgba(&rgba, width, height, params)?;

    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    Ok(coordinates)
}
