use app_core::Field;
use web_sys as web;

use crate::constants::PARTICLE_FILL;

/// Clear the surface and draw every particle as a translucent filled
/// circle. Positions are from the previous tick; the caller steps the
/// simulation after drawing.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, field: &Field) {
    ctx.clear_rect(0.0, 0.0, field.width as f64, field.height as f64);
    ctx.set_fill_style_str(PARTICLE_FILL);
    for particle in field.particles() {
        ctx.begin_path();
        let _ = ctx.arc(
            particle.position.x as f64,
            particle.position.y as f64,
            particle.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.close_path();
        ctx.fill();
    }
}
