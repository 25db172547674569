use glam::Vec2;
use web_sys as web;

/// Map client (CSS px) coordinates into canvas backing-pixel coordinates.
/// Pure math so it stays host-testable; a degenerate rect maps to the origin.
#[inline]
pub fn canvas_px(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    rect_width: f32,
    rect_height: f32,
    backing_width: f32,
    backing_height: f32,
) -> Vec2 {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = client_x - rect_left;
    let y_css = client_y - rect_top;
    Vec2::new(
        (x_css / rect_width) * backing_width,
        (y_css / rect_height) * backing_height,
    )
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    canvas_px(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
        canvas.width() as f32,
        canvas.height() as f32,
    )
}
