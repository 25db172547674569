#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Cursor, Field, FieldParams, SampleParams};
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod glyph;
pub mod input;
pub mod render;
pub mod transition;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (_, document) = dom::window_document()?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    dom::sync_canvas_backing_size(&canvas);

    let field_params = FieldParams::default();
    let sample_params = SampleParams::default();
    let seed = js_sys::Date::now() as u64;

    let field = Rc::new(RefCell::new(Field::new(
        canvas.width() as f32,
        canvas.height() as f32,
        field_params,
        seed,
    )));
    let cursor = Rc::new(RefCell::new(Cursor::new(field_params.cursor_radius)));
    log::info!(
        "[field] {} particles on {}x{}",
        field.borrow().len(),
        canvas.width(),
        canvas.height()
    );

    events::wire_pointer_move(cursor.clone(), canvas.clone());
    events::wire_resize(field.clone(), canvas.clone());
    events::wire_title_handlers(events::TitleWiring {
        document,
        canvas,
        ctx: ctx.clone(),
        field: field.clone(),
        sample_params,
    })?;

    frame::run(frame::FrameContext { field, cursor, ctx });
    Ok(())
}
